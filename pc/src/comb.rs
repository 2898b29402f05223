//! Combinators: functions from parsers to parsers.
//!
//! Failure never touches anything outside the attempt, so every combinator
//! may retry a sub-parser from the same or an earlier index.

use crate::output::{Match, NoMatch, Output};
use crate::parser::Parser;
use crate::prim::empty;
use color_print::cformat;
use once_cell::unsync::OnceCell;
use std::fmt::Debug;

/// `first` then `second`, results paired in order.
/// Failures inside `first` count towards the furthest index.
pub fn seq<Tok, A, B>(first: Parser<Tok, A>, second: Parser<Tok, B>) -> Parser<Tok, (A, B)>
where
    Tok: 'static,
    A: 'static,
    B: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let a = first.parse(tokens, index)?;
        let b = second
            .parse(tokens, a.next)
            .map_err(|e| e.furthest(NoMatch::at(a.furthest)))?;
        Ok(Output::new((a.value, b.value), b.next)
            .reached(a.furthest)
            .reached(b.furthest))
    })
}

/// Run every parser in order and collect their payloads into one flat list.
/// Empty payloads contribute nothing.
pub fn seq_list<Tok, T>(parsers: Vec<Parser<Tok, Match<T>>>) -> Parser<Tok, Vec<T>>
where
    Tok: 'static,
    T: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut next = index;
        let mut furthest = index;
        for parser in &parsers {
            let output = parser
                .parse(tokens, next)
                .map_err(|e| e.furthest(NoMatch::at(furthest)))?;
            next = output.next;
            furthest = furthest.max(output.furthest);
            if let Match::Value(value) = output.value {
                values.push(value);
            }
        }
        Ok(Output::new(values, next).reached(furthest))
    })
}

/// Ordered choice: `second` is tried only when `first` fails
pub fn alt<Tok, T>(first: Parser<Tok, T>, second: Parser<Tok, T>) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        first.parse(tokens, index).or_else(|e| match second.parse(tokens, index) {
            Ok(output) => Ok(output.reached(e.index)),
            Err(f) => Err(e.furthest(f)),
        })
    })
}

/// Ordered choice over a list; the empty list never matches
pub fn alt_list<Tok, T>(parsers: Vec<Parser<Tok, T>>) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
{
    parsers
        .into_iter()
        .rev()
        .fold(empty(), |rest, parser| alt(parser, rest))
}

pub fn transform<Tok, T, U, F>(parser: Parser<Tok, T>, f: F) -> Parser<Tok, U>
where
    Tok: 'static,
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    Parser::new(move |tokens: &[Tok], index| Ok(parser.parse(tokens, index)?.map(&f)))
}

/// Zero or more, greedy. Never fails; the attempt that stopped it is
/// remembered in `furthest`.
pub fn star<Tok, T>(parser: Parser<Tok, T>) -> Parser<Tok, Vec<T>>
where
    Tok: 'static,
    T: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let mut values = Vec::new();
        let mut next = index;
        let mut furthest = index;
        loop {
            match parser.parse(tokens, next) {
                Ok(output) => {
                    let consumed = output.next != next;
                    furthest = furthest.max(output.furthest);
                    values.push(output.value);
                    next = output.next;
                    if !consumed {
                        break;
                    }
                }
                Err(e) => {
                    furthest = furthest.max(e.index);
                    break;
                }
            }
        }
        Ok(Output::new(values, next).reached(furthest))
    })
}

/// One or more
pub fn plus<Tok, T>(parser: Parser<Tok, T>) -> Parser<Tok, Vec<T>>
where
    Tok: 'static,
    T: 'static,
{
    seq(parser.clone(), star(parser)).map(|(head, tail)| {
        let mut values = Vec::with_capacity(tail.len() + 1);
        values.push(head);
        values.extend(tail);
        values
    })
}

/// Defer building the parser until it is first used.
///
/// This is what lets a production refer to itself: `factory` runs at parse
/// time, never while the grammar is being wired together.
pub fn lazy<Tok, T, F>(factory: F) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
    F: Fn() -> Parser<Tok, T> + 'static,
{
    let cell: OnceCell<Parser<Tok, T>> = OnceCell::new();
    Parser::new(move |tokens: &[Tok], index| cell.get_or_init(&factory).parse(tokens, index))
}

pub fn guard<Tok, T, F>(parser: Parser<Tok, T>, pred: F) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
    F: Fn(&T) -> bool + 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let output = parser.parse(tokens, index)?;
        if pred(&output.value) {
            Ok(output)
        } else {
            Err(NoMatch::at(index))
        }
    })
}

/// `parser`, unless `except` also matches at the same index
pub fn diff<Tok, T, U>(parser: Parser<Tok, T>, except: Parser<Tok, U>) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
    U: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let output = parser.parse(tokens, index)?;
        match except.parse(tokens, index) {
            Ok(_) => Err(NoMatch::at(index)),
            Err(_) => Ok(output),
        }
    })
}

pub fn followed_by<Tok, T, U>(parser: Parser<Tok, T>, follow: Parser<Tok, U>) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
    U: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let output = parser.parse(tokens, index)?;
        follow.parse(tokens, output.next)?;
        Ok(output)
    })
}

pub fn not_followed_by<Tok, T, U>(parser: Parser<Tok, T>, follow: Parser<Tok, U>) -> Parser<Tok, T>
where
    Tok: 'static,
    T: 'static,
    U: 'static,
{
    Parser::new(move |tokens: &[Tok], index| {
        let output = parser.parse(tokens, index)?;
        match follow.parse(tokens, output.next) {
            Ok(_) => Err(NoMatch::at(index)),
            Err(_) => Ok(output),
        }
    })
}

/// Print every attempt of `parser` to stderr
pub fn trace<Tok, T>(parser: Parser<Tok, T>, name: &str) -> Parser<Tok, T>
where
    Tok: 'static,
    T: Debug + 'static,
{
    let name = name.to_string();
    Parser::new(move |tokens: &[Tok], index| {
        let result = parser.parse(tokens, index);
        match &result {
            Ok(output) => eprintln!(
                "{}",
                cformat!(
                    "<cyan,bold>{}</>: match from {} to {}: {:?}",
                    name,
                    index,
                    output.next,
                    output.value
                )
            ),
            Err(e) => eprintln!(
                "{}",
                cformat!("<red,bold>{}</>: failed to match from {} ({})", name, index, e)
            ),
        }
        result
    })
}
