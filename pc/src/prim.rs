//! Primitive parsers: single-token predicates and zero-width probes.

use crate::comb::{alt_list, seq_list};
use crate::output::{Match, NoMatch, Output};
use crate::parser::Parser;

/// Consume exactly one token if `pred` holds for it
pub fn satisfy<Tok, F>(pred: F) -> Parser<Tok, Tok>
where
    Tok: Clone + 'static,
    F: Fn(&Tok) -> bool + 'static,
{
    Parser::new(move |tokens: &[Tok], index| match tokens.get(index) {
        Some(token) if pred(token) => Ok(Output::new(token.clone(), index + 1)),
        _ => Err(NoMatch::at(index)),
    })
}

pub fn any<Tok: Clone + 'static>() -> Parser<Tok, Tok> {
    satisfy(|_| true)
}

pub fn exact<Tok>(expected: Tok) -> Parser<Tok, Tok>
where
    Tok: Clone + PartialEq + 'static,
{
    satisfy(move |token| *token == expected)
}

pub fn exact_ci(expected: char) -> Parser<char, char> {
    let expected = lower(expected);
    satisfy(move |token: &char| lower(*token) == expected)
}

/// The characters of `word`, in order, collected back into a string
pub fn word(word: &str) -> Parser<char, String> {
    let chars = word.chars().map(|c| exact(c).map(Match::Value)).collect();
    seq_list(chars).map(|chars| chars.into_iter().collect())
}

pub fn one_of(chars: &str) -> Parser<char, char> {
    alt_list(chars.chars().map(exact).collect())
}

pub fn char_range(start: char, end: char) -> Parser<char, char> {
    satisfy(move |token: &char| (start..=end).contains(token))
}

pub fn char_range_ci(start: char, end: char) -> Parser<char, char> {
    let (start, end) = (lower(start), lower(end));
    satisfy(move |token: &char| (start..=end).contains(&lower(*token)))
}

/// Always succeeds without consuming anything
pub fn epsilon<Tok: 'static, T: 'static>() -> Parser<Tok, Match<T>> {
    Parser::new(|_: &[Tok], index| Ok(Output::empty(index)))
}

/// Never succeeds
pub fn empty<Tok: 'static, T: 'static>() -> Parser<Tok, T> {
    Parser::new(|_: &[Tok], index| Err(NoMatch::at(index)))
}

pub fn end_of_input<Tok: 'static, T: 'static>() -> Parser<Tok, Match<T>> {
    Parser::new(|tokens: &[Tok], index| {
        if index == tokens.len() {
            Ok(Output::empty(index))
        } else {
            Err(NoMatch::at(index))
        }
    })
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
