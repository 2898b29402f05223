//! Grammar of the language, built entirely from `pc` combinators.
//!
//! ```text
//! program    = { assignment | loop }
//! assignment = reg "=" addsub ";"
//! loop       = "loop" operand "{" assignment "}"
//! addsub     = muldiv { ( "+" | "-" ) muldiv }
//! muldiv     = operand { ( "*" | "/" ) operand }
//! operand    = [ "+" | "-" ] digits | reg
//! reg        = "r10" | "r11" | "r12" | "r13"
//! ```
//!
//! Whitespace (any char <= ' ') and `#` line comments may surround every token.

use crate::ast::{ArithOp, Assignment, Expr, Loop, Program, Stmt};
use crate::error::Error;
use crate::label::Labels;
use crate::reg::Reg;
use pc::{
    alt, alt_list, char_range, epsilon, exact, one_of, plus, satisfy, seq, star, word,
    Match, Parser,
};

type P<T> = Parser<char, T>;

// ----------------------------------------------------------------------------
// Tokens

fn whitespaces() -> P<()> {
    let space = satisfy(|c: &char| (*c as u32) <= 32).map(|_| ());
    let comment = seq(exact('#'), star(satisfy(|c: &char| *c != '\n'))).map(|_| ());
    star(alt(comment, space)).map(|_| ())
}

/// Skip whitespace and comments around `parser`
fn spaced<T: 'static>(parser: P<T>) -> P<T> {
    seq(seq(whitespaces(), parser), whitespaces()).map(|((_, value), _)| value)
}

fn token(text: &str) -> P<()> {
    spaced(word(text)).map(|_| ())
}

fn op(symbol: char, op: ArithOp) -> P<ArithOp> {
    exact(symbol).map(move |_| op)
}

fn muldiv_op() -> P<ArithOp> {
    spaced(alt(op('*', ArithOp::Mul), op('/', ArithOp::Div)))
}

fn addsub_op() -> P<ArithOp> {
    spaced(alt(op('+', ArithOp::Add), op('-', ArithOp::Sub)))
}

/// Unsigned digit run, as written
fn digits() -> P<String> {
    spaced(plus(char_range('0', '9'))).map(|digits| digits.into_iter().collect())
}

pub fn register() -> P<Reg> {
    let names = Reg::STORAGE
        .iter()
        .map(|&reg| word(&reg.to_string()).map(move |_| reg))
        .collect();
    spaced(alt_list(names))
}

// ----------------------------------------------------------------------------
// Expressions

/// Literals too large for `i128` are kept as text and rejected by codegen
pub fn int() -> P<Expr> {
    let sign = alt(one_of("+-").map(Match::Value), epsilon());
    seq(sign, digits()).map(|(sign, digits)| {
        let negative = sign == Match::Value('-');
        match digits.parse::<i128>() {
            Ok(value) if negative => Expr::Num(-value),
            Ok(value) => Expr::Num(value),
            Err(_) if negative => Expr::Huge(format!("-{digits}")),
            Err(_) => Expr::Huge(digits),
        }
    })
}

pub fn operand() -> P<Expr> {
    alt(int(), register().map(Expr::Reg))
}

/// `first { op next }`, folded to the left
fn left_fold(first: P<Expr>, op: P<ArithOp>, next: P<Expr>) -> P<Expr> {
    seq(first, star(seq(op, next))).map(|(first, rest)| {
        rest.into_iter()
            .fold(first, |lhs, (op, rhs)| Expr::arith(op, lhs, rhs))
    })
}

pub fn muldiv_expr() -> P<Expr> {
    left_fold(operand(), muldiv_op(), operand())
}

pub fn addsub_expr() -> P<Expr> {
    left_fold(muldiv_expr(), addsub_op(), muldiv_expr())
}

pub fn arith_expr() -> P<Expr> {
    addsub_expr()
}

// ----------------------------------------------------------------------------
// Statements

pub fn assignment() -> P<Assignment> {
    let parts = seq(seq(seq(register(), token("=")), arith_expr()), token(";"));
    parts.map(|(((target, _), value), _)| Assignment { target, value })
}

/// Labels are handed out when a whole loop has matched
pub fn loop_stmt(labels: &Labels) -> P<Loop> {
    let labels = labels.clone();
    let head = seq(token("loop"), operand());
    let body = seq(seq(token("{"), assignment()), token("}"));
    seq(head, body).map(move |((_, counter), ((_, body), _))| Loop {
        label: labels.fresh(),
        counter,
        body,
    })
}

pub fn statement(labels: &Labels) -> P<Stmt> {
    alt(assignment().map(Stmt::Assign), loop_stmt(labels).map(Stmt::Loop))
}

pub fn program(labels: &Labels) -> P<Program> {
    spaced(star(statement(labels))).map(Program)
}

/// Parse a whole source text
pub fn parse(source: &str, labels: &Labels) -> Result<Program, Error> {
    let tokens: Vec<char> = source.chars().collect();
    let output = program(labels)
        .run(&tokens)
        .map_err(|e| Error::Syntax(e.index))?;
    if output.next < tokens.len() {
        // the statement that stopped the program knows how far it got
        return Err(Error::Syntax(output.furthest.max(output.next)));
    }
    Ok(output.value)
}
