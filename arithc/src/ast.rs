use crate::label::Label;
use crate::reg::Reg;
use serde::Serialize;
use std::fmt;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program(pub Vec<Stmt>); // { stmt }

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Assign(Assignment), // reg "=" expr ";"
    Loop(Loop),         // "loop" operand "{" assignment "}"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub target: Reg,
    pub value: Expr,
}

/// Counted loop. The body is exactly one assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loop {
    pub label: Label,
    pub counter: Expr,
    pub body: Assignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Num(i128),                             // [ "+" | "-" ] digits
    Huge(String),                          // digits beyond i128, as written
    Reg(Reg),                              // "r10" | "r11" | "r12" | "r13"
    Arith(ArithOp, Box<Expr>, Box<Expr>), // expr (binop) expr
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ArithOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Expr {
    pub fn arith(op: ArithOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Arith(op, Box::new(lhs), Box::new(rhs))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{value}"),
            Expr::Huge(digits) => write!(f, "{digits}"),
            Expr::Reg(reg) => write!(f, "{reg}"),
            Expr::Arith(op, lhs, rhs) => write!(f, "{lhs} {op} {rhs}"),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.target, self.value)
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop {}", self.counter)
    }
}

#[test]
fn display() {
    let expr = Expr::arith(
        ArithOp::Sub,
        Expr::arith(ArithOp::Add, Expr::Num(5), Expr::Num(-5)),
        Expr::Reg(Reg::R12),
    );
    assert_eq!(expr.to_string(), "5 + -5 - r12");

    let assign = Assignment {
        target: Reg::R10,
        value: expr,
    };
    assert_eq!(assign.to_string(), "r10 <- 5 + -5 - r12");
}
