use crate::label::Label;
use crate::reg::Reg;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Src {
    Reg(Reg),
    Imm(i128),
    Sym(String),
}

/// x86-64 instructions the code generator emits (NASM syntax)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asm {
    MOV(Reg, Src),
    ADD(Reg, Reg),
    SUB(Reg, Reg),
    MUL(Reg), // rdx:rax = rax * rs
    DIV(Reg), // rax = rdx:rax / rs
    PUSH(Reg),
    POP(Reg),
    LOOP(Label), // rcx -= 1, jump if rcx != 0
    CALL(String),
    SYSCALL,
    RET,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Inst(Asm),
    Label(String),
    Comment(String),
    Directive(String),
    Blank,
}

impl fmt::Display for Src {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Src::Reg(reg) => write!(f, "{reg}"),
            Src::Imm(imm) => write!(f, "{imm}"),
            Src::Sym(sym) => write!(f, "{sym}"),
        }
    }
}

impl fmt::Display for Asm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asm::MOV(rd, src) => write!(f, "mov {rd}, {src}"),
            Asm::ADD(rd, rs) => write!(f, "add {rd}, {rs}"),
            Asm::SUB(rd, rs) => write!(f, "sub {rd}, {rs}"),
            Asm::MUL(rs) => write!(f, "mul {rs}"),
            Asm::DIV(rs) => write!(f, "div {rs}"),
            Asm::PUSH(rs) => write!(f, "push {rs}"),
            Asm::POP(rd) => write!(f, "pop {rd}"),
            Asm::LOOP(label) => write!(f, "loop {label}"),
            Asm::CALL(target) => write!(f, "call {target}"),
            Asm::SYSCALL => write!(f, "syscall"),
            Asm::RET => write!(f, "ret"),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Inst(asm) => write!(f, "    {asm}"),
            Line::Label(name) => write!(f, "{name}:"),
            Line::Comment(text) => write!(f, "; {text}"),
            Line::Directive(text) => write!(f, "{text}"),
            Line::Blank => Ok(()),
        }
    }
}

#[test]
fn format() {
    use crate::label::Labels;

    let label = Labels::new().fresh();
    assert_eq!(Asm::MOV(Reg::RAX, Src::Imm(-3)).to_string(), "mov rax, -3");
    assert_eq!(Asm::MOV(Reg::R10, Src::Reg(Reg::RAX)).to_string(), "mov r10, rax");
    assert_eq!(Asm::MUL(Reg::RBX).to_string(), "mul rbx");
    assert_eq!(Line::Inst(Asm::LOOP(label)).to_string(), "    loop loop_0");
    assert_eq!(Line::Label(label.to_string()).to_string(), "loop_0:");
    assert_eq!(Line::Comment("r10 <- 1".into()).to_string(), "; r10 <- 1");
}
