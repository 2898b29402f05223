//! Lowering of the AST to x86-64 assembly.
//!
//! Every expression leaves its value in `rax`. Binary operations evaluate the
//! right operand first and park it on the stack, because the two-register
//! instructions overwrite one of their operands.

use crate::asm::{Asm, Line, Src};
use crate::ast::{ArithOp, Assignment, Expr, Loop, Program, Stmt};
use crate::error::Error;
use crate::reg::Reg;

/// Largest literal `mov` is allowed to load
const MAX_LITERAL: i128 = u64::MAX as i128 - 1;

const PRINT_RAX: &str = "print_rax";

#[derive(Debug, Default)]
pub struct CodeGen {
    output: Vec<Line>,
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen::default()
    }

    /// Lower a whole program into the final assembly text
    pub fn generate(program: &Program) -> Result<String, Error> {
        let mut codegen = CodeGen::new();
        codegen.gen_program(program)?;
        Ok(codegen.render())
    }

    pub fn lines(&self) -> &[Line] {
        &self.output
    }

    pub fn render(&self) -> String {
        let mut text = self
            .output
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');
        text
    }

    fn emit(&mut self, line: Line) {
        self.output.push(line);
    }

    fn inst(&mut self, asm: Asm) {
        self.emit(Line::Inst(asm));
    }

    fn comment(&mut self, text: String) {
        self.emit(Line::Comment(text));
    }

    fn directive(&mut self, text: &str) {
        self.emit(Line::Directive(text.to_string()));
    }

    pub fn gen_program(&mut self, program: &Program) -> Result<(), Error> {
        self.directive("global main");
        self.emit(Line::Label("main".to_string()));
        self.comment("Resetting r10, r11, r12, r13".to_string());
        for reg in Reg::STORAGE {
            self.inst(Asm::MOV(reg, Src::Imm(0)));
        }

        for stmt in &program.0 {
            self.emit(Line::Blank);
            self.gen_stmt(stmt)?;
            self.inst(Asm::CALL(PRINT_RAX.to_string()));
        }

        // exit(0)
        self.emit(Line::Blank);
        self.inst(Asm::MOV(Reg::RAX, Src::Imm(60)));
        self.inst(Asm::MOV(Reg::RDI, Src::Imm(0)));
        self.inst(Asm::SYSCALL);

        self.emit(Line::Blank);
        self.directive("section .data");
        self.directive("format: db \"%lld\", 10");

        self.emit(Line::Blank);
        self.directive("section .text");
        self.directive("extern printf");
        self.gen_print_rax();
        Ok(())
    }

    /// printf("%lld\n", rax), preserving every register the program uses
    fn gen_print_rax(&mut self) {
        const SAVED: [Reg; 6] = [Reg::RAX, Reg::RCX, Reg::R10, Reg::R11, Reg::R12, Reg::R13];

        self.emit(Line::Label(PRINT_RAX.to_string()));
        for reg in SAVED {
            self.inst(Asm::PUSH(reg));
        }
        self.inst(Asm::MOV(Reg::RDI, Src::Sym("format".to_string())));
        self.inst(Asm::MOV(Reg::RSI, Src::Reg(Reg::RAX)));
        self.inst(Asm::MOV(Reg::RAX, Src::Imm(0)));
        self.inst(Asm::CALL("printf".to_string()));
        for reg in SAVED.iter().rev() {
            self.inst(Asm::POP(*reg));
        }
        self.inst(Asm::RET);
    }

    pub fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Assign(assign) => self.gen_assignment(assign),
            Stmt::Loop(lp) => self.gen_loop(lp),
        }
    }

    pub fn gen_assignment(&mut self, assign: &Assignment) -> Result<(), Error> {
        self.comment(format!("{assign}: Codegen"));
        self.gen_expr(&assign.value)?;
        self.comment(format!("{assign}: Writing expression value to var"));
        self.inst(Asm::MOV(assign.target, Src::Reg(Reg::RAX)));
        Ok(())
    }

    /// `loop` decrements rcx before testing it, so the body always runs at
    /// least once, even for a zero or negative counter.
    pub fn gen_loop(&mut self, lp: &Loop) -> Result<(), Error> {
        self.comment(format!("{lp}: Evaluating counter"));
        self.gen_expr(&lp.counter)?;
        self.comment(format!("{lp}: Storing counter in rcx"));
        self.inst(Asm::MOV(Reg::RCX, Src::Reg(Reg::RAX)));
        self.emit(Line::Label(lp.label.to_string()));
        self.comment(format!("{lp}: Assignments code"));
        self.gen_assignment(&lp.body)?;
        self.inst(Asm::LOOP(lp.label));
        Ok(())
    }

    /// Comments on operator nodes name only the operator, so the annotation
    /// stays linear in the size of the expression.
    pub fn gen_expr(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::Num(value) => {
                if *value > MAX_LITERAL {
                    return Err(Error::ValueRange(value.to_string()));
                }
                self.comment(format!("{expr}: Codegen"));
                self.inst(Asm::MOV(Reg::RAX, Src::Imm(*value)));
            }
            Expr::Huge(digits) => return Err(Error::ValueRange(digits.clone())),
            Expr::Reg(reg) => {
                self.comment(format!("{expr}: Codegen"));
                self.inst(Asm::MOV(Reg::RAX, Src::Reg(*reg)));
            }
            Expr::Arith(op, lhs, rhs) => {
                self.comment(format!("{op}: Codegen for right operand"));
                self.gen_expr(rhs)?;
                self.comment(format!("{op}: Pushing result of right operand evaluation"));
                self.inst(Asm::PUSH(Reg::RAX));
                self.comment(format!("{op}: Codegen for left operand"));
                self.gen_expr(lhs)?;
                self.comment(format!("{op}: Applying op"));
                self.inst(Asm::POP(Reg::RBX));
                self.inst(match op {
                    ArithOp::Add => Asm::ADD(Reg::RAX, Reg::RBX),
                    ArithOp::Sub => Asm::SUB(Reg::RAX, Reg::RBX),
                    ArithOp::Mul => Asm::MUL(Reg::RBX),
                    ArithOp::Div => Asm::DIV(Reg::RBX),
                });
            }
        }
        Ok(())
    }
}
