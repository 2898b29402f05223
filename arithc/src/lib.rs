pub mod asm;
pub mod ast;
pub mod codegen;
pub mod error;
pub mod grammar;
pub mod label;
pub mod reg;

pub use codegen::CodeGen;
pub use error::Error;
pub use grammar::parse;
pub use label::{Label, Labels};
pub use reg::Reg;

/// Compile source text to assembly. Nothing is produced unless the whole
/// program parses and lowers.
pub fn compile(source: &str, labels: &Labels) -> Result<String, Error> {
    let program = parse(source, labels)?;
    CodeGen::generate(&program)
}
