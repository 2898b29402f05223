use serde::Serialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Reg {
    /// Accumulator
    RAX,
    /// Scratch operand for binary ops
    RBX,
    /// Loop counter
    RCX,
    RDI,
    RSI,
    R10,
    R11,
    R12,
    R13,
}

impl Reg {
    /// Registers a program may name
    pub const STORAGE: [Reg; 4] = [Reg::R10, Reg::R11, Reg::R12, Reg::R13];
}

#[test]
fn test() {
    assert_eq!(Reg::R10.to_string(), "r10");
    assert_eq!(Reg::RAX.to_string(), "rax");
    assert_eq!("r12".parse::<Reg>(), Ok(Reg::R12));
    assert!("r14".parse::<Reg>().is_err());
}
