use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Opcode prefix shared by every compute instruction (bits 15..13).
pub const COMPUTE_PREFIX: u16 = 0b111 << 13;

/// Largest value an address instruction can load.
pub const MAX_ADDRESS: u16 = 0x7FFF;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dest: u8 {
const M = 0b001;
const D = 0b010;
const A = 0b100;
}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Jump {
    Null = 0b000,
    Jgt = 0b001,
    Jeq = 0b010,
    Jge = 0b011,
    Jlt = 0b100,
    Jne = 0b101,
    Jle = 0b110,
    Jmp = 0b111,
}

impl Jump {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Second ALU operand; selects the a-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    A,
    M,
}

impl Operand {
    pub fn a_bit(self) -> u16 {
        match self {
            Operand::A => 0,
            Operand::M => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comp {
    pub operand: Operand,
    pub code: u8, // c1..c6
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Address(u16),
    Compute { dest: Dest, comp: Comp, jump: Jump },
}

impl Instruction {
    /// The 16-bit machine word.
    pub fn word(&self) -> u16 {
        match *self {
            Instruction::Address(addr) => addr & MAX_ADDRESS,
            Instruction::Compute { dest, comp, jump } => {
                COMPUTE_PREFIX
                    | (comp.operand.a_bit() << 12)
                    | (((comp.code & 0x3F) as u16) << 6)
                    | ((dest.bits() as u16) << 3)
                    | jump.code() as u16
            }
        }
    }

    /// The word as 16 `'0'`/`'1'` characters, MSB first.
    pub fn to_binary(&self) -> String {
        format!("{:016b}", self.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_word_keeps_leading_zero() {
        assert_eq!(Instruction::Address(MAX_ADDRESS).to_binary(), "0111111111111111");
        assert_eq!(Instruction::Address(0).to_binary(), "0000000000000000");
    }

    #[test]
    fn compute_word_field_layout() {
        // AMD=!M;JLE
        let inst = Instruction::Compute {
            dest: Dest::A | Dest::M | Dest::D,
            comp: Comp { operand: Operand::M, code: 0b110001 },
            jump: Jump::Jle,
        };
        assert_eq!(inst.to_binary(), "1111110001111110");
    }
}
