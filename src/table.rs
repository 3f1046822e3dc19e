use std::collections::HashMap;

use crate::instruction::{Comp, Dest, Jump, Operand, MAX_ADDRESS};

/// Registers, VM segment pointers and memory-mapped I/O.
pub const PREDEFINED: &[(&str, u16)] = &[
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", 0x4000),
    ("KBD", 0x6000),
];

/// Computations whose second operand is the A register (a-bit 0).
pub const COMP_A: &[(&str, u8)] = &[
    ("0", 0b101010),
    ("1", 0b111111),
    ("-1", 0b111010),
    ("D", 0b001100),
    ("A", 0b110000),
    ("!D", 0b001101),
    ("!A", 0b110001),
    ("-D", 0b001111),
    ("-A", 0b110011),
    ("D+1", 0b011111),
    ("A+1", 0b110111),
    ("D-1", 0b001110),
    ("A-1", 0b110010),
    ("D+A", 0b000010),
    ("D-A", 0b010011),
    ("A-D", 0b000111),
    ("D&A", 0b000000),
    ("D|A", 0b010101),
];

/// Computations whose second operand is RAM[A] (a-bit 1).
pub const COMP_M: &[(&str, u8)] = &[
    ("M", 0b110000),
    ("!M", 0b110001),
    ("-M", 0b110011),
    ("M+1", 0b110111),
    ("M-1", 0b110010),
    ("D+M", 0b000010),
    ("D-M", 0b010011),
    ("M-D", 0b000111),
    ("D&M", 0b000000),
    ("D|M", 0b010101),
];

/// Destination mnemonics in code order; index == 3-bit code.
pub const DESTS: [&str; 8] = ["", "M", "D", "MD", "A", "AM", "AD", "AMD"];

/// Jump mnemonics in code order; index == 3-bit code.
pub const JUMPS: [(&str, Jump); 8] = [
    ("", Jump::Null),
    ("JGT", Jump::Jgt),
    ("JEQ", Jump::Jeq),
    ("JGE", Jump::Jge),
    ("JLT", Jump::Jlt),
    ("JNE", Jump::Jne),
    ("JLE", Jump::Jle),
    ("JMP", Jump::Jmp),
];

/// Outcome of resolving the operand of an address instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressResolution {
    Predefined(u16),
    Literal(u16),
    /// All decimal digits, but larger than 15 bits.
    OutOfRange,
    Unresolvable,
}

/// Read-only lookup tables for the Hack instruction fields.
///
/// Built once by the caller and shared by reference; nothing mutates them after
/// [`Tables::new`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    predefined: HashMap<&'static str, u16>,
    comp_a: HashMap<&'static str, u8>,
    comp_m: HashMap<&'static str, u8>,
    dest: HashMap<&'static str, Dest>,
    jump: HashMap<&'static str, Jump>,
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

impl Tables {
    pub fn new() -> Self {
        Self {
            predefined: PREDEFINED.iter().copied().collect(),
            comp_a: COMP_A.iter().copied().collect(),
            comp_m: COMP_M.iter().copied().collect(),
            dest: DESTS
                .iter()
                .enumerate()
                .map(|(code, &name)| (name, Dest::from_bits_truncate(code as u8)))
                .collect(),
            jump: JUMPS.iter().copied().collect(),
        }
    }

    pub fn resolve_predefined(&self, name: &str) -> Option<u16> {
        self.predefined.get(name).copied()
    }

    /// A-operand table first, then the M-operand table.
    pub fn resolve_computation(&self, mnemonic: &str) -> Option<Comp> {
        if let Some(&code) = self.comp_a.get(mnemonic) {
            return Some(Comp { operand: Operand::A, code });
        }
        self.comp_m
            .get(mnemonic)
            .map(|&code| Comp { operand: Operand::M, code })
    }

    pub fn resolve_destination(&self, mnemonic: &str) -> Option<Dest> {
        self.dest.get(mnemonic).copied()
    }

    pub fn resolve_jump(&self, mnemonic: &str) -> Option<Jump> {
        self.jump.get(mnemonic).copied()
    }

    /// Predefined symbols take precedence over decimal literals.
    pub fn resolve_address(&self, operand: &str) -> AddressResolution {
        if let Some(addr) = self.resolve_predefined(operand) {
            return AddressResolution::Predefined(addr);
        }
        if operand.is_empty() || !operand.bytes().all(|b| b.is_ascii_digit()) {
            return AddressResolution::Unresolvable;
        }
        match operand.parse::<u32>() {
            Ok(v) if v <= MAX_ADDRESS as u32 => AddressResolution::Literal(v as u16),
            // digits only, so any parse failure is overflow
            _ => AddressResolution::OutOfRange,
        }
    }

    pub fn predefined_len(&self) -> usize {
        self.predefined.len()
    }

    pub fn computation_len(&self) -> usize {
        self.comp_a.len() + self.comp_m.len()
    }
}
