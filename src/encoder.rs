use tracing::trace;

use crate::error::EncodeError;
use crate::instruction::{Dest, Instruction, Jump};
use crate::table::{AddressResolution, Tables};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Address,
    Compute,
}

/// The three fields of `[dest=]comp[;jump]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub dest: Option<&'a str>,
    pub comp: &'a str,
    pub jump: Option<&'a str>,
}

pub fn classify(line: &str) -> LineKind {
    if line.starts_with('@') {
        LineKind::Address
    } else {
        LineKind::Compute
    }
}

/// Split on the first `=`, then the remainder on the first `;`.
pub fn split_fields(line: &str) -> Fields<'_> {
    let (dest, rest) = match line.split_once('=') {
        Some((dest, rest)) => (Some(dest), rest),
        None => (None, line),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp, Some(jump)),
        None => (rest, None),
    };
    Fields { dest, comp, jump }
}

/// Encodes one cleaned line (no comments, no whitespace, not a label).
#[derive(Debug, Clone, Copy)]
pub struct LineEncoder<'t> {
    tables: &'t Tables,
}

impl<'t> LineEncoder<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        Self { tables }
    }

    pub fn parse(&self, line: &str) -> Result<Instruction, EncodeError> {
        if line.is_empty() {
            return Err(EncodeError::EmptyLine);
        }
        match classify(line) {
            LineKind::Address => self.parse_address(&line[1..]),
            LineKind::Compute => self.parse_compute(split_fields(line)),
        }
    }

    /// The 16-character binary word for `line`.
    pub fn encode(&self, line: &str) -> Result<String, EncodeError> {
        let inst = self.parse(line)?;
        let word = inst.to_binary();
        trace!(line, %word, "encoded");
        Ok(word)
    }

    fn parse_address(&self, operand: &str) -> Result<Instruction, EncodeError> {
        match self.tables.resolve_address(operand) {
            AddressResolution::Predefined(addr) | AddressResolution::Literal(addr) => {
                Ok(Instruction::Address(addr))
            }
            AddressResolution::OutOfRange => Err(EncodeError::AddressOutOfRange {
                operand: operand.to_string(),
            }),
            AddressResolution::Unresolvable => Err(EncodeError::UnresolvableAddress {
                operand: operand.to_string(),
            }),
        }
    }

    fn parse_compute(&self, fields: Fields<'_>) -> Result<Instruction, EncodeError> {
        let comp = self.tables.resolve_computation(fields.comp).ok_or_else(|| {
            EncodeError::UnknownComputation {
                mnemonic: fields.comp.to_string(),
            }
        })?;
        let dest = match fields.dest {
            None => Dest::empty(),
            Some(m) => self
                .tables
                .resolve_destination(m)
                .ok_or_else(|| EncodeError::UnknownDestination { mnemonic: m.to_string() })?,
        };
        let jump = match fields.jump {
            None => Jump::Null,
            Some(m) => self
                .tables
                .resolve_jump(m)
                .ok_or_else(|| EncodeError::UnknownJump { mnemonic: m.to_string() })?,
        };
        Ok(Instruction::Compute { dest, comp, jump })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_marks_absent_fields() {
        assert_eq!(
            split_fields("D;JGT"),
            Fields { dest: None, comp: "D", jump: Some("JGT") }
        );
        assert_eq!(
            split_fields("AM=M+1"),
            Fields { dest: Some("AM"), comp: "M+1", jump: None }
        );
        assert_eq!(
            split_fields("D=D-A;JNE"),
            Fields { dest: Some("D"), comp: "D-A", jump: Some("JNE") }
        );
        assert_eq!(split_fields("0"), Fields { dest: None, comp: "0", jump: None });
    }

    #[test]
    fn split_uses_first_separator() {
        let f = split_fields("A=D=M;JMP;JMP");
        assert_eq!(f.dest, Some("A"));
        assert_eq!(f.comp, "D=M");
        assert_eq!(f.jump, Some("JMP;JMP"));
    }

    #[test]
    fn classify_by_leading_at() {
        assert_eq!(classify("@5"), LineKind::Address);
        assert_eq!(classify("M=1"), LineKind::Compute);
    }
}
