pub mod assembler;
pub mod encoder;
pub mod error;
pub mod instruction;
pub mod source;
pub mod table;

pub use assembler::{assemble, assemble_to_string, translate_file, AsmOptions, OutputFormat};
pub use encoder::LineEncoder;
pub use error::{AsmError, EncodeError, FileError};
pub use instruction::{Comp, Dest, Instruction, Jump, Operand};
pub use table::{AddressResolution, Tables};
