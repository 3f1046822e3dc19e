use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::encoder::LineEncoder;
use crate::error::{AsmError, FileError};
use crate::source::{clean_lines, is_label};
use crate::table::Tables;

pub const SOURCE_EXT: &str = "asm";
pub const OUTPUT_EXT: &str = "hack";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum OutputFormat {
    /// One 16-character binary word per line
    #[default]
    Hack,
    /// Pretty JSON listing of line, source and word
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsmOptions {
    /// Write here instead of the sibling `.hack` file.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub line: usize,
    pub source: String,
    pub word: String,
}

/// Encodes every instruction line of `text`, in order.
pub fn listing(text: &str, tables: &Tables) -> Result<Vec<ListingEntry>, AsmError> {
    let enc = LineEncoder::new(tables);
    let mut out = Vec::new();
    for sl in clean_lines(text) {
        if is_label(&sl.text) {
            debug!(line = sl.number, label = %sl.text, "label declaration skipped");
            continue;
        }
        let word = enc.encode(&sl.text).map_err(|source| AsmError::Line {
            line: sl.number,
            text: sl.text.clone(),
            source,
        })?;
        out.push(ListingEntry { line: sl.number, source: sl.text, word });
    }
    Ok(out)
}

pub fn assemble(text: &str, tables: &Tables) -> Result<Vec<String>, AsmError> {
    Ok(listing(text, tables)?.into_iter().map(|e| e.word).collect())
}

/// The `.hack` file contents: each word followed by a newline.
pub fn assemble_to_string(text: &str, tables: &Tables) -> Result<String, AsmError> {
    let words = assemble(text, tables)?;
    let mut out = String::with_capacity(words.len() * 17);
    for w in &words {
        out.push_str(w);
        out.push('\n');
    }
    Ok(out)
}

/// `foo/Prog.asm` -> `foo/Prog.hack`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXT)
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXT)
}

/// Reads `input`, assembles it and writes the result. Returns the output path.
///
/// Nothing is written if the input is rejected or any line fails to encode.
pub fn translate_file(input: &Path, opts: &AsmOptions) -> Result<PathBuf, AsmError> {
    if !is_source_file(input) {
        return Err(FileError::InvalidKind { path: input.to_path_buf() }.into());
    }
    if !input.is_file() {
        return Err(FileError::Missing { path: input.to_path_buf() }.into());
    }
    let text = fs::read_to_string(input).map_err(|source| FileError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let tables = Tables::new();
    let contents = match opts.format {
        OutputFormat::Hack => assemble_to_string(&text, &tables)?,
        OutputFormat::Json => {
            let entries = listing(&text, &tables)?;
            serde_json::to_string_pretty(&entries).map_err(FileError::from)? + "\n"
        }
    };

    let out = opts.output.clone().unwrap_or_else(|| output_path(input));
    fs::write(&out, contents).map_err(|source| FileError::Io { path: out.clone(), source })?;
    info!(input = %input.display(), output = %out.display(), "translation completed");
    Ok(out)
}
