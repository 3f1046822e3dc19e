use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hack_asm::{translate_file, AsmError, AsmOptions, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble Hack .asm source into .hack binary text")]
struct Opts {
    /// Output path (default: input with `.asm` replaced by `.hack`)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Hack)]
    format: OutputFormat,
    #[arg(value_name = "ASMFILE")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let Some(input) = opts.input else {
        println!("Usage: hackasm <FILE>.asm");
        return Ok(());
    };

    let asm_opts = AsmOptions { output: opts.output, format: opts.format };
    match translate_file(&input, &asm_opts) {
        Ok(out) => println!("Translation completed. Output saved to {}", out.display()),
        Err(AsmError::File(e)) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e).with_context(|| format!("failed to assemble {}", input.display())),
    }
    Ok(())
}
