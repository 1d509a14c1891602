//! Shared command-line surface for the two codec programs.
//!
//! `base64z` and `base92z` are independent binaries with the same shape:
//! `encode <input> <output>`, `decode <input> <output>`, plus `info` for
//! inspecting an encoded file's header without decoding it.  There is no
//! format tag on the wire, so the two programs do not interoperate.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::block::Scheme;
use crate::error::CodecError;
use crate::frame::{self, HEADER_LEN};
use crate::stream;

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a binary file into length-framed symbol text
    Encode {
        input: PathBuf,
        output: PathBuf,
    },
    /// Decode an encoded file back to the original bytes
    Decode {
        input: PathBuf,
        output: PathBuf,
    },
    /// Show the header and block layout of an encoded file
    Info {
        input: PathBuf,
    },
}

/// Parse arguments and dispatch for scheme `S`.  Returns the process exit
/// code; all codec errors are reported to stderr, never panicked on.
pub fn run<S: Scheme>() -> ExitCode {
    let matches = Cli::command()
        .name(S::NAME)
        .about(format!("Fixed-block {} text codec", S::NAME))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match dispatch::<S>(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", S::NAME);
            ExitCode::FAILURE
        }
    }
}

fn dispatch<S: Scheme>(command: Commands) -> Result<(), CodecError> {
    match command {
        Commands::Encode { input, output } => {
            // The header length comes from the filesystem, independently of
            // the read loop (the original used fseek/ftell).
            let total = std::fs::metadata(&input)
                .map_err(CodecError::SourceUnavailable)?
                .len();
            let src = File::open(&input).map_err(CodecError::SourceUnavailable)?;
            let dst = File::create(&output).map_err(CodecError::SinkUnavailable)?;

            let mut writer = BufWriter::new(dst);
            stream::encode_stream::<S, _, _>(BufReader::new(src), &mut writer, total)?;
            writer.flush()?;
            println!("Encoding complete: {total} bytes -> {}", output.display());
            Ok(())
        }

        Commands::Decode { input, output } => {
            let src = File::open(&input).map_err(CodecError::SourceUnavailable)?;
            let dst = File::create(&output).map_err(CodecError::SinkUnavailable)?;

            let mut writer = BufWriter::new(dst);
            let written = stream::decode_stream::<S, _, _>(BufReader::new(src), &mut writer)?;
            writer.flush()?;
            println!("Decoding complete: {written} bytes -> {}", output.display());
            Ok(())
        }

        Commands::Info { input } => info::<S>(&input),
    }
}

/// Header-level summary of an encoded file, as printed by `info`.
#[derive(Debug, Clone, Copy)]
pub struct StreamInfo {
    pub stream_size: u64,
    pub declared: u64,
    pub blocks_expected: u64,
    pub blocks_present: u64,
    /// Bytes left over after the last whole block.
    pub stray_bytes: u64,
}

impl StreamInfo {
    pub fn is_truncated(&self) -> bool {
        self.blocks_present < self.blocks_expected
    }
}

/// Read an encoded file's header and measure its block layout without
/// decoding any payload.
pub fn stream_info<S: Scheme>(input: &Path) -> Result<StreamInfo, CodecError> {
    let stream_size = std::fs::metadata(input)
        .map_err(CodecError::SourceUnavailable)?
        .len();
    let src = File::open(input).map_err(CodecError::SourceUnavailable)?;
    let declared = frame::read_header(BufReader::new(src))?;

    let body = stream_size.saturating_sub(HEADER_LEN as u64);
    Ok(StreamInfo {
        stream_size,
        declared,
        blocks_expected: declared.div_ceil(S::RAW_SIZE as u64),
        blocks_present: body / S::SYM_SIZE as u64,
        stray_bytes: body % S::SYM_SIZE as u64,
    })
}

fn info<S: Scheme>(input: &Path) -> Result<(), CodecError> {
    let si = stream_info::<S>(input)?;

    println!("── {} stream ───────────────────────────────────", S::NAME);
    println!("  Path             {}", input.display());
    println!("  Stream size      {} B", si.stream_size);
    println!("  Declared payload {} B", si.declared);
    println!("  Block geometry   {} bytes -> {} symbols", S::RAW_SIZE, S::SYM_SIZE);
    println!("  Blocks expected  {}", si.blocks_expected);
    println!("  Blocks present   {}", si.blocks_present);
    if si.is_truncated() {
        println!("  WARNING: stream is truncated");
    }
    if si.stray_bytes != 0 {
        println!("  WARNING: trailing partial block ({} stray bytes)", si.stray_bytes);
    }
    Ok(())
}
