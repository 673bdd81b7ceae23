// potpie/src/commands/preview.rs
//! The `preview` command: pseudo-translate ad-hoc text.
//!
//! Text given as an argument is translated as one message. Text read from
//! stdin is translated line by line so the command can sit in a pipe.

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufRead, Write};

use potpie_core::{FormatContext, PseudoTranslator, TransformKind};

use crate::cli::PreviewCommand;

pub fn run_preview(cmd: &PreviewCommand) -> Result<()> {
    let kind = TransformKind::from(cmd.transform);
    let format = cmd
        .format
        .as_deref()
        .map(FormatContext::from_name)
        .unwrap_or_default();
    let translator = PseudoTranslator::for_kind(kind, format, cmd.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cmd.text {
        Some(text) => {
            writeln!(out, "{}", translator.compile(text))?;
        }
        None => {
            debug!("Reading preview text from stdin.");
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                writeln!(out, "{}", translator.compile(&line))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
