// potpie/src/ui/output.rs
//! Status messages written to stderr.
//!
//! Catalog and preview output goes to stdout or to files; everything the user
//! only needs to read goes through here. Colour is applied only when the
//! destination is a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// The kind of status message, which decides its prefix and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageLevel {
    fn prefix(self) -> &'static str {
        match self {
            MessageLevel::Info | MessageLevel::Success => "",
            MessageLevel::Warn => "Warning: ",
            MessageLevel::Error => "Error: ",
        }
    }
}

/// Writes one status line to `writer`.
pub fn print_message<W: Write>(
    writer: &mut W,
    level: MessageLevel,
    msg: &str,
    use_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", level.prefix(), msg);
    if !use_color {
        return writeln!(writer, "{}", line);
    }
    match level {
        MessageLevel::Info => writeln!(writer, "{}", line.cyan()),
        MessageLevel::Success => writeln!(writer, "{}", line.green()),
        MessageLevel::Warn => writeln!(writer, "{}", line.yellow()),
        MessageLevel::Error => writeln!(writer, "{}", line.red().bold()),
    }
}

fn to_stderr(level: MessageLevel, msg: impl AsRef<str>) {
    let stderr = io::stderr();
    let use_color = stderr.is_terminal();
    let _ = print_message(&mut stderr.lock(), level, msg.as_ref(), use_color);
}

pub fn info_msg(msg: impl AsRef<str>) {
    to_stderr(MessageLevel::Info, msg);
}

pub fn success_msg(msg: impl AsRef<str>) {
    to_stderr(MessageLevel::Success, msg);
}

pub fn warn_msg(msg: impl AsRef<str>) {
    to_stderr(MessageLevel::Warn, msg);
}

pub fn error_msg(msg: impl AsRef<str>) {
    to_stderr(MessageLevel::Error, msg);
}
