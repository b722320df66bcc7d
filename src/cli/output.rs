use std::fmt;

use colored::Colorize;
use once_cell::sync::Lazy;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

static COLOR_ENABLED: Lazy<bool> = Lazy::new(|| std::env::var_os("NO_COLOR").is_none());

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        MessageKind::Success => format!("OK: {text}"),
        MessageKind::Warning => format!("WARNING: {text}"),
        MessageKind::Error => format!("ERROR: {text}"),
    };

    if !*COLOR_ENABLED {
        return base;
    }

    match kind {
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().to_string(),
        MessageKind::Info => base,
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Success, message));
}

pub fn section(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Section, message));
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", apply_style(MessageKind::Error, message));
}
