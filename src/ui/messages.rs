//! Console feedback: colored one-line statuses with icons.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info(msg: impl fmt::Display) {
    println!("{}", line(FG_BLUE, "ℹ️", msg));
}

pub fn success(msg: impl fmt::Display) {
    println!("{}", line(FG_GREEN, "✅", msg));
}

pub fn warning(msg: impl fmt::Display) {
    println!("{}", line(FG_YELLOW, "⚠️", msg));
}

pub fn error(msg: impl fmt::Display) {
    eprintln!("{}", line(FG_RED, "❌", msg));
}

/// Section header used by the listing commands.
pub fn header(msg: impl fmt::Display) {
    println!("{FG_BLUE}{BOLD}== {msg} =={RESET}");
}
