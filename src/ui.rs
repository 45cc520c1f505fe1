//! Terminal rendering
//!
//! Every response is framed by separator lines; errors are already prefixed
//! by the command processor.

use crate::command_processor::Response;
use std::io::{self, Write};

pub const SEPARATOR: &str = "____________________________________________________________";
const NAME: &str = "Taskmate";

/// Lines of one framed block, ready to print
pub fn frame<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

pub fn render(response: &Response) -> String {
    if response.lines.is_empty() {
        return String::new();
    }
    frame(&response.lines)
}

pub fn welcome() -> String {
    frame(&[format!(" Hello! I'm {NAME}"), " What can I do for you?".to_string()])
}

pub fn goodbye() -> String {
    frame(&[" Bye. Hope to see you again soon!"])
}

pub fn warning(message: &str) -> String {
    frame(&[format!(" OOPS!!! {message}")])
}

/// Write a rendered block to stdout
pub fn show(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
