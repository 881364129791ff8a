//! Output abstraction
//!
//! The headless runner writes through `OutputWriter` so presenters can be
//! tested against a mock.

use std::io::{self, Write};

/// Trait for writing output lines
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Writes to stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
