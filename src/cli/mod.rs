//! Command-line handling for the headless runner.

mod args;

pub use args::{parse, parse_from, print_usage, Args};
