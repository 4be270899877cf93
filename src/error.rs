use std::fmt;

use crate::token::{Token, Type};

/// Receives formatted `(line, location, message)` triples from the scanner,
/// parser, and interpreter. Kept as a trait rather than a free function so
/// the core stays re-entrant: nothing in this crate reaches for global
/// mutable state to report an error.
pub trait ErrorSink {
    fn report(&mut self, line: usize, location: &str, message: &str);
}

/// Default sink used by the CLI. Prints to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl ErrorSink for StderrSink {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error{location}: {message}");
    }
}

/// Sink used by tests: keeps every formatted line around for assertions
/// instead of printing it.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
}

impl ErrorSink for CollectingSink {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.lines.push(format!("[line {line}] Error{location}: {message}"));
    }
}

/// Represents an error that occurs during scanning.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// Represents an error that occurs during parsing.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

/// Represents an error that occurs during evaluation. Carries the
/// originating operator/identifier token so the reporter can recover a
/// line number.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

/// Owns the had-error / had-runtime-error flags from the data model and the
/// sink they are reported through. One `Diagnostics` is threaded by mutable
/// reference through a single `run` call; the host resets it between REPL
/// prompts.
pub struct Diagnostics<S: ErrorSink> {
    sink: S,
    had_error: bool,
    had_runtime_error: bool,
}

impl<S: ErrorSink> Diagnostics<S> {
    pub fn new(sink: S) -> Self {
        Diagnostics {
            sink,
            had_error: false,
            had_runtime_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    pub fn scan_error(&mut self, error: &ScanError) {
        self.sink.report(error.line, "", &error.message);
        self.had_error = true;
    }

    pub fn parse_error(&mut self, error: &ParseError) {
        let location = Self::token_location(&error.token);
        self.sink.report(error.token.line, &location, &error.message);
        self.had_error = true;
    }

    pub fn runtime_error(&mut self, error: &RuntimeError) {
        let location = Self::token_location(&error.token);
        self.sink.report(error.token.line, &location, &error.message);
        self.had_runtime_error = true;
    }

    fn token_location(token: &Token) -> String {
        if token.kind == Type::EOF {
            " at end".to_string()
        } else {
            format!(" at {}", token.lexeme)
        }
    }
}

impl Diagnostics<StderrSink> {
    pub fn stderr() -> Self {
        Diagnostics::new(StderrSink)
    }
}

impl Default for Diagnostics<StderrSink> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Diagnostics<CollectingSink> {
    pub fn collecting() -> Self {
        Diagnostics::new(CollectingSink::default())
    }

    pub fn lines(&self) -> &[String] {
        &self.sink.lines
    }
}
