//! A tree-walking interpreter for a small dynamically-typed scripting
//! language in the Lox family: lexical scoping, `if`/`while` control flow,
//! and nothing more — no closures, no classes, no bytecode.
//!
//! ## Pipeline
//! Source text flows through four stages, leaves first:
//!
//! 1. [`scanner`] turns a source string into a flat [`token`] stream,
//!    terminated by `EOF`. Lexical errors (an unterminated string, a stray
//!    character) are collected rather than stopping the scan early.
//! 2. [`parser`] is a recursive-descent parser that turns tokens into a list
//!    of [`stmt::Stmt`], built out of [`expr::Expr`] subtrees. A syntax error
//!    is reported and the parser synchronizes to the next likely statement
//!    boundary so one run can surface more than one mistake.
//! 3. [`environment`] models lexical scope as a chain of binding tables, one
//!    per block, each owning a link to its parent.
//! 4. [`interpreter`] walks the statement list against that chain, producing
//!    `print` output through a host-supplied [`std::io::Write`] sink and
//!    raising a [`error::RuntimeError`] at the exact operator or identifier
//!    where a misuse occurs.
//!
//! [`error::Diagnostics`] replaces the usual global "had an error" flag with
//! an explicit object threaded through all three stages, so a [`Lox`]
//! instance is re-entrant: nothing here reaches for a `static mut`.

use std::fs;
use std::io::{self, Write};

pub mod ast;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod literal;
pub mod parser;
pub mod scanner;
pub mod stmt;
pub mod token;

use error::{CollectingSink, Diagnostics, ErrorSink, StderrSink};
use interpreter::Interpreter;
use parser::Parser;
use scanner::Scanner;

/// Orchestrates one source text through scan, parse, and interpret. Owns the
/// global environment and the error state across however many calls to
/// [`Lox::run`] the host makes — in script mode that is one call, in the
/// REPL it is one call per line, with diagnostics reset between them.
pub struct Lox<W: Write, S: ErrorSink> {
    interpreter: Interpreter<W>,
    diagnostics: Diagnostics<S>,
}

impl<W: Write, S: ErrorSink> Lox<W, S> {
    pub fn new(output: W, sink: S) -> Self {
        Lox {
            interpreter: Interpreter::new(output),
            diagnostics: Diagnostics::new(sink),
        }
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }

    /// Clears the error flags. The host calls this between REPL prompts so
    /// a mistake on one line does not poison the next.
    pub fn reset(&mut self) {
        self.diagnostics.reset();
    }

    /// Scans, parses, and (if both stages were clean) interprets `source`.
    /// Every error is reported through the sink as it is found; this method
    /// never panics on malformed input.
    pub fn run(&mut self, source: &str) {
        let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
        for error in &scan_errors {
            self.diagnostics.scan_error(error);
        }

        let (statements, parse_errors) = Parser::new(tokens).parse();
        for error in &parse_errors {
            self.diagnostics.parse_error(error);
        }

        if self.diagnostics.had_error() {
            return;
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            self.diagnostics.runtime_error(&error);
        }
    }
}

impl Lox<io::Stdout, StderrSink> {
    /// The CLI's interpreter: prints to stdout, reports errors to stderr.
    pub fn stdio() -> Self {
        Lox::new(io::stdout(), StderrSink)
    }

    /// Reads `path` as UTF-8 source, runs it once, and reports the exit
    /// status the CLI contract requires: `0` on a clean run, `1` if any
    /// error (compile-time or runtime) was reported.
    pub fn run_file(&mut self, path: &str) -> io::Result<i32> {
        let source = fs::read_to_string(path)?;
        self.run(&source);
        Ok(if self.had_error() || self.had_runtime_error() { 1 } else { 0 })
    }
}

impl Lox<Vec<u8>, CollectingSink> {
    /// An in-process interpreter for tests: captures `print` output in a
    /// buffer and error lines in a vector instead of touching the real
    /// terminal.
    pub fn capturing() -> Self {
        Lox::new(Vec::new(), CollectingSink::default())
    }

    pub fn output(&self) -> &[u8] {
        self.interpreter_output()
    }

    fn interpreter_output(&self) -> &[u8] {
        self.interpreter.output()
    }

    pub fn error_lines(&self) -> &[String] {
        self.diagnostics.lines()
    }
}
