//! # Console Boundary
//!
//! The abstract prompt/print boundary between the register and its
//! shopper. Input comes through the [`LineSource`] trait so the same
//! session code runs against a live terminal or a scripted sequence
//! in tests; output goes through any `io::Write` sink.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

// =============================================================================
// Line Sources
// =============================================================================

/// A source of input lines.
///
/// `Ok(None)` signals end of input (EOF); the caller treats it as the
/// quit signal so a closed stdin can never wedge the loop.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Live stdin, one line per call.
#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        StdinSource
    }
}

impl LineSource for StdinSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
        }
    }
}

/// A pre-scripted input sequence for deterministic tests.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedSource {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

// =============================================================================
// Console
// =============================================================================

/// Pairs a line source with an output sink.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: LineSource, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Console { input, out }
    }

    /// Prints a prompt (no newline), flushes, and reads one line.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.input.next_line()
    }

    /// Prints a line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Consumes the console and returns the output sink, so tests can
    /// inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_drains_then_eofs() {
        let mut source = ScriptedSource::new(["a", "b"]);
        assert_eq!(source.next_line().unwrap(), Some("a".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("b".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_then_reads() {
        let mut console = Console::new(ScriptedSource::new(["Keyboard"]), Vec::new());
        let answer = console.prompt("Choose: ").unwrap();
        assert_eq!(answer, Some("Keyboard".to_string()));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Choose: ");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(ScriptedSource::default(), Vec::new());
        console.say("hello").unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "hello\n");
    }
}
