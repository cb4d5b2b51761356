//! Console port used by the interactive session.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal access.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line without its line ending.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console backed by the process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{text}")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        read_line_lossy(&mut io::stdin().lock())
    }
}

/// Reads one line, replacing invalid UTF-8 instead of failing.
fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Console fed from a fixed list of answers; everything written is captured.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Prompts and printed lines, in order.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push_str(prompt);
        let answer = self.answers.pop_front();
        if let Some(ref line) = answer {
            self.transcript.push_str(line);
        }
        self.transcript.push('\n');
        Ok(answer)
    }
}
