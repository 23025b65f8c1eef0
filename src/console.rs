//! Line-oriented terminal channel used by the shell and the quiz session.

use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Stdout, Write};

pub trait Console {
    /// Prints `prompt` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Same as `prompt`, but implementations may hide what is typed.
    fn prompt_password(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)
    }

    /// Writes one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// A console over any reader/writer pair.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> LineConsole<R, Vec<u8>> {
    /// Everything written so far, as text.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

/// Standard input/output. Passwords are read without echo when stdin is a
/// terminal.
pub struct TerminalConsole {
    inner: LineConsole<BufReader<Stdin>, Stdout>,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            inner: LineConsole::new(BufReader::new(io::stdin()), io::stdout()),
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.inner.prompt(prompt)
    }

    fn prompt_password(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.interactive {
            return self.inner.prompt(prompt);
        }
        match rpassword::prompt_password(prompt) {
            Ok(password) => Ok(Some(password)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        self.inner.say(line)
    }
}
