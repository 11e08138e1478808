use std::io::{self, BufRead, Read, Stdout, Write};

use super::agent::{ensure_in_progress, Agent};
use super::difficulty::MoveChoice;
use crate::error::SelectError;
use crate::game::GameState;

/// Line-at-a-time reader over the process's stdin.
///
/// Holds at most one line and takes the stdin lock only while reading it, so
/// several agents can share the terminal without stealing each other's input.
#[derive(Debug, Default)]
pub struct StdinLines {
    line: Vec<u8>,
    pos: usize,
}

impl Read for StdinLines {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.line.len() {
            self.line.clear();
            self.pos = 0;
            io::stdin().lock().read_until(b'\n', &mut self.line)?;
        }
        Ok(&self.line[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.line.len());
    }
}

/// A person typing column numbers.
///
/// Shows the board, prompts for a column and keeps asking until the answer
/// is a legal move.
pub struct HumanAgent<R = StdinLines, W = Stdout> {
    input: R,
    output: W,
    name: String,
}

impl HumanAgent {
    /// Read moves from stdin and prompt on stdout.
    pub fn stdin(name: impl Into<String>) -> Self {
        HumanAgent::new(name, StdinLines::default(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        HumanAgent {
            input,
            output,
            name: name.into(),
        }
    }

    fn prompt(&mut self, state: &GameState) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", state.board())?;
        write!(
            self.output,
            "{} ({}), choose a column [0-{}]: ",
            self.name,
            state.current_player().name(),
            state.board().cols() - 1
        )?;
        self.output.flush()
    }

    fn read_column(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        let legal = state.legal_actions();
        loop {
            self.prompt(state)?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(column) if legal.contains(&column) => return Ok(Some(column)),
                Ok(column) if column < state.board().cols() => {
                    writeln!(self.output, "Column {column} is full.")?;
                }
                _ => writeln!(self.output, "Not a column: {:?}", line.trim())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, state: &GameState) -> Result<MoveChoice, SelectError> {
        ensure_in_progress(state)?;
        match self.read_column(state) {
            Ok(Some(column)) => Ok(MoveChoice::manual(column)),
            Ok(None) => Err(SelectError::InputClosed),
            Err(err) => Err(SelectError::Io(err.to_string())),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
