use std::io::{self, BufRead};

use mazerun_core::Direction;

/// One raw move read from the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputToken {
    Direction(Direction),
    /// Anything that is not a direction, kept verbatim for reporting
    Invalid(String),
}

/// Blocking source of moves, one per call. `None` means the player is gone.
pub(crate) trait InputSource {
    fn next_token(&mut self) -> io::Result<Option<InputToken>>;
}

/// Reads one token per line.
#[derive(Debug)]
pub(crate) struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_token(&mut self) -> io::Result<Option<InputToken>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }

        let raw = self.line.trim();
        Ok(Some(match raw.parse() {
            Ok(direction) => InputToken::Direction(direction),
            Err(_) => InputToken::Invalid(raw.to_owned()),
        }))
    }
}
