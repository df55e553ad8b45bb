//! Key-by-key command reading.
//!
//! Whitespace and line breaks are skipped and every other character is a
//! separate key press, so `ee s` typed on one line yields three commands.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::trace;

pub struct CommandReader<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Blocks until the next non-whitespace key; None once input is closed.
    pub fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            while let Some(c) = self.pending.pop_front() {
                if !c.is_whitespace() {
                    trace!("key {:?}", c);
                    return Ok(Some(c));
                }
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD and resolve to an unknown key
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}
