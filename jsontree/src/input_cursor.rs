// SPDX-License-Identifier: Apache-2.0

/// Whitespace accepted between any two grammatical tokens: space, horizontal
/// tab, line feed, vertical tab, form feed, carriage return.
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// A cursor over the input bytes with the current parsing position.
/// The input is only ever read; nothing is retained from it after parsing.
#[derive(Debug)]
pub(crate) struct InputCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The byte at the current position, if any. Does not advance.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub(crate) fn advance(&mut self) {
        self.advance_by(1);
    }

    pub(crate) fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Everything from the current position to the end of the input.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }
}
