//! A cursor over the bytes of a trimmed input string.
//!
//! Every pattern in the format matrix is a run of fixed-width digit
//! fields and single-byte separators, so there’s never any need to
//! backtrack: each rule gets a fresh scanner and either walks all the way
//! to the end of the input, or gives up.

/// Whether the byte is the sort of whitespace that may surround a value
/// or sit between its date and time.
pub(crate) fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}


#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos:   usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input: input.as_bytes(), pos: 0 }
    }

    /// Whether the whole of the input has been consumed.
    pub fn is_done(&self) -> bool {
        self.pos == self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// How many bytes have been consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes that haven’t been consumed yet.
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos ..]
    }

    /// Consumes the given string if it comes next, exactly.
    pub fn eat_str(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word.as_bytes()) {
            self.pos += word.len();
            true
        }
        else {
            false
        }
    }

    /// Consumes the given string if it comes next, ignoring ASCII case.
    pub fn eat_ignoring_case(&mut self, word: &str) -> bool {
        match self.rest().get(.. word.len()) {
            Some(next) if next.eq_ignore_ascii_case(word.as_bytes()) => {
                self.pos += word.len();
                true
            }
            _ => false,
        }
    }

    /// Consumes the given byte if it’s next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        }
        else {
            false
        }
    }

    /// Consumes bytes for as long as they match, returning how many there
    /// were.
    pub fn skip_while<F>(&mut self, predicate: F) -> usize
    where F: Fn(u8) -> bool
    {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !predicate(byte) { break }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Reads between `min` and `max` ASCII digits, taking as many as it
    /// can, and returns their value.
    pub fn digits(&mut self, min: usize, max: usize) -> Option<i64> {
        let start = self.pos;
        let mut value: i64 = 0;

        while self.pos - start < max {
            match self.peek() {
                Some(byte @ b'0' ..= b'9') => {
                    value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
                    self.pos += 1;
                }
                _ => break,
            }
        }

        if self.pos - start >= min { Some(value) } else { None }
    }

    /// Reads a four-digit year with an optional leading minus sign.
    pub fn year(&mut self) -> Option<i64> {
        let negative = self.eat(b'-');
        let year = self.digits(4, 4)?;
        Some(if negative { -year } else { year })
    }
}
