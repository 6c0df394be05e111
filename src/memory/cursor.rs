//! Character cursor over an interned literal
//!
//! A [`Cursor`] is the safe counterpart of `for (p = s; p < q; p++)`: it
//! starts at the literal's base, moves one character per step and stops at
//! the terminator. It never reads the terminator as a character.

use super::rodata::Literal;
use super::value::Address;

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    literal: &'a Literal,
    offset: usize,   // byte offset from the literal's base
    position: usize, // characters consumed so far
}

impl<'a> Cursor<'a> {
    pub fn new(literal: &'a Literal) -> Self {
        Cursor {
            literal,
            offset: 0,
            position: 0,
        }
    }

    /// Index of the current character, counted from the start
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn address(&self) -> Address {
        self.literal.base() + self.offset as Address
    }

    /// The character under the cursor, `None` at the terminator
    pub fn current(&self) -> Option<char> {
        self.suffix().chars().next()
    }

    /// The rest of the literal from the cursor on
    pub fn suffix(&self) -> &'a str {
        self.literal.text().get(self.offset..).unwrap_or("")
    }

    /// Characters left before the terminator
    pub fn remaining(&self) -> usize {
        self.literal.char_len() - self.position
    }

    /// Step past the current character; returns false at the terminator
    pub fn advance(&mut self) -> bool {
        match self.current() {
            Some(c) => {
                self.offset += c.len_utf8();
                self.position += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::rodata::Rodata;

    #[test]
    fn test_walks_to_terminator() {
        let mut rodata = Rodata::new();
        let base = rodata.intern("Hello").unwrap();
        let mut cursor = super::Cursor::new(rodata.get(base).unwrap());

        let mut seen = Vec::new();
        while let Some(c) = cursor.current() {
            seen.push((c, cursor.suffix(), cursor.remaining()));
            assert!(cursor.advance());
        }

        assert_eq!(
            seen,
            vec![
                ('H', "Hello", 5),
                ('e', "ello", 4),
                ('l', "llo", 3),
                ('l', "lo", 2),
                ('o', "o", 1),
            ]
        );
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.suffix(), "");
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.address(), base + 5);
        assert!(!cursor.advance());
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_multibyte_characters_advance_by_width() {
        let mut rodata = Rodata::new();
        let base = rodata.intern("aé b").unwrap();
        let mut cursor = super::Cursor::new(rodata.get(base).unwrap());

        cursor.advance();
        assert_eq!(cursor.current(), Some('é'));
        assert_eq!(cursor.address(), base + 1);
        cursor.advance();
        assert_eq!(cursor.address(), base + 3);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.suffix(), " b");
    }
}
