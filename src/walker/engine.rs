//! The traversal printer
//!
//! [`Walker`] interns a literal into a [`Rodata`] segment and walks it with a
//! [`Cursor`], one character per step. [`Walker::run`] prints the diagnostic
//! header followed by one line per character.
//!
//! The header shows what a C version of this walk would print before its
//! loop: the string at the terminator, the cursor before assignment, the
//! length and the string. The first is taken as a bounded slice at the
//! terminator (always empty) and the second is [`Value::Uninitialized`], so
//! neither reads memory it shouldn't.

use crate::checksum::Crc32;
use crate::memory::cursor::Cursor;
use crate::memory::rodata::{Literal, Rodata};
use crate::memory::value::{Address, Value};
use crate::output::format::{header_line, step_line};
use crate::output::Terminal;
use crate::walker::errors::WalkError;

/// The values printed once, before the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub end: Value,
    pub cursor: Value,
    pub length: Value,
    pub text: Value,
}

/// What the cursor sees at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub cursor: usize,
    pub address: Address,
    pub code: u32,
    pub glyph: char,
    pub suffix: &'a str,
}

/// Totals for a finished walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub length: usize,
    pub checksum: u32,
}

/// Iterator over every character position of a literal
pub struct Steps<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Step<'a>> {
        let glyph = self.cursor.current()?;
        let step = Step {
            cursor: self.cursor.position(),
            address: self.cursor.address(),
            code: u32::from(glyph),
            glyph,
            suffix: self.cursor.suffix(),
        };
        self.cursor.advance();
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps<'_> {}

pub struct Walker {
    rodata: Rodata,
    base: Address,
}

impl Walker {
    pub fn new(text: &str) -> Result<Self, WalkError> {
        let mut rodata = Rodata::new();
        let base = rodata.intern(text)?;
        Ok(Walker { rodata, base })
    }

    /// Address the literal was interned at
    pub fn base(&self) -> Address {
        self.base
    }

    pub fn literal(&self) -> Result<&Literal, WalkError> {
        self.rodata.get(self.base)
    }

    /// Number of characters in the literal
    pub fn length(&self) -> Result<usize, WalkError> {
        Ok(self.literal()?.char_len())
    }

    pub fn header(&self) -> Result<Header, WalkError> {
        let literal = self.literal()?;
        let end = self.rodata.c_str(literal.end())?;
        let length = i64::try_from(literal.char_len())
            .map_err(|_| WalkError::AddressOverflow)?;
        Ok(Header {
            end: Value::Str(end.to_string()),
            cursor: Value::Uninitialized,
            length: Value::Int(length),
            text: Value::Str(literal.text().to_string()),
        })
    }

    pub fn steps(&self) -> Result<Steps<'_>, WalkError> {
        Ok(Steps {
            cursor: Cursor::new(self.literal()?),
        })
    }

    /// Print the header and every step, then return the walk's totals
    pub fn run<T: Terminal>(&self, terminal: &mut T) -> Result<Summary, WalkError> {
        terminal.emit(header_line(&self.header()?))?;

        let mut crc = Crc32::new();
        let mut steps = 0;
        let mut utf8 = [0u8; 4];
        for step in self.steps()? {
            crc.update(step.glyph.encode_utf8(&mut utf8).as_bytes());
            terminal.emit(step_line(&step))?;
            steps += 1;
        }
        terminal.flush()?;

        Ok(Summary {
            steps,
            length: self.length()?,
            checksum: crc.finish(),
        })
    }
}
