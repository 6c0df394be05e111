//! Read-only data segment for string literals
//!
//! This module provides the storage a C program would give a string literal:
//! - Each literal is interned at its own synthetic base address
//! - Each literal's address range includes its NUL terminator, which is
//!   mapped but never handed out as a character
//! - Every read is bounds checked against the literal that owns the address
//!
//! Reading at the terminator address yields an empty string rather than
//! looking past the buffer.

use super::value::Address;
use super::{align_up, pointer_add};
use crate::walker::constants::{RODATA_ADDRESS_START, RODATA_ALIGN};
use crate::walker::errors::WalkError;
use rustc_hash::FxHashMap;

/// A NUL-terminated literal stored in the segment
#[derive(Debug, Clone)]
pub struct Literal {
    base: Address,
    text: String,
    char_len: usize,
}

impl Literal {
    fn new(base: Address, text: &str) -> Self {
        Literal {
            base,
            text: text.to_string(),
            char_len: text.chars().count(),
        }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes, excluding the terminator (what `strlen` reports)
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Length in characters, counted once when the literal is interned
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Address of the NUL terminator
    pub fn end(&self) -> Address {
        self.base + self.byte_len() as Address
    }

    /// Whether `addr` is inside this literal, terminator included
    pub fn contains(&self, addr: Address) -> bool {
        addr >= self.base && addr <= self.end()
    }

    fn offset_of(&self, addr: Address) -> Option<usize> {
        if self.contains(addr) {
            usize::try_from(addr - self.base).ok()
        } else {
            None
        }
    }

    /// The remaining string from `addr` up to (not including) the terminator
    fn suffix_at(&self, addr: Address) -> Result<&str, WalkError> {
        let offset = self
            .offset_of(addr)
            .ok_or(WalkError::UnmappedAddress { address: addr })?;
        self.text
            .get(offset..)
            .ok_or(WalkError::NotCharBoundary { address: addr })
    }
}

/// The read-only segment
#[derive(Debug, Clone)]
pub struct Rodata {
    literals: FxHashMap<Address, Literal>,
    next_address: Address,
}

impl Rodata {
    pub fn new() -> Self {
        Rodata {
            literals: FxHashMap::default(),
            next_address: RODATA_ADDRESS_START,
        }
    }

    /// Store a literal and return its base address
    pub fn intern(&mut self, text: &str) -> Result<Address, WalkError> {
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(WalkError::InteriorNul { position });
        }

        let base = self.next_address;
        let size = i64::try_from(text.len() + 1).map_err(|_| WalkError::AddressOverflow)?;
        let next = pointer_add(base, size, 1)
            .and_then(|addr| align_up(addr, RODATA_ALIGN))
            .ok_or(WalkError::AddressOverflow)?;

        self.literals.insert(base, Literal::new(base, text));
        self.next_address = next;
        Ok(base)
    }

    /// Look up a literal by its base address
    pub fn get(&self, base: Address) -> Result<&Literal, WalkError> {
        self.literals
            .get(&base)
            .ok_or(WalkError::UnmappedAddress { address: base })
    }

    /// Find the literal that owns `addr`
    pub fn find(&self, addr: Address) -> Result<&Literal, WalkError> {
        self.literals
            .values()
            .find(|lit| lit.contains(addr))
            .ok_or(WalkError::UnmappedAddress { address: addr })
    }

    /// The C string starting at `addr`
    pub fn c_str(&self, addr: Address) -> Result<&str, WalkError> {
        self.find(addr)?.suffix_at(addr)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Default for Rodata {
    fn default() -> Self {
        Self::new()
    }
}
