//! Error types for the string walker
//!
//! [`WalkError`] covers everything that can stop a walk: building the
//! read-only segment, resolving addresses inside it, and writing lines to the
//! terminal. None of these fire for the built-in pangram; they exist so a
//! substituted literal or a closed stdout fails cleanly instead of panicking.

use crate::memory::value::Address;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    /// The literal contains a NUL byte, so a C string would end early
    #[error("literal contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },

    /// Address does not fall inside any interned literal (terminator included)
    #[error("address 0x{address:08x} is not mapped")]
    UnmappedAddress { address: Address },

    /// Address points into the middle of a multi-byte character
    #[error("address 0x{address:08x} is not on a character boundary")]
    NotCharBoundary { address: Address },

    /// Interning would run past the end of the address space
    #[error("read-only segment address overflow")]
    AddressOverflow,

    /// Writing a line to the terminal failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
