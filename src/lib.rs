//! # Introduction
//!
//! strwalk walks a NUL-terminated string literal one character at a time and
//! prints what a C `char *` cursor would see at each step: the character's
//! code, the character itself and the rest of the string.
//!
//! ## Pipeline
//!
//! ```text
//! Literal → Rodata → Cursor → Steps → Lines → Terminal
//! ```
//!
//! 1. [`memory`] — the literal is interned into a read-only segment at a
//!    synthetic address, and a bounded [`memory::cursor::Cursor`] walks it.
//! 2. [`walker`] — [`walker::engine::Walker`] produces the header and one
//!    [`walker::engine::Step`] per character, checksumming octets as it goes.
//! 3. [`output`] — steps become styled lines, written to stdout or captured
//!    by [`output::MockTerminal`].
//! 4. [`checksum`] — CRC-32 over walked octets and sealed messages.
//!
//! ## Output
//!
//! ```text
//! Q: \tP: n/a\tLEN: 43\tS: The quick brown fox jumps over the lazy dog
//! OCTET: 84\t*P: T\t\tP: The quick brown fox jumps over the lazy dog
//! ...
//! OCTET: 103\t*P: g\t\tP: g
//! ```

pub mod checksum;
pub mod memory;
pub mod output;
pub mod walker;
