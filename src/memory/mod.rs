//! Memory model for the string walker
//!
//! This module provides the pieces a C-style string walk needs, without any
//! raw pointers:
//! - [`value`]: Displayable values for the diagnostic header, including an
//!   explicit `Uninitialized` marker
//! - [`rodata`]: A read-only segment holding NUL-terminated literals at
//!   synthetic addresses
//! - [`cursor`]: A bounded cursor that walks one literal character by character
//!
//! # Pointer Arithmetic
//!
//! Addresses are plain `u64` values. Arithmetic is scaled by element size and
//! checked, so an out-of-range offset yields `None` instead of wrapping:
//! ```text
//! ptr + n  →  ptr + (n * elem_size)
//! ```

pub mod cursor;
pub mod rodata;
pub mod value;

use value::Address;

/// Perform pointer arithmetic: addr + offset (scaled by element size)
pub fn pointer_add(addr: Address, offset: i64, elem_size: usize) -> Option<Address> {
    let byte_offset = offset.checked_mul(i64::try_from(elem_size).ok()?)?;
    addr.checked_add_signed(byte_offset)
}

/// Round an address up to the next multiple of `align`
pub fn align_up(addr: Address, align: u64) -> Option<Address> {
    if align == 0 {
        return Some(addr);
    }
    let rem = addr % align;
    if rem == 0 {
        Some(addr)
    } else {
        addr.checked_add(align - rem)
    }
}
