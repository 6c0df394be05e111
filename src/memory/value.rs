//! Values shown in the diagnostic header
//!
//! The header prints the same four things the walk is built from: the
//! terminator suffix, the cursor before it was ever assigned, the length and
//! the literal. [`Value::Uninitialized`] stands in for the unassigned cursor.
//! It renders as a fixed placeholder and never exposes whatever a real
//! uninitialized pointer would hold.

use crate::output::format::display_text;
use crate::walker::constants::UNSET_PLACEHOLDER;
use std::fmt;

/// Memory address type (64-bit)
pub type Address = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    Int(i64),
    Str(String),
    #[default]
    Uninitialized,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(&display_text(s)),
            Value::Uninitialized => f.write_str(UNSET_PLACEHOLDER),
        }
    }
}
