//! String walk execution
//!
//! This module provides the walk itself:
//! - [`engine`]: [`engine::Walker`], its steps and the printed header
//! - [`errors`]: Walk error types
//! - [`constants`]: The built-in literal and segment layout

pub mod constants;
pub mod engine;
pub mod errors;
