//! Foundation types for termfolio.
//!
//! This crate contains the platform-agnostic types shared by the shell
//! engine and its display adapters: key events, configuration, and error
//! types.

pub mod config;
pub mod error;
pub mod input;
