//! georoute CLI library.
//!
//! This crate provides the output formatting used by the `georoute` binary.

pub mod output;
