//! Common utilities for Karta.
//!
//! This crate provides foundational types used across all Karta crates:
//!
//! - [`BinaryReader`] - Zero-copy binary reading from byte slices
//! - [`crc`] - PNG CRC-32 hashing utilities

mod error;
mod reader;

pub mod crc;

pub use error::{Error, Result};
pub use reader::BinaryReader;
