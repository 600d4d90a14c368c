//! Core data types and constants.
//!
//! This module contains the value types every other module is built from:
//!
//! - [`trigram::Trigram`]: three lines (0-7 ↔ ☷..☰)
//! - [`hexagram::Hexagram`]: six lines (0-63 ↔ ䷀..䷿ in King Wen order)
//! - [`sixiang::Sixiang`]: two-line figures (north/east/west/south)
//! - [`wuxing::Element`], [`wuxing::Transition`]: the five elements and their relations
//! - [`set::HexagramSet`]: 64-bit membership sets
//! - [`constants`]: line counts, masks, roots and glyph bases
//! - [`error::DomainError`]: the one error type of the crate

pub mod constants;
pub mod error;
pub mod hexagram;
pub mod set;
pub mod sixiang;
pub mod trigram;
pub mod wuxing;
