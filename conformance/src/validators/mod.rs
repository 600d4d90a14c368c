//! Validators, one module per area of the library.

pub mod genetic_code;
pub mod partitions;
pub mod sequences;
pub mod tables;
