//! Command-line surface for Journal Guru.

pub mod cli;
