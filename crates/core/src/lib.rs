//! Functional core for the ranking backend.
//!
//! Everything in this crate is free of network I/O: domain types, validation,
//! the single-table key codec and record model, repository traits and the
//! use cases that sit on top of them. Storage backends and the HTTP server
//! live in the `ranking` binary crate.

pub mod files;
pub mod ranking;
pub mod storage;
pub mod usecase;
