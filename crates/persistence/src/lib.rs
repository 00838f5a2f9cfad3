// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Santify.
//!
//! A run's result is stored as a single self-contained JSON file next to
//! its metadata (seed, year, budget, group name, run id). Receiver names may
//! be encrypted with a key generated for that run; the key is stored in the
//! same file.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cipher;
mod error;
mod record;

#[cfg(test)]
mod tests;

pub use cipher::NameCipher;
pub use error::PersistenceError;
pub use record::{MappingRecord, read_mapping, write_mapping};
