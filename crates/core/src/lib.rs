//! Domain logic for the NPC (New Personal Computer) parts store.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! catalog types, the build-wizard session, currency formatting, and the
//! build-sheet export rows.

pub mod builder;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod export;
pub mod roles;
pub mod types;
