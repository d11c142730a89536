//! # gs1-core — Foundational Types for GS1 Credential Validation
//!
//! This crate is the leaf of the workspace DAG. It defines the error
//! hierarchy shared by every other crate and the UTC-only `Timestamp`
//! used when evaluating credential validity windows.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gs1-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod temporal;

pub use error::{Gs1Error, TimestampError};
pub use temporal::Timestamp;
