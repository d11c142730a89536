//! # gs1-cli — GS1 Credential Command-Line Interface
//!
//! The `gs1vc` binary over plain JSON files.
//!
//! ## Subcommands
//!
//! - `parse-link`: parse a GS1 Digital Link and print the identifier
//! - `verify`: verify one credential and the chain above it
//! - `verify-presentation`: verify every credential in a presentation
//!
//! Reports are written to stdout as JSON; logs go to stderr.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to the `gs1-*` crates; no rules live here.

pub mod link;
pub mod loader;
pub mod logging;
pub mod verify;
