//! Harness around `fmtconv-core`.
//!
//! This crate provides:
//! - Fixture sets: JSON-described operations with expected output
//! - A runner that executes fixtures against the library
//! - Structured JSONL logging of runs
//! - The interactive greeting and type-conversion demo programs

#![forbid(unsafe_code)]

pub mod args;
pub mod demo;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet, load_fixture_sets};
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
