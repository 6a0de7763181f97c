//! Run tooling for the crucible test framework.
//!
//! This crate provides:
//! - [`structured_log`]: JSONL run-log records with schema validation
//! - [`selftest`]: the framework's own test suite, built with the framework
//! - the `harness` binary: runs the self-test suite and reports results

#![forbid(unsafe_code)]

pub mod selftest;
pub mod structured_log;
