//! Core engine for the crucible unit-testing micro-framework.
//!
//! This crate provides:
//! - [`TextBuffer`]: growable text buffer used for diagnostics and reports
//! - [`signal`]: the failure signal that aborts a failing test without
//!   terminating the run, plus the expected-failure combinator
//! - [`TestCase`] / [`TestSuite`]: registration and sequential execution
//! - [`report`]: per-case, summary, and details rendering
//! - [`assert`]: the typed assertion surface consumed by test bodies

#![forbid(unsafe_code)]

pub mod assert;
pub mod buffer;
pub mod case;
pub mod error;
pub mod report;
pub mod signal;
pub mod suite;

pub use assert::{
    assert_dbl_eq, assert_int_array_eq, assert_int_eq, assert_ptr_eq, assert_str_eq,
    assert_struct_array_eq, assert_struct_eq, assert_true,
};
pub use buffer::TextBuffer;
pub use case::{TestCase, TestFn};
pub use error::SuiteError;
pub use signal::{check, expect_failure, fail};
pub use suite::TestSuite;
