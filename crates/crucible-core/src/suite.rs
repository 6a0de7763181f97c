//! Ordered suites of test cases: registration, execution, aggregation.

use crate::buffer::TextBuffer;
use crate::case::TestCase;
use crate::error::SuiteError;
use crate::report;

/// Default upper bound on registered cases per suite.
pub const MAX_TEST_CASES: usize = 1024;

/// An ordered, owning collection of test cases executed together.
///
/// Insertion order is the run order and the report order. The case limit is
/// bounded-resource behavior retained from the original design; exceeding it
/// fails the registration call, never silently drops a case.
#[derive(Debug)]
pub struct TestSuite {
    cases: Vec<TestCase>,
    fail_count: usize,
    max_cases: usize,
}

impl TestSuite {
    /// Create an empty suite with the default case limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_cases(MAX_TEST_CASES)
    }

    /// Create an empty suite with a caller-chosen case limit.
    #[must_use]
    pub fn with_max_cases(max_cases: usize) -> Self {
        Self {
            cases: Vec::new(),
            fail_count: 0,
            max_cases,
        }
    }

    /// Registered cases, in insertion order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of registered cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when no case has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Count of failing cases as of the most recent [`run`](Self::run).
    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    /// Append one case.
    pub fn add(&mut self, case: TestCase) -> Result<(), SuiteError> {
        if self.cases.len() >= self.max_cases {
            return Err(SuiteError::CapacityExceeded {
                limit: self.max_cases,
            });
        }
        self.cases.push(case);
        Ok(())
    }

    /// Append every case of `other`, preserving its internal order.
    ///
    /// Takes ownership of the donor suite; its cases are re-parented into
    /// `self`. The capacity check happens up front, so a rejected merge
    /// leaves `self` unchanged.
    pub fn add_suite(&mut self, other: TestSuite) -> Result<(), SuiteError> {
        if self.cases.len() + other.cases.len() > self.max_cases {
            return Err(SuiteError::CapacityExceeded {
                limit: self.max_cases,
            });
        }
        self.cases.extend(other.cases);
        Ok(())
    }

    /// Run every case in insertion order and emit the per-case report to
    /// standard output.
    ///
    /// The report buffer is also returned for callers who want the text.
    /// `fail_count` is rebuilt from zero, so repeated runs stay consistent;
    /// each case rechecks its own outcome on re-execution.
    pub fn run(&mut self) -> TextBuffer {
        let mut fail_count = 0;
        let mut output = TextBuffer::new();
        for (index, case) in self.cases.iter_mut().enumerate() {
            case.run();
            report::write_case_result(&mut output, index, case);
            if case.failed() {
                fail_count += 1;
            }
        }
        self.fail_count = fail_count;
        println!("{output}");
        output
    }

    /// Compact pass/fail digest; see [`report::write_summary`].
    #[must_use]
    pub fn summary(&self) -> String {
        let mut buf = TextBuffer::new();
        report::write_summary(&mut buf, self);
        buf.as_str().to_string()
    }

    /// Detailed result block; see [`report::write_details`].
    #[must_use]
    pub fn details(&self) -> String {
        let mut buf = TextBuffer::new();
        report::write_details(&mut buf, self);
        buf.as_str().to_string()
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}
