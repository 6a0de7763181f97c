//! The framework's own test suite, written with the framework.
//!
//! These cases exercise the buffer, the failure-capture engine, the
//! expected-failure combinator, and the reporters from the outside, exactly
//! the way consumer test code does. The `harness` binary runs them, and the
//! integration tests assert that every case passes.

use crucible_core::{
    SuiteError, TestCase, TestSuite, TextBuffer, assert_int_eq, assert_str_eq, assert_true, check,
    expect_failure, fail,
};

fn buffer_append_roundtrip(case: &mut TestCase) {
    let mut buf = TextBuffer::new();
    buf.append("hello");
    buf.append(" world");
    assert_str_eq(case, None, Some("hello world"), Some(buf.as_str()));
    assert_int_eq(case, None, 11, buf.len() as i64);
}

fn buffer_growth_preserves_content(case: &mut TestCase) {
    let mut buf = TextBuffer::new();
    let chunk = "0123456789".repeat(10);
    for _ in 0..4 {
        buf.append(&chunk);
    }
    assert_int_eq(case, Some("length after growth"), 400, buf.len() as i64);
    assert_true(
        case,
        "content survives reallocation",
        buf.as_str() == chunk.repeat(4),
    );
    assert_true(case, "terminator slot reserved", buf.len() < buf.capacity());
}

fn buffer_insert_clamps_and_prepends(case: &mut TestCase) {
    let mut buf = TextBuffer::new();
    buf.append("body");
    buf.insert("pre-", 0);
    buf.insert("!", 999);
    assert_str_eq(case, None, Some("pre-body!"), Some(buf.as_str()));
}

fn buffer_absent_text_renders_null(case: &mut TestCase) {
    let mut buf = TextBuffer::new();
    buf.append_opt(None);
    assert_str_eq(case, None, Some("NULL"), Some(buf.as_str()));
}

fn probe_passes(_case: &mut TestCase) {}

fn probe_boom(case: &mut TestCase) {
    fail(case, "boom");
}

fn passing_case_records_no_failure(case: &mut TestCase) {
    let mut probe = TestCase::new("probe", probe_passes);
    probe.run();
    assert_true(case, "probe ran", probe.ran());
    assert_true(case, "probe did not fail", !probe.failed());
    assert_true(case, "no diagnostic stored", probe.message().is_none());
}

fn failing_case_is_captured_with_message(case: &mut TestCase) {
    let mut probe = TestCase::new("probe", probe_boom);
    probe.run();
    assert_true(case, "probe failed", probe.failed());
    assert_str_eq(case, None, Some("boom"), probe.message());
}

fn expected_failure_is_swallowed(case: &mut TestCase) {
    expect_failure(case, || check(false));
}

fn missing_expected_failure_is_reported(case: &mut TestCase) {
    fn in_vain(case: &mut TestCase) {
        expect_failure(case, || check(true));
    }
    let mut probe = TestCase::new("probe", in_vain);
    probe.run();
    assert_true(case, "probe failed", probe.failed());
    assert_str_eq(
        case,
        None,
        Some("expected assertion failure but didn't get one"),
        probe.message(),
    );
}

fn suite_merge_preserves_order(case: &mut TestCase) {
    let mut target = TestSuite::new();
    assert_true(
        case,
        "register target case",
        target.add(TestCase::new("a", probe_passes)).is_ok(),
    );

    let mut donor = TestSuite::new();
    assert_true(
        case,
        "register donor cases",
        donor.add(TestCase::new("b", probe_passes)).is_ok()
            && donor.add(TestCase::new("c", probe_boom)).is_ok(),
    );

    assert_true(case, "merge fits", target.add_suite(donor).is_ok());
    target.run();

    assert_int_eq(case, Some("merged size"), 3, target.len() as i64);
    assert_int_eq(case, Some("fail count"), 1, target.fail_count() as i64);
    assert_str_eq(case, None, Some("b"), Some(target.cases()[1].name()));
    assert_str_eq(case, None, Some("..F\n\n"), Some(target.summary().as_str()));
}

fn capacity_violation_is_surfaced(case: &mut TestCase) {
    let mut bounded = TestSuite::with_max_cases(1);
    assert_true(
        case,
        "first registration fits",
        bounded.add(TestCase::new("only", probe_passes)).is_ok(),
    );
    let rejected = bounded.add(TestCase::new("overflow", probe_passes));
    assert_true(
        case,
        "second registration is rejected",
        rejected == Err(SuiteError::CapacityExceeded { limit: 1 }),
    );
}

fn details_reports_the_failing_case(case: &mut TestCase) {
    let mut inner = TestSuite::new();
    assert_true(
        case,
        "register inner cases",
        inner.add(TestCase::new("good", probe_passes)).is_ok()
            && inner.add(TestCase::new("bad", probe_boom)).is_ok(),
    );
    inner.run();
    assert_str_eq(
        case,
        None,
        Some("There was 1 failure:\n- bad: boom\n\n!!!FAILURES!!!\nRuns: 2 Passes: 1 Fails: 1\n"),
        Some(inner.details().as_str()),
    );
}

/// Build the full self-test suite.
pub fn suite() -> Result<TestSuite, SuiteError> {
    let mut suite = TestSuite::new();
    suite.add(TestCase::new(
        "buffer_append_roundtrip",
        buffer_append_roundtrip,
    ))?;
    suite.add(TestCase::new(
        "buffer_growth_preserves_content",
        buffer_growth_preserves_content,
    ))?;
    suite.add(TestCase::new(
        "buffer_insert_clamps_and_prepends",
        buffer_insert_clamps_and_prepends,
    ))?;
    suite.add(TestCase::new(
        "buffer_absent_text_renders_null",
        buffer_absent_text_renders_null,
    ))?;
    suite.add(TestCase::new(
        "passing_case_records_no_failure",
        passing_case_records_no_failure,
    ))?;
    suite.add(TestCase::new(
        "failing_case_is_captured_with_message",
        failing_case_is_captured_with_message,
    ))?;
    suite.add(TestCase::new(
        "expected_failure_is_swallowed",
        expected_failure_is_swallowed,
    ))?;
    suite.add(TestCase::new(
        "missing_expected_failure_is_reported",
        missing_expected_failure_is_reported,
    ))?;
    suite.add(TestCase::new(
        "suite_merge_preserves_order",
        suite_merge_preserves_order,
    ))?;
    suite.add(TestCase::new(
        "capacity_violation_is_surfaced",
        capacity_violation_is_surfaced,
    ))?;
    suite.add(TestCase::new(
        "details_reports_the_failing_case",
        details_reports_the_failing_case,
    ))?;
    Ok(suite)
}
