//! Rendering of suite state into report text.
//!
//! All three renderers write into a caller-supplied [`TextBuffer`]; the
//! convenience methods on [`TestSuite`](crate::TestSuite) wrap them for
//! callers that just want a `String`.

use crate::buffer::TextBuffer;
use crate::case::TestCase;
use crate::suite::TestSuite;

/// Append the one-line record for a single executed case, and its indented
/// diagnostic when it failed. `index` is zero-based; the rendered line is
/// one-based.
pub fn write_case_result(buf: &mut TextBuffer, index: usize, case: &TestCase) {
    let verdict = if case.failed() { "FAIL" } else { "PASS" };
    buf.append_format(format_args!("{}: {:<35} {}\n", index + 1, case.name(), verdict));
    if case.failed() {
        buf.append_format(format_args!("\t{}\n", case.message().unwrap_or("")));
    }
}

/// Append the compact digest: one `.` per passing case and one `F` per
/// failing case, in run order, followed by a blank line.
pub fn write_summary(buf: &mut TextBuffer, suite: &TestSuite) {
    for case in suite.cases() {
        buf.append_char(if case.failed() { 'F' } else { '.' });
    }
    buf.append("\n\n");
}

/// Append the detailed result block: a one-line OK message when nothing
/// failed, otherwise the failure list with the run/pass/fail counts.
pub fn write_details(buf: &mut TextBuffer, suite: &TestSuite) {
    if suite.fail_count() == 0 {
        let pass_count = suite.len();
        let test_word = if pass_count == 1 { "test" } else { "tests" };
        buf.append_format(format_args!("OK ({pass_count} {test_word})\n"));
    } else {
        if suite.fail_count() == 1 {
            buf.append("There was 1 failure:\n");
        } else {
            buf.append_format(format_args!("There were {} failures:\n", suite.fail_count()));
        }

        for case in suite.cases() {
            if case.failed() {
                buf.append_format(format_args!(
                    "- {}: {}\n",
                    case.name(),
                    case.message().unwrap_or("")
                ));
            }
        }
        buf.append("\n!!!FAILURES!!!\n");

        buf.append_format(format_args!("Runs: {} ", suite.len()));
        buf.append_format(format_args!("Passes: {} ", suite.len() - suite.fail_count()));
        buf.append_format(format_args!("Fails: {}\n", suite.fail_count()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TestCase;
    use crate::signal::fail;

    fn passes(_case: &mut TestCase) {}

    fn boom(case: &mut TestCase) {
        fail(case, "boom");
    }

    fn ran_suite(functions: &[(&str, crate::TestFn)]) -> TestSuite {
        let mut suite = TestSuite::new();
        for (name, function) in functions {
            suite
                .add(TestCase::new(*name, *function))
                .expect("suite has room");
        }
        suite.run();
        suite
    }

    #[test]
    fn case_line_is_one_based_and_padded() {
        let mut case = TestCase::new("short", passes);
        case.run();
        let mut buf = TextBuffer::new();
        write_case_result(&mut buf, 0, &case);
        assert_eq!(buf.as_str(), format!("1: {:<35} PASS\n", "short"));
    }

    #[test]
    fn failed_case_line_carries_indented_message() {
        let mut case = TestCase::new("bad", boom);
        case.run();
        let mut buf = TextBuffer::new();
        write_case_result(&mut buf, 1, &case);
        assert_eq!(buf.as_str(), format!("2: {:<35} FAIL\n\tboom\n", "bad"));
    }

    #[test]
    fn summary_is_one_marker_per_case() {
        let suite = ran_suite(&[("a", passes), ("b", boom), ("c", passes)]);
        assert_eq!(suite.summary(), ".F.\n\n");
    }

    #[test]
    fn details_ok_singular_and_plural() {
        let one = ran_suite(&[("only", passes)]);
        assert_eq!(one.details(), "OK (1 test)\n");

        let two = ran_suite(&[("first", passes), ("second", passes)]);
        assert_eq!(two.details(), "OK (2 tests)\n");
    }

    #[test]
    fn details_single_failure_block() {
        let suite = ran_suite(&[("a", passes), ("b", boom), ("c", passes)]);
        assert_eq!(
            suite.details(),
            "There was 1 failure:\n- b: boom\n\n!!!FAILURES!!!\nRuns: 3 Passes: 2 Fails: 1\n"
        );
    }

    #[test]
    fn details_plural_failure_header() {
        let suite = ran_suite(&[("a", boom), ("b", boom)]);
        let details = suite.details();
        assert!(details.starts_with("There were 2 failures:\n"));
        assert!(details.ends_with("Runs: 2 Passes: 0 Fails: 2\n"));
    }
}
