//! Typed assertion helpers.
//!
//! Every helper reduces to the [`fail`](crate::signal::fail) primitive: the
//! comparison runs, and on mismatch a diagnostic of the form
//! `expected <E> but was <A>` (optionally prefixed with a caller message) is
//! recorded against the case before the failure signal aborts the test body.
//! Passing comparisons have no side effect.

use std::fmt;
use std::ptr;

use crate::buffer::TextBuffer;
use crate::case::TestCase;
use crate::signal;

fn fail_expectation(case: &mut TestCase, message: Option<&str>, body: fmt::Arguments<'_>) -> ! {
    let mut diagnostic = TextBuffer::new();
    if let Some(prefix) = message {
        diagnostic.append(prefix);
        diagnostic.append(": ");
    }
    diagnostic.append_format(body);
    signal::fail_with(case, diagnostic)
}

/// Fail with `message` unless `condition` holds.
pub fn assert_true(case: &mut TestCase, message: &str, condition: bool) {
    if condition {
        return;
    }
    signal::fail(case, message);
}

/// String equality; two absent strings are equal, and an absent string
/// renders as `NULL` in the diagnostic.
pub fn assert_str_eq(
    case: &mut TestCase,
    message: Option<&str>,
    expected: Option<&str>,
    actual: Option<&str>,
) {
    if expected == actual {
        return;
    }
    let mut diagnostic = TextBuffer::new();
    if let Some(prefix) = message {
        diagnostic.append(prefix);
        diagnostic.append(": ");
    }
    diagnostic.append("expected <");
    diagnostic.append_opt(expected);
    diagnostic.append("> but was <");
    diagnostic.append_opt(actual);
    diagnostic.append(">");
    signal::fail_with(case, diagnostic)
}

/// Integer equality.
pub fn assert_int_eq(case: &mut TestCase, message: Option<&str>, expected: i64, actual: i64) {
    if expected == actual {
        return;
    }
    fail_expectation(
        case,
        message,
        format_args!("expected <{expected}> but was <{actual}>"),
    )
}

/// Floating-point equality within `delta`.
pub fn assert_dbl_eq(
    case: &mut TestCase,
    message: Option<&str>,
    expected: f64,
    actual: f64,
    delta: f64,
) {
    if (expected - actual).abs() <= delta {
        return;
    }
    fail_expectation(
        case,
        message,
        format_args!("expected <{expected:.6}> but was <{actual:.6}>"),
    )
}

/// Identity equality: both references must point at the same object.
pub fn assert_ptr_eq<T>(case: &mut TestCase, message: Option<&str>, expected: &T, actual: &T) {
    if ptr::eq(expected, actual) {
        return;
    }
    fail_expectation(
        case,
        message,
        format_args!("expected pointer <{expected:p}> but was <{actual:p}>"),
    )
}

/// Element-wise integer slice equality; the first mismatching index is
/// reported. A length mismatch is its own diagnostic.
pub fn assert_int_array_eq(
    case: &mut TestCase,
    message: Option<&str>,
    expected: &[i64],
    actual: &[i64],
) {
    if expected.len() != actual.len() {
        fail_expectation(
            case,
            message,
            format_args!(
                "expected array of length <{}> but was <{}>",
                expected.len(),
                actual.len()
            ),
        )
    }
    for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            fail_expectation(
                case,
                message,
                format_args!("at index {index} expected <{e}> but was <{a}>"),
            )
        }
    }
}

/// Structural equality with a caller-supplied stringifier for diagnostics.
pub fn assert_struct_eq<T, F>(
    case: &mut TestCase,
    message: Option<&str>,
    expected: &T,
    actual: &T,
    render: F,
) where
    T: PartialEq,
    F: Fn(&T) -> String,
{
    if expected == actual {
        return;
    }
    fail_expectation(
        case,
        message,
        format_args!(
            "expected <{}> but was <{}>",
            render(expected),
            render(actual)
        ),
    )
}

/// Element-wise structural slice equality; the first mismatching index is
/// reported with the stringified elements.
pub fn assert_struct_array_eq<T, F>(
    case: &mut TestCase,
    message: Option<&str>,
    expected: &[T],
    actual: &[T],
    render: F,
) where
    T: PartialEq,
    F: Fn(&T) -> String,
{
    if expected.len() != actual.len() {
        fail_expectation(
            case,
            message,
            format_args!(
                "expected array of length <{}> but was <{}>",
                expected.len(),
                actual.len()
            ),
        )
    }
    for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            fail_expectation(
                case,
                message,
                format_args!(
                    "at array index {index} expected <{}> but was <{}>",
                    render(e),
                    render(a)
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TestFn;

    fn run_probe(function: TestFn) -> TestCase {
        let mut case = TestCase::new("probe", function);
        case.run();
        case
    }

    #[test]
    fn assert_true_passes_silently() {
        fn body(case: &mut TestCase) {
            assert_true(case, "should not appear", true);
        }
        let case = run_probe(body);
        assert!(!case.failed());
        assert_eq!(case.message(), None);
    }

    #[test]
    fn assert_true_fails_with_its_message() {
        fn body(case: &mut TestCase) {
            assert_true(case, "boom", false);
        }
        let case = run_probe(body);
        assert!(case.failed());
        assert_eq!(case.message(), Some("boom"));
    }

    #[test]
    fn failing_assertion_aborts_the_rest_of_the_body() {
        fn body(case: &mut TestCase) {
            assert_true(case, "first", false);
            assert_true(case, "unreachable", false);
        }
        let case = run_probe(body);
        assert_eq!(case.message(), Some("first"));
    }

    #[test]
    fn int_eq_mismatch_reports_both_values() {
        fn body(case: &mut TestCase) {
            assert_int_eq(case, None, 2, 3);
        }
        let case = run_probe(body);
        assert_eq!(case.message(), Some("expected <2> but was <3>"));
    }

    #[test]
    fn int_eq_prefix_is_rendered_before_the_body() {
        fn body(case: &mut TestCase) {
            assert_int_eq(case, Some("counter"), 2, 3);
        }
        let case = run_probe(body);
        assert_eq!(case.message(), Some("counter: expected <2> but was <3>"));
    }

    #[test]
    fn str_eq_handles_absent_strings() {
        fn both_absent(case: &mut TestCase) {
            assert_str_eq(case, None, None, None);
        }
        assert!(!run_probe(both_absent).failed());

        fn absent_actual(case: &mut TestCase) {
            assert_str_eq(case, None, Some("hello"), None);
        }
        let case = run_probe(absent_actual);
        assert_eq!(case.message(), Some("expected <hello> but was <NULL>"));
    }

    #[test]
    fn str_eq_equal_values_pass() {
        fn body(case: &mut TestCase) {
            assert_str_eq(case, None, Some("same"), Some("same"));
        }
        assert!(!run_probe(body).failed());
    }

    #[test]
    fn dbl_eq_respects_delta() {
        fn within(case: &mut TestCase) {
            assert_dbl_eq(case, None, 1.0, 1.05, 0.1);
        }
        assert!(!run_probe(within).failed());

        fn outside(case: &mut TestCase) {
            assert_dbl_eq(case, None, 1.0, 2.0, 0.1);
        }
        let case = run_probe(outside);
        assert_eq!(
            case.message(),
            Some("expected <1.000000> but was <2.000000>")
        );
    }

    #[test]
    fn ptr_eq_is_identity_not_value() {
        fn body(case: &mut TestCase) {
            let left = 7;
            let right = 7;
            assert_ptr_eq(case, None, &left, &left);
            assert_ptr_eq(case, None, &left, &right);
        }
        let case = run_probe(body);
        assert!(case.failed());
        let message = case.message().expect("diagnostic present");
        assert!(message.starts_with("expected pointer <0x"));
        assert!(message.contains("> but was <0x"));
    }

    #[test]
    fn int_array_eq_reports_first_mismatch() {
        fn body(case: &mut TestCase) {
            assert_int_array_eq(case, None, &[1, 2, 3], &[1, 9, 3]);
        }
        let case = run_probe(body);
        assert_eq!(case.message(), Some("at index 1 expected <2> but was <9>"));
    }

    #[test]
    fn int_array_eq_reports_length_mismatch() {
        fn body(case: &mut TestCase) {
            assert_int_array_eq(case, None, &[1, 2], &[1]);
        }
        let case = run_probe(body);
        assert_eq!(
            case.message(),
            Some("expected array of length <2> but was <1>")
        );
    }

    #[test]
    fn int_array_eq_equal_slices_pass() {
        fn body(case: &mut TestCase) {
            assert_int_array_eq(case, None, &[4, 5], &[4, 5]);
        }
        assert!(!run_probe(body).failed());
    }

    #[derive(PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn render_point(p: &Point) -> String {
        format!("({}, {})", p.x, p.y)
    }

    #[test]
    fn struct_eq_uses_the_stringifier_on_mismatch() {
        fn body(case: &mut TestCase) {
            let expected = Point { x: 1, y: 2 };
            let actual = Point { x: 1, y: 3 };
            assert_struct_eq(case, None, &expected, &actual, render_point);
        }
        let case = run_probe(body);
        assert_eq!(case.message(), Some("expected <(1, 2)> but was <(1, 3)>"));
    }

    #[test]
    fn struct_array_eq_reports_index_and_elements() {
        fn body(case: &mut TestCase) {
            let expected = [Point { x: 0, y: 0 }, Point { x: 1, y: 1 }];
            let actual = [Point { x: 0, y: 0 }, Point { x: 1, y: 9 }];
            assert_struct_array_eq(case, Some("grid"), &expected, &actual, render_point);
        }
        let case = run_probe(body);
        assert_eq!(
            case.message(),
            Some("grid: at array index 1 expected <(1, 1)> but was <(1, 9)>")
        );
    }
}
