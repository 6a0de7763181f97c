//! Failure signalling and recovery points.
//!
//! An assertion that fails deep inside a test body must abort the rest of
//! that body without ending the whole run. The signal is a dedicated panic
//! payload raised by the failing primitive and caught at exactly one of two
//! recovery points: the per-test boundary installed by
//! [`TestCase::run`](crate::TestCase::run), or the expected-failure boundary
//! installed by [`expect_failure`]. A thread-local flag records which kind of
//! recovery point is armed, so a signal raised outside [`expect_failure`]
//! surfaces as a test failure while one raised inside it counts as the
//! expected outcome.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use crate::buffer::TextBuffer;
use crate::case::TestCase;

thread_local! {
    static EXPECTING_FAILURE: Cell<bool> = const { Cell::new(false) };
}

/// Panic payload identifying a framework failure signal.
///
/// `expected` is captured at raise time from the thread-local flag.
pub(crate) struct FailureSignal {
    pub(crate) expected: bool,
}

/// Arms the expecting-failure flag for a lexical scope; the previous value is
/// restored on drop, including during unwinding, so the flag never leaks
/// across tests.
struct ExpectGuard {
    previous: bool,
}

impl ExpectGuard {
    fn arm() -> Self {
        let previous = EXPECTING_FAILURE.replace(true);
        Self { previous }
    }
}

impl Drop for ExpectGuard {
    fn drop(&mut self) {
        EXPECTING_FAILURE.set(self.previous);
    }
}

fn raise() -> ! {
    let expected = EXPECTING_FAILURE.get();
    panic::panic_any(FailureSignal { expected })
}

/// Record a failure against `case` and abort the current test body.
///
/// The case is always marked failed and `message` overwrites any previously
/// stored diagnostic; the last failure before the transfer wins.
pub fn fail(case: &mut TestCase, message: &str) -> ! {
    let mut diagnostic = TextBuffer::new();
    diagnostic.append(message);
    fail_with(case, diagnostic)
}

/// As [`fail`], taking an already-built diagnostic buffer.
pub(crate) fn fail_with(case: &mut TestCase, message: TextBuffer) -> ! {
    case.record_failure(message);
    raise()
}

/// Bare assertion primitive: raises a failure signal when `condition` is
/// false without touching any test case. Outside [`expect_failure`] the
/// enclosing [`TestCase::run`](crate::TestCase::run) records the synthetic
/// "unexpected assertion fail" diagnostic.
pub fn check(condition: bool) {
    if !condition {
        raise();
    }
}

/// Run `action` expecting it to raise a failure signal.
///
/// If the action completes without signalling, that absence is itself a
/// failure of the enclosing test. A signal raised while the expected-failure
/// recovery point is armed is swallowed; any other panic is re-raised toward
/// the enclosing boundary.
pub fn expect_failure<F>(case: &mut TestCase, action: F)
where
    F: FnOnce(),
{
    let guard = ExpectGuard::arm();
    let outcome = panic::catch_unwind(AssertUnwindSafe(action));
    drop(guard);
    match outcome {
        Ok(()) => fail(case, "expected assertion failure but didn't get one"),
        Err(payload) => match payload.downcast::<FailureSignal>() {
            Ok(signal) if signal.expected => {}
            Ok(signal) => panic::resume_unwind(signal),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::TestCase;

    #[test]
    fn check_true_does_not_signal() {
        check(true);
    }

    #[test]
    fn check_false_raises_a_signal_payload() {
        let outcome = panic::catch_unwind(|| check(false));
        let payload = outcome.expect_err("check(false) should signal");
        let signal = payload
            .downcast_ref::<FailureSignal>()
            .expect("payload should be a failure signal");
        assert!(!signal.expected);
    }

    #[test]
    fn fail_marks_case_and_signals() {
        let mut case = TestCase::new("probe", |_| {});
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| fail(&mut case, "boom")));
        assert!(outcome.is_err());
        assert!(case.failed());
        assert_eq!(case.message(), Some("boom"));
    }

    #[test]
    fn expect_failure_swallows_an_expected_signal() {
        let mut case = TestCase::new("probe", |_| {});
        expect_failure(&mut case, || check(false));
        assert!(!case.failed());
        assert_eq!(case.message(), None);
    }

    #[test]
    fn expect_failure_without_signal_fails_enclosing_case() {
        let mut case = TestCase::new("probe", |_| {});
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| expect_failure(&mut case, || check(true))));
        assert!(outcome.is_err(), "the absence should signal outward");
        assert!(case.failed());
        assert_eq!(
            case.message(),
            Some("expected assertion failure but didn't get one")
        );
    }

    #[test]
    fn expect_failure_reraises_foreign_panics() {
        let mut case = TestCase::new("probe", |_| {});
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            expect_failure(&mut case, || panic!("not a signal"));
        }));
        let payload = outcome.expect_err("foreign panic should propagate");
        assert!(payload.downcast_ref::<FailureSignal>().is_none());
        assert!(!case.failed());
    }

    #[test]
    fn expecting_flag_resets_after_expect_failure() {
        let mut case = TestCase::new("probe", |_| {});
        expect_failure(&mut case, || check(false));
        // A signal raised now must carry expected = false again.
        let outcome = panic::catch_unwind(|| check(false));
        let payload = outcome.expect_err("check(false) should signal");
        let signal = payload
            .downcast_ref::<FailureSignal>()
            .expect("payload should be a failure signal");
        assert!(!signal.expected);
    }

    #[test]
    fn expect_failure_nests() {
        let mut case = TestCase::new("probe", |_| {});
        expect_failure(&mut case, || {
            let mut inner = TestCase::new("inner", |_| {});
            expect_failure(&mut inner, || check(false));
            assert!(!inner.failed());
            check(false);
        });
        assert!(!case.failed());
    }
}
