//! A single named test and its captured outcome.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::buffer::TextBuffer;
use crate::signal::FailureSignal;

/// Signature of a registered test function.
pub type TestFn = fn(&mut TestCase);

/// One named test function together with its outcome.
///
/// `message` is populated if and only if the case failed.
#[derive(Debug)]
pub struct TestCase {
    name: String,
    function: TestFn,
    ran: bool,
    failed: bool,
    message: Option<TextBuffer>,
}

impl TestCase {
    /// Create a named case that has not run yet.
    #[must_use]
    pub fn new(name: impl Into<String>, function: TestFn) -> Self {
        Self {
            name: name.into(),
            function,
            ran: false,
            failed: false,
            message: None,
        }
    }

    /// Name given at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once [`run`](Self::run) has been invoked at least once.
    #[must_use]
    pub fn ran(&self) -> bool {
        self.ran
    }

    /// True when the most recent run captured a failure.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Diagnostic message of the most recent failure, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(TextBuffer::as_str)
    }

    pub(crate) fn record_failure(&mut self, message: TextBuffer) {
        self.failed = true;
        self.message = Some(message);
    }

    /// Execute the test function once, capturing any failure.
    ///
    /// This is the unexpected-failure recovery point: no assertion failure,
    /// and no panic of any kind from the test body, propagates past it. A
    /// failure signal that carried no diagnostic records the synthetic
    /// "unexpected assertion fail" message. The previous outcome is cleared
    /// first, so re-running reports only the current execution.
    pub fn run(&mut self) {
        self.failed = false;
        self.message = None;
        self.ran = true;
        let function = self.function;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| function(self)));
        if let Err(payload) = outcome {
            self.failed = true;
            if payload.downcast_ref::<FailureSignal>().is_some() {
                if self.message.is_none() {
                    let mut message = TextBuffer::new();
                    message.append("unexpected assertion fail");
                    self.message = Some(message);
                }
            } else {
                let mut message = TextBuffer::new();
                message.append("panic: ");
                message.append(panic_text(payload.as_ref()));
                self.message = Some(message);
            }
        }
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "<non-string panic payload>"
    }
}
