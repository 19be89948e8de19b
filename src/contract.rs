//! Always-on precondition checks for the access primitives.

use crate::error::Error;

/// Report a precondition violation and halt.
///
/// Violations are caller-side contract breaches (bad index, negative offset),
/// not recoverable runtime conditions. The structured error is logged and then
/// raised as a panic so the failure propagates immediately instead of being
/// handled.
#[cold]
pub fn violated(err: Error) -> ! {
    tracing::error!("precondition violated: {}", err);
    panic!("precondition violated: {err}");
}

/// Verify a precondition before an operation proceeds.
///
/// The error expression is only evaluated on violation.
///
/// ```should_panic
/// use guardrail::{expects, Error};
///
/// let len = 3_usize;
/// expects!(5 < len, Error::IndexOutOfBounds { index: 5, len });
/// ```
#[macro_export]
macro_rules! expects {
    ($cond:expr, $err:expr) => {
        if !$cond {
            $crate::contract::violated($err);
        }
    };
}
