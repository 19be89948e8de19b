//! Scope-exit guards and checked conversion/access primitives.
//!
//! Two independent families, meant to be used pervasively in low-level code:
//!
//! - [`defer`], [`defer_on_success`], [`defer_on_unwind`]: run an action
//!   deterministically when control leaves a block, optionally conditioned on
//!   whether a panic is unwinding through it. Note that a panic raised by the
//!   guarded action itself is deliberately swallowed at scope exit; see
//!   [`scope`] for the full policy.
//! - [`narrow`], [`narrow_cast`], [`at`], [`find`], [`remove`], [`take`]:
//!   numeric narrowing that fails loudly instead of wrapping, and indexed
//!   access that reports out-of-range indices as precondition violations.

pub mod access;
pub mod contract;
pub mod convert;
pub mod error;
pub mod scope;

pub use access::{at, at_mut, find, find_mut, remove, take, SequenceIndex};
pub use convert::{narrow, narrow_cast, Narrowable, NarrowCast};
pub use error::{Error, Result};
pub use scope::{defer, defer_on_success, defer_on_unwind, ScopeGuard, Trigger};
