//! Predicate-triggered raising.
//!
//! These evaluate a condition and raise only when it holds. Unlike the
//! guards, they carry no value and no argument name.
//!
//! ```rust
//! use throw_guard::when;
//!
//! let closed = true;
//! let err = when::invalid_op_when(|| closed, Some("queue is closed")).unwrap_err();
//! assert_eq!(err.message(), "queue is closed");
//! ```

use crate::messages::{template, MessageKey};
use crate::{ErrorKind, GuardError};
use std::borrow::Cow;

fn predicate_message(kind: ErrorKind, message: Option<&str>) -> Cow<'static, str> {
    match message {
        Some(m) => Cow::Owned(m.to_owned()),
        None => Cow::Owned(format!(
            "{} {}",
            template(MessageKey::PredicateIsTrue),
            template(kind.default_message_key())
        )),
    }
}

fn raise_when<P>(predicate: P, kind: ErrorKind, message: Option<&str>) -> Result<(), GuardError>
where
    P: FnOnce() -> bool,
{
    if predicate() {
        return Err(GuardError::new(kind, predicate_message(kind, message)));
    }
    Ok(())
}

/// Raise `err` when `predicate` returns `true`.
///
/// The error is built up front; it is simply dropped when the predicate is
/// false.
#[inline]
pub fn when<P, E>(predicate: P, err: E) -> Result<(), E>
where
    P: FnOnce() -> bool,
{
    if predicate() { Err(err) } else { Ok(()) }
}

/// Raise [`ErrorKind::BadArgument`] when `condition` holds.
///
/// Default message: `"predicate is true. "` followed by the bad-argument
/// template.
#[inline]
pub fn bad_arg_when<P>(condition: P, message: Option<&str>) -> Result<(), GuardError>
where
    P: FnOnce() -> bool,
{
    raise_when(condition, ErrorKind::BadArgument, message)
}

/// Raise [`ErrorKind::InvalidCast`] when `condition` holds.
#[inline]
pub fn invalid_cast_when<P>(condition: P, message: Option<&str>) -> Result<(), GuardError>
where
    P: FnOnce() -> bool,
{
    raise_when(condition, ErrorKind::InvalidCast, message)
}

/// Raise [`ErrorKind::InvalidOperation`] when `condition` holds.
#[inline]
pub fn invalid_op_when<P>(condition: P, message: Option<&str>) -> Result<(), GuardError>
where
    P: FnOnce() -> bool,
{
    raise_when(condition, ErrorKind::InvalidOperation, message)
}

/// Raise [`ErrorKind::ValidationFailure`] when `condition` holds.
///
/// Default message: `"predicate is true."` alone.
pub fn validation_error_when<P>(condition: P, message: Option<&str>) -> Result<(), GuardError>
where
    P: FnOnce() -> bool,
{
    if condition() {
        let message = match message {
            Some(m) => Cow::Owned(m.to_owned()),
            None => Cow::Borrowed(template(MessageKey::PredicateIsTrue)),
        };
        return Err(GuardError::new(ErrorKind::ValidationFailure, message));
    }
    Ok(())
}

/// Run `action` only when `condition` returns `true`.
///
/// Returns whether the action ran.
#[inline]
pub fn invoke_when<C, A>(condition: C, action: A) -> bool
where
    C: FnOnce() -> bool,
    A: FnOnce(),
{
    let run = condition();
    if run {
        action();
    }
    run
}
