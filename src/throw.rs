//! Terminal dispatch: one function per failure kind, always raising.
//!
//! Each function builds the canonical [`GuardError`] for its kind, using the
//! kind's default template when no message is given, and returns it as
//! `Err`. The `Ok` type is free so the call fits wherever a value is
//! expected:
//!
//! ```rust
//! use throw_guard::{throw, Result};
//!
//! fn port(raw: Option<u16>) -> Result<u16> {
//!     match raw {
//!         Some(p) => Ok(p),
//!         None => throw::null_arg(Some("port"), None),
//!     }
//! }
//!
//! let err = port(None).unwrap_err();
//! assert_eq!(err.to_string(), "value cannot be null (parameter 'port')");
//! ```
//!
//! [`this`] and [`this_as`] raise a caller-built error unchanged; the
//! [`Raise`] extension offers the same as methods.

use crate::messages::{render, template, MessageKey};
use crate::presence::Whitespace;
use crate::{EnumMember, ErrorKind, GuardError, NO_ARG_NAME};
use std::borrow::Cow;

#[inline]
fn build(kind: ErrorKind, message: Option<&str>) -> GuardError {
    let message = match message {
        Some(m) => Cow::Owned(m.to_owned()),
        None => Cow::Borrowed(template(kind.default_message_key())),
    };
    GuardError::new(kind, message)
}

#[inline]
fn build_for_arg(kind: ErrorKind, arg_name: Option<&str>, message: Option<&str>) -> GuardError {
    build(kind, message).with_arg_name(arg_name.unwrap_or(NO_ARG_NAME).to_owned())
}

/// Raise an [`ErrorKind::Application`] error.
#[inline]
pub fn app_exception<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::Application, message))
}

/// Raise an [`ErrorKind::BadArgument`] error attributed to `arg_name`.
#[inline]
pub fn bad_arg<T>(arg_name: Option<&str>, message: Option<&str>) -> Result<T, GuardError> {
    Err(build_for_arg(ErrorKind::BadArgument, arg_name, message))
}

/// Raise an [`ErrorKind::DirectoryNotFound`] error.
#[inline]
pub fn directory_not_found<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::DirectoryNotFound, message))
}

/// Raise an uncategorized [`ErrorKind::Generic`] error.
#[inline]
pub fn exception<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::Generic, message))
}

/// Raise an [`ErrorKind::FileNotFound`] error.
///
/// A non-blank `path` is attached as `path` context.
pub fn file_not_found<T>(path: Option<&str>, message: Option<&str>) -> Result<T, GuardError> {
    let err = build(ErrorKind::FileNotFound, message);
    match path {
        Some(p) if !p.is_blank() => Err(err.with_context("path", p.to_owned())),
        _ => Err(err),
    }
}

/// Raise an [`ErrorKind::IndexOutOfRange`] error.
#[inline]
pub fn index_out_of_range<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::IndexOutOfRange, message))
}

/// Raise an [`ErrorKind::InvalidCast`] error.
#[inline]
pub fn invalid_cast<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::InvalidCast, message))
}

/// Raise an [`ErrorKind::InvalidEnumValue`] error.
#[inline]
pub fn invalid_enum<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::InvalidEnumValue, message))
}

/// Raise an [`ErrorKind::InvalidEnumValue`] error for `value`, which is not a
/// member of `M`.
///
/// The enum's type name and the value are attached as `enum_type` and
/// `value` context.
pub fn invalid_enum_value<M, T>(arg_name: Option<&str>, value: i64) -> Result<T, GuardError>
where
    M: EnumMember,
{
    let type_name = M::type_name();
    let message = render(MessageKey::EnumInvalidValue, &[&value, &type_name]);
    Err(GuardError::new(ErrorKind::InvalidEnumValue, message)
        .with_arg_name(arg_name.unwrap_or(NO_ARG_NAME).to_owned())
        .with_context("enum_type", type_name)
        .with_context("value", value.to_string()))
}

/// Raise an [`ErrorKind::InvalidOperation`] error.
#[inline]
pub fn invalid_op<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::InvalidOperation, message))
}

/// Raise an [`ErrorKind::NotImplemented`] error.
#[inline]
pub fn not_implemented<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::NotImplemented, message))
}

/// Raise an [`ErrorKind::NullArgument`] error attributed to `arg_name`.
#[inline]
pub fn null_arg<T>(arg_name: Option<&str>, message: Option<&str>) -> Result<T, GuardError> {
    Err(build_for_arg(ErrorKind::NullArgument, arg_name, message))
}

/// Raise an [`ErrorKind::ValidationFailure`] error.
#[inline]
pub fn validation_error<T>(message: Option<&str>) -> Result<T, GuardError> {
    Err(build(ErrorKind::ValidationFailure, message))
}

/// Raise an [`ErrorKind::ValueOutOfRange`] error attributed to `arg_name`.
#[inline]
pub fn value_out_of_range<T>(arg_name: Option<&str>, message: Option<&str>) -> Result<T, GuardError> {
    Err(build_for_arg(ErrorKind::ValueOutOfRange, arg_name, message))
}

// ============================================================================
// Caller-built Errors
// ============================================================================

/// Raise `err` unchanged.
#[inline]
pub fn this<E>(err: E) -> Result<(), E> {
    Err(err)
}

/// Raise `err` unchanged where a value of type `T` is expected.
///
/// ```rust
/// use throw_guard::{throw, ErrorKind, GuardError};
///
/// let cached: Option<u32> = None;
/// let hits = cached.map_or_else(
///     || throw::this_as(GuardError::new(ErrorKind::InvalidOperation, "cache is cold")),
///     Ok,
/// );
/// assert!(hits.is_err());
/// ```
#[inline]
pub fn this_as<T, E>(err: E) -> Result<T, E> {
    Err(err)
}

/// Method-style raising of caller-built errors.
pub trait Raise: Sized {
    /// Raise `self`.
    #[inline]
    fn raise(self) -> Result<(), Self> {
        Err(self)
    }

    /// Raise `self` where a value of type `T` is expected.
    #[inline]
    fn raise_as<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

impl<E: std::error::Error> Raise for E {}
