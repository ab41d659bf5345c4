//! # Throw Guard
//!
//! Guard clauses for argument and invariant validation.
//!
//! ## Design Philosophy
//!
//! 1. **A guard checks one precondition** and hands its input back unchanged
//! 2. **Violations are raised immediately** as `Err`, never recovered locally
//! 3. **Every error has a kind** from a small closed taxonomy, and a stable code
//! 4. **Messages are deterministic**: the caller's exact text, or a default
//!    template filled with the offending values
//! 5. **Callers stay in control**: message override, error factory and
//!    conditional gate are all opt-in
//!
//! ## Quick Start
//!
//! ```rust
//! use throw_guard::{guard, GuardError, ErrorKind, Result};
//!
//! fn schedule(workers: Vec<String>, retries: i32) -> Result<usize> {
//!     let workers = guard!(workers).if_empty()?;
//!     let retries = guard!(retries).if_negative()?;
//!     Ok(workers.len() * retries as usize)
//! }
//!
//! let err = schedule(Vec::new(), 3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadArgument);
//! assert_eq!(err.to_string(), "collection is empty (parameter 'workers')");
//! ```
//!
//! ## Custom Errors
//!
//! Any error type that can absorb a [`GuardError`] works with guards. An
//! error factory replaces the default error entirely:
//!
//! ```rust
//! use throw_guard::{Guard, GuardError};
//!
//! #[derive(Debug, PartialEq)]
//! enum ApiError {
//!     MissingField(String),
//!     Guard(String),
//! }
//!
//! impl From<GuardError> for ApiError {
//!     fn from(err: GuardError) -> Self {
//!         ApiError::Guard(err.to_string())
//!     }
//! }
//!
//! let email: Option<&str> = None;
//! let err = Guard::new(email)
//!     .named("email")
//!     .with_error(|name| ApiError::MissingField(name.to_owned()))
//!     .if_null()
//!     .unwrap_err();
//! assert_eq!(err, ApiError::MissingField("email".into()));
//! ```
//!
//! ## Conditional Gates
//!
//! ```rust
//! use throw_guard::guard;
//!
//! let strict = false;
//! let port = 0u16;
//! // The violation only fires when the gate also holds.
//! assert_eq!(guard!(port).when(|| strict).if_zero(), Ok(0));
//! ```
//!
//! ## Features
//!
//! - `uuid`: nil / null-or-nil guards for `uuid::Uuid`
//! - `chrono`: date/time kind guards for `chrono` date-time types
//! - `http`: [`UriInfo`] adapter for `http::Uri`

#![warn(missing_docs)]
#![warn(clippy::all)]

use smallvec::SmallVec;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::result;
use zeroize::Zeroize;

pub mod codes;
pub mod collection;
pub mod context;
pub mod convenience;
#[cfg(feature = "chrono")]
pub mod datetime;
pub mod definitions;
pub mod enums;
pub mod filesystem;
#[cfg(feature = "uuid")]
pub mod identity;
pub mod logging;
pub mod messages;
pub mod models;
pub mod numeric;
pub mod presence;
pub mod throw;
pub mod types;
pub mod uri;
pub mod when;

pub use codes::*;
pub use collection::{Countable, Elements, MaybeStr};
pub use context::{GateState, Gated, Guard, NO_ARG_NAME, Ungated};
#[cfg(feature = "chrono")]
pub use datetime::{DateTimeKind, HasDateTimeKind};
pub use definitions::*;
pub use enums::{EnumInput, EnumMember};
pub use filesystem::{FileSystem, StdFileSystem};
pub use logging::*;
pub use messages::{install_catalog, render, DefaultCatalog, MessageCatalog, MessageKey};
pub use models::*;
pub use numeric::Numeric;
pub use presence::Whitespace;
pub use throw::Raise;
pub use uri::{UriHostNameType, UriInfo, UriScheme};

/// Result alias defaulting to [`GuardError`].
pub type Result<T, E = GuardError> = result::Result<T, E>;

// ============================================================================
// Guard Error
// ============================================================================

/// Error raised by a violated guard or a throw helper.
///
/// # Key Properties
///
/// - Carries exactly one [`ErrorKind`] and, through it, a stable [`ErrorCode`]
/// - The message is either the caller's override or a rendered default
/// - Owned text (message, argument name, context values) is zeroized on drop,
///   since default messages embed the offending values
/// - Caller errors can be wrapped with [`GuardError::custom`] and recovered
///   with [`GuardError::source_ref`]
#[must_use = "errors should be handled or propagated"]
pub struct GuardError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    arg_name: Option<Cow<'static, str>>,
    context: SmallVec<[(&'static str, ContextField); 2]>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl GuardError {
    /// Create an error of `kind` with an exact message.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            arg_name: None,
            context: SmallVec::new(),
            source: None,
        }
    }

    /// Create an error of `kind` using its default message template.
    #[inline]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, messages::template(kind.default_message_key()))
    }

    /// A required value is absent.
    #[inline]
    pub fn null_argument(
        arg_name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::NullArgument, message).with_arg_name(arg_name)
    }

    /// A value violates a structural precondition.
    #[inline]
    pub fn bad_argument(
        arg_name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::BadArgument, message).with_arg_name(arg_name)
    }

    /// A value falls outside an allowed bound.
    #[inline]
    pub fn value_out_of_range(
        arg_name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::ValueOutOfRange, message).with_arg_name(arg_name)
    }

    /// Wrap a caller-constructed error as an [`ErrorKind::Application`] error.
    ///
    /// The message is the wrapped error's `Display` output; the original is
    /// kept as [`source`](Error::source).
    pub fn custom<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(ErrorKind::Application, err.to_string()).with_source(err)
    }

    /// Attribute the error to an argument.
    #[inline]
    pub fn with_arg_name(mut self, arg_name: impl Into<Cow<'static, str>>) -> Self {
        self.arg_name = Some(arg_name.into());
        self
    }

    /// Attach structured context (a path, an enum type, an offending value).
    #[inline]
    pub fn with_context(mut self, key: &'static str, value: impl Into<ContextField>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach an underlying cause.
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Failure kind.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable error code of the kind.
    #[inline]
    pub const fn code(&self) -> &'static ErrorCode {
        self.kind.code()
    }

    /// Exact message text, without the argument suffix added by `Display`.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Argument the violation is attributed to.
    #[inline]
    pub fn arg_name(&self) -> Option<&str> {
        self.arg_name.as_deref()
    }

    /// First context value stored under `key`.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All context fields in insertion order.
    #[inline]
    pub fn context_fields(&self) -> &[(&'static str, ContextField)] {
        &self.context
    }

    /// Borrow the wrapped source as a concrete type.
    pub fn source_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<T>()
    }

    /// Structured log view borrowing from this error.
    #[inline]
    pub fn violation_log(&self) -> ViolationLog<'_> {
        ViolationLog {
            code: self.code(),
            kind: self.kind,
            message: self.message.as_ref(),
            arg_name: self.arg_name.as_deref(),
            context: &self.context,
            source: self.source.as_deref(),
        }
    }

    /// Callback-style access to the log view.
    ///
    /// ```rust
    /// # use throw_guard::{ErrorKind, GuardError};
    /// let err = GuardError::new(ErrorKind::InvalidOperation, "queue is closed");
    /// let code = err.with_violation_log(|log| log.code().to_string());
    /// assert_eq!(code, "E-OP-201");
    /// ```
    #[inline]
    pub fn with_violation_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViolationLog<'_>) -> R,
    {
        let log = self.violation_log();
        f(&log)
    }
}

impl Drop for GuardError {
    #[inline(never)]
    fn drop(&mut self) {
        self.source = None;
        if let Cow::Owned(ref mut s) = self.message {
            s.zeroize();
        }
        if let Some(Cow::Owned(ref mut s)) = self.arg_name {
            s.zeroize();
        }
        for (_, value) in &mut self.context {
            value.zeroize();
        }
    }
}

impl fmt::Debug for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardError")
            .field("kind", &self.kind)
            .field("code", &format_args!("{}", self.code()))
            .field("message", &self.message)
            .field("arg_name", &self.arg_name)
            .field("context", &self.context)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for GuardError {
    /// `{message}`, followed by ` (parameter '{arg}')` when attributed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(arg) = &self.arg_name {
            write!(f, " (parameter '{}')", arg)?;
        }
        Ok(())
    }
}

impl Error for GuardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl PartialEq for GuardError {
    /// Kind, message and argument name; context and source are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.arg_name == other.arg_name
    }
}

impl From<CodeViolation> for GuardError {
    fn from(violation: CodeViolation) -> Self {
        Self::custom(violation)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use std::io;

    #[test]
    fn display_appends_argument_name() {
        let err = GuardError::null_argument("config", "value cannot be null");
        assert_eq!(err.to_string(), "value cannot be null (parameter 'config')");

        let bare = GuardError::new(ErrorKind::InvalidOperation, "queue is closed");
        assert_eq!(bare.to_string(), "queue is closed");
    }

    #[test]
    fn from_kind_uses_default_template() {
        let err = GuardError::from_kind(ErrorKind::NotImplemented);
        assert_eq!(err.message(), "not implemented");
        assert_eq!(err.code().to_string(), "E-OP-203");
    }

    #[test]
    fn custom_wraps_source() {
        let err = GuardError::custom(io::Error::new(io::ErrorKind::NotFound, "missing manifest"));
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.message(), "missing manifest");
        assert_eq!(
            err.source_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn context_lookup() {
        let err = GuardError::new(ErrorKind::FileNotFound, "file 'a.toml' not found")
            .with_context("path", String::from("a.toml"));
        assert_eq!(err.context("path"), Some("a.toml"));
        assert_eq!(err.context("enum_type"), None);
        assert_eq!(err.context_fields().len(), 1);
    }

    #[test]
    fn equality_ignores_context() {
        let a = GuardError::bad_argument("x", "bad").with_context("k", "v");
        let b = GuardError::bad_argument("x", "bad");
        assert_eq!(a, b);
        assert_ne!(a, GuardError::bad_argument("y", "bad"));
    }

    #[test]
    fn debug_shows_code() {
        let err = GuardError::value_out_of_range("n", "value 5 is greater than 3");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("E-ARG-003"));
        assert!(dbg.contains("ValueOutOfRange"));
    }

    #[test]
    fn code_violation_converts() {
        let violation = CodeViolation::CodeOutOfRange { value: 0 };
        let err: GuardError = violation.into();
        assert_eq!(err.kind(), ErrorKind::Application);
        assert!(err.source_ref::<CodeViolation>().is_some());
    }
}
