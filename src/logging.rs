//! Structured view of a raised guard error for logging.
//!
//! Guards never log. A caller that wants to record a violation asks the error
//! for a [`ViolationLog`], which borrows from the error and cannot outlive
//! it. Offending values embedded in messages and context are zeroized when
//! the error drops, so the view is meant to be consumed immediately by the
//! logger.

use crate::{ErrorCode, ErrorKind};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use zeroize::Zeroize;

/// Maximum length for any individual field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Context value attached to a guard error, zeroized on drop when owned.
///
/// Borrowed values are assumed static and are not zeroized.
#[derive(Debug)]
pub struct ContextField {
    value: Cow<'static, str>,
}

impl ContextField {
    /// The value as text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_ref()
    }
}

impl From<&'static str> for ContextField {
    fn from(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }
}

impl From<String> for ContextField {
    fn from(value: String) -> Self {
        Self {
            value: Cow::Owned(value),
        }
    }
}

impl From<Cow<'static, str>> for ContextField {
    fn from(value: Cow<'static, str>) -> Self {
        Self { value }
    }
}

impl Zeroize for ContextField {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.value {
            s.zeroize();
        }
    }
}

impl Drop for ContextField {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Structured log entry borrowed from a [`GuardError`](crate::GuardError).
///
/// # Example
///
/// ```rust
/// # use throw_guard::{Guard, GuardError};
/// let err = Guard::new(Vec::<u8>::new()).named("payload").if_empty().unwrap_err();
/// let mut line = String::new();
/// err.violation_log().write_to(&mut line).unwrap();
/// assert_eq!(line, "[E-ARG-002] kind='Bad argument' arg='payload' message='collection is empty'");
/// ```
#[derive(Debug)]
pub struct ViolationLog<'a> {
    pub(crate) code: &'a ErrorCode,
    pub(crate) kind: ErrorKind,
    pub(crate) message: &'a str,
    pub(crate) arg_name: Option<&'a str>,
    pub(crate) context: &'a [(&'static str, ContextField)],
    pub(crate) source: Option<&'a (dyn Error + Send + Sync + 'static)>,
}

impl<'a> ViolationLog<'a> {
    /// Write structured log data to a formatter.
    ///
    /// Every field is truncated to a bounded length; the truncation is made
    /// visible with an indicator.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "[{}] kind='{}'", self.code, self.kind.display_name())?;

        if let Some(arg) = self.arg_name {
            write!(f, " arg='{}'", truncate_with_indicator(arg))?;
        }

        write!(f, " message='{}'", truncate_with_indicator(self.message))?;

        for (key, value) in self.context {
            write!(f, " {}='{}'", key, truncate_with_indicator(value.as_str()))?;
        }

        if let Some(source) = self.source {
            let rendered = source.to_string();
            write!(f, " source='{}'", truncate_with_indicator(&rendered))?;
        }

        Ok(())
    }

    /// Stable error code.
    #[inline]
    pub const fn code(&self) -> &ErrorCode {
        self.code
    }

    /// Failure kind.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Full message, untruncated.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    /// Argument the violation is attributed to.
    #[inline]
    pub const fn arg_name(&self) -> Option<&str> {
        self.arg_name
    }

    /// Context fields, untruncated.
    #[inline]
    pub const fn context(&self) -> &[(&'static str, ContextField)] {
        self.context
    }

    /// Wrapped caller error, if any.
    #[inline]
    pub fn source(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source
    }
}

/// Truncate a string for display, cutting on a UTF-8 boundary.
///
/// Returns a borrowed value when no truncation is needed.
pub(crate) fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
