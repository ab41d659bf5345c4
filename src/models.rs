//! The closed taxonomy of failure kinds a guard can raise.
//!
//! # Architecture
//!
//! Every violation maps to exactly one [`ErrorKind`]. The kind decides:
//!
//! - which frozen [`ErrorCode`](crate::ErrorCode) the error carries
//! - which default message template is used when the caller supplies none
//! - whether the error is attributed to an argument name
//!
//! The set is closed on purpose: callers match on it, and adding a kind is a
//! breaking change. Caller-constructed errors that fit nowhere else travel as
//! [`ErrorKind::Application`] (wrapped) or [`ErrorKind::Generic`].

use crate::definitions;
use crate::messages::MessageKey;
use crate::ErrorCode;
use std::fmt;

// ============================================================================
// Error Kind
// ============================================================================

/// Failure kind of a raised guard violation.
///
/// # Copy Semantics
///
/// Small fieldless enum, passed by value everywhere. Carries no data of its
/// own; the offending values live in the error's message and context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value is absent.
    NullArgument,
    /// A value violates a structural precondition (empty, wrong shape, failed predicate).
    BadArgument,
    /// A numeric or ordered value falls outside an allowed bound or hits a disallowed one.
    ValueOutOfRange,
    /// An index lies outside the bounds of the indexed sequence.
    IndexOutOfRange,
    /// A directory path precondition failed.
    DirectoryNotFound,
    /// A file path precondition failed.
    FileNotFound,
    /// A type-conformance precondition failed.
    InvalidCast,
    /// An operation is not valid in the current context.
    InvalidOperation,
    /// A value is not a member of the target enumeration.
    InvalidEnumValue,
    /// A domain or business-rule precondition failed.
    ValidationFailure,
    /// The requested behaviour is not implemented.
    NotImplemented,
    /// Application-level error, including caller-constructed errors wrapped by
    /// [`GuardError::custom`](crate::GuardError::custom).
    Application,
    /// Uncategorized catch-all.
    Generic,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 13] = [
        Self::NullArgument,
        Self::BadArgument,
        Self::ValueOutOfRange,
        Self::IndexOutOfRange,
        Self::DirectoryNotFound,
        Self::FileNotFound,
        Self::InvalidCast,
        Self::InvalidOperation,
        Self::InvalidEnumValue,
        Self::ValidationFailure,
        Self::NotImplemented,
        Self::Application,
        Self::Generic,
    ];

    /// Human-readable name of the kind.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::NullArgument => "Null argument",
            Self::BadArgument => "Bad argument",
            Self::ValueOutOfRange => "Value out of range",
            Self::IndexOutOfRange => "Index out of range",
            Self::DirectoryNotFound => "Directory not found",
            Self::FileNotFound => "File not found",
            Self::InvalidCast => "Invalid cast",
            Self::InvalidOperation => "Invalid operation",
            Self::InvalidEnumValue => "Invalid enum value",
            Self::ValidationFailure => "Validation failure",
            Self::NotImplemented => "Not implemented",
            Self::Application => "Application",
            Self::Generic => "Generic",
        }
    }

    /// The frozen error code for this kind.
    #[inline]
    pub const fn code(&self) -> &'static ErrorCode {
        match self {
            Self::NullArgument => &definitions::ARG_NULL,
            Self::BadArgument => &definitions::ARG_BAD,
            Self::ValueOutOfRange => &definitions::ARG_OUT_OF_RANGE,
            Self::IndexOutOfRange => &definitions::ARG_INDEX_OUT_OF_RANGE,
            Self::InvalidEnumValue => &definitions::ARG_INVALID_ENUM,
            Self::DirectoryNotFound => &definitions::FS_DIRECTORY_NOT_FOUND,
            Self::FileNotFound => &definitions::FS_FILE_NOT_FOUND,
            Self::InvalidCast => &definitions::OP_INVALID_CAST,
            Self::InvalidOperation => &definitions::OP_INVALID_OPERATION,
            Self::ValidationFailure => &definitions::OP_VALIDATION_FAILED,
            Self::NotImplemented => &definitions::OP_NOT_IMPLEMENTED,
            Self::Application => &definitions::APP_APPLICATION,
            Self::Generic => &definitions::APP_GENERIC,
        }
    }

    /// Template used when neither a message override nor a guard-specific
    /// template applies.
    #[inline]
    pub const fn default_message_key(&self) -> MessageKey {
        match self {
            Self::NullArgument => MessageKey::NullArg,
            Self::BadArgument => MessageKey::BadArg,
            Self::ValueOutOfRange | Self::IndexOutOfRange => MessageKey::OutOfRange,
            Self::DirectoryNotFound => MessageKey::DirectoryNotFound,
            Self::FileNotFound => MessageKey::FileNotFound,
            Self::InvalidCast => MessageKey::InvalidCast,
            Self::InvalidOperation => MessageKey::InvalidOp,
            Self::InvalidEnumValue => MessageKey::EnumNotMember,
            Self::ValidationFailure => MessageKey::ValidationError,
            Self::NotImplemented => MessageKey::NotImplemented,
            Self::Application => MessageKey::AppException,
            Self::Generic => MessageKey::Exception,
        }
    }

    /// True for kinds that attribute the failure to a named argument.
    #[inline]
    pub const fn is_argument_kind(&self) -> bool {
        matches!(
            self,
            Self::NullArgument | Self::BadArgument | Self::ValueOutOfRange | Self::InvalidEnumValue
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_code_in_a_permitting_namespace() {
        for kind in ErrorKind::ALL {
            let code = kind.code();
            assert_eq!(code.kind(), kind);
            assert!(crate::codes::permits_kind(code.namespace(), kind));
        }
    }

    #[test]
    fn codes_are_unique_per_kind() {
        let mut seen: Vec<String> = ErrorKind::ALL.iter().map(|k| k.code().to_string()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn argument_kinds() {
        assert!(ErrorKind::NullArgument.is_argument_kind());
        assert!(ErrorKind::ValueOutOfRange.is_argument_kind());
        assert!(!ErrorKind::FileNotFound.is_argument_kind());
        assert!(!ErrorKind::Generic.is_argument_kind());
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(ErrorKind::InvalidCast.to_string(), "Invalid cast");
    }
}
