//! Error code namespace - stable identifiers for every failure kind.
//!
//! A raised guard error reads `"collection is empty (parameter 'items')"`;
//! its code reads `E-ARG-002`. Messages are for people and may be localized
//! through a [`MessageCatalog`](crate::MessageCatalog); codes are for
//! machines and never change.
//!
//! # Namespace Structure
//!
//! - **ARG**: argument preconditions (null, bad, out of range, enum membership)
//! - **FS**: filesystem path preconditions
//! - **OP**: operation, cast, validation and not-implemented failures
//! - **APP**: application-level and uncategorized errors
//!
//! # Governance
//!
//! Namespaces are frozen: `ErrorNamespace` has a private field and only the
//! const instances in [`namespaces`] exist. Each namespace only admits the
//! kinds listed by [`permits_kind`], checked at construction.
//!
//! # Example Usage
//!
//! ```rust
//! use throw_guard::{ErrorKind, define_error_codes, namespaces};
//!
//! define_error_codes! {
//!     &namespaces::ARG => {
//!         ARG_MISSING_TENANT = (40, ErrorKind::NullArgument),
//!     }
//! }
//!
//! assert_eq!(ARG_MISSING_TENANT.to_string(), "E-ARG-040");
//! ```

use crate::ErrorKind;
use std::fmt;

// ============================================================================
// Error Namespace (Frozen Identity)
// ============================================================================

/// Error namespace type - enforces frozen taxonomy.
///
/// Cannot be constructed outside this crate; use the instances in
/// [`namespaces`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorNamespace {
    name: &'static str,
    _private: (),
}

impl ErrorNamespace {
    const fn frozen(name: &'static str) -> Self {
        Self { name, _private: () }
    }

    /// Namespace label as it appears in codes.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.name
    }
}

/// Canonical namespace instances.
pub mod namespaces {
    use super::ErrorNamespace;

    /// Argument preconditions.
    pub const ARG: ErrorNamespace = ErrorNamespace::frozen("ARG");

    /// Filesystem path preconditions.
    pub const FS: ErrorNamespace = ErrorNamespace::frozen("FS");

    /// Operation, cast and validation failures.
    pub const OP: ErrorNamespace = ErrorNamespace::frozen("OP");

    /// Application-level and uncategorized errors.
    pub const APP: ErrorNamespace = ErrorNamespace::frozen("APP");
}

// ============================================================================
// Kind Policy
// ============================================================================

mod kind_policy {
    use crate::ErrorKind;

    pub(super) const fn argument_permits(kind: ErrorKind) -> bool {
        use ErrorKind::*;
        matches!(
            kind,
            NullArgument | BadArgument | ValueOutOfRange | IndexOutOfRange | InvalidEnumValue
        )
    }

    pub(super) const fn filesystem_permits(kind: ErrorKind) -> bool {
        matches!(kind, ErrorKind::DirectoryNotFound | ErrorKind::FileNotFound)
    }

    pub(super) const fn operation_permits(kind: ErrorKind) -> bool {
        use ErrorKind::*;
        matches!(
            kind,
            InvalidCast | InvalidOperation | ValidationFailure | NotImplemented
        )
    }

    pub(super) const fn application_permits(kind: ErrorKind) -> bool {
        matches!(kind, ErrorKind::Application | ErrorKind::Generic)
    }
}

/// Whether `namespace` may carry codes of `kind`.
pub const fn permits_kind(namespace: &ErrorNamespace, kind: ErrorKind) -> bool {
    match namespace.name.as_bytes() {
        b"ARG" => kind_policy::argument_permits(kind),
        b"FS" => kind_policy::filesystem_permits(kind),
        b"OP" => kind_policy::operation_permits(kind),
        b"APP" => kind_policy::application_permits(kind),
        _ => false,
    }
}

// ============================================================================
// Code Violations
// ============================================================================

/// Reason a runtime code construction was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeViolation {
    /// Code is zero or exceeds 999.
    CodeOutOfRange {
        /// The rejected value.
        value: u16,
    },
    /// Kind not admitted by the namespace.
    KindNotPermitted {
        /// Namespace label.
        namespace: &'static str,
        /// Kind display name.
        kind: &'static str,
    },
}

impl fmt::Display for CodeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeOutOfRange { value } => {
                write!(f, "Error code {} is out of range (must be 001-999)", value)
            }
            Self::KindNotPermitted { namespace, kind } => {
                write!(f, "Kind {} not permitted for namespace {}", kind, namespace)
            }
        }
    }
}

impl std::error::Error for CodeViolation {}

// ============================================================================
// Error Code
// ============================================================================

/// An error code with namespace, numeric code and failure kind.
///
/// Format: `E-XXX-YYY`, where `XXX` is the namespace and `YYY` the
/// zero-padded number.
///
/// No `Clone`/`Copy`: codes are const statics used by reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    namespace: &'static ErrorNamespace,
    code: u16,
    kind: ErrorKind,
}

impl ErrorCode {
    /// Create a code, validated at compile time in const contexts.
    ///
    /// # Panics
    ///
    /// If `code` is outside 001-999 or the namespace does not admit `kind`.
    #[inline]
    pub const fn const_new(namespace: &'static ErrorNamespace, code: u16, kind: ErrorKind) -> Self {
        assert!(code > 0 && code < 1000, "Error code must be 001-999");
        assert!(
            permits_kind(namespace, kind),
            "Kind not permitted for this namespace"
        );
        Self {
            namespace,
            code,
            kind,
        }
    }

    /// Create a code with runtime validation.
    pub fn checked_new(
        namespace: &'static ErrorNamespace,
        code: u16,
        kind: ErrorKind,
    ) -> Result<Self, CodeViolation> {
        if code == 0 || code >= 1000 {
            return Err(CodeViolation::CodeOutOfRange { value: code });
        }
        if !permits_kind(namespace, kind) {
            return Err(CodeViolation::KindNotPermitted {
                namespace: namespace.as_str(),
                kind: kind.display_name(),
            });
        }
        Ok(Self {
            namespace,
            code,
            kind,
        })
    }

    /// Namespace reference.
    #[inline]
    pub const fn namespace(&self) -> &'static ErrorNamespace {
        self.namespace
    }

    /// Numeric code.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Failure kind.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E-{}-{:03}", self.namespace.as_str(), self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_construction_formats_code() {
        const CODE: ErrorCode = ErrorCode::const_new(&namespaces::FS, 105, ErrorKind::FileNotFound);
        assert_eq!(CODE.to_string(), "E-FS-105");
        assert_eq!(CODE.namespace().as_str(), "FS");
        assert_eq!(CODE.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn checked_new_rejects_zero() {
        let result = ErrorCode::checked_new(&namespaces::ARG, 0, ErrorKind::BadArgument);
        assert_eq!(result, Err(CodeViolation::CodeOutOfRange { value: 0 }));
    }

    #[test]
    fn checked_new_rejects_foreign_kind() {
        let result = ErrorCode::checked_new(&namespaces::FS, 150, ErrorKind::InvalidCast);
        assert!(matches!(
            result,
            Err(CodeViolation::KindNotPermitted { namespace: "FS", .. })
        ));
    }

    #[test]
    fn kind_policy_per_namespace() {
        assert!(permits_kind(&namespaces::ARG, ErrorKind::NullArgument));
        assert!(!permits_kind(&namespaces::ARG, ErrorKind::FileNotFound));
        assert!(permits_kind(&namespaces::OP, ErrorKind::ValidationFailure));
        assert!(permits_kind(&namespaces::APP, ErrorKind::Generic));
        assert!(!permits_kind(&namespaces::APP, ErrorKind::InvalidCast));
    }

    #[test]
    fn violation_display() {
        let v = CodeViolation::KindNotPermitted {
            namespace: "FS",
            kind: "Invalid cast",
        };
        assert_eq!(v.to_string(), "Kind Invalid cast not permitted for namespace FS");
    }
}
