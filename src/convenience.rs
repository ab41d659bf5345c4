//! Convenience macros: argument-name capture, error construction, code
//! definition and value sanitization.
//!
//! # Argument names
//!
//! [`guard!`](crate::guard) starts a guard and names it after the expression
//! it was given, so errors are attributed without spelling the name twice:
//!
//! ```rust
//! use throw_guard::guard;
//!
//! let items: Vec<u32> = Vec::new();
//! let err = guard!(&items).if_empty().unwrap_err();
//! assert_eq!(err.arg_name(), Some("items"));
//! ```
//!
//! # Building errors by hand
//!
//! [`guard_err!`](crate::guard_err) requires a literal format string, and
//! every dynamic argument must pass through
//! [`sanitized!`](crate::sanitized), which bounds its length and neutralizes
//! control characters:
//!
//! ```rust
//! # use throw_guard::{guard_err, sanitized, ErrorKind};
//! let tenant = "acme\n";
//! let err = guard_err!(ErrorKind::ValidationFailure, "tenant {} is suspended", sanitized!(tenant));
//! assert_eq!(err.message(), "tenant acme? is suspended");
//! ```
//!
//! ```rust,compile_fail
//! # use throw_guard::{guard_err, ErrorKind};
//! let raw = "oops";
//! // Args must be wrapped in sanitized!()
//! let err = guard_err!(ErrorKind::ValidationFailure, "{}", raw);
//! ```

// ============================================================================
// Sanitization Utilities
// ============================================================================

/// Maximum length in bytes for a sanitized value.
pub const MAX_SANITIZED_LEN: usize = 256;

const TRUNCATED_SUFFIX: &str = "...[TRUNCATED]";

/// Sanitize a value for inclusion in a message.
///
/// - Truncates to [`MAX_SANITIZED_LEN`] bytes on a UTF-8 boundary, marking
///   the cut with `...[TRUNCATED]`.
/// - Replaces control characters with `'?'`; ANSI escape sequences collapse
///   to a single `'?'`.
/// - Non-empty input made only of control characters becomes
///   `[INVALID_INPUT]`. Empty input stays empty.
pub fn sanitize(original: &str) -> String {
    if original.is_empty() {
        return String::new();
    }

    let mut s = String::with_capacity(MAX_SANITIZED_LEN.min(original.len()));
    let mut len = 0;
    let mut truncated = false;
    let mut saw_non_control = false;
    let mut in_escape = false;

    for c in original.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
            continue;
        }

        if c == '\u{1b}' {
            in_escape = true;
        } else if !c.is_control() {
            saw_non_control = true;
        }

        let replacement = if c.is_control() { '?' } else { c };
        let char_len = replacement.len_utf8();
        if len + char_len > MAX_SANITIZED_LEN {
            truncated = true;
            break;
        }

        s.push(replacement);
        len += char_len;
    }

    if !saw_non_control {
        return String::from("[INVALID_INPUT]");
    }

    if truncated {
        let mut new_len = MAX_SANITIZED_LEN.saturating_sub(TRUNCATED_SUFFIX.len());
        while new_len > 0 && !s.is_char_boundary(new_len) {
            new_len -= 1;
        }
        s.truncate(new_len);
        s.push_str(TRUNCATED_SUFFIX);
    }

    s
}

/// Strip reference and binding noise from a stringified expression.
///
/// `&items`, `&mut items` and `mut items` all name `items`.
#[doc(hidden)]
pub fn expression_name(expr: &'static str) -> &'static str {
    let mut name = expr.trim();
    loop {
        let stripped = name
            .strip_prefix('&')
            .or_else(|| name.strip_prefix("mut "))
            .map(str::trim_start);
        match stripped {
            Some(rest) if !rest.is_empty() => name = rest,
            _ => return name,
        }
    }
}

/// Sanitize any `Display` value for use in a message.
///
/// ```rust
/// # use throw_guard::sanitized;
/// let long = "A".repeat(300);
/// let san = sanitized!(long);
/// assert!(san.len() <= 256);
/// assert!(san.ends_with("[TRUNCATED]"));
/// ```
#[macro_export]
macro_rules! sanitized {
    ($expr:expr) => {
        $crate::convenience::sanitize(&$expr.to_string())
    };
}

// ============================================================================
// Guard Construction
// ============================================================================

/// Start a guard named after the expression passed in.
///
/// Expands to `Guard::new(expr).named("expr")`. A leading `&`, `&mut` or
/// `mut` is dropped from the name.
#[macro_export]
macro_rules! guard {
    ($value:expr) => {
        $crate::Guard::new($value).named($crate::convenience::expression_name(stringify!($value)))
    };
}

// ============================================================================
// Error Construction
// ============================================================================

/// Build a [`GuardError`](crate::GuardError) from a kind and a literal
/// message or format string.
///
/// Format arguments must be wrapped in `sanitized!()`.
#[macro_export]
macro_rules! guard_err {
    ($kind:expr, $message:literal) => {
        $crate::GuardError::new($kind, $message)
    };
    ($kind:expr, $fmt:literal $(, sanitized!($arg:expr))+ $(,)?) => {
        $crate::GuardError::new($kind, format!($fmt $(, $crate::sanitized!($arg))+))
    };
}

// ============================================================================
// Code Definition
// ============================================================================

/// Define a single error code constant.
///
/// ```rust
/// # use throw_guard::{define_error_code, ErrorKind, namespaces};
/// define_error_code!(OP_QUOTA_EXCEEDED, &namespaces::OP, 250, ErrorKind::InvalidOperation);
/// assert_eq!(OP_QUOTA_EXCEEDED.to_string(), "E-OP-250");
/// ```
#[macro_export]
macro_rules! define_error_code {
    ($name:ident, $namespace:expr, $code:expr, $kind:expr) => {
        pub const $name: $crate::ErrorCode = $crate::ErrorCode::const_new($namespace, $code, $kind);
    };
}

/// Define several error codes in one namespace.
#[macro_export]
macro_rules! define_error_codes {
    ($namespace:expr => { $( $name:ident = ($code:expr, $kind:expr) ),+ $(,)? }) => {
        $(
            $crate::define_error_code!($name, $namespace, $code, $kind);
        )+
    };
}

// ============================================================================
// Enum Reflection
// ============================================================================

/// Implement [`EnumMember`](crate::EnumMember) for a fieldless enum.
///
/// List every variant; discriminants are read from the enum itself.
///
/// ```rust
/// use throw_guard::{impl_enum_member, EnumMember};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Tier { Free = 0, Pro = 10, Team = 20 }
/// impl_enum_member!(Tier: Free, Pro, Team);
///
/// assert_eq!(Tier::from_value(10), Some(Tier::Pro));
/// assert_eq!(Tier::parse_ignore_case("TEAM"), Some(Tier::Team));
/// ```
#[macro_export]
macro_rules! impl_enum_member {
    ($ty:ident : $( $variant:ident ),+ $(,)?) => {
        impl $crate::EnumMember for $ty {
            const VARIANTS: &'static [(&'static str, i64, Self)] = &[
                $( (stringify!($variant), $ty::$variant as i64, $ty::$variant) ),+
            ];
        }
    };
}

// ============================================================================
// Tests
// ============================================================================
