//! Default message templates and the catalog that can replace them.
//!
//! Every default message a guard produces comes from a [`MessageKey`]. The
//! English templates compiled into the crate are used unless a
//! [`MessageCatalog`] has been installed with [`install_catalog`]; a catalog
//! only needs to return the keys it translates, everything else falls back to
//! the built-in text.
//!
//! Templates use positional placeholders: `{0}`, `{1}`, ... are replaced by
//! the values handed to [`render`], in order. `{{` and `}}` produce literal
//! braces. Substituted values are sanitized before they reach the message.

use crate::convenience::sanitize;
use std::fmt::{self, Display, Write as _};
use std::sync::OnceLock;

macro_rules! message_keys {
    ($( $variant:ident => ($id:literal, $template:literal) ),+ $(,)?) => {
        /// Key of a default message template.
        ///
        /// The documentation of each variant shows its built-in English template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $(
                #[doc = concat!("`", $template, "`")]
                $variant,
            )+
        }

        impl MessageKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant),+];

            /// Stable identifier, suitable for keying external resource files.
            #[inline]
            pub const fn id(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $id,)+
                }
            }

            /// Built-in English template.
            #[inline]
            pub const fn default_template(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $template,)+
                }
            }
        }
    };
}

message_keys! {
    // Per-kind defaults
    AppException          => ("app_exception", "an application error occurred"),
    BadArg                => ("bad_arg", "value is not valid"),
    DirectoryNotFound     => ("directory_not_found", "directory not found"),
    Exception             => ("exception", "an error occurred"),
    FileNotFound          => ("file_not_found", "file not found"),
    OutOfRange            => ("out_of_range", "value is out of range"),
    InvalidCast           => ("invalid_cast", "value is not of the expected type"),
    EnumNotMember         => ("enum_not_member", "value is not a member of the enumeration"),
    InvalidOp             => ("invalid_op", "operation is not valid in the current state"),
    NotImplemented        => ("not_implemented", "not implemented"),
    NullArg               => ("null_arg", "value cannot be null"),
    ValidationError       => ("validation_error", "validation failed"),
    PredicateIsTrue       => ("predicate_is_true", "predicate is true."),

    // Filesystem
    DirectoryNotFoundPath => ("directory_not_found_path", "directory '{0}' not found"),
    FileNotFoundPath      => ("file_not_found_path", "file '{0}' not found"),

    // Enumerations
    EnumNotMemberOf       => ("enum_not_member_of", "value {0} is not a member of {1}"),
    EnumMemberOf          => ("enum_member_of", "value {0} is a member of {1}"),
    EnumInvalidValue      => ("enum_invalid_value", "value {0} is not valid for {1}"),

    // Strings and characters
    StrEmpty              => ("str_empty", "string is empty"),
    StrWhitespace         => ("str_whitespace", "string is empty or whitespace"),
    CharWhitespace        => ("char_whitespace", "character is whitespace"),

    // Collections
    CollectionEmpty                 => ("collection_empty", "collection is empty"),
    CollectionCountLessThan         => ("collection_count_less_than", "expected at least {1} elements, found {0}"),
    CollectionCountLessThanOrEqual  => ("collection_count_less_than_or_equal", "expected more than {1} elements, found {0}"),
    CollectionCountMoreThan         => ("collection_count_more_than", "expected at most {1} elements, found {0}"),
    CollectionCountMoreThanOrEqual  => ("collection_count_more_than_or_equal", "expected fewer than {1} elements, found {0}"),
    CollectionCountIs               => ("collection_count_is", "expected a count other than {1}, found {0}"),
    CollectionCountIsNot            => ("collection_count_is_not", "expected exactly {1} elements, found {0}"),
    CollectionItemAny               => ("collection_item_any", "an element matches the predicate"),
    CollectionItemAnyNot            => ("collection_item_any_not", "an element does not match the predicate"),
    CollectionItemNullOrEmpty       => ("collection_item_null_or_empty", "an element is null or empty"),
    CollectionItemNullOrWhitespace  => ("collection_item_null_or_whitespace", "an element is null, empty or whitespace"),

    // Identity
    UuidNil               => ("uuid_nil", "UUID is nil"),

    // Numerics
    NumZero               => ("num_zero", "value is zero"),
    NumNotZero            => ("num_not_zero", "value {0} is not zero"),
    NumPositive           => ("num_positive", "value {0} is positive"),
    NumNotPositive        => ("num_not_positive", "value {0} is not positive"),
    NumNegative           => ("num_negative", "value {0} is negative"),
    NumNotNegative        => ("num_not_negative", "value {0} is not negative"),
    NumEqualTo            => ("num_equal_to", "value {0} is equal to {1}"),
    NumNotEqualTo         => ("num_not_equal_to", "value {0} is not equal to {1}"),
    NumLessThan           => ("num_less_than", "value {0} is less than {1}"),
    NumLessThanOrEqualTo  => ("num_less_than_or_equal_to", "value {0} is less than or equal to {1}"),
    NumGreaterThan        => ("num_greater_than", "value {0} is greater than {1}"),
    NumGreaterThanOrEqualTo => ("num_greater_than_or_equal_to", "value {0} is greater than or equal to {1}"),
    NumBetween            => ("num_between", "value {0} is between {1} and {2}"),
    NumNotBetween         => ("num_not_between", "value {0} is not between {1} and {2}"),

    // URIs
    UriIsAbsolute         => ("uri_is_absolute", "URI is absolute"),
    UriIsRelative         => ("uri_is_relative", "URI is relative"),
    UriSchemeIs           => ("uri_scheme_is", "URI scheme is {0}"),
    UriSchemeIsNot        => ("uri_scheme_is_not", "URI scheme is not {0}"),
    UriPortIs             => ("uri_port_is", "URI port is {0}"),
    UriPortIsNot          => ("uri_port_is_not", "URI port is not {0}"),
    UriPortIsDefault      => ("uri_port_is_default", "URI port is the scheme default"),
    UriPortIsNotDefault   => ("uri_port_is_not_default", "URI port is not the scheme default"),
    UriHostIs             => ("uri_host_is", "URI host is {0}"),
    UriHostIsNot          => ("uri_host_is_not", "URI host is not {0}"),
    UriHostNameTypeIs     => ("uri_host_name_type_is", "URI host name type is {0}"),
    UriHostNameTypeIsNot  => ("uri_host_name_type_is_not", "URI host name type is not {0}"),
    UriIsBaseOf           => ("uri_is_base_of", "URI {0} is a base of {1}"),
    UriIsNotBaseOf        => ("uri_is_not_base_of", "URI {0} is not a base of {1}"),
    UriIsFile             => ("uri_is_file", "URI is a file URI"),
    UriIsNotFile          => ("uri_is_not_file", "URI is not a file URI"),
    UriIsUnc              => ("uri_is_unc", "URI is a UNC path"),
    UriIsNotUnc           => ("uri_is_not_unc", "URI is not a UNC path"),
    UriIsLoopback         => ("uri_is_loopback", "URI references a loopback host"),
    UriIsNotLoopback      => ("uri_is_not_loopback", "URI does not reference a loopback host"),

    // Date/time
    DateTimeKindIs        => ("date_time_kind_is", "date/time kind is {0}"),
    DateTimeKindIsNot     => ("date_time_kind_is_not", "date/time kind is not {0}"),
}

impl Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Source of message templates, keyed by [`MessageKey`].
///
/// Implementations return `None` for keys they do not override.
pub trait MessageCatalog {
    /// Template for `key`, using the positional placeholder syntax.
    fn template(&self, key: MessageKey) -> Option<&str>;
}

/// The built-in English templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    #[inline]
    fn template(&self, key: MessageKey) -> Option<&str> {
        Some(key.default_template())
    }
}

static CATALOG: OnceLock<Box<dyn MessageCatalog + Send + Sync>> = OnceLock::new();

/// Install the process-wide catalog.
///
/// Only the first installation takes effect; later calls return `false`
/// and leave the installed catalog untouched.
#[must_use = "a rejected catalog is silently dropped"]
pub fn install_catalog<C>(catalog: C) -> bool
where
    C: MessageCatalog + Send + Sync + 'static,
{
    CATALOG.set(Box::new(catalog)).is_ok()
}

/// Template currently in effect for `key`.
pub fn template(key: MessageKey) -> &'static str {
    CATALOG
        .get()
        .and_then(|catalog| catalog.template(key))
        .unwrap_or_else(|| key.default_template())
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the template for `key` with positional `args`.
///
/// ```rust
/// use throw_guard::{render, MessageKey};
///
/// let msg = render(MessageKey::CollectionCountLessThan, &[&3, &5]);
/// assert_eq!(msg, "expected at least 5 elements, found 3");
/// ```
pub fn render(key: MessageKey, args: &[&dyn Display]) -> String {
    format_template(template(key), args)
}

/// Substitute positional placeholders in `template`.
///
/// Placeholders referring to a missing argument are kept verbatim, as are
/// unbalanced braces.
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut chars = template.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let rest = &template[start + 1..];
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                let closed = digits > 0 && rest.as_bytes().get(digits) == Some(&b'}');
                let arg = closed
                    .then(|| rest[..digits].parse::<usize>().ok())
                    .flatten()
                    .and_then(|index| args.get(index));

                match arg {
                    Some(arg) => {
                        let mut raw = String::new();
                        // Writing into a String cannot fail.
                        let _ = write!(raw, "{}", arg);
                        out.push_str(&sanitize(&raw));
                        for _ in 0..=digits {
                            chars.next();
                        }
                    }
                    None => out.push('{'),
                }
            }
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_positional_arguments_out_of_order() {
        let msg = format_template("expected at least {1} elements, found {0}", &[&3, &5]);
        assert_eq!(msg, "expected at least 5 elements, found 3");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(format_template("{{0}} is {0}", &[&"x"]), "{0} is x");
    }

    #[test]
    fn missing_argument_is_left_verbatim() {
        assert_eq!(format_template("{0} and {1}", &[&1]), "1 and {1}");
        assert_eq!(format_template("{x} {", &[&1]), "{x} {");
    }

    #[test]
    fn substituted_values_are_sanitized() {
        let msg = format_template("value {0}", &[&"bad\nline"]);
        assert_eq!(msg, "value bad?line");
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = MessageKey::ALL.iter().map(MessageKey::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), MessageKey::ALL.len());
    }

    #[test]
    fn default_catalog_covers_every_key() {
        for key in MessageKey::ALL {
            assert_eq!(DefaultCatalog.template(*key), Some(key.default_template()));
        }
    }

    #[test]
    fn render_between() {
        let msg = render(MessageKey::NumBetween, &[&100, &10, &1000]);
        assert_eq!(msg, "value 100 is between 10 and 1000");
    }
}
