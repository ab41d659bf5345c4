//! Presence guards: null, null-or-empty, null-or-whitespace.
//!
//! Absence is modelled with `Option`. On an ungated guard the `if_null*`
//! checks narrow `Option<T>` to `T`. A gated guard may let an absent value
//! through, so the same checks return `Option<T>` there.

use crate::collection::Countable;
use crate::context::{GateState, Gated, Ungated};
use crate::messages::{render, MessageKey};
use crate::{ErrorKind, Guard, GuardError};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

// ============================================================================
// Whitespace
// ============================================================================

/// Values that can be blank.
///
/// Strings are blank when empty or made only of Unicode whitespace. A `char`
/// is blank when it is a space or a tab; other whitespace characters are not.
pub trait Whitespace {
    /// Template used when the value is blank.
    const BLANK_KEY: MessageKey = MessageKey::StrWhitespace;

    /// Whether the value is blank.
    fn is_blank(&self) -> bool;
}

impl Whitespace for str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl Whitespace for String {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl Whitespace for Cow<'_, str> {
    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl Whitespace for char {
    const BLANK_KEY: MessageKey = MessageKey::CharWhitespace;

    #[inline]
    fn is_blank(&self) -> bool {
        matches!(*self, ' ' | '\t')
    }
}

impl Whitespace for OsStr {
    #[inline]
    fn is_blank(&self) -> bool {
        self.to_string_lossy().is_blank()
    }
}

impl Whitespace for OsString {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_os_str().is_blank()
    }
}

impl Whitespace for Path {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_os_str().is_blank()
    }
}

impl Whitespace for PathBuf {
    #[inline]
    fn is_blank(&self) -> bool {
        self.as_path().is_blank()
    }
}

impl<W: Whitespace + ?Sized> Whitespace for &W {
    const BLANK_KEY: MessageKey = W::BLANK_KEY;

    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

// ============================================================================
// Narrowing Checks (ungated)
// ============================================================================

impl<'a, T, E> Guard<'a, Option<T>, E, Ungated>
where
    E: From<GuardError>,
{
    /// Raise [`ErrorKind::NullArgument`] when the value is `None`.
    pub fn if_null(self) -> Result<T, E> {
        let (value, violation) = self.into_parts()?;
        value.ok_or_else(|| violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[])))
    }

    /// Raise when the value is `None` ([`ErrorKind::NullArgument`]) or
    /// empty ([`ErrorKind::BadArgument`]).
    pub fn if_null_or_empty(self) -> Result<T, E>
    where
        T: Countable,
    {
        let (value, violation) = self.into_parts()?;
        match value {
            None => Err(violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[]))),
            Some(v) if v.is_empty_container() => {
                Err(violation.raise(ErrorKind::BadArgument, || render(T::EMPTY_KEY, &[])))
            }
            Some(v) => Ok(v),
        }
    }

    /// Raise when the value is `None` ([`ErrorKind::NullArgument`]) or
    /// blank ([`ErrorKind::BadArgument`]).
    pub fn if_null_or_whitespace(self) -> Result<T, E>
    where
        T: Whitespace,
    {
        let (value, violation) = self.into_parts()?;
        match value {
            None => Err(violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[]))),
            Some(v) if v.is_blank() => {
                Err(violation.raise(ErrorKind::BadArgument, || render(T::BLANK_KEY, &[])))
            }
            Some(v) => Ok(v),
        }
    }
}

// ============================================================================
// Narrowing Checks (gated)
// ============================================================================

impl<'a, T, E> Guard<'a, Option<T>, E, Gated<'a>>
where
    E: From<GuardError>,
{
    /// Raise [`ErrorKind::NullArgument`] when the value is `None` and the
    /// gate holds.
    pub fn if_null(self) -> Result<Option<T>, E> {
        self.check(
            Option::is_none,
            ErrorKind::NullArgument,
            |_| render(MessageKey::NullArg, &[]),
        )
    }

    /// Gated [`if_null_or_empty`](Guard::if_null_or_empty).
    pub fn if_null_or_empty(self) -> Result<Option<T>, E>
    where
        T: Countable,
    {
        let (value, mut violation) = self.into_parts()?;
        let violated = value.as_ref().is_none_or(Countable::is_empty_container);
        if !violation.fires(violated) {
            return Ok(value);
        }
        Err(match value {
            None => violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[])),
            Some(_) => violation.raise(ErrorKind::BadArgument, || render(T::EMPTY_KEY, &[])),
        })
    }

    /// Gated [`if_null_or_whitespace`](Guard::if_null_or_whitespace).
    pub fn if_null_or_whitespace(self) -> Result<Option<T>, E>
    where
        T: Whitespace,
    {
        let (value, mut violation) = self.into_parts()?;
        let violated = value.as_ref().is_none_or(Whitespace::is_blank);
        if !violation.fires(violated) {
            return Ok(value);
        }
        Err(match value {
            None => violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[])),
            Some(_) => violation.raise(ErrorKind::BadArgument, || render(T::BLANK_KEY, &[])),
        })
    }
}

// ============================================================================
// Non-narrowing Checks
// ============================================================================

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Raise [`ErrorKind::BadArgument`] when the container is empty.
    ///
    /// Strings report `string is empty`, other containers
    /// `collection is empty`.
    pub fn if_empty(self) -> Result<T, E>
    where
        T: Countable,
    {
        self.check(
            Countable::is_empty_container,
            ErrorKind::BadArgument,
            |_| render(T::EMPTY_KEY, &[]),
        )
    }

    /// Raise [`ErrorKind::BadArgument`] when the value is blank.
    pub fn if_whitespace(self) -> Result<T, E>
    where
        T: Whitespace,
    {
        self.check(Whitespace::is_blank, ErrorKind::BadArgument, |_| render(T::BLANK_KEY, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard;

    #[test]
    fn if_null_narrows() {
        let token: Option<String> = Some("abc".into());
        assert_eq!(guard!(token).if_null().unwrap(), "abc");

        let missing: Option<u8> = None;
        let err = guard!(missing).if_null().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.message(), "value cannot be null");
        assert_eq!(err.arg_name(), Some("missing"));
    }

    #[test]
    fn gated_if_null_returns_option() {
        let missing: Option<u8> = None;
        assert_eq!(guard!(missing).when(|| false).if_null().unwrap(), None);
        assert!(guard!(missing).when(|| true).if_null().is_err());
        assert_eq!(Guard::new(Some(3)).when(|| true).if_null().unwrap(), Some(3));
    }

    #[test]
    fn null_or_empty_string() {
        let name: Option<&str> = Some("");
        let err = guard!(name).if_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
        assert_eq!(err.message(), "string is empty");

        let name: Option<&str> = None;
        let err = guard!(name).if_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
    }

    #[test]
    fn null_or_empty_collection() {
        let items: Option<Vec<u8>> = Some(Vec::new());
        let err = guard!(items).if_null_or_empty().unwrap_err();
        assert_eq!(err.message(), "collection is empty");

        let items = Some(vec![1u8]);
        assert_eq!(Guard::new(items).if_null_or_empty().unwrap(), vec![1]);
    }

    #[test]
    fn gated_null_or_empty() {
        let items: Option<Vec<u8>> = None;
        assert_eq!(Guard::new(items.clone()).when(|| false).if_null_or_empty().unwrap(), None);
        let err = Guard::new(items).when(|| true).if_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);

        let err = Guard::new(Some(String::new())).when(|| true).if_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
    }

    #[test]
    fn whitespace_strings() {
        assert!("".is_blank());
        assert!(" \t\n\u{2003}".is_blank());
        assert!(!" x ".is_blank());

        let err = Guard::new("   ").if_whitespace().unwrap_err();
        assert_eq!(err.message(), "string is empty or whitespace");
        assert_eq!(Guard::new("ok").if_whitespace().unwrap(), "ok");
    }

    #[test]
    fn whitespace_chars_are_space_and_tab_only() {
        assert!(' '.is_blank());
        assert!('\t'.is_blank());
        assert!(!'\n'.is_blank());
        assert!(!'a'.is_blank());

        let err = Guard::new('\t').if_whitespace().unwrap_err();
        assert_eq!(err.message(), "character is whitespace");
    }

    #[test]
    fn null_or_whitespace() {
        let label: Option<String> = Some(" ".into());
        let err = guard!(label).if_null_or_whitespace().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);

        let label: Option<char> = Some('x');
        assert_eq!(guard!(label).if_null_or_whitespace().unwrap(), 'x');

        let label: Option<String> = None;
        assert_eq!(guard!(label).when(|| false).if_null_or_whitespace().unwrap(), None);
    }

    #[test]
    fn paths_can_be_blank() {
        assert!(Path::new("  ").is_blank());
        assert!(!PathBuf::from("/tmp").is_blank());
    }

    #[test]
    fn if_empty_on_strings_and_maps() {
        let err = Guard::new(String::new()).if_empty().unwrap_err();
        assert_eq!(err.message(), "string is empty");

        let map: std::collections::HashMap<u8, u8> = Default::default();
        let err = Guard::new(&map).if_empty().unwrap_err();
        assert_eq!(err.message(), "collection is empty");
    }
}
