//! Date/time kind guards over chrono types.
//!
//! The kind of a timestamp is carried by its type: `DateTime<Utc>` is
//! [`DateTimeKind::Utc`], `DateTime<Local>` is [`DateTimeKind::Local`] and
//! `NaiveDateTime` is [`DateTimeKind::Unspecified`].

use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::fmt;

/// How a timestamp relates to a time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    /// No zone information.
    Unspecified,
    /// Coordinated Universal Time.
    Utc,
    /// The host's local zone.
    Local,
}

impl DateTimeKind {
    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "Unspecified",
            Self::Utc => "Utc",
            Self::Local => "Local",
        }
    }
}

impl fmt::Display for DateTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamps with a known [`DateTimeKind`].
pub trait HasDateTimeKind {
    /// Kind of this timestamp.
    fn date_time_kind(&self) -> DateTimeKind;
}

impl HasDateTimeKind for DateTime<Utc> {
    #[inline]
    fn date_time_kind(&self) -> DateTimeKind {
        DateTimeKind::Utc
    }
}

impl HasDateTimeKind for DateTime<Local> {
    #[inline]
    fn date_time_kind(&self) -> DateTimeKind {
        DateTimeKind::Local
    }
}

impl HasDateTimeKind for NaiveDateTime {
    #[inline]
    fn date_time_kind(&self) -> DateTimeKind {
        DateTimeKind::Unspecified
    }
}

impl<D: HasDateTimeKind + ?Sized> HasDateTimeKind for &D {
    #[inline]
    fn date_time_kind(&self) -> DateTimeKind {
        (**self).date_time_kind()
    }
}

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: HasDateTimeKind,
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Raise [`ErrorKind::BadArgument`] when the timestamp is of `kind`.
    pub fn if_date_time_kind_is(self, kind: DateTimeKind) -> Result<T, E> {
        self.check(
            |v| v.date_time_kind() == kind,
            ErrorKind::BadArgument,
            |_| render(MessageKey::DateTimeKindIs, &[&kind]),
        )
    }

    /// Raise [`ErrorKind::BadArgument`] unless the timestamp is of `kind`.
    pub fn if_date_time_kind_is_not(self, kind: DateTimeKind) -> Result<T, E> {
        self.check(
            |v| v.date_time_kind() != kind,
            ErrorKind::BadArgument,
            |_| render(MessageKey::DateTimeKindIsNot, &[&kind]),
        )
    }
}
