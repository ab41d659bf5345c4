//! UUID guards.

use crate::context::{Gated, Ungated};
use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use uuid::Uuid;

impl<'a, E, G> Guard<'a, Uuid, E, G>
where
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Raise [`ErrorKind::BadArgument`] when the UUID is nil.
    pub fn if_nil(self) -> Result<Uuid, E> {
        self.check(Uuid::is_nil, ErrorKind::BadArgument, |_| render(MessageKey::UuidNil, &[]))
    }
}

impl<'a, E> Guard<'a, Option<Uuid>, E, Ungated>
where
    E: From<GuardError>,
{
    /// Raise when the UUID is absent ([`ErrorKind::NullArgument`]) or nil
    /// ([`ErrorKind::BadArgument`]).
    pub fn if_null_or_nil(self) -> Result<Uuid, E> {
        let (value, violation) = self.into_parts()?;
        match value {
            None => Err(violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[]))),
            Some(id) if id.is_nil() => {
                Err(violation.raise(ErrorKind::BadArgument, || render(MessageKey::UuidNil, &[])))
            }
            Some(id) => Ok(id),
        }
    }
}

impl<'a, E> Guard<'a, Option<Uuid>, E, Gated<'a>>
where
    E: From<GuardError>,
{
    /// Gated [`if_null_or_nil`](Guard::if_null_or_nil). The gate is
    /// evaluated once, and only when the UUID is absent or nil.
    pub fn if_null_or_nil(self) -> Result<Option<Uuid>, E> {
        let (value, mut violation) = self.into_parts()?;
        if !violation.fires(value.is_none_or(|id| id.is_nil())) {
            return Ok(value);
        }
        Err(match value {
            None => violation.raise(ErrorKind::NullArgument, || render(MessageKey::NullArg, &[])),
            Some(_) => violation.raise(ErrorKind::BadArgument, || render(MessageKey::UuidNil, &[])),
        })
    }
}
