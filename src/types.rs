//! Type-identity guards.
//!
//! These compare the static type of the guarded value against a
//! [`TypeId`]. There is no sensible default error for a type mismatch, so
//! every check takes the factory that builds the error; it receives the
//! resolved argument name.
//!
//! ```rust
//! use throw_guard::{ErrorKind, Guard, GuardError};
//!
//! let err = Guard::new(7u32)
//!     .named("id")
//!     .if_type_is_not::<u64, _, _>(|name| GuardError::new(ErrorKind::InvalidCast, format!("{name} must be u64")))
//!     .unwrap_err();
//! assert_eq!(err.message(), "id must be u64");
//! ```

use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::any::TypeId;

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: 'static,
    G: GateState<'a>,
{
    fn check_type<E2, F>(self, violated: bool, factory: F) -> Result<T, E2>
    where
        E2: From<GuardError>,
        F: FnOnce(&str) -> E2 + 'a,
    {
        self.with_error(factory).check(
            |_| violated,
            ErrorKind::InvalidCast,
            |_| render(MessageKey::InvalidCast, &[]),
        )
    }

    /// Raise `factory(arg_name)` when the value's type is `type_id`.
    pub fn if_type_equals<E2, F>(self, type_id: TypeId, factory: F) -> Result<T, E2>
    where
        E2: From<GuardError>,
        F: FnOnce(&str) -> E2 + 'a,
    {
        self.check_type(TypeId::of::<T>() == type_id, factory)
    }

    /// Raise `factory(arg_name)` unless the value's type is `type_id`.
    pub fn if_type_not_equals<E2, F>(self, type_id: TypeId, factory: F) -> Result<T, E2>
    where
        E2: From<GuardError>,
        F: FnOnce(&str) -> E2 + 'a,
    {
        self.check_type(TypeId::of::<T>() != type_id, factory)
    }

    /// Raise `factory(arg_name)` when the value is a `U`.
    #[inline]
    pub fn if_type_is<U, E2, F>(self, factory: F) -> Result<T, E2>
    where
        U: ?Sized + 'static,
        E2: From<GuardError>,
        F: FnOnce(&str) -> E2 + 'a,
    {
        self.if_type_equals(TypeId::of::<U>(), factory)
    }

    /// Raise `factory(arg_name)` unless the value is a `U`.
    #[inline]
    pub fn if_type_is_not<U, E2, F>(self, factory: F) -> Result<T, E2>
    where
        U: ?Sized + 'static,
        E2: From<GuardError>,
        F: FnOnce(&str) -> E2 + 'a,
    {
        self.if_type_not_equals(TypeId::of::<U>(), factory)
    }
}
