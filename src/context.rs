//! The guard protocol: a value plus the context needed to raise a violation.
//!
//! A [`Guard`] wraps the value under test together with an optional argument
//! name, an optional message override, an optional error factory and a gate
//! state. Check methods (defined across the domain modules) consume the guard
//! and either hand the value back untouched or raise.
//!
//! # Raise path
//!
//! When a check is violated:
//!
//! 1. If a factory was supplied with [`Guard::with_error`], the error is
//!    exactly what the factory returns for the resolved argument name. A
//!    message override is ignored.
//! 2. Otherwise a [`GuardError`] of the check's kind is raised with the
//!    override message, or the check's default template rendered with the
//!    offending values, attributed to the resolved argument name.
//!
//! The resolved argument name is the one given to [`Guard::named`] (or
//! captured by [`guard!`](crate::guard)), else [`NO_ARG_NAME`].
//!
//! # Gates
//!
//! [`Guard::when`] adds a gate: the violation only fires when the check
//! fails **and** the gate returns `true`. The gate runs at most once, and
//! only after the check has failed. [`Guard::when_some`] accepts a gate that
//! may be absent; an absent gate is itself a violation
//! ([`ErrorKind::NullArgument`] on `condition`), raised before the check is
//! evaluated.

use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GuardError};
use std::borrow::Cow;
use std::fmt;

/// Argument name used when none was supplied.
pub const NO_ARG_NAME: &str = "<unnamed>";

/// Argument name attributed to an absent gate.
const GATE_ARG_NAME: &str = "condition";

type Factory<'a, E> = Box<dyn FnOnce(&str) -> E + 'a>;
type Gate<'a> = Box<dyn FnOnce() -> bool + 'a>;

// ============================================================================
// Gate States
// ============================================================================

/// Gate state of a guard without a condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ungated;

/// Gate state of a guard with a (possibly absent) condition.
pub struct Gated<'a> {
    gate: Option<Gate<'a>>,
}

impl fmt::Debug for Gated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gated")
            .field("present", &self.gate.is_some())
            .finish()
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Ungated {}
    impl Sealed for super::Gated<'_> {}
}

/// Gate state of a guard: [`Ungated`] or [`Gated`].
///
/// Sealed; the two states are the only implementations.
pub trait GateState<'a>: sealed::Sealed {
    #[doc(hidden)]
    fn arm(self) -> Result<GateSlot<'a>, GuardError>;
}

impl<'a> GateState<'a> for Ungated {
    #[inline]
    fn arm(self) -> Result<GateSlot<'a>, GuardError> {
        Ok(GateSlot::Open)
    }
}

impl<'a> GateState<'a> for Gated<'a> {
    #[inline]
    fn arm(self) -> Result<GateSlot<'a>, GuardError> {
        match self.gate {
            Some(gate) => Ok(GateSlot::Pending(gate)),
            None => Err(GuardError::null_argument(
                GATE_ARG_NAME,
                render(MessageKey::NullArg, &[]),
            )),
        }
    }
}

/// Armed gate, evaluated lazily and at most once.
#[doc(hidden)]
pub enum GateSlot<'a> {
    Open,
    Closed,
    Pending(Gate<'a>),
}

// ============================================================================
// Guard
// ============================================================================

/// A value under validation, with its violation context.
///
/// `E` is the error type raised by the checks; it defaults to [`GuardError`]
/// and changes when a factory is installed. `G` is the gate state.
#[must_use = "a guard does nothing until a check is called"]
pub struct Guard<'a, T, E = GuardError, G = Ungated> {
    value: T,
    arg_name: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    factory: Option<Factory<'a, E>>,
    gate: G,
}

impl<'a, T> Guard<'a, T> {
    /// Start an unnamed guard over `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            arg_name: None,
            message: None,
            factory: None,
            gate: Ungated,
        }
    }
}

impl<'a, T, E, G> Guard<'a, T, E, G> {
    /// Name the argument errors are attributed to.
    #[inline]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.arg_name = Some(name.into());
        self
    }

    /// Replace the default message of whichever check fails.
    #[inline]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Raise exactly what `factory` returns for the resolved argument name.
    ///
    /// The factory takes precedence over any message override. The new error
    /// type must still absorb a [`GuardError`], which is raised for an absent
    /// gate.
    #[inline]
    pub fn with_error<E2, F>(self, factory: F) -> Guard<'a, T, E2, G>
    where
        F: FnOnce(&str) -> E2 + 'a,
    {
        Guard {
            value: self.value,
            arg_name: self.arg_name,
            message: self.message,
            factory: Some(Box::new(factory)),
            gate: self.gate,
        }
    }

    /// The value under test.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Resolved argument name.
    #[inline]
    pub fn arg_name(&self) -> &str {
        self.arg_name.as_deref().unwrap_or(NO_ARG_NAME)
    }

    /// Give the value back without checking it.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<'a, T, E> Guard<'a, T, E, Ungated> {
    /// Only raise when `gate` also returns `true`.
    #[inline]
    pub fn when<F>(self, gate: F) -> Guard<'a, T, E, Gated<'a>>
    where
        F: FnOnce() -> bool + 'a,
    {
        self.when_some(Some(gate))
    }

    /// Like [`when`](Self::when), for a gate that may be absent.
    ///
    /// An absent gate makes every check raise [`ErrorKind::NullArgument`]
    /// with argument name `condition`.
    pub fn when_some<F>(self, gate: Option<F>) -> Guard<'a, T, E, Gated<'a>>
    where
        F: FnOnce() -> bool + 'a,
    {
        Guard {
            value: self.value,
            arg_name: self.arg_name,
            message: self.message,
            factory: self.factory,
            gate: Gated {
                gate: gate.map(|g| Box::new(g) as Gate<'a>),
            },
        }
    }
}

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Split into the value and the pending violation.
    ///
    /// Fails only for an absent gate.
    pub(crate) fn into_parts(self) -> Result<(T, Violation<'a, E>), E> {
        let gate = self.gate.arm().map_err(E::from)?;
        Ok((
            self.value,
            Violation {
                arg_name: self.arg_name,
                message: self.message,
                factory: self.factory,
                gate,
            },
        ))
    }

    /// Raise `kind` when `violated` holds for the value (and the gate agrees).
    pub(crate) fn check<P, M>(self, violated: P, kind: ErrorKind, default: M) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        M: FnOnce(&T) -> String,
    {
        let (value, mut violation) = self.into_parts()?;
        if violation.fires(violated(&value)) {
            return Err(violation.raise(kind, || default(&value)));
        }
        Ok(value)
    }
}

impl<T: fmt::Debug, E, G: fmt::Debug> fmt::Debug for Guard<'_, T, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("value", &self.value)
            .field("arg_name", &self.arg_name)
            .field("message", &self.message)
            .field("factory", &self.factory.as_ref().map(|_| "<PRESENT>"))
            .field("gate", &self.gate)
            .finish()
    }
}

// ============================================================================
// Violation
// ============================================================================

/// Everything needed to raise, detached from the value.
pub(crate) struct Violation<'a, E> {
    arg_name: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    factory: Option<Factory<'a, E>>,
    gate: GateSlot<'a>,
}

impl<'a, E> Violation<'a, E>
where
    E: From<GuardError>,
{
    /// Whether a failed check should raise. Runs the gate on first failure.
    pub(crate) fn fires(&mut self, violated: bool) -> bool {
        if !violated {
            return false;
        }
        match std::mem::replace(&mut self.gate, GateSlot::Closed) {
            GateSlot::Open => {
                self.gate = GateSlot::Open;
                true
            }
            GateSlot::Closed => false,
            GateSlot::Pending(gate) => {
                let open = gate();
                if open {
                    self.gate = GateSlot::Open;
                }
                open
            }
        }
    }

    /// Build the error for `kind`.
    #[inline]
    pub(crate) fn raise<M>(self, kind: ErrorKind, default: M) -> E
    where
        M: FnOnce() -> String,
    {
        self.raise_with(kind, default, |err| err)
    }

    /// Build the error for `kind`, letting `decorate` attach context to the
    /// default error. Factory errors are returned as-is.
    pub(crate) fn raise_with<M, D>(self, kind: ErrorKind, default: M, decorate: D) -> E
    where
        M: FnOnce() -> String,
        D: FnOnce(GuardError) -> GuardError,
    {
        let name = self.arg_name.unwrap_or(Cow::Borrowed(NO_ARG_NAME));
        if let Some(factory) = self.factory {
            return factory(&name);
        }
        let message = self.message.unwrap_or_else(|| Cow::Owned(default()));
        E::from(decorate(GuardError::new(kind, message).with_arg_name(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum AppError {
        Rejected(String),
        Guard(ErrorKind),
    }

    impl From<GuardError> for AppError {
        fn from(err: GuardError) -> Self {
            AppError::Guard(err.kind())
        }
    }

    #[test]
    fn passes_value_through() {
        let items = vec![1, 2, 3];
        let ptr = items.as_ptr();
        let back = Guard::new(items).if_empty().unwrap();
        assert_eq!(back.as_ptr(), ptr);
    }

    #[test]
    fn unnamed_guard_uses_sentinel() {
        let err = Guard::new(0).if_zero().unwrap_err();
        assert_eq!(err.arg_name(), Some(NO_ARG_NAME));
    }

    #[test]
    fn message_override_is_exact() {
        let err = Guard::new(0)
            .named("retries")
            .message("retries must be set")
            .if_zero()
            .unwrap_err();
        assert_eq!(err.message(), "retries must be set");
        assert_eq!(err.arg_name(), Some("retries"));
    }

    #[test]
    fn factory_wins_over_message() {
        let err = Guard::new(0)
            .named("retries")
            .message("ignored")
            .with_error(|name| AppError::Rejected(format!("{name} rejected")))
            .if_zero()
            .unwrap_err();
        assert_eq!(err, AppError::Rejected("retries rejected".into()));
    }

    #[test]
    fn factory_not_called_on_success() {
        let called = Cell::new(false);
        let ok = Guard::new(5)
            .with_error(|_| {
                called.set(true);
                AppError::Rejected(String::new())
            })
            .if_zero();
        assert_eq!(ok, Ok(5));
        assert!(!called.get());
    }

    #[test]
    fn gate_conjunction() {
        for (value, gate, raises) in [(0, true, true), (0, false, false), (1, true, false), (1, false, false)] {
            let result = Guard::new(value).when(|| gate).if_zero();
            assert_eq!(result.is_err(), raises, "value={value} gate={gate}");
            if !raises {
                assert_eq!(result, Ok(value));
            }
        }
    }

    #[test]
    fn gate_not_run_when_check_passes() {
        let ran = Cell::new(false);
        let result = Guard::new(1)
            .when(|| {
                ran.set(true);
                true
            })
            .if_zero();
        assert_eq!(result, Ok(1));
        assert!(!ran.get());
    }

    #[test]
    fn absent_gate_raises_before_the_check() {
        let evaluated = Cell::new(false);
        let err = Guard::new(vec![1])
            .named("items")
            .when_some(None::<fn() -> bool>)
            .if_any_element(|_| {
                evaluated.set(true);
                true
            })
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.arg_name(), Some("condition"));
        assert!(!evaluated.get());
    }

    #[test]
    fn absent_gate_bypasses_factory() {
        let err = Guard::new(0)
            .with_error(|_| AppError::Rejected("factory".into()))
            .when_some(None::<fn() -> bool>)
            .if_zero()
            .unwrap_err();
        assert_eq!(err, AppError::Guard(ErrorKind::NullArgument));
    }

    #[test]
    fn closed_gate_stays_closed_across_checks() {
        let mut violation = Guard::<'_, u8>::new(0)
            .when(|| false)
            .into_parts()
            .map(|(_, v)| v)
            .unwrap();
        assert!(!violation.fires(true));
        assert!(!violation.fires(true));
    }

    #[test]
    fn accessors() {
        let g = Guard::new("abc").named("code");
        assert_eq!(g.arg_name(), "code");
        assert_eq!(*g.value(), "abc");
        assert_eq!(g.into_inner(), "abc");
        assert_eq!(Guard::new(1).arg_name(), NO_ARG_NAME);
    }

    #[test]
    fn debug_hides_factory() {
        let g = Guard::new(1).with_error(|_| GuardError::from_kind(ErrorKind::Generic));
        let dbg = format!("{:?}", g);
        assert!(dbg.contains("<PRESENT>"));
        assert!(dbg.contains("Ungated"));
    }
}
