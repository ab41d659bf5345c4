//! Numeric guards: sign checks, comparisons and inclusive ranges.
//!
//! Sign checks raise [`ErrorKind::BadArgument`]; comparisons and range
//! checks raise [`ErrorKind::ValueOutOfRange`]. Ranges are inclusive at
//! both ends.
//!
//! Floating-point values are totally ordered for these checks: `NaN`
//! equals `NaN` and sorts below every number, and `-0.0` equals `0.0`.

use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::cmp::Ordering;
use std::fmt;

/// Primitive numbers the guards can compare.
pub trait Numeric: Copy + fmt::Display {
    /// Additive identity.
    const ZERO: Self;

    /// Total order used by every numeric guard.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

macro_rules! impl_numeric_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        // Neither is NaN, so partial_cmp is total here.
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )+
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

// ============================================================================
// Guards
// ============================================================================

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: Numeric,
    E: From<GuardError>,
    G: GateState<'a>,
{
    #[inline]
    fn check_sign<P>(self, violated: P, key: MessageKey) -> Result<T, E>
    where
        P: FnOnce(Ordering) -> bool,
    {
        self.check(
            |v| violated(v.compare(&T::ZERO)),
            ErrorKind::BadArgument,
            |v| render(key, &[v]),
        )
    }

    #[inline]
    fn check_against<P>(self, limit: T, violated: P, key: MessageKey) -> Result<T, E>
    where
        P: FnOnce(Ordering) -> bool,
    {
        self.check(
            |v| violated(v.compare(&limit)),
            ErrorKind::ValueOutOfRange,
            |v| render(key, &[v, &limit]),
        )
    }

    /// Raise when the value is zero.
    pub fn if_zero(self) -> Result<T, E> {
        self.check_sign(Ordering::is_eq, MessageKey::NumZero)
    }

    /// Raise when the value is not zero.
    pub fn if_not_zero(self) -> Result<T, E> {
        self.check_sign(Ordering::is_ne, MessageKey::NumNotZero)
    }

    /// Raise when the value is greater than zero.
    pub fn if_positive(self) -> Result<T, E> {
        self.check_sign(Ordering::is_gt, MessageKey::NumPositive)
    }

    /// Raise when the value is zero or less.
    pub fn if_not_positive(self) -> Result<T, E> {
        self.check_sign(Ordering::is_le, MessageKey::NumNotPositive)
    }

    /// Raise when the value is less than zero.
    pub fn if_negative(self) -> Result<T, E> {
        self.check_sign(Ordering::is_lt, MessageKey::NumNegative)
    }

    /// Raise when the value is zero or more.
    pub fn if_not_negative(self) -> Result<T, E> {
        self.check_sign(Ordering::is_ge, MessageKey::NumNotNegative)
    }

    /// Raise when the value equals `other`.
    pub fn if_equal_to(self, other: T) -> Result<T, E> {
        self.check_against(other, Ordering::is_eq, MessageKey::NumEqualTo)
    }

    /// Raise when the value differs from `other`.
    pub fn if_not_equal_to(self, other: T) -> Result<T, E> {
        self.check_against(other, Ordering::is_ne, MessageKey::NumNotEqualTo)
    }

    /// Raise when the value is below `limit`.
    pub fn if_less_than(self, limit: T) -> Result<T, E> {
        self.check_against(limit, Ordering::is_lt, MessageKey::NumLessThan)
    }

    /// Raise when the value is `limit` or below.
    pub fn if_less_than_or_equal_to(self, limit: T) -> Result<T, E> {
        self.check_against(limit, Ordering::is_le, MessageKey::NumLessThanOrEqualTo)
    }

    /// Raise when the value is above `limit`.
    pub fn if_greater_than(self, limit: T) -> Result<T, E> {
        self.check_against(limit, Ordering::is_gt, MessageKey::NumGreaterThan)
    }

    /// Raise when the value is `limit` or above.
    pub fn if_greater_than_or_equal_to(self, limit: T) -> Result<T, E> {
        self.check_against(limit, Ordering::is_ge, MessageKey::NumGreaterThanOrEqualTo)
    }

    /// Raise when `min <= value <= max`.
    ///
    /// An inverted range (`min > max`) contains nothing, so this never
    /// raises for one.
    pub fn if_between(self, min: T, max: T) -> Result<T, E> {
        self.check(
            |v| v.compare(&min).is_ge() && v.compare(&max).is_le(),
            ErrorKind::ValueOutOfRange,
            |v| render(MessageKey::NumBetween, &[v, &min, &max]),
        )
    }

    /// Raise when the value lies outside `min..=max`.
    pub fn if_not_between(self, min: T, max: T) -> Result<T, E> {
        self.check(
            |v| v.compare(&min).is_lt() || v.compare(&max).is_gt(),
            ErrorKind::ValueOutOfRange,
            |v| render(MessageKey::NumNotBetween, &[v, &min, &max]),
        )
    }
}
