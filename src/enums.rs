//! Enumeration membership guards.
//!
//! Rust enums carry no runtime reflection, so membership is described by
//! [`EnumMember`], usually implemented with
//! [`impl_enum_member!`](crate::impl_enum_member). Raw inputs (integers and
//! strings) are resolved against the declared variants through
//! [`EnumInput`].

use crate::context::{Gated, Ungated};
use crate::messages::{render, MessageKey};
use crate::{ErrorKind, GateState, Guard, GuardError};
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// EnumMember
// ============================================================================

/// A fieldless enum with a known set of variants.
pub trait EnumMember: Sized + Copy + PartialEq + 'static {
    /// Every variant: name, discriminant and value.
    const VARIANTS: &'static [(&'static str, i64, Self)];

    /// Fully qualified type name, used in messages.
    #[inline]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The variant whose discriminant is `value`.
    fn from_value(value: i64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, discriminant, _)| *discriminant == value)
            .map(|(_, _, variant)| *variant)
    }

    /// The variant named `text`, ignoring ASCII case and surrounding
    /// whitespace.
    ///
    /// A numeric string resolves only when it is a declared discriminant.
    fn parse_ignore_case(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some((_, _, variant)) = Self::VARIANTS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(text))
        {
            return Some(*variant);
        }
        text.parse::<i64>().ok().and_then(Self::from_value)
    }

    /// Declared name of this variant.
    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, _, variant)| *variant == self)
            .map_or("", |(name, _, _)| *name)
    }

    /// Declared discriminant of this variant.
    fn value(self) -> Option<i64> {
        Self::VARIANTS
            .iter()
            .find(|(_, _, variant)| *variant == self)
            .map(|(_, discriminant, _)| *discriminant)
    }
}

// ============================================================================
// EnumInput
// ============================================================================

/// Raw values that may name an enum member.
pub trait EnumInput: fmt::Display {
    /// The member of `M` this value denotes, if any.
    fn resolve<M: EnumMember>(&self) -> Option<M>;
}

macro_rules! impl_enum_input_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EnumInput for $ty {
                #[inline]
                fn resolve<M: EnumMember>(&self) -> Option<M> {
                    i64::try_from(*self).ok().and_then(M::from_value)
                }
            }
        )+
    };
}

impl_enum_input_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl EnumInput for str {
    #[inline]
    fn resolve<M: EnumMember>(&self) -> Option<M> {
        M::parse_ignore_case(self)
    }
}

impl EnumInput for String {
    #[inline]
    fn resolve<M: EnumMember>(&self) -> Option<M> {
        M::parse_ignore_case(self)
    }
}

impl EnumInput for Cow<'_, str> {
    #[inline]
    fn resolve<M: EnumMember>(&self) -> Option<M> {
        M::parse_ignore_case(self)
    }
}

impl<I: EnumInput + ?Sized> EnumInput for &I {
    #[inline]
    fn resolve<M: EnumMember>(&self) -> Option<M> {
        (**self).resolve()
    }
}

fn not_member_message<M: EnumMember>(value: &dyn fmt::Display) -> String {
    render(MessageKey::EnumNotMemberOf, &[value, &M::type_name()])
}

// ============================================================================
// Guards
// ============================================================================

impl<'a, T, E> Guard<'a, T, E, Ungated>
where
    T: EnumInput,
    E: From<GuardError>,
{
    /// Resolve the value to a member of `M`, raising
    /// [`ErrorKind::BadArgument`] when it is not one.
    pub fn if_not_member_of<M: EnumMember>(self) -> Result<M, E> {
        let (value, violation) = self.into_parts()?;
        value
            .resolve::<M>()
            .ok_or_else(|| violation.raise(ErrorKind::BadArgument, || not_member_message::<M>(&value)))
    }
}

impl<'a, T, E> Guard<'a, T, E, Gated<'a>>
where
    T: EnumInput,
    E: From<GuardError>,
{
    /// Gated [`if_not_member_of`](Guard::if_not_member_of): a non-member
    /// passes as `None` when the gate is closed.
    pub fn if_not_member_of<M: EnumMember>(self) -> Result<Option<M>, E> {
        let (value, mut violation) = self.into_parts()?;
        let member = value.resolve::<M>();
        if violation.fires(member.is_none()) {
            return Err(violation.raise(ErrorKind::BadArgument, || not_member_message::<M>(&value)));
        }
        Ok(member)
    }
}

impl<'a, T, E, G> Guard<'a, T, E, G>
where
    T: EnumInput,
    E: From<GuardError>,
    G: GateState<'a>,
{
    /// Raise [`ErrorKind::BadArgument`] when the value is a member of `M`.
    pub fn if_member_of<M: EnumMember>(self) -> Result<T, E> {
        self.check(
            |v| v.resolve::<M>().is_some(),
            ErrorKind::BadArgument,
            |v| render(MessageKey::EnumMemberOf, &[v, &M::type_name()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{guard, impl_enum_member};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low = 1,
        High = 5,
    }
    impl_enum_member!(Level: Low, High);

    #[test]
    fn reflection() {
        assert_eq!(Level::from_value(5), Some(Level::High));
        assert_eq!(Level::from_value(2), None);
        assert_eq!(Level::High.name(), "High");
        assert_eq!(Level::Low.value(), Some(1));
        assert!(Level::type_name().ends_with("Level"));
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Level::parse_ignore_case("low"), Some(Level::Low));
        assert_eq!(Level::parse_ignore_case(" HIGH "), Some(Level::High));
        assert_eq!(Level::parse_ignore_case("5"), Some(Level::High));
        assert_eq!(Level::parse_ignore_case("3"), None);
        assert_eq!(Level::parse_ignore_case("medium"), None);
    }

    #[test]
    fn not_member_of_resolves() {
        assert_eq!(Guard::new(1).if_not_member_of::<Level>(), Ok(Level::Low));
        assert_eq!(Guard::new("high").if_not_member_of::<Level>(), Ok(Level::High));
        assert_eq!(Guard::new(String::from("Low")).if_not_member_of::<Level>(), Ok(Level::Low));
    }

    #[test]
    fn not_member_of_raises() {
        let level = 9u8;
        let err = guard!(level).if_not_member_of::<Level>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadArgument);
        assert_eq!(err.arg_name(), Some("level"));
        assert!(err.message().starts_with("value 9 is not a member of "));
        assert!(err.message().ends_with("Level"));

        assert!(Guard::new(-1i64).if_not_member_of::<Level>().is_err());
        assert!(Guard::new(u64::MAX).if_not_member_of::<Level>().is_err());
    }

    #[test]
    fn gated_not_member_of() {
        assert_eq!(Guard::new(9).when(|| false).if_not_member_of::<Level>(), Ok(None));
        assert_eq!(Guard::new(5).when(|| true).if_not_member_of::<Level>(), Ok(Some(Level::High)));
        assert!(Guard::new(9).when(|| true).if_not_member_of::<Level>().is_err());
    }

    #[test]
    fn member_of_raises_for_members() {
        let err = Guard::new(5).if_member_of::<Level>().unwrap_err();
        assert!(err.message().starts_with("value 5 is a member of "));
        assert_eq!(Guard::new(4).if_member_of::<Level>(), Ok(4));
        assert_eq!(Guard::new("none").if_member_of::<Level>(), Ok("none"));
    }
}
