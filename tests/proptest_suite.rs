//! Property-based tests for throw_guard
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use proptest::prelude::*;
use throw_guard::{ErrorKind, Guard, GuardError, MessageKey, NO_ARG_NAME, render, sanitized};

#[derive(Debug, PartialEq)]
enum AppError {
    Factory(String),
    Guard(ErrorKind),
}

impl From<GuardError> for AppError {
    fn from(err: GuardError) -> Self {
        AppError::Guard(err.kind())
    }
}

// ============================================================================
// IDENTITY PROPERTIES
// ============================================================================

proptest! {
    /// A passing check hands back exactly the value it was given
    #[test]
    fn passing_checks_return_input(items in prop::collection::vec(any::<i64>(), 1..50)) {
        let back = Guard::new(items.clone()).if_empty().unwrap();
        prop_assert_eq!(&back, &items);

        let back = Guard::new(items.clone()).if_count_less_than(items.len()).unwrap();
        prop_assert_eq!(back, items);
    }

    /// Non-zero numbers survive if_zero untouched
    #[test]
    fn non_zero_passes_through(v in any::<i32>().prop_filter("non-zero", |v| *v != 0)) {
        prop_assert_eq!(Guard::new(v).if_zero().unwrap(), v);
    }

    /// Non-blank strings survive if_whitespace untouched
    #[test]
    fn non_blank_strings_pass_through(s in "[a-z]{1,8}( [a-z]{1,8}){0,3}") {
        prop_assert_eq!(Guard::new(s.as_str()).if_whitespace().unwrap(), s.as_str());
    }
}

// ============================================================================
// GATE PROPERTIES
// ============================================================================

proptest! {
    /// A gated check raises exactly when the check fails and the gate holds
    #[test]
    fn gate_is_a_conjunction(v in -3i32..3, gate in any::<bool>()) {
        let result = Guard::new(v).when(move || gate).if_negative();
        prop_assert_eq!(result.is_err(), v < 0 && gate);
        if let Ok(back) = result {
            prop_assert_eq!(back, v);
        }
    }

    /// An absent gate always raises NullArgument on `condition`
    #[test]
    fn absent_gate_always_raises(v in any::<i32>()) {
        let err = Guard::new(v)
            .named("v")
            .when_some(None::<fn() -> bool>)
            .if_zero()
            .unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::NullArgument);
        prop_assert_eq!(err.arg_name(), Some("condition"));
    }
}

// ============================================================================
// MESSAGE AND FACTORY PROPERTIES
// ============================================================================

proptest! {
    /// An override message is used verbatim
    #[test]
    fn override_message_is_verbatim(msg in "\\PC{0,200}") {
        let err = Guard::new(0u8).message(msg.clone()).if_zero().unwrap_err();
        prop_assert_eq!(err.message(), msg.as_str());
        prop_assert_eq!(err.arg_name(), Some(NO_ARG_NAME));
    }

    /// A factory wins over any message and receives the argument name
    #[test]
    fn factory_takes_precedence(name in "[a-z_]{1,16}", msg in "\\PC{0,50}") {
        let err = Guard::new(0u8)
            .named(name.clone())
            .message(msg)
            .with_error(|n| AppError::Factory(n.to_owned()))
            .if_zero()
            .unwrap_err();
        prop_assert_eq!(err, AppError::Factory(name));
    }

    /// Default messages are bounded and free of control characters
    #[test]
    fn rendered_values_are_sanitized(s in "\\PC{0,1000}") {
        let rendered = render(MessageKey::UriSchemeIs, &[&s]);
        prop_assert!(!rendered.chars().any(char::is_control));
        prop_assert!(rendered.len() <= "URI scheme is ".len() + 256);
    }

    /// Sanitized macro must preserve short printable text
    #[test]
    fn sanitized_macro_properties(s in "[ -~]{1,200}") {
        prop_assert_eq!(sanitized!(s), s);
    }
}

// ============================================================================
// NUMERIC RANGE PROPERTIES
// ============================================================================

proptest! {
    /// if_between and if_not_between partition every value
    #[test]
    fn between_partitions(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let inside = Guard::new(v).if_between(min, max).is_err();
        let outside = Guard::new(v).if_not_between(min, max).is_err();
        prop_assert_ne!(inside, outside);
        prop_assert_eq!(inside, (min..=max).contains(&v));
    }

    /// Range errors are ValueOutOfRange and embed the operands
    #[test]
    fn between_message_embeds_operands(min in -100i32..0, max in 0i32..100) {
        let v = min;
        let err = Guard::new(v).if_between(min, max).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
        let expected = format!("value {v} is between {min} and {max}");
        prop_assert_eq!(err.message(), expected.as_str());
    }

    /// Comparison guards agree with the primitive operators
    #[test]
    fn comparisons_agree_with_operators(v in any::<u16>(), limit in any::<u16>()) {
        prop_assert_eq!(Guard::new(v).if_less_than(limit).is_err(), v < limit);
        prop_assert_eq!(Guard::new(v).if_less_than_or_equal_to(limit).is_err(), v <= limit);
        prop_assert_eq!(Guard::new(v).if_greater_than(limit).is_err(), v > limit);
        prop_assert_eq!(Guard::new(v).if_greater_than_or_equal_to(limit).is_err(), v >= limit);
        prop_assert_eq!(Guard::new(v).if_equal_to(limit).is_err(), v == limit);
        prop_assert_eq!(Guard::new(v).if_not_equal_to(limit).is_err(), v != limit);
    }

    /// Count guards agree with the collection length
    #[test]
    fn count_guards_agree_with_len(len in 0usize..20, limit in 0usize..20) {
        let items = vec![0u8; len];
        prop_assert_eq!(Guard::new(&items).if_count_less_than(limit).is_err(), len < limit);
        prop_assert_eq!(Guard::new(&items).if_count_more_than(limit).is_err(), len > limit);
        prop_assert_eq!(Guard::new(&items).if_count_is(limit).is_err(), len == limit);
        prop_assert_eq!(Guard::new(&items).if_count_is_not(limit).is_err(), len != limit);
    }
}

// ============================================================================
// LOG VIEW PROPERTIES
// ============================================================================

proptest! {
    /// The structured log view is bounded no matter the message size
    #[test]
    fn violation_log_is_bounded(msg in "\\PC{0,5000}") {
        let err = GuardError::new(ErrorKind::Generic, msg).with_context("path", "x".repeat(5000));
        let mut buffer = String::new();
        err.violation_log().write_to(&mut buffer).unwrap();
        prop_assert!(buffer.len() < 4096);
    }
}
