//! End-to-end guard scenarios through the public API.

use throw_guard::{
    guard, impl_enum_member, throw, when, ErrorKind, Guard, GuardError, Result, NO_ARG_NAME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestEnum {
    None = 0,
    One = 1,
    Two = 2,
}
impl_enum_member!(TestEnum: None, One, Two);

// ============================================================================
// Named scenarios
// ============================================================================

#[test]
fn non_empty_collection_passes() {
    let arg = vec![1, 2, 3];
    assert_eq!(guard!(arg).if_empty().unwrap(), vec![1, 2, 3]);
}

#[test]
fn empty_collection_is_bad_argument() {
    let arg: Vec<i32> = Vec::new();
    let err = guard!(arg).if_empty().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);
    assert_eq!(err.message(), "collection is empty");
    assert_eq!(err.arg_name(), Some("arg"));
}

#[test]
fn count_less_than_embeds_count_and_limit() {
    let arg = vec![1, 2, 3];
    let err = guard!(arg).if_count_less_than(5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);
    assert!(err.message().contains('3'));
    assert!(err.message().contains('5'));
}

#[test]
fn between_embeds_value_and_bounds() {
    let arg = 100;
    let err = guard!(arg).if_between(10, 1000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    assert_eq!(err.message(), "value 100 is between 10 and 1000");
    assert_eq!(err.arg_name(), Some("arg"));
}

#[test]
fn member_value_resolves() {
    let arg = 1;
    assert_eq!(guard!(arg).if_not_member_of::<TestEnum>(), Ok(TestEnum::One));
}

#[test]
fn non_member_value_is_bad_argument() {
    let arg = 99;
    let err = guard!(arg).if_not_member_of::<TestEnum>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadArgument);
    assert!(err.message().contains("99"));
    assert!(err.message().contains("TestEnum"));
}

// ============================================================================
// Composition
// ============================================================================

#[derive(Debug)]
struct Job {
    name: String,
    workers: usize,
    tags: Vec<String>,
}

fn build_job(name: Option<&str>, workers: usize, tags: Vec<String>) -> Result<Job> {
    let name = guard!(name).if_null_or_whitespace()?;
    let workers = guard!(workers).if_zero()?;
    let workers = Guard::new(workers).named("workers").if_greater_than(64)?;
    let tags = guard!(tags).if_any_element_null_or_whitespace()?;
    Ok(Job { name: name.to_owned(), workers, tags })
}

#[test]
fn guards_compose_with_question_mark() {
    let job = build_job(Some("nightly"), 4, vec!["etl".into()]).unwrap();
    assert_eq!(job.name, "nightly");
    assert_eq!(job.workers, 4);
    assert_eq!(job.tags, ["etl"]);

    let err = build_job(None, 4, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.arg_name(), Some("name"));

    let err = build_job(Some("nightly"), 65, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    assert_eq!(err.to_string(), "value 65 is greater than 64 (parameter 'workers')");

    let err = build_job(Some("nightly"), 1, vec!["a".into(), " ".into()]).unwrap_err();
    assert_eq!(err.arg_name(), Some("tags"));
}

#[derive(Debug)]
enum ServiceError {
    Config(String),
    Guard(GuardError),
}

impl From<GuardError> for ServiceError {
    fn from(err: GuardError) -> Self {
        ServiceError::Guard(err)
    }
}

fn load(port: u16, strict: bool) -> std::result::Result<u16, ServiceError> {
    let port = guard!(port)
        .with_error(|name| ServiceError::Config(format!("{name} must be set")))
        .when(move || strict)
        .if_zero()?;
    Ok(port)
}

#[test]
fn factory_and_gate_compose() {
    assert_eq!(load(0, false).unwrap(), 0);
    match load(0, true) {
        Err(ServiceError::Config(msg)) => assert_eq!(msg, "port must be set"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(load(8080, true), Ok(8080)));
}

#[test]
fn guard_errors_convert_into_caller_errors() {
    let err: ServiceError = Guard::new(0u16).if_zero().unwrap_err().into();
    match err {
        ServiceError::Guard(inner) => assert_eq!(inner.arg_name(), Some(NO_ARG_NAME)),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn throw_and_when_helpers() {
    fn ratio(a: u32, b: u32) -> Result<u32> {
        when::bad_arg_when(|| b == 0, Some("divisor is zero"))?;
        Ok(a / b)
    }
    assert_eq!(ratio(6, 3).unwrap(), 2);
    assert_eq!(ratio(6, 0).unwrap_err().message(), "divisor is zero");

    let err: GuardError = throw::invalid_enum_value::<TestEnum, ()>(Some("mode"), 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    assert_eq!(err.context("value"), Some("7"));
}

#[test]
fn error_codes_follow_kind() {
    let err = Guard::new(Option::<u8>::None).if_null().unwrap_err();
    assert_eq!(err.code().to_string(), "E-ARG-001");

    let err = Guard::new("/definitely/not/here").if_file_not_found().unwrap_err();
    assert_eq!(err.code().to_string(), "E-FS-101");
}
