use std::fmt;
use throw_guard::{guard, ErrorKind, GuardError};

/// Application error that guards feed into.
#[derive(Debug)]
enum ApiError {
    MissingField(String),
    Invalid { field: String, reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField(field) => write!(f, "missing field `{}`", field),
            ApiError::Invalid { field, reason } => write!(f, "invalid `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        let field = err.arg_name().unwrap_or("request").to_owned();
        match err.kind() {
            ErrorKind::NullArgument => ApiError::MissingField(field),
            _ => ApiError::Invalid { field, reason: err.message().to_owned() },
        }
    }
}

struct SignupRequest<'a> {
    email: Option<&'a str>,
    age: i32,
    invite_code: Option<&'a str>,
    invites_required: bool,
}

fn validate(req: &SignupRequest<'_>) -> Result<(), ApiError> {
    let email = req.email;
    let email = guard!(email)
        .with_error(|name| ApiError::MissingField(name.to_owned()))
        .if_null_or_whitespace()?;

    let age = req.age;
    let age = guard!(age).if_less_than(13).map_err(ApiError::from)?;

    // Only enforced when invites are switched on
    let invites_required = req.invites_required;
    let invite_code = req.invite_code;
    let invite_code = guard!(invite_code)
        .with_error(|name| ApiError::Invalid {
            field: name.to_owned(),
            reason: "an invite is required".into(),
        })
        .when(move || invites_required)
        .if_null_or_empty()?;

    println!(
        "   accepted {} (age {}, invite {})",
        email,
        age,
        invite_code.unwrap_or("none")
    );
    Ok(())
}

fn main() {
    println!("--- Custom Errors Example ---\n");

    let requests = [
        SignupRequest { email: Some("a@example.com"), age: 30, invite_code: None, invites_required: false },
        SignupRequest { email: None, age: 30, invite_code: None, invites_required: false },
        SignupRequest { email: Some("b@example.com"), age: 9, invite_code: None, invites_required: false },
        SignupRequest { email: Some("c@example.com"), age: 40, invite_code: None, invites_required: true },
        SignupRequest { email: Some("d@example.com"), age: 40, invite_code: Some("XYZ"), invites_required: true },
    ];

    for req in &requests {
        if let Err(err) = validate(req) {
            println!("   rejected: {}", err);
        }
    }

    // Wrapping a caller error keeps it reachable as the source
    let wrapped = GuardError::custom(ApiError::MissingField("token".into()));
    println!("\n   wrapped: {} [{}]", wrapped, wrapped.code());
    if let Some(inner) = wrapped.source_ref::<ApiError>() {
        println!("   source:  {:?}", inner);
    }
}
