//! Decoding and checking of JSON request bodies.
//!
//! Shape errors come from serde while decoding straight into the request
//! type, with the path of the offending field kept. Value rules are declared
//! on the type itself with `validator` and checked once decoding succeeds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// One problem with one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: Vec<String>,
    pub message: String,
}

impl Issue {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        let path = if field.is_empty() {
            vec![]
        } else {
            vec![field.to_string()]
        };
        Self {
            path,
            message: message.into(),
        }
    }
}

/// Decode `body` into `T`. Fields `T` does not declare are ignored.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, Vec<Issue>> {
    if !body.is_object() {
        let message = format!("Expected object, received {}", describe(&body));
        return Err(vec![Issue::new("", message)]);
    }

    serde_path_to_error::deserialize(body).map_err(|e| vec![shape_issue(e)])
}

/// Decode, then check the rules declared on `T`. Every field that breaks a
/// rule is reported, sorted by path.
pub fn parse<T: DeserializeOwned + Validate>(body: Value) -> Result<T, Vec<Issue>> {
    let value: T = decode(body)?;
    value.validate().map_err(rule_issues)?;
    Ok(value)
}

fn shape_issue(error: serde_path_to_error::Error<serde_json::Error>) -> Issue {
    let mut path: Vec<String> = error.path().iter().map(ToString::to_string).collect();
    let message = error.inner().to_string();

    // serde reports a missing field against the object that lacks it
    let missing = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'));

    match missing {
        Some(field) => {
            path.push(field.to_string());
            Issue {
                path,
                message: "Required".to_string(),
            }
        }
        None => Issue { path, message },
    }
}

fn rule_issues(errors: ValidationErrors) -> Vec<Issue> {
    let mut issues: Vec<Issue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = camel_case(&field);
            errors
                .iter()
                .map(move |e| Issue::new(&field, e.message.as_deref().unwrap_or(&*e.code)))
        })
        .collect();
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

/// Rule errors are keyed by Rust field name; bodies use camelCase.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
