//! Query-string and form-body parameters.
//!
//! Both are decoded as ordered `(key, value)` pairs so a repeated key does not
//! fail the request: lookups return the first occurrence.

use super::error::AppError;
use axum::{
    Form,
    extract::{
        Query,
        rejection::{FormRejection, QueryRejection},
    },
};
use tracing::debug;

type Pairs = Vec<(String, String)>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Pairs);

impl Params {
    pub fn new(pairs: Pairs) -> Self {
        Self(pairs)
    }

    /// Reads a query string.
    pub fn from_query(query: Result<Query<Pairs>, QueryRejection>) -> Result<Self, AppError> {
        match query {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => Err(AppError::InvalidParameter {
                name: "query",
                reason: rejection.body_text(),
            }),
        }
    }

    /// Reads a form body. A request that is not form-encoded carries no form
    /// fields and yields an empty set; any other failure is reported as such.
    pub fn from_form(form: Result<Form<Pairs>, FormRejection>) -> Result<Self, AppError> {
        match form {
            Ok(Form(pairs)) => Ok(Self(pairs)),
            Err(FormRejection::InvalidFormContentType(rejection)) => {
                debug!(%rejection, "body is not form-encoded");
                Ok(Self::default())
            }
            Err(rejection) => Err(AppError::InvalidParameter {
                name: "body",
                reason: rejection.body_text(),
            }),
        }
    }

    /// First value for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value for `name`, or [`AppError::MissingParameter`].
    pub fn require(&self, name: &'static str) -> Result<&str, AppError> {
        self.first(name).ok_or(AppError::MissingParameter { name })
    }
}
