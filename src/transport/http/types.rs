use crate::app::PersonService;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub people: PersonService,
}

/// Error body for every non-2xx response: `{"errors": {field: message}}`.
///
/// Errors not tied to a field use the key `msg`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn msg(message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert("msg".to_string(), message.into());
        Self { errors }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Query string accepted by `GET /people`, for the OpenAPI document only.
///
/// The handler reads raw pairs so repeated keys reach `Filter::parse`, where
/// the first occurrence wins.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPeopleQuery {
    /// Filter by name
    pub name: Option<String>,
    /// Filter by surname
    pub surname: Option<String>,
    /// Filter by age (integer)
    pub age: Option<String>,
    /// Filter by gender
    pub gender: Option<String>,
    /// Filter by nationality
    pub nationality: Option<String>,
    /// Maximum number of rows (non-negative integer)
    pub limit: Option<String>,
    /// Number of rows to skip (non-negative integer)
    pub offset: Option<String>,
}
