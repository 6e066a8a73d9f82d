use crate::domain::{CreatePersonRequest, Filter, Person, UpdatePersonRequest};
use crate::transport::http::handlers::common::{
    error_response, parse_id, service_error_response, validation_response,
};
use crate::transport::http::types::{AppState, ErrorResponse, ListPeopleQuery};
use crate::validation::Validator;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/people",
    tag = "people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 502, description = "Enrichment API failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_person_handler(
    State(state): State<AppState>,
    request: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON body: {} (expected: {{\"name\", \"surname\"}})", e),
            )
        }
    };

    let mut v = Validator::new();
    request.validate(&mut v);
    if !v.valid() {
        return validation_response(v);
    }

    match state.people.create_person(request).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(e) => service_error_response(e, "create person"),
    }
}

#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    params(ListPeopleQuery),
    responses(
        (status = 200, description = "People matching the filters", body = [Person]),
        (status = 400, description = "Invalid filter or pagination value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_people_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match query {
        Ok(q) => q,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.body_text()),
    };

    let mut v = Validator::new();
    let filter = Filter::parse(&params, &mut v);
    if !v.valid() {
        return validation_response(v);
    }

    match state.people.list_people(&filter).await {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(e) => service_error_response(e, "get people"),
    }
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.people.get_person(id).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(e) => service_error_response(e, "get person"),
    }
}

#[utoipa::path(
    patch,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i64, Path, description = "Person ID")
    ),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person updated", body = Person),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
        }
    };

    let mut v = Validator::new();
    request.validate(&mut v);
    if !v.valid() {
        return validation_response(v);
    }

    match state.people.update_person(id, &request).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(e) => service_error_response(e, "update person"),
    }
}

#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = "people",
    params(
        ("id" = i64, Path, description = "Person ID")
    ),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_person_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.people.delete_person(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e, "delete person"),
    }
}
