use crate::domain::{CreatePersonRequest, Person, UpdatePersonRequest};
use crate::transport::http::handlers::{health, people};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        people::create_person_handler,
        people::list_people_handler,
        people::get_person_handler,
        people::update_person_handler,
        people::delete_person_handler
    ),
    components(schemas(
        Person,
        CreatePersonRequest,
        UpdatePersonRequest,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "people", description = "Person records enriched by name"),
        (name = "health", description = "Liveness and DB reachability")
    )
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/people",
            get(people::list_people_handler).post(people::create_person_handler),
        )
        .route(
            "/people/:id",
            get(people::get_person_handler)
                .patch(people::update_person_handler)
                .delete(people::delete_person_handler),
        )
        .with_state(app_state)
}
