pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;
pub mod validation;

// Convenience re-exports (keeps call-sites clean)
pub use app::{PersonService, ServiceError};
pub use domain::{Filter, Person};
pub use infra::Config;
pub use storage::{PersonRepository, PgPersonRepository};
pub use validation::Validator;
