//! Person records and the constraints used to list them.

pub mod filter;
pub mod person;

pub use filter::Filter;
pub use person::{CreatePersonRequest, NewPerson, Person, UpdatePersonRequest};
