pub mod config;
pub mod domain;
pub mod errors;

pub use domain::intent::{ClassificationResult, Intent};
pub use domain::message::{Channel, Message, DEFAULT_CUSTOMER_NAME};
pub use domain::reply::Reply;
pub use errors::{ApplicationError, DomainError, InterfaceError};
