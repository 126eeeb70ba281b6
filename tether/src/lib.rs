#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

use crate::error::TetherError;

pub type Result<T> = std::result::Result<T, TetherError>;
pub const JSON_API_HEADER: &str = "application/vnd.api+json";

#[macro_use]
mod macros;

pub mod error;
pub mod field;
pub mod model;
pub mod record;
pub mod resolver;
