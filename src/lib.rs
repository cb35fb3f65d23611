//! A four-function calculator and an in-memory user/post store.

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::Limits;
pub use error::{CalcError, StoreError, StoreResult, ValidationError};
pub use models::{Post, PostQuery, PostSummary, User, UserStats, UserUpdate, UserView};
pub use store::Store;
