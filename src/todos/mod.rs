//! Todo domain: model, file-backed store, and REST routes.

pub mod model;
pub mod routes;
pub mod store;

pub use model::{TodoItem, UpdateFields};
pub use routes::todo_routes;
pub use store::TodoStore;
