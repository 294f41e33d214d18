//! HTTP server exposing the dashboard pages and the upstream relay endpoints.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod types;

pub use routes::build_router;
pub use state::AppState;
