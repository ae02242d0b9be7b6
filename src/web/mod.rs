use axum::Router;

use crate::state::AppState;

pub mod flash;
pub mod products;
pub mod views;

// Browser-facing routes, mounted at the root.
pub fn create_web_router() -> Router<AppState> {
    products::router()
}
