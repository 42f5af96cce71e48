//! Web server module
//!
//! Provides the query page, the JSON API and the stats page.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::AnswerResponse;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
