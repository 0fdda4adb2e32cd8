//! Web layer for the arrivals board.
//!
//! Provides the server-rendered pages and the JSON variants of the same
//! endpoints, selected by the request's Accept header.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
