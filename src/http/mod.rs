//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (request ID)
//!     → middleware/locale.rs (pass through, or 307 to /<default>/...)
//!     → pages.rs (placeholder pages) | api.rs (JSON) | 404 fallback
//!     → Send to client
//! ```

pub mod api;
pub mod middleware;
pub mod pages;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use server::{AppServer, AppState, ServerError};
