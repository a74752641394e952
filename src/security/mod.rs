//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (nosniff, frame denial, referrer policy)
//! ```
//!
//! Request body size limits are applied in the HTTP layer stack from
//! `security.max_body_size`.

pub mod headers;

pub use headers::apply_security_headers;
