//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path (+ query)
//!     → matcher.rs (exclusion policy: assets, api, auth)
//!     → router.rs (first segment vs supported locales)
//!     → Return: Excluded | PassThrough | Redirect
//!
//! Compilation (at startup):
//!     LocaleConfig
//!     → LocaleSet + ExclusionPolicy
//!     → Freeze as immutable LocaleRouter
//! ```
//!
//! # Design Decisions
//! - Compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparisons only)
//! - Deterministic: same input always yields the same decision

pub mod matcher;
pub mod router;

pub use matcher::{ExclusionPolicy, PathMatcher};
pub use router::{LocaleDecision, LocaleRouter};
