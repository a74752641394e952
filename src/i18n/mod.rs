//! Internationalization subsystem.
//!
//! # Data Flow
//! ```text
//! [locales] config section
//!     → locale.rs (validate codes, build LocaleSet)
//!     → shared via Arc<LocaleRouter> with the HTTP layer
//!
//! Page rendering:
//!     resolved locale → strings.rs (copy, English fallback)
//! ```

pub mod locale;
pub mod strings;

pub use locale::{Locale, LocaleError, LocaleSet};
pub use strings::PageStrings;
