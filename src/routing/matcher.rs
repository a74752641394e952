//! Path matchers for the redirect exclusion policy.
//!
//! # Responsibilities
//! - Match a leading path segment (`/api`, `/api/...`)
//! - Match a whole path exactly (`/favicon.ico`)
//! - Match any segment that looks like a file (`/_next/chunk.js`)
//! - Combine matchers with OR semantics
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Prefixes respect segment boundaries: `api` never matches `/apiary`
//! - No regex to guarantee O(n) matching

use crate::config::ExclusionConfig;

/// Trait for matching request paths against conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches paths whose first segment equals a fixed value.
#[derive(Debug, Clone)]
pub struct SegmentPrefixMatcher {
    segment: String,
}

impl SegmentPrefixMatcher {
    /// Create a matcher for the given first segment. Slashes around the
    /// segment are ignored, so `"api"`, `"/api"` and `"/api/"` are equivalent.
    pub fn new(segment: impl Into<String>) -> Self {
        let segment = segment.into();
        Self {
            segment: normalize_segment(&segment).to_string(),
        }
    }
}

impl PathMatcher for SegmentPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        first_segment(path) == self.segment
    }
}

/// Matches a single path exactly.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl PathMatcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }
}

/// Matches any path containing a segment with a `.` in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedSegmentMatcher;

impl PathMatcher for DottedSegmentMatcher {
    fn matches(&self, path: &str) -> bool {
        path.split('/').any(|segment| segment.contains('.'))
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}

/// Paths the locale router must leave alone.
#[derive(Debug, Default)]
pub struct ExclusionPolicy {
    matcher: AnyMatcher,
}

impl ExclusionPolicy {
    /// A policy that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Compile the configured exclusions into matchers.
    pub fn from_config(config: &ExclusionConfig) -> Self {
        let mut matchers: Vec<Box<dyn PathMatcher>> = Vec::new();

        for segment in &config.segment_prefixes {
            matchers.push(Box::new(SegmentPrefixMatcher::new(segment.as_str())));
        }
        for path in &config.exact_paths {
            matchers.push(Box::new(ExactPathMatcher::new(path.as_str())));
        }
        if config.skip_dotted_segments {
            matchers.push(Box::new(DottedSegmentMatcher));
        }

        Self {
            matcher: AnyMatcher::new(matchers),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

/// Configured segment prefix as it is compared against `first_segment`.
pub fn normalize_segment(segment: &str) -> &str {
    segment.trim_matches('/')
}

/// First `/`-delimited segment of a path, ignoring one leading slash.
pub(crate) fn first_segment(path: &str) -> &str {
    let rest = path.strip_prefix('/').unwrap_or(path);
    rest.split('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("/en/browse"), "en");
        assert_eq!(first_segment("/en"), "en");
        assert_eq!(first_segment("/"), "");
        assert_eq!(first_segment(""), "");
        assert_eq!(first_segment("en/browse"), "en");
        assert_eq!(first_segment("//x"), "");
    }

    #[test]
    fn test_segment_prefix_respects_boundaries() {
        let matcher = SegmentPrefixMatcher::new("api");
        assert!(matcher.matches("/api"));
        assert!(matcher.matches("/api/"));
        assert!(matcher.matches("/api/data"));
        assert!(!matcher.matches("/apiary"));
        assert!(!matcher.matches("/en/api"));
        assert!(!matcher.matches("/API/data"));
    }

    #[test]
    fn test_segment_prefix_trims_slashes() {
        let matcher = SegmentPrefixMatcher::new("/_next/");
        assert!(matcher.matches("/_next/static/chunk"));
        assert_eq!(normalize_segment("/_next/"), "_next");
        assert_eq!(normalize_segment("_next/static"), "_next/static");
    }

    #[test]
    fn test_exact_path_matcher() {
        let matcher = ExactPathMatcher::new("/favicon.ico");
        assert!(matcher.matches("/favicon.ico"));
        assert!(!matcher.matches("/favicon.ico/x"));
        assert!(!matcher.matches("/en/favicon.ico"));
    }

    #[test]
    fn test_dotted_segment_matcher() {
        let matcher = DottedSegmentMatcher;
        assert!(matcher.matches("/logo.png"));
        assert!(matcher.matches("/en/docs/v1.2/intro"));
        assert!(!matcher.matches("/en/browse"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_any_matcher() {
        let matcher = AnyMatcher::new(vec![
            Box::new(SegmentPrefixMatcher::new("api")),
            Box::new(ExactPathMatcher::new("/robots")),
        ]);
        assert_eq!(matcher.len(), 2);
        assert!(matcher.matches("/api/x"));
        assert!(matcher.matches("/robots"));
        assert!(!matcher.matches("/browse"));

        assert!(!AnyMatcher::default().matches("/anything"));
    }

    #[test]
    fn test_default_policy() {
        let policy = ExclusionPolicy::from_config(&ExclusionConfig::default());
        for path in ["/api/data", "/auth/callback", "/_next/chunk.js", "/favicon.ico", "/img/a.png"] {
            assert!(policy.is_excluded(path), "{path} should be excluded");
        }
        for path in ["/", "/browse", "/en/browse", "/apiary", "/authors"] {
            assert!(!policy.is_excluded(path), "{path} should not be excluded");
        }
    }

    #[test]
    fn test_dotted_segments_can_be_disabled() {
        let config = ExclusionConfig {
            skip_dotted_segments: false,
            ..ExclusionConfig::default()
        };
        let policy = ExclusionPolicy::from_config(&config);
        assert!(!policy.is_excluded("/img/a.png"));
        assert!(policy.is_excluded("/favicon.ico"));
    }
}
