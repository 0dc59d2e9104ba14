//! Request context and timing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand_simple()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

fn rand_simple() -> u32 {
    // Simple pseudo-random for WASM (no std::random)
    static mut SEED: u32 = 12345;
    unsafe {
        SEED = SEED.wrapping_mul(1103515245).wrapping_add(12345);
        SEED
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request context handed to page handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique ID for this request.
    pub request_id: RequestId,
    /// Path without the query string.
    pub path: String,
    /// Raw query string ("" when absent).
    pub query: String,
    /// Timing marks for the request.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Build a context from a path-with-query string.
    pub fn new(path_with_query: impl Into<String>) -> Self {
        let path_with_query = path_with_query.into();
        let (path, query) = match path_with_query.split_once('?') {
            Some((p, q)) => (p.to_string(), q.to_string()),
            None => (path_with_query, String::new()),
        };

        Self {
            request_id: RequestId::generate(),
            path,
            query,
            timing: TimingContext::new(),
        }
    }

    /// Path segments, skipping empty ones.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Parse the query string into a key/value map (last value wins).
    pub fn query_params(&self) -> HashMap<String, String> {
        self.query
            .split('&')
            .filter_map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next()?;
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), parts.next().unwrap_or("").to_string()))
            })
            .collect()
    }
}

/// Timing marks for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Elapsed time since the request started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from request start to a recorded mark.
    pub fn time_to(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_query_split() {
        let ctx = RequestContext::new("/products?sort=price-low&q=shirt");
        assert_eq!(ctx.path, "/products");
        assert_eq!(ctx.query, "sort=price-low&q=shirt");

        let params = ctx.query_params();
        assert_eq!(params.get("sort").map(String::as_str), Some("price-low"));
        assert_eq!(params.get("q").map(String::as_str), Some("shirt"));
    }

    #[test]
    fn test_no_query() {
        let ctx = RequestContext::new("/cart");
        assert_eq!(ctx.path, "/cart");
        assert!(ctx.query.is_empty());
        assert!(ctx.query_params().is_empty());
    }

    #[test]
    fn test_segments() {
        let ctx = RequestContext::new("/products/category/electronics");
        assert_eq!(ctx.segments(), vec!["products", "category", "electronics"]);
        assert!(RequestContext::new("/").segments().is_empty());
    }

    #[test]
    fn test_request_ids_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_timing_marks() {
        let mut timing = TimingContext::new();
        timing.mark("shell_sent");
        assert!(timing.time_to("shell_sent").is_some());
        assert!(timing.time_to("missing").is_none());
    }
}
