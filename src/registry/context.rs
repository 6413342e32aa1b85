//! Request context and listing parameters for registry operations.

use uuid::Uuid;

/// Request context threaded through registry operations.
///
/// Carries a request id so every log line emitted while serving one caller
/// request can be correlated. The hosting layer usually creates one context
/// per incoming request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: String) -> Self {
        Self { request_id }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

/// Pagination parameters for listing queries.
///
/// `None` for either field means "from the beginning" / "everything".
/// Passing no parameters at all returns the full listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Number of entries to skip (0-based)
    pub start_index: Option<usize>,
    /// Maximum number of entries to return
    pub count: Option<usize>,
}

impl ListParams {
    /// Create empty parameters (full listing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting index.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Set the maximum count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Apply the window to an already-ordered listing.
    pub(crate) fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.start_index.unwrap_or(0))
            .take(self.count.unwrap_or(usize::MAX))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_are_unique() {
        let a = RequestContext::with_generated_id();
        let b = RequestContext::with_generated_id();
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_list_params_window() {
        let items = vec![1, 2, 3, 4, 5];
        let params = ListParams::new().with_start_index(1).with_count(2);
        assert_eq!(params.apply(items), vec![2, 3]);
    }

    #[test]
    fn test_empty_params_return_everything() {
        let items = vec![1, 2, 3];
        assert_eq!(ListParams::new().apply(items.clone()), items);
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        let items = vec![1, 2, 3];
        let params = ListParams::new().with_start_index(10);
        assert!(params.apply(items).is_empty());
    }
}
