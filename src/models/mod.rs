//! Data models for the Zendesk API.
//!
//! This module contains type definitions for Zendesk resources: tickets,
//! users, organizations, comments, metrics, satisfaction ratings, call legs,
//! and the shared listing options.

mod call;
mod comment;
mod metric;
mod organization;
mod satisfaction;
mod ticket;
mod user;

pub use call::*;
pub use comment::*;
pub use metric::*;
pub use organization::*;
pub use satisfaction::*;
pub use ticket::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Optional parameters for list methods that support offset pagination.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/introduction#pagination>
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ListOptions {
    /// Page of results to retrieve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of results to include per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Creates empty list options (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page of results to retrieve.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Renders these options as a query string, without a leading `?`.
    pub(crate) fn to_query(self) -> String {
        let mut parts = Vec::new();
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        if let Some(per_page) = self.per_page {
            parts.push(format!("per_page={}", per_page));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_options_to_query() {
        assert_eq!(ListOptions::new().to_query(), "");
        assert_eq!(ListOptions::new().with_page(3).to_query(), "page=3");
        assert_eq!(
            ListOptions::new().with_page(2).with_per_page(100).to_query(),
            "page=2&per_page=100"
        );
    }
}
