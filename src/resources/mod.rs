//! Per-resource operations on [`crate::ZendeskClient`].
//!
//! Each submodule is an `impl` block adding one resource family's methods to
//! the client: single-shot CRUD calls over the client core, and bulk
//! retrieval calls over the engine in [`crate::pager`].

mod calls;
mod comments;
mod locales;
mod metrics;
mod organizations;
mod satisfaction;
mod tickets;
mod uploads;
mod users;

use crate::error::ZendeskError;

/// Unwraps a payload field a successful response is required to carry.
pub(crate) fn require<T>(value: Option<T>, resource: &'static str) -> Result<T, ZendeskError> {
    value.ok_or(ZendeskError::MissingPayload(resource))
}

/// Renders an identifier list as the comma-joined form the API expects.
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[]), "");
        assert_eq!(join_ids(&[42]), "42");
        assert_eq!(join_ids(&[1, 2, 35436]), "1,2,35436");
    }

    #[test]
    fn test_require_missing_payload() {
        let err = require(None::<i64>, "ticket").unwrap_err();
        assert!(err.to_string().contains("ticket"));
    }
}
