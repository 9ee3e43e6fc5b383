//! Satisfaction rating models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A satisfaction rating left by a ticket requester.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/support/satisfaction_ratings>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SatisfactionRating {
    /// Unique rating identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Agent assigned when the rating was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,

    /// Group assigned when the rating was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    /// User who submitted the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,

    /// Ticket the rating applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    /// Score: "good", "bad", "offered", or "unoffered".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    /// When the rating was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the rating was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
