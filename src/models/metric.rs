//! Ticket metric models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle metrics recorded for a ticket.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/ticket_metrics>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketMetric {
    /// Unique metric record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Ticket these metrics belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    /// API URL of this metric record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Number of groups the ticket passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_stations: Option<i64>,

    /// Number of assignees the ticket passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_stations: Option<i64>,

    /// Number of times the ticket was reopened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reopens: Option<i64>,

    /// Number of public agent replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<i64>,

    /// When the assignee last updated the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_updated_at: Option<DateTime<Utc>>,

    /// When the requester last updated the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_updated_at: Option<DateTime<Utc>>,

    /// When the status last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_updated_at: Option<DateTime<Utc>>,

    /// When the ticket was first assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initially_assigned_at: Option<DateTime<Utc>>,

    /// When the ticket was last assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,

    /// When the ticket was solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<DateTime<Utc>>,

    /// When the latest comment was added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_comment_added_at: Option<DateTime<Utc>>,

    /// Minutes to the first resolution.
    #[serde(
        rename = "first_resolution_time_in_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_resolution_time: Option<Minutes>,

    /// Minutes to the first reply.
    #[serde(
        rename = "reply_time_in_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub reply_time: Option<Minutes>,

    /// Minutes to the final resolution.
    #[serde(
        rename = "full_resolution_time_in_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_resolution_time: Option<Minutes>,

    /// Minutes the ticket spent waiting on agents.
    #[serde(
        rename = "agent_wait_time_in_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub agent_wait_time: Option<Minutes>,

    /// Minutes the ticket spent waiting on the requester.
    #[serde(
        rename = "requester_wait_time_in_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub requester_wait_time: Option<Minutes>,

    /// When the metric record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the metric record was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A duration reported in both calendar and business minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Minutes {
    /// Elapsed calendar minutes.
    #[serde(default)]
    pub calendar: i64,

    /// Elapsed minutes within business hours.
    #[serde(default)]
    pub business: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_deserializes_renamed_durations() {
        let metric: TicketMetric = serde_json::from_str(
            r#"{
                "id": 33,
                "ticket_id": 7,
                "reopens": 2,
                "reply_time_in_minutes": {"calendar": 60, "business": 30}
            }"#,
        )
        .unwrap();
        assert_eq!(metric.ticket_id, Some(7));
        assert_eq!(
            metric.reply_time,
            Some(Minutes {
                calendar: 60,
                business: 30
            })
        );
    }
}
