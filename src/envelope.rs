//! Request/response envelopes for the Zendesk API.
//!
//! Every API call wraps its payload in a JSON object keyed by resource kind:
//! `{"ticket": {...}}` for single records, `{"tickets": [...]}` for lists.
//! List responses additionally carry a `next_page` continuation reference
//! that the pagination walker follows. [`Envelope`] models that shape in
//! both directions; [`ErrorEnvelope`] models the body of non-2xx responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorDetail, ZendeskError};
use crate::models::{
    Attachment, Call, CallLeg, Locale, Organization, OrganizationMembership, SatisfactionRating,
    Ticket, TicketComment, TicketField, TicketForm, TicketMetric, Upload, User, UserIdentity,
};

/// The envelope of one API request or response.
///
/// Only the fields relevant to a given call are populated; everything else
/// stays `None` and is skipped on serialization. Pagination metadata
/// (`next_page`, `end_time`, `count`) only appears on list responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Envelope {
    /// A single attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,

    /// Multiple attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// A single ticket comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,

    /// Multiple ticket comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<TicketComment>>,

    /// A single user identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<UserIdentity>,

    /// Multiple user identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<UserIdentity>>,

    /// A single locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Multiple locales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<Locale>>,

    /// A single organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// Multiple organizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<Organization>>,

    /// A single organization membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_membership: Option<OrganizationMembership>,

    /// Multiple organization memberships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_memberships: Option<Vec<OrganizationMembership>>,

    /// Tag names, for tag endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// A single ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Ticket>,

    /// Multiple tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<Ticket>>,

    /// A single ticket field definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_field: Option<TicketField>,

    /// Multiple ticket field definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_fields: Option<Vec<TicketField>>,

    /// A single ticket form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_form: Option<TicketForm>,

    /// Multiple ticket forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_forms: Option<Vec<TicketForm>>,

    /// A single ticket metric record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_metric: Option<TicketMetric>,

    /// Multiple ticket metric records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_metrics: Option<Vec<TicketMetric>>,

    /// A file upload result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<Upload>,

    /// A single user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Multiple users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,

    /// A single satisfaction rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaction_rating: Option<SatisfactionRating>,

    /// Multiple satisfaction ratings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaction_ratings: Option<Vec<SatisfactionRating>>,

    /// Voice calls, from the Talk incremental export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls: Option<Vec<Call>>,

    /// Voice call legs, from the Talk incremental export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<CallLeg>>,

    /// Continuation reference to the next page: an absolute URL, absent or
    /// null when no further page exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,

    /// End of the window covered by an incremental export page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    /// Number of records on this page, for incremental exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl Envelope {
    /// The continuation reference, with empty strings normalized to `None`.
    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|p| !p.is_empty())
    }
}

/// The body of a non-2xx response.
///
/// Shape: `{"error": ..., "description": ..., "details": {field: [{...}]}}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorEnvelope {
    /// Machine-readable error type.
    #[serde(rename = "error", default)]
    pub kind: Option<String>,

    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,

    /// Per-field validation details.
    #[serde(default)]
    pub details: Option<HashMap<String, Vec<ErrorDetail>>>,
}

impl ErrorEnvelope {
    /// Fallback envelope used when an error body fails to decode.
    pub fn unknown() -> Self {
        ErrorEnvelope {
            kind: Some("Unknown".to_string()),
            description: Some(
                "Oops! Something went wrong when parsing the error response.".to_string(),
            ),
            details: None,
        }
    }

    /// Converts this envelope into the error reported to the caller,
    /// attaching the request context.
    pub fn into_error(self, method: &str, url: &str, status: u16) -> ZendeskError {
        ZendeskError::Api {
            method: method.to_string(),
            url: url.to_string(),
            status,
            kind: self.kind,
            description: self.description,
            details: self.details,
        }
    }
}
