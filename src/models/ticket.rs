//! Ticket models: tickets, custom fields, ticket fields, and ticket forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TicketComment, User, Via};

/// A Zendesk ticket.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/tickets>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ticket {
    /// Unique ticket identifier, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Identifier from an external system, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Ticket type: "problem", "incident", "question", or "task".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Subject before server-side templating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_subject: Option<String>,

    /// First comment body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Priority: "urgent", "high", "normal", or "low".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Comment to add when creating or updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<TicketComment>,

    /// Status: "new", "open", "pending", "hold", "solved", or "closed".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Original recipient address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Requesting user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,

    /// Inline requester, accepted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Box<User>>,

    /// Submitting user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_id: Option<i64>,

    /// Assigned agent's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,

    /// Requester's organization ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    /// Assigned group's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    /// IDs of users CC'd on the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator_ids: Option<Vec<i64>>,

    /// IDs of end users CC'd by email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_cc_ids: Option<Vec<i64>>,

    /// IDs of agents following the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_ids: Option<Vec<i64>>,

    /// Associated forum topic ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_topic_id: Option<i64>,

    /// Problem ticket this incident is linked to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i64>,

    /// True when this problem ticket has linked incidents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_incidents: Option<bool>,

    /// Due date for task tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,

    /// Tags applied to the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Channel the ticket was created through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,

    /// When the ticket was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the ticket was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Values of custom ticket fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,

    /// Satisfaction rating attached to the ticket, if offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaction_rating: Option<SatisfactionRatingRef>,

    /// Brand the ticket is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,

    /// Ticket form the ticket uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_form_id: Option<i64>,

    /// Ticket this one was created as a follow-up to.
    #[serde(
        rename = "via_followup_source_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub followup_source_id: Option<i64>,

    /// Whether comments are public by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Tags to add on update, without replacing existing tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_tags: Option<Vec<String>>,

    /// Tags to remove on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_tags: Option<Vec<String>>,
}

/// An embedded satisfaction rating summary on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatisfactionRatingRef {
    /// Rating identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Score: "good", "bad", "offered", or "unoffered".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,

    /// Free-text comment left with the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A custom field value on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    /// The custom ticket field's ID.
    pub id: i64,

    /// The field value; shape depends on the field type.
    pub value: serde_json::Value,
}

/// A ticket field definition, system or custom.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketField {
    /// Field identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Field type, e.g. "subject", "text", "tagger".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description shown to agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Relative position in the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Whether the field is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether agents must fill the field to solve a ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Validation pattern for "regexp" fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regexp_for_validation: Option<String>,

    /// Whether end users can see the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_portal: Option<bool>,

    /// Whether end users can edit the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable_in_portal: Option<bool>,

    /// Whether end users must fill the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_in_portal: Option<bool>,

    /// When the field was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the field was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Options for system dropdown fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_field_options: Option<Vec<TicketFieldOption>>,

    /// Options for custom dropdown fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_options: Option<Vec<TicketFieldOption>>,
}

/// A selectable option on a dropdown ticket field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketFieldOption {
    /// Option identifier (custom options only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name before server-side templating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,

    /// Stored value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether this is the default option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// A ticket form, grouping ticket fields for display.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketForm {
    /// Form identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Form name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Name before server-side templating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,

    /// Name shown to end users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Display name before server-side templating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_display_name: Option<String>,

    /// Whether end users can see the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_user_visible: Option<bool>,

    /// Relative position among forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// IDs of the fields on this form, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_field_ids: Option<Vec<i64>>,

    /// Whether the form is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether this is the default form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    /// When the form was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the form was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Whether the form applies to all brands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_all_brands: Option<bool>,

    /// Brands the form is restricted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_brand_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_serializes_only_set_fields() {
        let ticket = Ticket {
            subject: Some("Printer on fire".to_string()),
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["subject"], "Printer on fire");
        assert_eq!(json["priority"], "urgent");
        assert!(json.get("id").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_ticket_deserializes_type_rename() {
        let ticket: Ticket = serde_json::from_str(
            r#"{"id": 35436, "type": "incident", "subject": "Help!", "is_public": true}"#,
        )
        .unwrap();
        assert_eq!(ticket.id, Some(35436));
        assert_eq!(ticket.ticket_type.as_deref(), Some("incident"));
        assert_eq!(ticket.is_public, Some(true));
    }

    #[test]
    fn test_custom_field_value_is_freeform() {
        let field: CustomField =
            serde_json::from_str(r#"{"id": 27642, "value": ["745", "yes"]}"#).unwrap();
        assert_eq!(field.id, 27642);
        assert!(field.value.is_array());
    }
}
