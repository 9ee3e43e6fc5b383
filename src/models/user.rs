//! User and user identity models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Zendesk user.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/users>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    /// Unique user identifier, assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifier from an external system, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Agent alias shown to end users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// When the user was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the user was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// False when the user has been deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Whether the user's primary identity is verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Whether the user is shared from a different instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,

    /// Whether the user is a shared agent from a different instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_agent: Option<bool>,

    /// BCP-47 locale code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Locale identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_id: Option<i64>,

    /// Time zone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Last sign-in time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,

    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Primary phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Agent signature appended to public comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Details visible to agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Notes visible to agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Organization the user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    /// Role: "end-user", "agent", or "admin".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Custom role, for enterprise agents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,

    /// Whether the user is a forum moderator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<bool>,

    /// Which tickets the user may access: "organization", "groups",
    /// "assigned", or "requested".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_restriction: Option<String>,

    /// Whether the user may only create private comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_private_comments: Option<bool>,

    /// Tags applied to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Whether the agent has restricted ticket access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_agent: Option<bool>,

    /// Whether the user is suspended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,

    /// Values of custom user fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_fields: Option<HashMap<String, serde_json::Value>>,
}

/// A user identity: an email address, phone number, or similar contact point.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/user_identities>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserIdentity {
    /// Unique identity identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Owning user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Identity type: "email", "twitter", "facebook", "google",
    /// "phone_number", "agent_forwarding", or "sdk".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<String>,

    /// The identity value, e.g. the email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the identity has been verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    /// Whether this is the user's primary identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    /// When the identity was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the identity was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Number of delivery failures for this identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undeliverable_count: Option<i64>,

    /// Deliverability state, e.g. "deliverable".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverable_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_round_trips_timestamps() {
        let user: User = serde_json::from_str(
            r#"{"id": 9873843, "name": "Roger Wilco", "updated_at": "2019-05-13T09:31:22Z"}"#,
        )
        .unwrap();
        assert_eq!(user.id, Some(9873843));
        assert!(user.updated_at.is_some());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["updated_at"], "2019-05-13T09:31:22Z");
    }

    #[test]
    fn test_identity_type_rename() {
        let identity: UserIdentity = serde_json::from_str(
            r#"{"id": 35436, "user_id": 135, "type": "email", "value": "a@example.com"}"#,
        )
        .unwrap();
        assert_eq!(identity.identity_type.as_deref(), Some("email"));
    }
}
