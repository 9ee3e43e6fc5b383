//! Organization and organization membership models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Zendesk organization.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/organizations>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Organization {
    /// Unique organization identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Identifier from an external system, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the organization was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the organization was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Email domains mapped to this organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_names: Option<Vec<String>>,

    /// Details visible to agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Notes visible to agents only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Group new tickets from this organization are assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    /// Whether members can see each other's tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_tickets: Option<bool>,

    /// Whether members can comment on each other's tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_comments: Option<bool>,

    /// Values of custom organization fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_fields: Option<HashMap<String, serde_json::Value>>,
}

/// An association between a user and an organization.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/organization_memberships>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrganizationMembership {
    /// Unique membership identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Member user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Organization's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,

    /// Whether this is the user's default organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    /// When the membership was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the membership was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A translation locale available on the instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Locale {
    /// Unique locale identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// API URL of this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// BCP-47 code, e.g. "en-US".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the locale was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the locale was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
