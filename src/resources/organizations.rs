//! Organization and organization membership operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/organizations>

use crate::client::ZendeskClient;
use crate::envelope::Envelope;
use crate::error::ZendeskError;
use crate::models::{ListOptions, Organization, OrganizationMembership};
use crate::resources::require;

impl ZendeskClient {
    /// Fetches an organization by its ID.
    pub async fn show_organization(&self, id: i64) -> Result<Organization, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/organizations/{}.json", id))
            .await?;
        require(envelope.organization, "organization")
    }

    /// Creates a new organization.
    pub async fn create_organization(
        &self,
        organization: &Organization,
    ) -> Result<Organization, ZendeskError> {
        let body = Envelope {
            organization: Some(organization.clone()),
            ..Default::default()
        };
        let envelope = self.post("/api/v2/organizations.json", &body).await?;
        require(envelope.organization, "organization")
    }

    /// Updates an organization. Only the fields set on `organization` are
    /// changed.
    pub async fn update_organization(
        &self,
        id: i64,
        organization: &Organization,
    ) -> Result<Organization, ZendeskError> {
        let body = Envelope {
            organization: Some(organization.clone()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/organizations/{}.json", id), Some(&body))
            .await?;
        require(envelope.organization, "organization")
    }

    /// Deletes an organization.
    pub async fn delete_organization(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete(&format!("/api/v2/organizations/{}.json", id))
            .await?;
        Ok(())
    }

    /// Lists one page of organizations.
    pub async fn list_organizations(
        &self,
        opts: &ListOptions,
    ) -> Result<Vec<Organization>, ZendeskError> {
        let query = opts.to_query();
        let endpoint = if query.is_empty() {
            "/api/v2/organizations.json".to_string()
        } else {
            format!("/api/v2/organizations.json?{}", query)
        };
        let envelope = self.get(&endpoint).await?;
        require(envelope.organizations, "organizations")
    }

    /// Adds a user to an organization.
    pub async fn create_organization_membership(
        &self,
        membership: &OrganizationMembership,
    ) -> Result<OrganizationMembership, ZendeskError> {
        let body = Envelope {
            organization_membership: Some(membership.clone()),
            ..Default::default()
        };
        let envelope = self
            .post("/api/v2/organization_memberships.json", &body)
            .await?;
        require(envelope.organization_membership, "organization_membership")
    }

    /// Lists a user's organization memberships.
    pub async fn list_organization_memberships(
        &self,
        user_id: i64,
    ) -> Result<Vec<OrganizationMembership>, ZendeskError> {
        let envelope = self
            .get(&format!(
                "/api/v2/users/{}/organization_memberships.json",
                user_id
            ))
            .await?;
        require(envelope.organization_memberships, "organization_memberships")
    }

    /// Removes a user from an organization.
    pub async fn delete_organization_membership(
        &self,
        user_id: i64,
        membership_id: i64,
    ) -> Result<(), ZendeskError> {
        self.delete(&format!(
            "/api/v2/users/{}/organization_memberships/{}.json",
            user_id, membership_id
        ))
        .await?;
        Ok(())
    }
}
