//! User and user identity operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/users>

use crate::client::ZendeskClient;
use crate::envelope::Envelope;
use crate::error::ZendeskError;
use crate::models::{ListOptions, User, UserIdentity};
use crate::pager::ExportOptions;
use crate::resources::{join_ids, require};

impl ZendeskClient {
    /// Fetches a user by their ID.
    pub async fn show_user(&self, id: i64) -> Result<User, ZendeskError> {
        let envelope = self.get(&format!("/api/v2/users/{}.json", id)).await?;
        require(envelope.user, "user")
    }

    /// Fetches several users by ID in one call.
    pub async fn show_many_users(&self, ids: &[i64]) -> Result<Vec<User>, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/users/show_many.json?ids={}", join_ids(ids)))
            .await?;
        require(envelope.users, "users")
    }

    /// Creates a new user.
    pub async fn create_user(&self, user: &User) -> Result<User, ZendeskError> {
        let body = Envelope {
            user: Some(user.clone()),
            ..Default::default()
        };
        let envelope = self.post("/api/v2/users.json", &body).await?;
        require(envelope.user, "user")
    }

    /// Creates a user, or updates the existing user that matches on email
    /// or external ID.
    pub async fn create_or_update_user(&self, user: &User) -> Result<User, ZendeskError> {
        let body = Envelope {
            user: Some(user.clone()),
            ..Default::default()
        };
        let envelope = self.post("/api/v2/users/create_or_update.json", &body).await?;
        require(envelope.user, "user")
    }

    /// Updates a user. Only the fields set on `user` are changed.
    pub async fn update_user(&self, id: i64, user: &User) -> Result<User, ZendeskError> {
        let body = Envelope {
            user: Some(user.clone()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/users/{}.json", id), Some(&body))
            .await?;
        require(envelope.user, "user")
    }

    /// Updates an end user through the end-user endpoint, which accepts a
    /// restricted field set and works with end-user credentials.
    pub async fn update_end_user(&self, id: i64, user: &User) -> Result<User, ZendeskError> {
        let body = Envelope {
            user: Some(user.clone()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/end_users/{}.json", id), Some(&body))
            .await?;
        require(envelope.user, "user")
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete(&format!("/api/v2/users/{}.json", id)).await?;
        Ok(())
    }

    /// Searches users by name or email.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ZendeskError> {
        let envelope = self
            .get(&format!(
                "/api/v2/users/search.json?query={}",
                urlencoding::encode(query)
            ))
            .await?;
        require(envelope.users, "users")
    }

    /// Lists one page of users.
    pub async fn list_users(&self, opts: &ListOptions) -> Result<Vec<User>, ZendeskError> {
        let query = opts.to_query();
        let endpoint = if query.is_empty() {
            "/api/v2/users.json".to_string()
        } else {
            format!("/api/v2/users.json?{}", query)
        };
        let envelope = self.get(&endpoint).await?;
        require(envelope.users, "users")
    }

    /// Lists one page of an organization's users.
    pub async fn list_organization_users(
        &self,
        organization_id: i64,
        opts: &ListOptions,
    ) -> Result<Vec<User>, ZendeskError> {
        let query = opts.to_query();
        let endpoint = if query.is_empty() {
            format!("/api/v2/organizations/{}/users.json", organization_id)
        } else {
            format!(
                "/api/v2/organizations/{}/users.json?{}",
                organization_id, query
            )
        };
        let envelope = self.get(&endpoint).await?;
        require(envelope.users, "users")
    }

    /// Adds tags to a user without replacing their existing tags. Returns
    /// the user's full tag set after the update.
    pub async fn add_user_tags(
        &self,
        id: i64,
        tags: &[String],
    ) -> Result<Vec<String>, ZendeskError> {
        let body = Envelope {
            tags: Some(tags.to_vec()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/users/{}/tags.json", id), Some(&body))
            .await?;
        require(envelope.tags, "tags")
    }

    /// Retrieves every user created or updated since `start_time` (unix
    /// seconds) via the incremental export.
    ///
    /// De-duplicated by (ID, updated_at): the export re-delivers a user on
    /// window overlap, but a genuinely re-updated user is a distinct record.
    pub async fn users_incremental(
        &self,
        start_time: i64,
        opts: &ExportOptions,
    ) -> Result<Vec<User>, ZendeskError> {
        self.fetch_incremental(
            "/api/v2/incremental/users.json",
            start_time,
            opts,
            |envelope| envelope.users.take().unwrap_or_default(),
            |user| (user.id, user.updated_at),
        )
        .await
    }

    /// Retrieves every user by walking the full listing.
    pub async fn all_users(&self, opts: &ExportOptions) -> Result<Vec<User>, ZendeskError> {
        self.fetch_all_pages("/api/v2/users.json", opts, |envelope| {
            envelope.users.take().unwrap_or_default()
        })
        .await
    }

    /// Lists a user's identities.
    pub async fn list_identities(
        &self,
        user_id: i64,
    ) -> Result<Vec<UserIdentity>, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/users/{}/identities.json", user_id))
            .await?;
        require(envelope.identities, "identities")
    }

    /// Fetches one of a user's identities.
    pub async fn show_identity(
        &self,
        user_id: i64,
        identity_id: i64,
    ) -> Result<UserIdentity, ZendeskError> {
        let envelope = self
            .get(&format!(
                "/api/v2/users/{}/identities/{}.json",
                user_id, identity_id
            ))
            .await?;
        require(envelope.identity, "identity")
    }

    /// Adds an identity to a user.
    pub async fn create_identity(
        &self,
        user_id: i64,
        identity: &UserIdentity,
    ) -> Result<UserIdentity, ZendeskError> {
        let body = Envelope {
            identity: Some(identity.clone()),
            ..Default::default()
        };
        let envelope = self
            .post(&format!("/api/v2/users/{}/identities.json", user_id), &body)
            .await?;
        require(envelope.identity, "identity")
    }

    /// Updates one of a user's identities.
    pub async fn update_identity(
        &self,
        user_id: i64,
        identity_id: i64,
        identity: &UserIdentity,
    ) -> Result<UserIdentity, ZendeskError> {
        let body = Envelope {
            identity: Some(identity.clone()),
            ..Default::default()
        };
        let envelope = self
            .put(
                &format!(
                    "/api/v2/users/{}/identities/{}.json",
                    user_id, identity_id
                ),
                Some(&body),
            )
            .await?;
        require(envelope.identity, "identity")
    }

    /// Deletes one of a user's identities.
    pub async fn delete_identity(
        &self,
        user_id: i64,
        identity_id: i64,
    ) -> Result<(), ZendeskError> {
        self.delete(&format!(
            "/api/v2/users/{}/identities/{}.json",
            user_id, identity_id
        ))
        .await?;
        Ok(())
    }

    /// Makes an identity the user's primary one. Returns the user's full
    /// identity list after the change.
    pub async fn make_identity_primary(
        &self,
        user_id: i64,
        identity_id: i64,
    ) -> Result<Vec<UserIdentity>, ZendeskError> {
        let envelope = self
            .put(
                &format!(
                    "/api/v2/users/{}/identities/{}/make_primary",
                    user_id, identity_id
                ),
                None,
            )
            .await?;
        require(envelope.identities, "identities")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server_uri: &str) -> ZendeskClient {
        let config = Config::with_endpoint(server_uri, "agent@example.com", "secret").unwrap();
        ZendeskClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_show_many_users_joins_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/users/show_many.json"))
            .and(query_param("ids", "1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"users":[{"id":1},{"id":2}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let users = test_client(&server.uri())
            .show_many_users(&[1, 2])
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_search_users_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/users/search.json"))
            .and(query_param("query", "roger wilco"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"users":[{"id":9873843,"name":"Roger Wilco"}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let users = test_client(&server.uri())
            .search_users("roger wilco")
            .await
            .unwrap();
        assert_eq!(users[0].name.as_deref(), Some("Roger Wilco"));
    }

    #[tokio::test]
    async fn test_create_or_update_user_wraps_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/users/create_or_update.json"))
            .and(body_partial_json(
                serde_json::json!({"user": {"email": "a@example.com"}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"user":{"id":5,"email":"a@example.com"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let user = User {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };
        let saved = test_client(&server.uri())
            .create_or_update_user(&user)
            .await
            .unwrap();
        assert_eq!(saved.id, Some(5));
    }

    #[tokio::test]
    async fn test_update_end_user_uses_end_user_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/end_users/135.json"))
            .and(body_partial_json(
                serde_json::json!({"user": {"phone": "555-0100"}}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"user":{"id":135,"phone":"555-0100","role":"end-user"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let user = User {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        let updated = test_client(&server.uri())
            .update_end_user(135, &user)
            .await
            .unwrap();
        assert_eq!(updated.role.as_deref(), Some("end-user"));
    }

    #[tokio::test]
    async fn test_list_users_applies_list_options() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/users.json"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "100"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"users":[{"id":1}]}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let opts = ListOptions::new().with_page(2).with_per_page(100);
        let users = test_client(&server.uri()).list_users(&opts).await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_make_identity_primary_returns_identities() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v2/users/135/identities/77/make_primary"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"identities":[{"id":77,"primary":true},{"id":78,"primary":false}]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let identities = test_client(&server.uri())
            .make_identity_primary(135, 77)
            .await
            .unwrap();
        assert_eq!(identities[0].primary, Some(true));
    }
}
