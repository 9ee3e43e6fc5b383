//! Satisfaction rating operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/support/satisfaction_ratings>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::SatisfactionRating;
use crate::pager::ExportOptions;
use crate::resources::require;

impl ZendeskClient {
    /// Fetches a satisfaction rating by its ID.
    pub async fn show_satisfaction_rating(
        &self,
        id: i64,
    ) -> Result<SatisfactionRating, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/satisfaction_ratings/{}.json", id))
            .await?;
        require(envelope.satisfaction_rating, "satisfaction_rating")
    }

    /// Retrieves satisfaction ratings by walking the full listing, within
    /// the page budget carried by `opts`.
    pub async fn satisfaction_scores(
        &self,
        opts: &ExportOptions,
    ) -> Result<Vec<SatisfactionRating>, ZendeskError> {
        self.fetch_all_pages("/api/v2/satisfaction_ratings.json", opts, |envelope| {
            envelope.satisfaction_ratings.take().unwrap_or_default()
        })
        .await
    }

    /// Retrieves every satisfaction rating received since `start_time`
    /// (unix seconds), de-duplicated by rating ID.
    pub async fn satisfaction_scores_incremental(
        &self,
        start_time: i64,
        opts: &ExportOptions,
    ) -> Result<Vec<SatisfactionRating>, ZendeskError> {
        self.fetch_incremental(
            "/api/v2/satisfaction_ratings.json",
            start_time,
            opts,
            |envelope| envelope.satisfaction_ratings.take().unwrap_or_default(),
            |rating| rating.id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server_uri: &str) -> ZendeskClient {
        let config = Config::with_endpoint(server_uri, "agent@example.com", "secret").unwrap();
        ZendeskClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_satisfaction_scores_walks_pages_within_budget() {
        let server = MockServer::start().await;
        let uri = server.uri();

        let page1 = format!(
            r#"{{"satisfaction_ratings":[{{"id":1,"score":"good"}}],"next_page":"{}/api/v2/satisfaction_ratings.json?page=2"}}"#,
            uri
        );
        Mock::given(method("GET"))
            .and(path("/api/v2/satisfaction_ratings.json"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"satisfaction_ratings":[{"id":2,"score":"bad"}],"next_page":null}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/satisfaction_ratings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(page1, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let ratings = test_client(&uri)
            .satisfaction_scores(&ExportOptions::new().with_max_pages(50))
            .await
            .unwrap();
        let ids: Vec<i64> = ratings.iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_satisfaction_scores_incremental_dedups_by_id() {
        let server = MockServer::start().await;
        let uri = server.uri();

        let page1 = format!(
            r#"{{"satisfaction_ratings":[{{"id":1}},{{"id":2}}],"next_page":"{}/api/v2/satisfaction_ratings.json?start_time=200"}}"#,
            uri
        );
        let page2 = format!(
            r#"{{"satisfaction_ratings":[{{"id":2}},{{"id":3}}],"next_page":"{}/api/v2/satisfaction_ratings.json?start_time=200"}}"#,
            uri
        );
        Mock::given(method("GET"))
            .and(path("/api/v2/satisfaction_ratings.json"))
            .and(query_param("start_time", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(page1, "application/json"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/satisfaction_ratings.json"))
            .and(query_param("start_time", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(page2, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let ratings = test_client(&uri)
            .satisfaction_scores_incremental(100, &ExportOptions::new())
            .await
            .unwrap();
        let ids: Vec<i64> = ratings.iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
