//! Voice channel operations.
//!
//! Zendesk Talk API docs: <https://developer.zendesk.com/api-reference/voice/talk-api/incremental_exports/>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Call, CallLeg};
use crate::pager::ExportOptions;

impl ZendeskClient {
    /// Retrieves every voice call updated since `start_time` (unix
    /// seconds), de-duplicated by call ID.
    pub async fn calls_incremental(
        &self,
        start_time: i64,
        opts: &ExportOptions,
    ) -> Result<Vec<Call>, ZendeskError> {
        self.fetch_incremental(
            "/api/v2/channels/voice/stats/incremental/calls",
            start_time,
            opts,
            |envelope| envelope.calls.take().unwrap_or_default(),
            |call| call.id,
        )
        .await
    }

    /// Retrieves every voice call leg updated since `start_time` (unix
    /// seconds), de-duplicated by leg ID.
    pub async fn call_legs_incremental(
        &self,
        start_time: i64,
        opts: &ExportOptions,
    ) -> Result<Vec<CallLeg>, ZendeskError> {
        self.fetch_incremental(
            "/api/v2/channels/voice/stats/incremental/legs",
            start_time,
            opts,
            |envelope| envelope.legs.take().unwrap_or_default(),
            |leg| leg.id,
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
    async fn test_call_legs_incremental_walks_and_dedups() {
        let server = MockServer::start().await;
        let uri = server.uri();

        let page1 = format!(
            r#"{{"legs":[{{"id":1,"call_id":10,"type":"agent"}},{{"id":2,"call_id":10,"type":"customer"}}],"next_page":"{}/api/v2/channels/voice/stats/incremental/legs?start_time=200"}}"#,
            uri
        );
        let page2 = format!(
            r#"{{"legs":[{{"id":2,"call_id":10,"type":"customer"}},{{"id":3,"call_id":11,"type":"agent"}}],"next_page":"{}/api/v2/channels/voice/stats/incremental/legs?start_time=200"}}"#,
            uri
        );
        Mock::given(method("GET"))
            .and(path("/api/v2/channels/voice/stats/incremental/legs"))
            .and(query_param("start_time", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(page1, "application/json"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/channels/voice/stats/incremental/legs"))
            .and(query_param("start_time", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(page2, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let legs = test_client(&uri)
            .call_legs_incremental(100, &ExportOptions::new())
            .await
            .unwrap();
        let ids: Vec<i64> = legs.iter().filter_map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(legs[0].leg_type.as_deref(), Some("agent"));
    }
}
