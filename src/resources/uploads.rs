//! Attachment upload operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/attachments>

use reqwest::Method;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::{Attachment, Upload};
use crate::resources::require;

impl ZendeskClient {
    /// Fetches an attachment by its ID.
    pub async fn show_attachment(&self, id: i64) -> Result<Attachment, ZendeskError> {
        let envelope = self.get(&format!("/api/v2/attachments/{}.json", id)).await?;
        require(envelope.attachment, "attachment")
    }

    /// Uploads a file to be attached to a comment later, via its upload
    /// token. Pass the token of an earlier upload to add the file to the
    /// same batch.
    pub async fn upload_file(
        &self,
        filename: &str,
        token: Option<&str>,
        data: Vec<u8>,
    ) -> Result<Upload, ZendeskError> {
        let mut endpoint = format!(
            "/api/v2/uploads.json?filename={}",
            urlencoding::encode(filename)
        );
        if let Some(token) = token {
            endpoint.push_str(&format!("&token={}", urlencoding::encode(token)));
        }

        let url = self.resolve(&endpoint)?.to_string();
        let response = self
            .request_raw(Method::POST, &endpoint, "application/binary", data)
            .await?;
        let envelope = self.read_envelope(&Method::POST, &url, response).await?;
        require(envelope.upload, "upload")
    }

    /// Deletes an upload batch by its token, discarding the files.
    pub async fn delete_upload(&self, token: &str) -> Result<(), ZendeskError> {
        self.delete(&format!(
            "/api/v2/uploads/{}.json",
            urlencoding::encode(token)
        ))
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server_uri: &str) -> ZendeskClient {
        let config = Config::with_endpoint(server_uri, "agent@example.com", "secret").unwrap();
        ZendeskClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_show_attachment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/attachments/498483.json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"attachment":{"id":498483,"file_name":"crash.log","size":2532}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let attachment = test_client(&server.uri())
            .show_attachment(498483)
            .await
            .unwrap();
        assert_eq!(attachment.file_name.as_deref(), Some("crash.log"));
        assert_eq!(attachment.size, Some(2532));
    }

    #[tokio::test]
    async fn test_upload_file_sends_bytes_and_returns_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/uploads.json"))
            .and(query_param("filename", "crash.log"))
            .and(header("content-type", "application/binary"))
            .respond_with(ResponseTemplate::new(201).set_body_raw(
                r#"{"upload":{"token":"6bk3gql82em5nmf","attachment":{"id":498483,"file_name":"crash.log"}}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let upload = test_client(&server.uri())
            .upload_file("crash.log", None, b"stack trace".to_vec())
            .await
            .unwrap();
        assert_eq!(upload.token.as_deref(), Some("6bk3gql82em5nmf"));
    }
}
