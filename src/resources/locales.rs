//! Locale operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/locales>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::Locale;
use crate::resources::require;

impl ZendeskClient {
    /// Lists the locales available on the instance.
    pub async fn list_locales(&self) -> Result<Vec<Locale>, ZendeskError> {
        let envelope = self.get("/api/v2/locales.json").await?;
        require(envelope.locales, "locales")
    }

    /// Fetches a locale by its ID.
    pub async fn show_locale(&self, id: i64) -> Result<Locale, ZendeskError> {
        let envelope = self.get(&format!("/api/v2/locales/{}.json", id)).await?;
        require(envelope.locale, "locale")
    }

    /// Fetches a locale by its BCP-47 code, e.g. `en-US`.
    pub async fn show_locale_by_code(&self, code: &str) -> Result<Locale, ZendeskError> {
        let envelope = self
            .get(&format!(
                "/api/v2/locales/{}.json",
                urlencoding::encode(code)
            ))
            .await?;
        require(envelope.locale, "locale")
    }
}
