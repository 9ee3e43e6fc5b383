//! Ticket comment operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/ticket_comments>

use std::collections::HashMap;

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::TicketComment;
use crate::pager::ExportOptions;
use crate::resources::require;

impl ZendeskClient {
    /// Lists a ticket's comments.
    pub async fn list_ticket_comments(
        &self,
        ticket_id: i64,
    ) -> Result<Vec<TicketComment>, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/tickets/{}/comments.json", ticket_id))
            .await?;
        require(envelope.comments, "comments")
    }

    /// Retrieves the comments of every listed ticket, keyed by ticket ID.
    ///
    /// Comments have no bulk listing endpoint, so each ticket is probed
    /// individually. Tickets that no longer exist (404) are simply absent
    /// from the map; any other failure aborts with no partial result.
    pub async fn all_ticket_comments(
        &self,
        ticket_ids: &[i64],
        opts: &ExportOptions,
    ) -> Result<HashMap<i64, Vec<TicketComment>>, ZendeskError> {
        let results = self
            .scan_ids(
                ticket_ids.iter().copied(),
                |id| format!("/api/v2/tickets/{}/comments.json", id),
                opts,
                |envelope| envelope.comments.take().unwrap_or_default(),
            )
            .await?;
        Ok(results.into_iter().collect())
    }
}
