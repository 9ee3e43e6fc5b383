//! Ticket metric operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/ticket_metrics>

use crate::client::ZendeskClient;
use crate::error::ZendeskError;
use crate::models::TicketMetric;
use crate::pager::ExportOptions;
use crate::resources::require;

impl ZendeskClient {
    /// Fetches a ticket metric record by its own ID.
    pub async fn show_ticket_metric(&self, id: i64) -> Result<TicketMetric, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/ticket_metrics/{}.json", id))
            .await?;
        require(envelope.ticket_metric, "ticket_metric")
    }

    /// Retrieves the metric record of every listed ticket.
    ///
    /// The bulk metrics listing omits archived tickets, so each ticket is
    /// probed via its own metrics endpoint. Tickets without a record (404)
    /// are skipped; any other failure aborts with no partial result.
    pub async fn ticket_metrics_for(
        &self,
        ticket_ids: &[i64],
        opts: &ExportOptions,
    ) -> Result<Vec<TicketMetric>, ZendeskError> {
        let results = self
            .scan_ids(
                ticket_ids.iter().copied(),
                |id| format!("/api/v2/tickets/{}/metrics.json", id),
                opts,
                |envelope| envelope.ticket_metric.take().into_iter().collect(),
            )
            .await?;
        Ok(results
            .into_iter()
            .flat_map(|(_, metrics)| metrics)
            .collect())
    }
}
