//! Ticket operations.
//!
//! Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/tickets>

use crate::client::ZendeskClient;
use crate::envelope::Envelope;
use crate::error::ZendeskError;
use crate::models::{Ticket, TicketField, TicketForm};
use crate::pager::ExportOptions;
use crate::resources::{join_ids, require};

impl ZendeskClient {
    /// Fetches a ticket by its ID.
    pub async fn show_ticket(&self, id: i64) -> Result<Ticket, ZendeskError> {
        let envelope = self.get(&format!("/api/v2/tickets/{}.json", id)).await?;
        require(envelope.ticket, "ticket")
    }

    /// Creates a new ticket.
    pub async fn create_ticket(&self, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let body = Envelope {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        let envelope = self.post("/api/v2/tickets.json", &body).await?;
        require(envelope.ticket, "ticket")
    }

    /// Updates a ticket. Only the fields set on `ticket` are changed.
    pub async fn update_ticket(&self, id: i64, ticket: &Ticket) -> Result<Ticket, ZendeskError> {
        let body = Envelope {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/tickets/{}.json", id), Some(&body))
            .await?;
        require(envelope.ticket, "ticket")
    }

    /// Deletes a ticket.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), ZendeskError> {
        self.delete(&format!("/api/v2/tickets/{}.json", id)).await?;
        Ok(())
    }

    /// Updates several tickets in one call, each with its own field values.
    /// Every ticket in the slice must carry its `id`.
    pub async fn batch_update_tickets(&self, tickets: &[Ticket]) -> Result<(), ZendeskError> {
        let body = Envelope {
            tickets: Some(tickets.to_vec()),
            ..Default::default()
        };
        self.put("/api/v2/tickets/update_many.json", Some(&body))
            .await?;
        Ok(())
    }

    /// Applies the same field values to every listed ticket.
    pub async fn bulk_update_tickets(
        &self,
        ids: &[i64],
        ticket: &Ticket,
    ) -> Result<(), ZendeskError> {
        let body = Envelope {
            ticket: Some(ticket.clone()),
            ..Default::default()
        };
        self.put(
            &format!("/api/v2/tickets/update_many.json?ids={}", join_ids(ids)),
            Some(&body),
        )
        .await?;
        Ok(())
    }

    /// Adds tags to a ticket without replacing its existing tags. Returns
    /// the ticket's full tag set after the update.
    pub async fn add_ticket_tags(
        &self,
        id: i64,
        tags: &[String],
    ) -> Result<Vec<String>, ZendeskError> {
        let body = Envelope {
            tags: Some(tags.to_vec()),
            ..Default::default()
        };
        let envelope = self
            .put(&format!("/api/v2/tickets/{}/tags.json", id), Some(&body))
            .await?;
        require(envelope.tags, "tags")
    }

    /// Lists the tickets a user has requested.
    pub async fn list_requested_tickets(
        &self,
        user_id: i64,
    ) -> Result<Vec<Ticket>, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/users/{}/tickets/requested.json", user_id))
            .await?;
        require(envelope.tickets, "tickets")
    }

    /// Lists the incidents linked to a problem ticket.
    pub async fn list_ticket_incidents(
        &self,
        problem_id: i64,
    ) -> Result<Vec<Ticket>, ZendeskError> {
        let envelope = self
            .get(&format!("/api/v2/tickets/{}/incidents.json", problem_id))
            .await?;
        require(envelope.tickets, "tickets")
    }

    /// Lists all ticket field definitions.
    pub async fn list_ticket_fields(&self) -> Result<Vec<TicketField>, ZendeskError> {
        let envelope = self.get("/api/v2/ticket_fields.json").await?;
        require(envelope.ticket_fields, "ticket_fields")
    }

    /// Lists all ticket forms.
    pub async fn list_ticket_forms(&self) -> Result<Vec<TicketForm>, ZendeskError> {
        let envelope = self.get("/api/v2/ticket_forms.json").await?;
        require(envelope.ticket_forms, "ticket_forms")
    }

    /// Retrieves every ticket created or updated since `start_time` (unix
    /// seconds) via the incremental export, de-duplicated by ticket ID.
    pub async fn tickets_incremental(
        &self,
        start_time: i64,
        opts: &ExportOptions,
    ) -> Result<Vec<Ticket>, ZendeskError> {
        self.fetch_incremental(
            "/api/v2/incremental/tickets.json",
            start_time,
            opts,
            |envelope| envelope.tickets.take().unwrap_or_default(),
            |ticket| ticket.id,
        )
        .await
    }

    /// Retrieves tickets one at a time over an explicit identifier range.
    ///
    /// The bulk listing endpoints omit archived tickets, so a full export
    /// has to probe each identifier. Missing identifiers (404) are skipped;
    /// any other failure aborts with no partial result.
    pub async fn all_tickets<I>(
        &self,
        ids: I,
        opts: &ExportOptions,
    ) -> Result<Vec<Ticket>, ZendeskError>
    where
        I: IntoIterator<Item = i64>,
    {
        let results = self
            .scan_ids(
                ids,
                |id| format!("/api/v2/tickets/{}.json", id),
                opts,
                |envelope| envelope.ticket.take().into_iter().collect(),
            )
            .await?;
        Ok(results
            .into_iter()
            .flat_map(|(_, tickets)| tickets)
            .collect())
    }
}
