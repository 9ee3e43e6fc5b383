//! # zendesk
//!
//! A typed async client for the Zendesk Support REST API, built around a
//! retrieval engine that handles the API's three bulk-read shapes: paginated
//! listings, time-windowed incremental exports, and one-by-one identifier
//! scans for resources with no usable bulk endpoint.
//!
//! ## Features
//!
//! - **Resource operations**: tickets, users, identities, organizations,
//!   memberships, comments, metrics, satisfaction ratings, locales, uploads,
//!   and voice call legs
//! - **Pagination**: `next_page` continuation references followed to the
//!   end, with loop and budget safety valves
//! - **Incremental exports**: `start_time`-windowed walks with boundary
//!   de-duplication
//! - **Rate limiting**: 429 responses with a `Retry-After` delay suspend
//!   the walk and re-issue the same request, invisibly to the caller
//! - **Security**: credentials are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Explicit configuration struct plus an environment loader
//! - [`error`] - Unified error type with security-conscious sanitization
//! - [`client`] - HTTP transport: auth, single-shot calls, envelope decoding
//! - [`envelope`] - The resource-keyed JSON envelope used in both directions
//! - [`pager`] - The pagination / incremental / one-by-one retrieval engine
//! - [`models`] - Data models for API requests and responses
//! - `resources` - Per-resource methods on the client
//!
//! ## Example
//!
//! ```ignore
//! use zendesk::{Config, ExportOptions, ZendeskClient};
//!
//! async fn example() -> Result<(), zendesk::ZendeskError> {
//!     let config = Config::from_env()?;
//!     let client = ZendeskClient::new(&config)?;
//!
//!     let ticket = client.show_ticket(35436).await?;
//!     println!("{}", ticket.subject.unwrap_or_default());
//!
//!     // Everything updated in the last day, across all pages.
//!     let since = chrono::Utc::now().timestamp() - 86_400;
//!     let tickets = client
//!         .tickets_incremental(since, &ExportOptions::new())
//!         .await?;
//!     println!("{} tickets changed", tickets.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Basic auth with the account email and password. To use an API token
//! instead, append `/token` to the email and pass the token as the password.
//!
//! ## Security Considerations
//!
//! The password or API token is stored only in memory and is:
//! - Never logged at any log level
//! - Sanitized from all error messages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod pager;
mod resources;

pub use client::ZendeskClient;
pub use config::Config;
pub use envelope::Envelope;
pub use error::ZendeskError;
pub use pager::ExportOptions;
