//! The paginated/incremental retrieval engine.
//!
//! Bulk reads against the API come in three shapes, all implemented here as
//! generic walkers on [`ZendeskClient`]:
//!
//! - **Page walks** follow the `next_page` continuation reference embedded
//!   in each response until it goes empty or repeats.
//! - **Incremental walks** are page walks over the time-windowed export
//!   endpoints (`start_time=...`); window boundaries may re-deliver records,
//!   so the accumulated result is de-duplicated before returning.
//! - **One-by-one scans** iterate a caller-supplied identifier list or range
//!   for resources with no usable bulk listing, treating 404 as an expected
//!   gap.
//!
//! All three honor server rate limiting: a 429 response with a positive
//! `Retry-After` header suspends the walk for exactly that many seconds and
//! re-issues the same request. Each walk owns its accumulator, cursor, and
//! wait counter, so concurrent walks on one client are independent.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::client::ZendeskClient;
use crate::envelope::Envelope;
use crate::error::ZendeskError;

/// Pages fetched before a list-all walk gives up, unless overridden.
///
/// Safety valve for endpoints without a natural termination guarantee.
const DEFAULT_PAGE_BUDGET: usize = 1000;

/// Options controlling a bulk retrieval call.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Maximum number of pages to fetch; `None` means the default budget.
    pub max_pages: Option<usize>,

    /// Cooperative cancellation, checked once per page or identifier.
    pub cancel: Option<CancellationToken>,
}

impl ExportOptions {
    /// Creates options with the default page budget and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of pages fetched.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Attaches a cancellation token. Cancelling it makes the retrieval
    /// call return [`ZendeskError::Cancelled`] at the next page boundary.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn page_budget(&self) -> usize {
        self.max_pages.unwrap_or(DEFAULT_PAGE_BUDGET)
    }

    fn check_cancelled(&self) -> Result<(), ZendeskError> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(ZendeskError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Verdict of the rate-limit governor for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RetryAfter {
    /// No usable delay: header absent or zero.
    None,
    /// Suspend for this many seconds, then re-issue the same request.
    Wait(u64),
    /// Header present but unparseable; carries the raw value.
    Malformed(String),
}

/// Inspects a response's `Retry-After` header.
///
/// Absent and zero both mean "no wait". A present-but-unparseable value is
/// reported separately so that walkers can treat it as a decode failure on
/// an otherwise rate-limited response.
pub(crate) fn retry_after(headers: &HeaderMap) -> RetryAfter {
    let Some(value) = headers.get(reqwest::header::RETRY_AFTER) else {
        return RetryAfter::None;
    };
    let Ok(text) = value.to_str() else {
        return RetryAfter::Malformed(format!("{:?}", value));
    };
    match text.trim().parse::<u64>() {
        Ok(0) => RetryAfter::None,
        Ok(seconds) => RetryAfter::Wait(seconds),
        Err(_) => RetryAfter::Malformed(text.to_string()),
    }
}

/// Removes duplicate records by key, keeping the first occurrence of each
/// key in its original position.
///
/// Incremental export windows overlap at their boundaries, so a record may
/// arrive on two consecutive pages. Runs in O(n) via a seen-key set.
pub(crate) fn dedup_by_key<T, K, F>(records: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(records.len());
    let mut result = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(key(&record)) {
            result.push(record);
        }
    }
    result
}

impl ZendeskClient {
    /// Converts a server-supplied continuation reference into a relative
    /// endpoint against the client's base URL.
    ///
    /// `next_page` is an absolute URL echoing the base; the remainder after
    /// the base (or, failing that, from the API path segment) is replayed
    /// against the same base so the base never changes mid-walk.
    pub(crate) fn relative_endpoint(&self, next_page: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if let Some(rest) = next_page.strip_prefix(base) {
            return rest.to_string();
        }
        if let Some(idx) = next_page.find("/api/") {
            return next_page[idx..].to_string();
        }
        next_page.to_string()
    }

    /// Walks every page starting from `endpoint`, extracting records from
    /// each envelope and concatenating them in page order.
    ///
    /// Terminates when the continuation reference goes empty, repeats the
    /// previous value, or the page budget is exhausted. A 429 response
    /// suspends per the governor and re-issues the same request without
    /// advancing the cursor or consuming budget.
    pub(crate) async fn fetch_all_pages<T, F>(
        &self,
        endpoint: &str,
        opts: &ExportOptions,
        mut extract: F,
    ) -> Result<Vec<T>, ZendeskError>
    where
        F: FnMut(&mut Envelope) -> Vec<T>,
    {
        let mut records = Vec::new();
        let mut endpoint = endpoint.to_string();
        let mut last_cursor: Option<String> = None;
        let mut pages = 0usize;
        let mut total_wait_secs = 0u64;

        loop {
            opts.check_cancelled()?;

            let url = self.resolve(&endpoint)?.to_string();
            let response = self.request(Method::GET, &endpoint, None).await?;

            if response.status().as_u16() == 429 {
                match retry_after(response.headers()) {
                    RetryAfter::Wait(seconds) => {
                        tracing::debug!(
                            endpoint = %endpoint,
                            seconds,
                            "too many requests, suspending walk"
                        );
                        total_wait_secs += seconds;
                        tokio::time::sleep(Duration::from_secs(seconds)).await;
                        continue;
                    }
                    RetryAfter::Malformed(value) => {
                        return Err(ZendeskError::MalformedRetryAfter { url, value });
                    }
                    // A 429 with no usable delay is surfaced like any other
                    // error status, below.
                    RetryAfter::None => {}
                }
            }

            let mut envelope = self.read_envelope(&Method::GET, &url, response).await?;
            records.append(&mut extract(&mut envelope));
            pages += 1;

            let next = match envelope.next_page() {
                Some(next) => next.to_string(),
                None => break,
            };
            if last_cursor.as_deref() == Some(next.as_str()) {
                tracing::debug!(cursor = %next, "continuation reference repeated, stopping walk");
                break;
            }
            if pages >= opts.page_budget() {
                tracing::warn!(pages, "page budget exhausted, stopping walk");
                break;
            }
            tracing::debug!(page = %next, "pulling next page");
            last_cursor = Some(next.clone());
            endpoint = self.relative_endpoint(&next);
        }

        tracing::debug!(
            records = records.len(),
            pages,
            total_wait_secs,
            "page walk finished"
        );

        Ok(records)
    }

    /// Walks a time-windowed incremental export from `start_time` (unix
    /// seconds) and de-duplicates the accumulated records by `key`.
    ///
    /// Overlapping export windows necessarily re-deliver boundary records;
    /// the first occurrence of each key is kept, in first-seen order.
    pub(crate) async fn fetch_incremental<T, F, K, KF>(
        &self,
        endpoint: &str,
        start_time: i64,
        opts: &ExportOptions,
        extract: F,
        key: KF,
    ) -> Result<Vec<T>, ZendeskError>
    where
        F: FnMut(&mut Envelope) -> Vec<T>,
        KF: Fn(&T) -> K,
        K: Eq + Hash,
    {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let start = format!("{}{}start_time={}", endpoint, separator, start_time);
        let records = self.fetch_all_pages(&start, opts, extract).await?;
        Ok(dedup_by_key(records, key))
    }

    /// Fetches one record set per identifier, for resources with no usable
    /// bulk listing endpoint.
    ///
    /// Returns `(identifier, records)` for every identifier that resolved.
    /// A 404 is an expected gap and is skipped silently; a 429 suspends per
    /// the governor and re-issues the same identifier's request. Any other
    /// non-success status aborts the scan: the caller receives the error
    /// and none of the records accumulated so far.
    pub(crate) async fn scan_ids<I, E, T, F>(
        &self,
        ids: I,
        build_endpoint: E,
        opts: &ExportOptions,
        mut extract: F,
    ) -> Result<Vec<(i64, Vec<T>)>, ZendeskError>
    where
        I: IntoIterator<Item = i64>,
        E: Fn(i64) -> String,
        F: FnMut(&mut Envelope) -> Vec<T>,
    {
        let mut results = Vec::new();
        let mut total_wait_secs = 0u64;

        for id in ids {
            let endpoint = build_endpoint(id);
            loop {
                opts.check_cancelled()?;

                tracing::debug!(endpoint = %endpoint, "currently extracting");
                let url = self.resolve(&endpoint)?.to_string();
                let response = self.request(Method::GET, &endpoint, None).await?;
                let status = response.status().as_u16();

                if status == 404 {
                    tracing::debug!(endpoint = %endpoint, "not found, skipping identifier");
                    break;
                }

                if status == 429 {
                    match retry_after(response.headers()) {
                        RetryAfter::Wait(seconds) => {
                            tracing::debug!(
                                endpoint = %endpoint,
                                seconds,
                                "too many requests, suspending scan"
                            );
                            total_wait_secs += seconds;
                            tokio::time::sleep(Duration::from_secs(seconds)).await;
                            continue;
                        }
                        RetryAfter::Malformed(value) => {
                            return Err(ZendeskError::MalformedRetryAfter { url, value });
                        }
                        RetryAfter::None => {}
                    }
                }

                let mut envelope = self.read_envelope(&Method::GET, &url, response).await?;
                results.push((id, extract(&mut envelope)));
                break;
            }
        }

        tracing::debug!(
            identifiers = results.len(),
            total_wait_secs,
            "one-by-one scan finished"
        );

        Ok(results)
    }
}
