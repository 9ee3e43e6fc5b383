//! Voice channel models: calls and call legs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A call handled by the voice channel.
///
/// Zendesk Talk API docs: <https://developer.zendesk.com/api-reference/voice/talk-api/incremental_exports/>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Call {
    /// Unique call identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Agent who handled the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,

    /// Customer on the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// Ticket created for the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    /// Billing charge for the call, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_charge: Option<String>,

    /// Recording consent state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_recording_consent: Option<String>,

    /// Action taken on recording consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_recording_consent_action: Option<String>,

    /// Keypress registered for recording consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_recording_consent_keypress: Option<String>,

    /// Whether this was a callback request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<bool>,

    /// Source of the callback request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_source: Option<serde_json::Value>,

    /// How the call completed, e.g. "completed", "abandoned_in_queue".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<String>,

    /// Seconds spent in consultation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_time: Option<i64>,

    /// Call direction: "inbound" or "outbound".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Total call duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Whether the caller waited longer than the queue limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceeded_queue_wait_time: Option<bool>,

    /// Seconds the caller spent on hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_time: Option<i64>,

    /// Line name the call came in on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Line identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_id: Option<i64>,

    /// Minutes billed for the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_billed: Option<i64>,

    /// Whether the call arrived outside business hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outside_business_hours: Option<bool>,

    /// Whether the call overflowed to another group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflowed: Option<bool>,

    /// Caller phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Phone number identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<i64>,

    /// Detected quality issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_issues: Option<Vec<String>>,

    /// Seconds of recorded audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_time: Option<i64>,

    /// Seconds of agent talk time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk_time: Option<i64>,

    /// Seconds until the call was answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_answer: Option<i64>,

    /// Whether the call went to voicemail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voicemail: Option<bool>,

    /// Seconds the caller spent waiting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<i64>,

    /// Seconds of agent wrap-up time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_up_time: Option<i64>,

    /// When the call was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the call record was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One leg of a call: a single participant's connection.
///
/// Zendesk Talk API docs: <https://developer.zendesk.com/api-reference/voice/talk-api/incremental_exports/#incremental-call-legs-export>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallLeg {
    /// Unique leg identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Call this leg belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<i64>,

    /// Agent on this leg, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,

    /// User on this leg, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Leg type, e.g. "agent", "customer".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub leg_type: Option<String>,

    /// Billing charge for this leg, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_charge: Option<String>,

    /// How the leg completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<String>,

    /// Leg duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,

    /// Number the leg was forwarded to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forwarded_to: Option<serde_json::Value>,

    /// Seconds this participant spent on hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_time: Option<i64>,

    /// Minutes billed for this leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_billed: Option<i64>,

    /// Detected quality issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_issues: Option<Vec<String>>,

    /// Seconds of talk time on this leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talk_time: Option<i64>,

    /// Where the leg was transferred from, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferred_from: Option<serde_json::Value>,

    /// Where the leg was transferred to, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transferred_to: Option<serde_json::Value>,

    /// Seconds of wrap-up time on this leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_up_time: Option<serde_json::Value>,

    /// When the leg was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the leg record was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
