//! Ticket comment, attachment, upload, and via-channel models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a ticket.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/ticket_comments>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketComment {
    /// Unique comment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Comment type: "Comment" or "VoiceComment".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub comment_type: Option<String>,

    /// Comment body as submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Comment body rendered as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    /// Comment body with markup stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_body: Option<String>,

    /// Whether the comment is visible to the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Authoring user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    /// Files attached to the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,

    /// Channel the comment arrived through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<Via>,

    /// Channel-specific metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// When the comment was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Upload tokens to attach on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<Vec<String>>,
}

/// A file attached to a ticket or comment.
///
/// Zendesk Core API docs: <https://developer.zendesk.com/rest_api/docs/core/attachments>
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Attachment {
    /// Unique attachment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Download URL for the file content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// File size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,

    /// Whether the attachment is displayed inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,

    /// Thumbnail renditions, for images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<Vec<Thumbnail>>,
}

/// A thumbnail rendition of an image attachment.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    /// Unique thumbnail identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Thumbnail file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Download URL for the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// File size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

/// A server-side file upload, referenced by token when creating comments.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Upload {
    /// Token to reference this upload in subsequent requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// The uploaded attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,

    /// All attachments sharing this upload token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

/// The channel a ticket or comment was created through.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Via {
    /// Channel name, e.g. "email", "web", "voice".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Source addresses for the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ViaSource>,
}

/// Source and destination of a via channel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViaSource {
    /// Where the message went.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<ViaTo>,

    /// Where the message came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ViaFrom>,

    /// Relationship to another record, e.g. "follow_up".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// Originator of a via channel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViaFrom {
    /// Sender name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sender email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Recipients of the original email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_recipients: Option<Vec<String>>,

    /// Caller phone number, for voice channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Recipient of a via channel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViaTo {
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Recipient email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// CC'd email addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_ccs: Option<Vec<serde_json::Value>>,

    /// Called phone number, for voice channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserializes_via_channel() {
        let comment: TicketComment = serde_json::from_str(
            r#"{
                "id": 1274,
                "type": "Comment",
                "body": "Thanks for your help!",
                "public": true,
                "author_id": 123123,
                "via": {"channel": "email", "source": {"from": {"address": "a@example.com"}}}
            }"#,
        )
        .unwrap();
        assert_eq!(comment.comment_type.as_deref(), Some("Comment"));
        let via = comment.via.unwrap();
        assert_eq!(via.channel.as_deref(), Some("email"));
        assert_eq!(
            via.source.unwrap().from.unwrap().address.as_deref(),
            Some("a@example.com")
        );
    }
}
