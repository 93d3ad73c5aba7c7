//! Wire types for the archive server's `/search` endpoint.
//!
//! The endpoint returns a JSON array mixing two result shapes, discriminated
//! by a `type` field: whole-conversation matches and single-message matches
//! with optional surrounding context. Servers may grow new discriminators at
//! any time, so the union carries a catch-all variant instead of failing the
//! whole body on an unrecognized tag.

use serde::{Deserialize, Serialize};

/// A single entry in the `/search` response array.
///
/// Deserialization is lenient at the field level: every record field has a
/// default, so an item missing a field still parses (and renders as empty
/// text downstream). Only a body that is not an array of objects fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    /// The query matched somewhere in a conversation's data blob.
    Conversation(ConversationHit),
    /// The query matched a single message's content.
    Message(MessageHit),
    /// A discriminator this client does not know. Skipped during rendering.
    #[serde(other)]
    Unknown,
}

/// A whole-conversation match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub conversation_id: String,
    /// Server-chosen excerpt around the matched text.
    #[serde(default)]
    pub content_snippet: String,
    /// Already formatted by the server; passed through verbatim.
    #[serde(default)]
    pub timestamp: String,
}

/// A single-message match plus the messages surrounding it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageHit {
    /// The message that matched the query.
    #[serde(rename = "match", default)]
    pub matched: MatchedMessage,
    /// Messages adjacent to the match, in server order (assumed
    /// chronological, never re-sorted here). May be absent on the wire.
    #[serde(default)]
    pub context: Vec<ContextMessage>,
}

/// The matched message inside a [`MessageHit`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedMessage {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub timestamp: String,
    /// Owning conversation; target of the detail link.
    #[serde(default)]
    pub conversation_id: String,
}

/// One message of surrounding context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMessage {
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}
