// crates/ui/src/render.rs
//! HTML fragment rendering for search results.
//!
//! Pure functions of the wire types. Fragments are assembled with `format!`;
//! every interpolated text value goes through [`html_escape`], which is the
//! only escaping applied. Equal input produces byte-identical output.

use archive_view_types::{ContextMessage, ConversationHit, MessageHit, SearchResult};

/// Shown while a request is outstanding.
pub const LOADING_HTML: &str = "<p>Loading results...</p>";

/// Shown for a successful but empty response.
pub const NO_RESULTS_HTML: &str = "<p>No results found.</p>";

/// Shown for any post-flight failure. Detail stays in the log.
pub const ERROR_HTML: &str = "<p>An error occurred. Please try again later.</p>";

/// Blocking notice for an empty (after trimming) query.
pub const VALIDATION_NOTICE: &str = "Please enter a search query.";

/// Render every result in order, concatenated. Results with an unknown
/// discriminator contribute nothing.
pub fn render_results(results: &[SearchResult]) -> String {
    results.iter().filter_map(render_result).collect()
}

/// Render one result, or `None` for an unknown discriminator.
pub fn render_result(result: &SearchResult) -> Option<String> {
    match result {
        SearchResult::Conversation(hit) => Some(render_conversation(hit)),
        SearchResult::Message(hit) => Some(render_message(hit)),
        SearchResult::Unknown => {
            tracing::debug!("skipping search result with unrecognized type");
            None
        }
    }
}

fn render_conversation(hit: &ConversationHit) -> String {
    format!(
        concat!(
            "<div class=\"search-result\">",
            "<h4>{title}</h4>",
            "<p><strong>ID:</strong> {id}</p>",
            "<p><strong>Snippet:</strong> {snippet}</p>",
            "<p><strong>Timestamp:</strong> {timestamp}</p>",
            "<a href=\"/conversation/{id}\" class=\"view-details\">View Conversation</a>",
            "</div>"
        ),
        title = html_escape(&hit.title),
        id = html_escape(&hit.conversation_id),
        snippet = html_escape(&hit.content_snippet),
        timestamp = html_escape(&hit.timestamp),
    )
}

fn render_message(hit: &MessageHit) -> String {
    let mut fragment = format!(
        concat!(
            "<div class=\"search-result\">",
            "<h4>Message Details</h4>",
            "<p><strong>Message ID:</strong> {id}</p>",
            "<p><strong>Content:</strong> {content}</p>",
            "<p><strong>Author:</strong> {author}</p>",
            "<p><strong>Timestamp:</strong> {timestamp}</p>",
            "<a href=\"/conversation/{conversation}\" class=\"view-details\">View Conversation</a>"
        ),
        id = html_escape(&hit.matched.message_id),
        content = html_escape(&hit.matched.content),
        author = html_escape(&hit.matched.author_role),
        timestamp = html_escape(&hit.matched.timestamp),
        conversation = html_escape(&hit.matched.conversation_id),
    );

    // An empty context renders nothing at all, not an empty list.
    if !hit.context.is_empty() {
        fragment.push_str("<div class=\"context\"><h5>Surrounding Messages:</h5><ul class=\"context-messages\">");
        for message in &hit.context {
            fragment.push_str(&render_context_item(message));
        }
        fragment.push_str("</ul></div>");
    }

    fragment.push_str("</div>");
    fragment
}

fn render_context_item(message: &ContextMessage) -> String {
    format!(
        "<li><strong>{author}:</strong> {content} ({timestamp})</li>",
        author = html_escape(&message.author_role),
        content = html_escape(&message.content),
        timestamp = html_escape(&message.timestamp),
    )
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
