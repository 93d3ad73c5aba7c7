// crates/ui/src/view.rs
//! The seam between the controller and whatever hosts the three UI surfaces:
//! a query input, a trigger control, and a results container.
//!
//! The controller never creates or styles these surfaces; it reads the query
//! at trigger time and replaces the container's contents wholesale. Trigger
//! activation itself is external: whoever owns the view calls
//! [`crate::SearchController::on_trigger`].

/// External view surfaces consumed by the controller.
pub trait SearchView {
    /// Current value of the query input, read at trigger time (not cached).
    fn query_value(&self) -> String;

    /// Blocking notice for locally rejected input. The container is left
    /// untouched when this fires.
    fn show_validation_notice(&mut self, message: &str);

    /// Replace the results container's contents.
    fn set_results(&mut self, html: &str);
}

/// In-memory view backing the CLI: the query is set programmatically, the
/// container is an owned buffer, and at most one pending notice is held
/// until the host drains it.
#[derive(Debug, Default)]
pub struct BufferView {
    query: String,
    container: String,
    notice: Option<String>,
}

impl BufferView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query input's value for the next trigger.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current contents of the results container.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Take the pending validation notice, if one fired since the last call.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}

impl SearchView for BufferView {
    fn query_value(&self) -> String {
        self.query.clone()
    }

    fn show_validation_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn set_results(&mut self, html: &str) {
        self.container.clear();
        self.container.push_str(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_results_replaces_container() {
        let mut view = BufferView::new();
        view.set_results("<p>first</p>");
        view.set_results("<p>second</p>");
        assert_eq!(view.container(), "<p>second</p>");
    }

    #[test]
    fn test_notice_is_drained_once() {
        let mut view = BufferView::new();
        view.show_validation_notice("enter a query");
        assert_eq!(view.take_notice().as_deref(), Some("enter a query"));
        assert_eq!(view.take_notice(), None);
    }

    #[test]
    fn test_query_round_trip() {
        let mut view = BufferView::new();
        view.set_query("  hello  ");
        assert_eq!(view.query_value(), "  hello  ");
    }
}
