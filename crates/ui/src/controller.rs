// crates/ui/src/controller.rs
//! The search controller: one validate → request → render cycle per trigger.

use archive_view_client::{SearchClient, SearchError};
use archive_view_types::SearchResult;

use crate::render;
use crate::view::SearchView;

/// Rendering phase of the controller. Reconstructed fully on each search,
/// never persisted.
///
/// Transitions: `Idle → Loading` on the first valid trigger, then
/// `Loading → {Empty | Populated | Failed}` on the response, and back to
/// `Loading` from any terminal state on the next valid trigger. `Idle` is
/// never re-entered.
#[derive(Debug)]
pub enum ViewState {
    /// Before the first trigger.
    Idle,
    /// A request is outstanding.
    Loading,
    /// Successful response with at least one result.
    Populated(Vec<SearchResult>),
    /// Successful response with zero results.
    Empty,
    /// The request failed after dispatch.
    Failed(SearchError),
}

impl ViewState {
    /// Stable label for logs and assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Populated(_) => "populated",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}

/// Orchestrates one query → response → render cycle per trigger activation.
///
/// Owns the view and the transient [`ViewState`] for the lifetime of one
/// search; each new trigger discards the prior state unconditionally. Taking
/// `&mut self` serializes triggers per controller. There is no cancellation
/// and no timeout: a hung request holds `Loading` until the transport
/// resolves it.
pub struct SearchController<V: SearchView> {
    client: SearchClient,
    view: V,
    state: ViewState,
}

impl<V: SearchView> SearchController<V> {
    pub fn new(client: SearchClient, view: V) -> Self {
        Self {
            client,
            view,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handle one trigger activation.
    ///
    /// A query that trims to empty is rejected with a blocking notice: no
    /// request is issued, the container and state are left untouched. For a
    /// valid query the container shows the loading indicator before the
    /// request goes out, then exactly one of the three terminal renders
    /// replaces it. Every failure ends in a defined state with a rendered
    /// generic message; error detail goes to the log only.
    pub async fn on_trigger(&mut self) {
        let raw = self.view.query_value();
        let query = raw.trim();
        if query.is_empty() {
            self.view.show_validation_notice(render::VALIDATION_NOTICE);
            return;
        }

        self.state = ViewState::Loading;
        self.view.set_results(render::LOADING_HTML);

        match self.client.search(query).await {
            Ok(results) if results.is_empty() => {
                self.state = ViewState::Empty;
                self.view.set_results(render::NO_RESULTS_HTML);
            }
            Ok(results) => {
                let html = render::render_results(&results);
                self.view.set_results(&html);
                self.state = ViewState::Populated(results);
            }
            Err(err) => {
                tracing::error!(kind = err.kind(), error = %err, query, "search failed");
                self.view.set_results(render::ERROR_HTML);
                self.state = ViewState::Failed(err);
            }
        }
    }
}
