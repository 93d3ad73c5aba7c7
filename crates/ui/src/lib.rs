// crates/ui/src/lib.rs
//! Search UI for a conversation archive server.
//!
//! [`SearchController`] drives one validate → request → render cycle per
//! trigger activation against the surfaces behind [`SearchView`];
//! [`render`] holds the pure fragment renderers, [`history`] the
//! recent-searches bookkeeping.

pub mod controller;
pub mod history;
pub mod render;
pub mod view;

pub use controller::{SearchController, ViewState};
pub use history::SearchHistory;
pub use view::{BufferView, SearchView};
