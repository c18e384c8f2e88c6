//! The page and everything that mutates it
//!
//! A [`Board`] owns the document, the toggle button bindings and the API
//! client. All document writes go through the state mutex, and refresh cycles
//! are tagged with a generation number so a newer selection wins over an
//! older one still in flight.

mod refresh;
mod render;
mod select;

#[cfg(test)]
pub mod test_source;

use crate::api::PostSource;
use postboard_core::dom::Document;
use postboard_core::html::render_document;
use postboard_core::listeners::ListenerRegistry;
use postboard_core::toggle::{is_consistent, CommentToggle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub use select::SelectionOutcome;

#[derive(Debug, Default)]
pub struct BoardState {
    pub document: Document,
    pub listeners: ListenerRegistry,
}

pub struct Board {
    source: Arc<dyn PostSource>,
    state: Mutex<BoardState>,
    generation: AtomicU64,
}

impl Board {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self {
            source,
            state: Mutex::new(BoardState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Copy of the current document
    pub async fn snapshot(&self) -> Document {
        self.state.lock().await.document.clone()
    }

    /// The current document as a full HTML page
    pub async fn render_html(&self) -> String {
        render_document(&self.state.lock().await.document)
    }

    /// Click the toggle button tagged `post_id`
    ///
    /// Buttons without a bound handler ignore the click.
    pub async fn click(&self, post_id: &str) -> Option<CommentToggle> {
        let mut state = self.state.lock().await;
        let BoardState {
            document,
            listeners,
        } = &mut *state;

        let toggled = listeners.dispatch_click(document, post_id);
        if !is_consistent(document) {
            log::warn!("Comment sections and button labels disagree after clicking {post_id:?}");
        }
        toggled
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
