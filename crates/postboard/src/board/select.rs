use super::Board;
use postboard_core::builder::populate_select_menu;
use postboard_core::dom::SelectMenu;
use postboard_core::refresh::RefreshOutcome;
use postboard_core::selection::{resolve_user_id, SelectEvent};
use postboard_core::types::{Post, User};
use serde::Serialize;
use std::sync::Arc;

/// What a selection change did
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOutcome {
    pub user_id: u64,
    /// `None` when the posts could not be fetched
    pub posts: Option<Vec<Post>>,
    /// `None` when no refresh ran or it was dropped
    pub refresh: Option<RefreshOutcome>,
}

impl Board {
    /// Fetch the users and fill the select menu
    ///
    /// On failure the menu keeps only its default option.
    pub async fn init_page(&self) -> Option<(Vec<User>, SelectMenu)> {
        let users = match self.source.users().await {
            Ok(users) => users,
            Err(e) => {
                log::error!("Failed to fetch users: {e}");
                return None;
            }
        };

        let mut state = self.state.lock().await;
        let menu = populate_select_menu(&mut state.document, Some(&users))?.clone();
        log::info!("Select menu populated with {} user(s)", users.len());

        Some((users, menu))
    }

    async fn fetch_user_posts(&self, user_id: u64) -> Option<Vec<Post>> {
        match self.source.user_posts(user_id).await {
            Ok(posts) => Some(posts),
            Err(e) => {
                log::error!("Failed to fetch posts for user {user_id}: {e}");
                None
            }
        }
    }

    async fn set_select_disabled(&self, disabled: bool) {
        self.state.lock().await.document.select_menu.disabled = disabled;
    }

    /// React to an event from the select menu
    ///
    /// Only `change` events are handled. The menu is disabled while the posts
    /// are fetched and the page refreshed, and enabled again afterwards
    /// whether or not that worked. If a newer selection started in the
    /// meantime, that selection re-enables the menu instead.
    pub async fn handle_select_change(&self, event: &SelectEvent) -> Option<SelectionOutcome> {
        if !event.is_change() {
            log::debug!("Ignoring {:?} event on the select menu", event.kind);
            return None;
        }

        let user_id = match resolve_user_id(event.value.as_deref()) {
            Ok(user_id) => user_id,
            Err(e) => {
                log::error!("Error handling selection: {e}");
                return None;
            }
        };

        let generation = self.next_generation();
        {
            let mut state = self.state.lock().await;
            let menu = &mut state.document.select_menu;
            menu.disabled = true;
            menu.selected = event.value.clone();
        }

        let posts = self.fetch_user_posts(user_id).await;
        let refresh = match &posts {
            Some(posts) => self.refresh_posts(posts, generation).await,
            None => None,
        };

        if self.is_current(generation) {
            self.set_select_disabled(false).await;
        }

        Some(SelectionOutcome {
            user_id,
            posts,
            refresh,
        })
    }

    /// Run [`Board::handle_select_change`] on its own task
    ///
    /// Dropping the returned future does not cancel the selection, so the
    /// menu is always re-enabled and `main` never stays cleared.
    pub async fn spawn_select_change(
        self: &Arc<Self>,
        event: SelectEvent,
    ) -> Option<SelectionOutcome> {
        let board = Arc::clone(self);
        let task = tokio::spawn(async move { board.handle_select_change(&event).await });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Selection task failed: {e}");
                None
            }
        }
    }
}
