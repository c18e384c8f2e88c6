use super::{Board, BoardState};
use postboard_core::refresh::{RefreshCycle, RefreshError, RefreshOutcome};
use postboard_core::types::Post;

#[derive(Debug, thiserror::Error)]
enum RefreshFailure {
    #[error(transparent)]
    Cycle(#[from] RefreshError),

    #[error("Refresh superseded by a newer selection")]
    Superseded,
}

impl Board {
    /// Replace the displayed posts
    ///
    /// Holds the state lock for the whole cycle, so only one refresh runs at a
    /// time. A cycle whose generation is no longer current skips its writes;
    /// if that happens after clearing, `main` stays empty until the newer
    /// cycle renders.
    pub async fn refresh_posts(&self, posts: &[Post], generation: u64) -> Option<RefreshOutcome> {
        let mut state = self.state.lock().await;

        match self.run_cycle(&mut state, posts, generation).await {
            Ok(outcome) => {
                log::info!(
                    "Refreshed page: {} element(s) rendered, {} button(s) bound",
                    outcome.rendered,
                    outcome.attached.len()
                );
                Some(outcome)
            }
            Err(RefreshFailure::Superseded) => {
                log::info!("Dropping refresh #{generation}: a newer selection is active");
                None
            }
            Err(e) => {
                log::error!("Error refreshing posts: {e}");
                None
            }
        }
    }

    async fn run_cycle(
        &self,
        state: &mut BoardState,
        posts: &[Post],
        generation: u64,
    ) -> Result<RefreshOutcome, RefreshFailure> {
        if !self.is_current(generation) {
            return Err(RefreshFailure::Superseded);
        }

        let BoardState {
            document,
            listeners,
        } = state;

        let mut cycle = RefreshCycle::new();
        cycle.detach(document, listeners)?;
        cycle.clear(document)?;
        cycle.begin_render()?;

        let fragment = self.create_posts(posts).await;
        if !self.is_current(generation) {
            return Err(RefreshFailure::Superseded);
        }

        cycle.display(document, fragment)?;
        Ok(cycle.attach(document, listeners)?)
    }
}
