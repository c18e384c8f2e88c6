//! Refresh cycle state machine
//!
//! A cycle walks `Idle -> Detaching -> Clearing -> Rendering -> Attaching ->
//! Idle`. The shell drives it and does the fetching while the cycle sits in
//! `Rendering`; each step here only touches the document and the listener
//! table.

use serde::Serialize;

use crate::builder::delete_child_elements;
use crate::dom::{placeholder, Document, Fragment};
use crate::listeners::{add_button_listeners, remove_button_listeners, ListenerRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPhase {
    Idle,
    Detaching,
    Clearing,
    Rendering,
    Attaching,
}

impl RefreshPhase {
    pub fn next(self) -> Self {
        match self {
            RefreshPhase::Idle => RefreshPhase::Detaching,
            RefreshPhase::Detaching => RefreshPhase::Clearing,
            RefreshPhase::Clearing => RefreshPhase::Rendering,
            RefreshPhase::Rendering => RefreshPhase::Attaching,
            RefreshPhase::Attaching => RefreshPhase::Idle,
        }
    }
}

impl std::fmt::Display for RefreshPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RefreshPhase::Idle => "idle",
            RefreshPhase::Detaching => "detaching",
            RefreshPhase::Clearing => "clearing",
            RefreshPhase::Rendering => "rendering",
            RefreshPhase::Attaching => "attaching",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RefreshError {
    #[error("Cannot enter {requested} while the refresh cycle is {current}")]
    OutOfOrder {
        current: RefreshPhase,
        requested: RefreshPhase,
    },
}

/// What one refresh cycle did to the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    /// Post ids whose bindings were removed
    pub detached: Vec<String>,
    /// Number of nodes removed from `main`
    pub cleared: usize,
    /// Number of nodes appended to `main`
    pub rendered: usize,
    /// Whether the placeholder was shown instead of posts
    pub placeholder: bool,
    /// Post ids bound after rendering
    pub attached: Vec<String>,
}

#[derive(Debug)]
pub struct RefreshCycle {
    phase: RefreshPhase,
    outcome: RefreshOutcome,
}

impl Default for RefreshCycle {
    fn default() -> Self {
        Self {
            phase: RefreshPhase::Idle,
            outcome: RefreshOutcome::default(),
        }
    }
}

impl RefreshCycle {
    pub fn new() -> Self {
        Self::default()
    }

    fn enter(&mut self, requested: RefreshPhase) -> Result<(), RefreshError> {
        if self.phase.next() != requested {
            return Err(RefreshError::OutOfOrder {
                current: self.phase,
                requested,
            });
        }
        log::debug!("Refresh cycle: {} -> {}", self.phase, requested);
        self.phase = requested;
        Ok(())
    }

    /// Remove the click bindings of the buttons currently on the page
    pub fn detach(
        &mut self,
        document: &Document,
        registry: &mut ListenerRegistry,
    ) -> Result<&[String], RefreshError> {
        self.enter(RefreshPhase::Detaching)?;
        self.outcome.detached = remove_button_listeners(document, registry);
        Ok(&self.outcome.detached)
    }

    /// Empty the `main` container
    pub fn clear(&mut self, document: &mut Document) -> Result<usize, RefreshError> {
        self.enter(RefreshPhase::Clearing)?;
        self.outcome.cleared = delete_child_elements(&mut document.main);
        Ok(self.outcome.cleared)
    }

    /// Move into `Rendering`; the caller builds the new content while here
    pub fn begin_render(&mut self) -> Result<(), RefreshError> {
        self.enter(RefreshPhase::Rendering)
    }

    /// Append the rendered posts, or the placeholder when there are none
    pub fn display(&mut self, document: &mut Document, fragment: Fragment) -> Result<usize, RefreshError> {
        if self.phase != RefreshPhase::Rendering {
            return Err(RefreshError::OutOfOrder {
                current: self.phase,
                requested: RefreshPhase::Rendering,
            });
        }

        if fragment.is_empty() {
            document.main.append(placeholder());
            self.outcome.placeholder = true;
            self.outcome.rendered = 1;
        } else {
            self.outcome.rendered = fragment.len();
            document.main.append_fragment(fragment);
        }

        Ok(self.outcome.rendered)
    }

    /// Bind the freshly rendered buttons and close the cycle
    pub fn attach(
        mut self,
        document: &Document,
        registry: &mut ListenerRegistry,
    ) -> Result<RefreshOutcome, RefreshError> {
        self.enter(RefreshPhase::Attaching)?;
        self.outcome.attached = add_button_listeners(document, registry);
        self.enter(RefreshPhase::Idle)?;
        Ok(self.outcome)
    }
}
