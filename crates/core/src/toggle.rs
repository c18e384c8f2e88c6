//! Comment section show/hide state
//!
//! A post's comment section and its toggle button are joined by the
//! `data-post-id` attribute. Visibility lives in the section's class list and
//! is mirrored by the button label:
//!
//! | section class | button label    |
//! |---------------|-----------------|
//! | `hidden`      | `Show Comments` |
//! | `visible`     | `Hide Comments` |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::comments::{HIDDEN_CLASS, VISIBLE_CLASS};
use crate::dom::{Document, Element};
use crate::posts::{HIDE_COMMENTS, SHOW_COMMENTS};

/// A click delivered to a toggle button
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub post_id: String,
    /// Set once a handler has processed the click
    pub handled: bool,
}

impl ClickEvent {
    pub fn new(post_id: &str) -> Self {
        Self {
            post_id: post_id.to_string(),
            handled: false,
        }
    }
}

/// Section and button as they are after a toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentToggle {
    pub section: Element,
    pub button: Element,
}

impl CommentToggle {
    pub fn is_visible(&self) -> bool {
        self.section.has_class(VISIBLE_CLASS)
    }
}

fn find_section<'a>(document: &'a Document, post_id: &str) -> Option<&'a Element> {
    document.main.find(&|e| e.is_tagged("section", post_id))
}

fn find_button<'a>(document: &'a Document, post_id: &str) -> Option<&'a Element> {
    document.main.find(&|e| e.is_tagged("button", post_id))
}

/// Flip the section tagged `post_id` between `hidden` and `visible`
///
/// Returns `None` for an empty id or when no section carries it.
pub fn toggle_comment_section<'a>(document: &'a mut Document, post_id: &str) -> Option<&'a Element> {
    if post_id.is_empty() {
        return None;
    }

    let section = document
        .main
        .find_mut(&|e| e.is_tagged("section", post_id))?;

    if section.has_class(HIDDEN_CLASS) {
        section.remove_class(HIDDEN_CLASS);
        section.add_class(VISIBLE_CLASS);
    } else {
        section.remove_class(VISIBLE_CLASS);
        section.add_class(HIDDEN_CLASS);
    }

    Some(section)
}

/// Flip the label of the button tagged `post_id`
///
/// Only the two known labels are swapped; any other label is left as is.
pub fn toggle_comment_button<'a>(document: &'a mut Document, post_id: &str) -> Option<&'a Element> {
    if post_id.is_empty() {
        return None;
    }

    let button = document
        .main
        .find_mut(&|e| e.is_tagged("button", post_id))?;

    if button.text == SHOW_COMMENTS {
        button.text = HIDE_COMMENTS.to_string();
    } else if button.text == HIDE_COMMENTS {
        button.text = SHOW_COMMENTS.to_string();
    }

    Some(button)
}

/// Click handler for a toggle button
///
/// Marks the event as handled and flips both the section and the button. When
/// either half is missing nothing is touched and `None` is returned, so the
/// label and the section can never drift apart.
pub fn toggle_comments(
    document: &mut Document,
    event: &mut ClickEvent,
    post_id: &str,
) -> Option<CommentToggle> {
    log::debug!("Toggled comments for postId: {post_id}");
    event.handled = true;

    if post_id.is_empty()
        || find_section(document, post_id).is_none()
        || find_button(document, post_id).is_none()
    {
        log::warn!("No comment section and button pair for postId: {post_id:?}");
        return None;
    }

    let section = toggle_comment_section(document, post_id)?.clone();
    let button = toggle_comment_button(document, post_id)?.clone();

    Some(CommentToggle { section, button })
}

/// Visibility of every comment section under `main`, keyed by post id
pub fn comment_visibility(document: &Document) -> BTreeMap<String, bool> {
    document
        .main
        .find_all(&|e| e.tag == "section" && e.post_id.is_some())
        .into_iter()
        .filter_map(|section| {
            let post_id = section.post_id.clone()?;
            Some((post_id, section.has_class(VISIBLE_CLASS)))
        })
        .collect()
}

/// Whether every section/button pair holds one of the two valid states
pub fn is_consistent(document: &Document) -> bool {
    comment_visibility(document)
        .into_iter()
        .all(|(post_id, visible)| match find_button(document, &post_id) {
            Some(button) if visible => button.text == HIDE_COMMENTS,
            Some(button) => button.text == SHOW_COMMENTS,
            None => false,
        })
}
