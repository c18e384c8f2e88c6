//! Click bindings for comment toggle buttons
//!
//! Bindings are kept in a table keyed by post id. Detaching looks the
//! binding up by the same key, so it always removes exactly the binding that
//! was attached, and attaching an already bound button replaces its binding
//! instead of stacking a second one.

use std::collections::BTreeMap;
use std::fmt;

use crate::dom::Document;
use crate::toggle::{toggle_comments, ClickEvent, CommentToggle};

/// Signature of a toggle button click handler
pub type ClickHandler = fn(&mut Document, &mut ClickEvent, &str) -> Option<CommentToggle>;

/// One attached handler
#[derive(Clone, Copy)]
pub struct Binding {
    pub(crate) id: u64,
    handler: ClickHandler,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").field("id", &self.id).finish()
    }
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bindings: BTreeMap<String, Binding>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to the button tagged `post_id`, replacing any previous binding
    pub fn bind(&mut self, post_id: &str, handler: ClickHandler) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.bindings
            .insert(post_id.to_string(), Binding { id, handler });
        id
    }

    pub fn unbind(&mut self, post_id: &str) -> Option<Binding> {
        self.bindings.remove(post_id)
    }

    pub fn is_bound(&self, post_id: &str) -> bool {
        self.bindings.contains_key(post_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Deliver a click to the button tagged `post_id`
    ///
    /// A button without a binding ignores the click.
    pub fn dispatch_click(&self, document: &mut Document, post_id: &str) -> Option<CommentToggle> {
        let Some(binding) = self.bindings.get(post_id) else {
            log::debug!("Click on unbound button for postId: {post_id:?}");
            return None;
        };

        let mut event = ClickEvent::new(post_id);
        (binding.handler)(document, &mut event, post_id)
    }
}

/// Post ids of every button under `main` that carries one, in document order
pub fn toggle_button_ids(document: &Document) -> Vec<String> {
    document
        .main
        .find_all(&|e| e.tag == "button")
        .into_iter()
        .filter_map(|button| button.post_id.clone())
        .filter(|post_id| !post_id.is_empty())
        .collect()
}

/// Bind the comment toggle handler to every tagged button under `main`
pub fn add_button_listeners(document: &Document, registry: &mut ListenerRegistry) -> Vec<String> {
    let post_ids = toggle_button_ids(document);
    for post_id in &post_ids {
        let id = registry.bind(post_id, toggle_comments);
        log::debug!("Bound click handler #{id} for postId: {post_id}");
    }
    post_ids
}

/// Remove the bindings of every tagged button under `main`
pub fn remove_button_listeners(
    document: &Document,
    registry: &mut ListenerRegistry,
) -> Vec<String> {
    let post_ids = toggle_button_ids(document);
    for post_id in &post_ids {
        if let Some(binding) = registry.unbind(post_id) {
            log::debug!("Removed click handler #{} for postId: {post_id}", binding.id);
        }
    }
    post_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::{build_post_article, HIDE_COMMENTS, SHOW_COMMENTS};
    use crate::types::{Company, Post, User};

    fn create_test_document(post_ids: &[u64]) -> Document {
        let author = User {
            id: 1,
            name: "X".to_string(),
            username: None,
            email: None,
            company: Company {
                name: "Y".to_string(),
                catch_phrase: "Z".to_string(),
            },
        };

        let mut document = Document::new();
        document.main.children.clear();
        for id in post_ids {
            let post = Post {
                id: *id,
                user_id: 1,
                title: "t".to_string(),
                body: "b".to_string(),
            };
            document
                .main
                .append(build_post_article(&post, &author, Some(&[])));
        }
        document
    }

    fn button_text(document: &Document, post_id: &str) -> String {
        document
            .main
            .find(&|e| e.is_tagged("button", post_id))
            .map(|b| b.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_button_listeners_binds_every_button() {
        let document = create_test_document(&[1, 2, 3]);
        let mut registry = ListenerRegistry::new();

        let bound = add_button_listeners(&document, &mut registry);
        assert_eq!(bound, vec!["1", "2", "3"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.is_bound("2"));
    }

    #[test]
    fn test_add_button_listeners_skips_untagged_buttons() {
        let mut document = create_test_document(&[1]);
        document.main.append(crate::dom::Element::new("button"));
        let mut registry = ListenerRegistry::new();

        add_button_listeners(&document, &mut registry);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dispatch_click_toggles_once() {
        let mut document = create_test_document(&[1]);
        let mut registry = ListenerRegistry::new();
        add_button_listeners(&document, &mut registry);
        add_button_listeners(&document, &mut registry);

        let toggled = registry.dispatch_click(&mut document, "1").unwrap();
        assert!(toggled.is_visible());
        assert_eq!(button_text(&document, "1"), HIDE_COMMENTS);
    }

    #[test]
    fn test_remove_button_listeners_removes_bound_handler() {
        let mut document = create_test_document(&[1, 2]);
        let mut registry = ListenerRegistry::new();
        add_button_listeners(&document, &mut registry);

        let removed = remove_button_listeners(&document, &mut registry);
        assert_eq!(removed, vec!["1", "2"]);
        assert!(registry.is_empty());

        assert!(registry.dispatch_click(&mut document, "1").is_none());
        assert_eq!(button_text(&document, "1"), SHOW_COMMENTS);
    }

    #[test]
    fn test_rebinding_replaces_binding_id() {
        let document = create_test_document(&[1]);
        let mut registry = ListenerRegistry::new();

        add_button_listeners(&document, &mut registry);
        add_button_listeners(&document, &mut registry);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.unbind("1").map(|b| b.id), Some(2));
        assert!(registry.unbind("1").is_none());
    }

    #[test]
    fn test_dispatch_click_unknown_button() {
        let mut document = create_test_document(&[1]);
        let registry = ListenerRegistry::new();
        let original = document.clone();

        assert!(registry.dispatch_click(&mut document, "1").is_none());
        assert_eq!(document, original);
    }
}
