//! Owned document model
//!
//! A small tree that plays the role of the browser DOM: elements carry a tag,
//! their text, a class list and the `data-post-id` attribute that joins a
//! comment section to its toggle button. The whole page state lives in a
//! [`Document`] value that is passed explicitly to every operation.

use serde::Serialize;

/// Id of the select control
pub const SELECT_MENU_ID: &str = "selectMenu";

/// Label (and value) of the first option in the select menu
pub const DEFAULT_OPTION: &str = "Employees";

/// Text shown in `main` when there is nothing to display
pub const PLACEHOLDER_TEXT: &str = "Select an Employee to display their posts.";

/// Class carried by the placeholder paragraph
pub const PLACEHOLDER_CLASS: &str = "default-text";

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// The `data-post-id` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    /// The `value` attribute, only meaningful for `option` elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            classes: Vec::new(),
            post_id: None,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Moves every node of the fragment to the end of this element's children
    pub fn append_fragment(&mut self, fragment: Fragment) {
        self.children.extend(fragment.children);
    }

    /// Whether this element is a `tag` carrying `data-post-id == post_id`
    pub fn is_tagged(&self, tag: &str, post_id: &str) -> bool {
        self.tag == tag && self.post_id.as_deref() == Some(post_id)
    }

    /// Depth-first search, including `self`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// Depth-first search for a mutable node, including `self`
    pub fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Some(found) = child.find_mut(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant (excluding `self`) matching the predicate, in document order
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            if pred(child) {
                found.push(child);
            }
            found.extend(child.find_all(pred));
        }
        found
    }
}

/// Detached list of nodes, the equivalent of a `DocumentFragment`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub children: Vec<Element>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// The `select#selectMenu` control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectMenu {
    pub id: String,
    pub disabled: bool,
    /// Value of the currently selected option, if any was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    pub options: Vec<Element>,
}

impl Default for SelectMenu {
    fn default() -> Self {
        let mut default_option = Element::new("option");
        default_option.text = DEFAULT_OPTION.to_string();
        default_option.value = Some(DEFAULT_OPTION.to_string());

        Self {
            id: SELECT_MENU_ID.to_string(),
            disabled: false,
            selected: None,
            options: vec![default_option],
        }
    }
}

/// Page state: the select menu and the `main` content container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub select_menu: SelectMenu,
    pub main: Element,
}

impl Default for Document {
    fn default() -> Self {
        let mut main = Element::new("main");
        main.append(placeholder());

        Self {
            select_menu: SelectMenu::default(),
            main,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The `p.default-text` element shown when no posts are displayed
pub fn placeholder() -> Element {
    let mut element = Element::new("p");
    element.text = PLACEHOLDER_TEXT.to_string();
    element.add_class(PLACEHOLDER_CLASS);
    element
}
