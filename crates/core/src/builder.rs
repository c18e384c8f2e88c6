//! Element construction helpers

use crate::dom::{Document, Element, SelectMenu, DEFAULT_OPTION};
use crate::types::User;

/// Create an element with the given text and an optional class name
///
/// An empty `class_name` leaves the class list empty.
pub fn create_elem_with_text(element_type: &str, text_content: &str, class_name: &str) -> Element {
    let mut element = Element::new(element_type);
    element.text = text_content.to_string();
    if !class_name.is_empty() {
        element.add_class(class_name);
    }
    element
}

/// One `option` per user: value is the user id, label the user name
pub fn create_select_options(users: Option<&[User]>) -> Option<Vec<Element>> {
    let users = users?;

    Some(
        users
            .iter()
            .map(|user| {
                let mut option = create_elem_with_text("option", &user.name, "");
                option.value = Some(user.id.to_string());
                option
            })
            .collect(),
    )
}

/// Fill the select menu with one option per user after the default option
///
/// Options from a previous call are replaced, so populating twice does not
/// duplicate entries.
pub fn populate_select_menu<'a>(
    document: &'a mut Document,
    users: Option<&[User]>,
) -> Option<&'a SelectMenu> {
    let options = create_select_options(users)?;

    let menu = &mut document.select_menu;
    menu.options
        .retain(|option| option.value.as_deref() == Some(DEFAULT_OPTION));
    menu.options.extend(options);

    Some(menu)
}

/// Remove every child of `parent`, returning how many were removed
pub fn delete_child_elements(parent: &mut Element) -> usize {
    let removed = parent.children.len();
    parent.children.clear();
    removed
}
