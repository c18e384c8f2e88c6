//! HTML rendering of the document
//!
//! The page works without scripts except for the select menu, which submits
//! its form on change. Every toggle button submits a single shared form via
//! `formaction`, so the server sees a click as `POST /posts/{id}/toggle`.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::dom::{Document, Element, SelectMenu};

pub const PAGE_TITLE: &str = "Employee Posts";

/// Id of the empty form every toggle button submits
pub const TOGGLE_FORM_ID: &str = "toggle-comments";

pub const SELECT_ACTION: &str = "/select";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:0 auto;padding:1rem}\
article{border-bottom:1px solid #ddd;padding:1rem 0}\
section.comments article{margin-left:1.5rem;border:none;padding:.5rem 0}\
.hidden{display:none}\
.post-error{color:#a33}\
.default-text{color:#666}";

/// Path a toggle button posts to
pub fn toggle_action(post_id: &str) -> String {
    format!("/posts/{post_id}/toggle")
}

fn attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

fn render_into(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);

    if !element.classes.is_empty() {
        attr(out, "class", &element.classes.join(" "));
    }
    if let Some(value) = &element.value {
        attr(out, "value", value);
    }
    if let Some(post_id) = &element.post_id {
        if element.tag == "button" {
            attr(out, "type", "submit");
            attr(out, "form", TOGGLE_FORM_ID);
            attr(out, "formaction", &toggle_action(post_id));
        }
        attr(out, "data-post-id", post_id);
    }
    out.push('>');

    out.push_str(&encode_text(&element.text));
    if !element.children.is_empty() {
        out.push('\n');
        for child in &element.children {
            render_into(out, child);
            out.push('\n');
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// Serialize a single element and its subtree
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    render_into(&mut out, element);
    out
}

fn render_select_menu(out: &mut String, menu: &SelectMenu) {
    out.push_str("<select");
    attr(out, "id", &menu.id);
    attr(out, "name", "user");
    attr(out, "onchange", "this.form.submit()");
    if menu.disabled {
        out.push_str(" disabled");
    }
    out.push_str(">\n");

    for option in &menu.options {
        let value = option.value.as_deref().unwrap_or(&option.text);
        out.push_str("<option");
        attr(out, "value", value);
        if menu.selected.as_deref() == Some(value) {
            out.push_str(" selected");
        }
        out.push('>');
        out.push_str(&encode_text(&option.text));
        out.push_str("</option>\n");
    }

    out.push_str("</select>");
}

/// Serialize the whole page
pub fn render_document(document: &Document) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    out.push_str(&format!("<style>{STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n<header>\n");
    out.push_str(&format!("<h1>{PAGE_TITLE}</h1>\n"));

    out.push_str("<form");
    attr(&mut out, "action", SELECT_ACTION);
    attr(&mut out, "method", "get");
    out.push_str(">\n");
    render_select_menu(&mut out, &document.select_menu);
    out.push_str("\n<noscript><button type=\"submit\">Show</button></noscript>\n</form>\n");
    out.push_str("</header>\n");

    out.push_str(&render_element(&document.main));
    out.push('\n');

    out.push_str("<form");
    attr(&mut out, "id", TOGGLE_FORM_ID);
    attr(&mut out, "method", "post");
    out.push_str("></form>\n</body>\n</html>\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::populate_select_menu;
    use crate::posts::build_post_article;
    use crate::types::{Comment, Company, Post, User};
    use scraper::{Html, Selector};

    fn create_test_user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: None,
            email: None,
            company: Company {
                name: "Y & Sons".to_string(),
                catch_phrase: "Z".to_string(),
            },
        }
    }

    fn create_test_document() -> Document {
        let mut document = Document::new();
        populate_select_menu(
            &mut document,
            Some(&[create_test_user(1, "X"), create_test_user(2, "W")]),
        );
        document.main.children.clear();

        for id in [1, 2] {
            let post = Post {
                id,
                user_id: 1,
                title: format!("<Title {id}>"),
                body: "b".to_string(),
            };
            let comments = vec![Comment {
                id: None,
                post_id: id,
                name: "c".to_string(),
                body: "cb".to_string(),
                email: "c@example.com".to_string(),
            }];
            document.main.append(build_post_article(
                &post,
                &create_test_user(1, "X"),
                Some(&comments),
            ));
        }
        document
    }

    fn select(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }

    #[test]
    fn test_render_document_structure() {
        let page = Html::parse_document(&render_document(&create_test_document()));

        assert_eq!(select(&page, "select#selectMenu"), 1);
        assert_eq!(select(&page, "select#selectMenu option"), 3);
        assert_eq!(select(&page, "main > article"), 2);
        assert_eq!(select(&page, "section.comments.hidden[data-post-id=\"1\"]"), 1);
        assert_eq!(select(&page, "button[data-post-id=\"2\"]"), 1);
        assert_eq!(select(&page, "form#toggle-comments"), 1);
    }

    #[test]
    fn test_render_document_toggle_button_targets_form() {
        let page = Html::parse_document(&render_document(&create_test_document()));
        let selector = Selector::parse("button[data-post-id=\"1\"]").unwrap();
        let button = page.select(&selector).next().unwrap();

        assert_eq!(button.value().attr("form"), Some(TOGGLE_FORM_ID));
        assert_eq!(button.value().attr("formaction"), Some("/posts/1/toggle"));
        assert_eq!(button.text().collect::<String>(), "Show Comments");
    }

    #[test]
    fn test_render_document_escapes_text() {
        let html = render_document(&create_test_document());
        assert!(html.contains("&lt;Title 1&gt;"));
        assert!(html.contains("Author: X with Y &amp; Sons"));
        assert!(!html.contains("<Title 1>"));
    }

    #[test]
    fn test_render_document_disabled_and_selected() {
        let mut document = create_test_document();
        document.select_menu.disabled = true;
        document.select_menu.selected = Some("2".to_string());

        let page = Html::parse_document(&render_document(&document));
        assert_eq!(select(&page, "select#selectMenu[disabled]"), 1);
        assert_eq!(select(&page, "option[value=\"2\"][selected]"), 1);
    }

    #[test]
    fn test_render_element_placeholder() {
        let html = render_element(&crate::dom::placeholder());
        assert_eq!(
            html,
            "<p class=\"default-text\">Select an Employee to display their posts.</p>"
        );
    }
}
