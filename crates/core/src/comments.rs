//! Comment rendering

use crate::builder::create_elem_with_text;
use crate::dom::{Element, Fragment};
use crate::types::Comment;

pub const COMMENTS_CLASS: &str = "comments";
pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";

/// Render comments as a fragment of `article` blocks, in input order
///
/// Each block holds an `h3` with the comment name, a paragraph with the body
/// and a `From: <email>` paragraph. `None` yields no fragment at all while an
/// empty slice yields an empty fragment.
pub fn create_comments(comments: Option<&[Comment]>) -> Option<Fragment> {
    let comments = comments?;

    let mut fragment = Fragment::new();
    for comment in comments {
        let mut article = Element::new("article");
        article.append(create_elem_with_text("h3", &comment.name, ""));
        article.append(create_elem_with_text("p", &comment.body, ""));
        article.append(create_elem_with_text(
            "p",
            &format!("From: {}", comment.email),
            "",
        ));
        fragment.append(article);
    }

    Some(fragment)
}

/// Build the hidden comment section for a post
pub fn build_comment_section(post_id: u64, comments: Option<&[Comment]>) -> Element {
    let mut section = Element::new("section");
    section.post_id = Some(post_id.to_string());
    section.add_class(COMMENTS_CLASS);
    section.add_class(HIDDEN_CLASS);

    if let Some(fragment) = create_comments(comments) {
        section.append_fragment(fragment);
    }

    section
}
