//! Post article assembly
//!
//! Fetching happens in the shell; these functions only turn already fetched
//! records into elements.

use crate::builder::create_elem_with_text;
use crate::comments::build_comment_section;
use crate::dom::Element;
use crate::types::{Comment, Post, User};

pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// Class carried by the block rendered for a post that failed to load
pub const POST_ERROR_CLASS: &str = "post-error";

/// `Author: <name> with <company>`
pub fn author_line(author: &User) -> String {
    format!("Author: {} with {}", author.name, author.company.name)
}

/// Assemble the article for one post with a freshly built comment section
pub fn build_post_article(post: &Post, author: &User, comments: Option<&[Comment]>) -> Element {
    assemble_post_article(post, author, build_comment_section(post.id, comments))
}

/// Assemble the article for one post around an already built comment section
///
/// Children, in order: title, body, post id line, author line, catch phrase,
/// the toggle button and the comment section. Button and section share the
/// post id in `data-post-id`.
pub fn assemble_post_article(post: &Post, author: &User, section: Element) -> Element {
    let mut article = Element::new("article");
    article.append(create_elem_with_text("h2", &post.title, ""));
    article.append(create_elem_with_text("p", &post.body, ""));
    article.append(create_elem_with_text(
        "p",
        &format!("Post ID: {}", post.id),
        "",
    ));
    article.append(create_elem_with_text("p", &author_line(author), ""));
    article.append(create_elem_with_text("p", &author.company.catch_phrase, ""));

    let mut button = create_elem_with_text("button", SHOW_COMMENTS, "");
    button.post_id = Some(post.id.to_string());
    article.append(button);

    article.append(section);

    article
}

/// Block rendered in place of a post whose author or comments failed to load
///
/// It has no toggle button and no comment section, so nothing gets bound to it.
pub fn build_post_fallback(post: &Post, reason: &str) -> Element {
    let mut article = Element::new("article");
    article.add_class(POST_ERROR_CLASS);
    article.append(create_elem_with_text("h2", &post.title, ""));
    article.append(create_elem_with_text(
        "p",
        &format!("Post ID: {}", post.id),
        "",
    ));
    article.append(create_elem_with_text(
        "p",
        &format!("This post could not be loaded: {reason}"),
        "",
    ));
    article
}
