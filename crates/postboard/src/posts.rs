use crate::board::{Board, SelectionOutcome};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use postboard_core::comments::VISIBLE_CLASS;
use postboard_core::dom::{Document, Element, DEFAULT_OPTION, PLACEHOLDER_CLASS};
use postboard_core::html::render_document;
use postboard_core::posts::POST_ERROR_CLASS;
use postboard_core::selection::SelectEvent;
use postboard_core::toggle::comment_visibility;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output
    #[default]
    Text,
    /// The full HTML page
    Html,
    /// The selection outcome and the document tree
    Json,
}

#[derive(Debug, clap::Args, Clone)]
pub struct PostsOptions {
    /// User id or the default "Employees" option
    #[arg(value_name = "USER", default_value = DEFAULT_OPTION)]
    pub user: String,

    /// Show the comments of these post ids
    #[arg(short, long = "expand", value_name = "POST_ID")]
    pub expand: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct PostsJson<'a> {
    selection: &'a SelectionOutcome,
    comments_visible: BTreeMap<String, bool>,
    document: &'a Document,
}

pub async fn run(options: PostsOptions, global: crate::Global) -> Result<()> {
    let source = global.source()?;
    if global.verbose {
        eprintln!("Fetching users from {}", source.base());
    }
    let board = Board::new(Arc::new(source));
    board.init_page().await;

    if global.verbose {
        eprintln!("Selecting {:?}", options.user);
    }
    let outcome = board
        .handle_select_change(&SelectEvent::change(Some(options.user.as_str())))
        .await
        .ok_or_else(|| eyre!("Invalid selection: {}", options.user))?;

    if outcome.posts.is_none() {
        return Err(eyre!("Failed to fetch posts for user {}", outcome.user_id));
    }

    for post_id in &options.expand {
        if board.click(post_id).await.is_none() {
            eprintln!("No comment section for post {post_id}");
        }
    }

    let document = board.snapshot().await;
    match options.format {
        OutputFormat::Text => print!("{}", format_document_text(&document)),
        OutputFormat::Html => print!("{}", render_document(&document)),
        OutputFormat::Json => {
            let output = PostsJson {
                selection: &outcome,
                comments_visible: comment_visibility(&document),
                document: &document,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn format_comments(result: &mut String, section: &Element) {
    let post_id = section.post_id.as_deref().unwrap_or_default();

    if !section.has_class(VISIBLE_CLASS) {
        result.push_str(&format!(
            "{} {}\n",
            "└─".bright_black(),
            format!(
                "{} comments hidden (--expand {post_id})",
                section.children.len()
            )
            .bright_magenta()
        ));
        return;
    }

    result.push_str(&format!("\n{}\n", "-".repeat(80).bright_magenta()));
    result.push_str(&format!(
        "{} ({} {})\n",
        "COMMENTS".bright_magenta().bold(),
        section.children.len().to_string().bright_cyan().bold(),
        "total".bright_white()
    ));
    result.push_str(&format!("{}\n", "-".repeat(80).bright_magenta()));

    if section.children.is_empty() {
        result.push_str(&format!("\n  {}\n", "No comments on this post.".yellow()));
    }

    for comment in &section.children {
        for (idx, line) in comment.children.iter().enumerate() {
            match idx {
                0 => result.push_str(&format!("\n  {}\n", line.text.yellow().bold())),
                _ => result.push_str(&format!("  {}\n", line.text.white())),
            }
        }
    }
}

fn format_article(result: &mut String, article: &Element) {
    let is_error = article.has_class(POST_ERROR_CLASS);

    for child in &article.children {
        match child.tag.as_str() {
            "h2" => {
                result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
                result.push_str(&format!(
                    "{}: {}\n",
                    "POST".bright_cyan().bold(),
                    child.text.white().bold()
                ));
                result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));
            }
            "p" if is_error => result.push_str(&format!("{}\n", child.text.red())),
            "p" => result.push_str(&format!("{}\n", child.text.bright_white())),
            "section" => format_comments(result, child),
            _ => {}
        }
    }
}

/// Build formatted text output for the `main` container
fn format_document_text(document: &Document) -> String {
    let mut result = String::new();

    for element in &document.main.children {
        if element.has_class(PLACEHOLDER_CLASS) {
            result.push_str(&format!("\n{}\n", element.text.yellow()));
        } else if element.tag == "article" {
            format_article(&mut result, element);
        }
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test_source::{comment, post, user};
    use postboard_core::comments::build_comment_section;
    use postboard_core::dom::placeholder;
    use postboard_core::posts::{assemble_post_article, build_post_fallback};

    fn create_test_document(visible: bool) -> Document {
        let mut document = Document::new();
        document.main.children.clear();

        let mut section = build_comment_section(1, Some(&[comment(1, "alice")]));
        if visible {
            section.classes = vec!["comments".to_string(), VISIBLE_CLASS.to_string()];
        }
        document
            .main
            .append(assemble_post_article(&post(1, 1), &user(1, "Leanne"), section));
        document
            .main
            .append(build_post_fallback(&post(2, 1), "HTTP 500"));
        document
    }

    #[test]
    fn test_format_document_text_structure() {
        let result = format_document_text(&create_test_document(false));

        assert!(result.contains("POST"));
        assert!(result.contains("Post 1"));
        assert!(result.contains("Author: Leanne with Leanne Corp"));
        assert!(result.contains("Leanne says hi"));
        assert!(result.contains("1 comments hidden (--expand 1)"));
        assert!(!result.contains("alice wrote this"));
    }

    #[test]
    fn test_format_document_text_visible_comments() {
        let result = format_document_text(&create_test_document(true));

        assert!(result.contains("COMMENTS"));
        assert!(result.contains("alice"));
        assert!(result.contains("alice wrote this"));
        assert!(result.contains("From: alice@example.com"));
    }

    #[test]
    fn test_format_document_text_fallback_post() {
        let result = format_document_text(&create_test_document(false));
        assert!(result.contains("Post 2"));
        assert!(result.contains("This post could not be loaded: HTTP 500"));
    }

    #[test]
    fn test_format_document_text_placeholder() {
        let mut document = Document::new();
        document.main.children = vec![placeholder()];

        let result = format_document_text(&document);
        assert!(result.contains("Select an Employee to display their posts."));
        assert!(!result.contains("POST"));
    }
}
