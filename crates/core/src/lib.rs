//! Core library for postboard
//!
//! This crate implements the **Functional Core** of the postboard application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`postboard_core`** (this crate): the page model and every transformation
//!   on it, with zero I/O
//! - **`postboard`**: API calls, the refresh orchestration and the CLI/HTTP
//!   front ends (the Imperative Shell)
//!
//! The page a browser would hold as global DOM state is an explicit
//! [`dom::Document`] value here. Every operation takes it as an argument, so
//! the toggle and render logic is tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`types`]: API records (`User`, `Post`, `Comment`)
//! - [`dom`]: the document tree
//! - [`builder`]: element and select option construction
//! - [`comments`]: comment blocks and the comment section
//! - [`posts`]: post article assembly
//! - [`toggle`]: comment section show/hide
//! - [`listeners`]: click bindings for toggle buttons
//! - [`refresh`]: the refresh cycle state machine
//! - [`selection`]: select menu events and user id resolution
//! - [`html`]: HTML serialization
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use postboard_core::dom::Document;
//! use postboard_core::listeners::{add_button_listeners, ListenerRegistry};
//! use postboard_core::posts::build_post_article;
//!
//! let mut document = Document::new();
//! document.main.children.clear();
//! document.main.append(build_post_article(&post, &author, Some(&comments)));
//!
//! let mut registry = ListenerRegistry::new();
//! add_button_listeners(&document, &mut registry);
//!
//! let toggled = registry.dispatch_click(&mut document, "1").unwrap();
//! assert!(toggled.is_visible());
//! ```

pub mod builder;
pub mod comments;
pub mod dom;
pub mod html;
pub mod listeners;
pub mod posts;
pub mod refresh;
pub mod selection;
pub mod toggle;
pub mod types;
