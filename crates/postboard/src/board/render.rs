use super::Board;
use crate::prelude::*;
use postboard_core::comments::build_comment_section;
use postboard_core::dom::{Element, Fragment};
use postboard_core::posts::{assemble_post_article, build_post_fallback};
use postboard_core::types::Post;

impl Board {
    /// Fetch a post's comments and build its hidden comment section
    pub async fn display_comments(&self, post_id: u64) -> Result<Element, Error> {
        let comments = self.source.post_comments(post_id).await?;
        Ok(build_comment_section(post_id, Some(&comments)))
    }

    async fn render_post(&self, post: &Post) -> Result<Element, Error> {
        let author = self.source.user(post.user_id).await?;
        let section = self.display_comments(post.id).await?;
        Ok(assemble_post_article(post, &author, section))
    }

    /// Render one article per post, in order
    ///
    /// Posts are processed one after the other. A post whose author or
    /// comments cannot be fetched is rendered as a fallback block; the rest of
    /// the list is unaffected.
    pub async fn create_posts(&self, posts: &[Post]) -> Fragment {
        let mut fragment = Fragment::new();

        for post in posts {
            let article = match self.render_post(post).await {
                Ok(article) => article,
                Err(e) => {
                    log::error!("Failed to render post {}: {e}", post.id);
                    build_post_fallback(post, &e.to_string())
                }
            };
            fragment.append(article);
        }

        fragment
    }
}
