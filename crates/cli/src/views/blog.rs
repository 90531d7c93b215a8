//! Blog demo surfaces: side navigation, post list, category manager.

use std::fmt;

use askama::Template;
use context_demos_core::{Category, Post, Tag};
use context_demos_state::{ContextScope, use_blog};

use super::{StoreKind, Surface};
use crate::error::CliError;
use crate::events::UiEvent;

#[derive(Template)]
#[template(
    source = r"Categories
{%- for category in categories %}
- {{ category.name }} ({{ category.count }} posts)
{%- endfor %}
Tags
{%- for tag in tags %}
- {{ tag.name }} ({{ tag.count }})
{%- endfor %}",
    ext = "txt"
)]
struct AsideTemplate<'a> {
    categories: &'a [Category],
    tags: &'a [Tag],
}

#[derive(Template)]
#[template(
    source = r#"Blog Posts{% if let Some(active) = active_filter %} ({{ active }}){% endif %}
{%- for post in posts %}
* {{ post.title }}
  {{ post.excerpt }}
  [{{ post.category }}] {{ post.tags|join(", ") }}
{%- endfor %}
{%- if posts.is_empty() %}
(no posts)
{%- endif %}"#,
    ext = "txt"
)]
struct PostsTemplate<'a> {
    active_filter: Option<&'a PostFilter>,
    posts: &'a [Post],
}

#[derive(Template)]
#[template(
    source = r"Categories Management
{%- for category in categories %}
- {{ category.name }}: {{ category.count }} posts
{%- endfor %}",
    ext = "txt"
)]
struct CategoriesTemplate<'a> {
    categories: &'a [Category],
}

/// Side navigation listing categories and tags with their counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsideSurface;

impl Surface for AsideSurface {
    fn name(&self) -> &'static str {
        "aside"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Blog
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let blog = use_blog(scope)?.snapshot();
        Ok(AsideTemplate {
            categories: blog.categories(),
            tags: blog.tags(),
        }
        .render()?)
    }
}

/// Narrowing applied to the post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    Category(String),
    Tag(String),
}

impl fmt::Display for PostFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(name) => write!(f, "category: {name}"),
            Self::Tag(name) => write!(f, "tag: {name}"),
        }
    }
}

/// Post list, optionally narrowed to one category or tag.
#[derive(Debug, Clone, Default)]
pub struct PostsSurface {
    filter: Option<PostFilter>,
}

impl PostsSurface {
    /// Active filter, if any.
    #[must_use]
    pub const fn filter(&self) -> Option<&PostFilter> {
        self.filter.as_ref()
    }
}

impl Surface for PostsSurface {
    fn name(&self) -> &'static str {
        "posts"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Blog
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let blog = use_blog(scope)?;
        let posts = match &self.filter {
            Some(PostFilter::Category(name)) => blog.posts_by_category(name),
            Some(PostFilter::Tag(name)) => blog.posts_by_tag(name),
            None => blog.posts(),
        };
        Ok(PostsTemplate {
            active_filter: self.filter.as_ref(),
            posts: &posts,
        }
        .render()?)
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        let next = match event {
            UiEvent::FilterCategory(name) => Some(PostFilter::Category(name.clone())),
            UiEvent::FilterTag(name) => Some(PostFilter::Tag(name.clone())),
            UiEvent::ClearFilter => None,
            _ => return false,
        };
        if self.filter == next {
            return false;
        }
        self.filter = next;
        true
    }
}

/// Category management list. New categories arrive through the add-category
/// dialog event.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoriesSurface;

impl Surface for CategoriesSurface {
    fn name(&self) -> &'static str {
        "categories"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Blog
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let blog = use_blog(scope)?.snapshot();
        Ok(CategoriesTemplate {
            categories: blog.categories(),
        }
        .render()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use context_demos_state::BlogStore;

    use super::*;

    fn scope() -> ContextScope {
        ContextScope::new().with(BlogStore::seeded())
    }

    #[test]
    fn test_aside_lists_counts() {
        let out = AsideSurface.render(&scope()).unwrap();
        assert!(out.starts_with("Categories\n- Technology (15 posts)"));
        assert!(out.contains("Tags\n- React (10)"));
        assert!(out.contains("- UI/UX (5)"));
    }

    #[test]
    fn test_posts_unfiltered() {
        let out = PostsSurface::default().render(&scope()).unwrap();
        assert!(out.starts_with("Blog Posts\n"));
        assert_eq!(out.matches("\n* ").count(), 3);
        assert!(out.contains("[Technology] React, JavaScript"));
    }

    #[test]
    fn test_posts_filtered_by_category() {
        let mut posts = PostsSurface::default();
        assert!(posts.handle(&UiEvent::FilterCategory("Technology".to_owned())));
        let out = posts.render(&scope()).unwrap();
        assert!(out.starts_with("Blog Posts (category: Technology)"));
        assert!(out.contains("* Getting Started with React Context API"));
        assert_eq!(out.matches("\n* ").count(), 1);
    }

    #[test]
    fn test_posts_filter_no_match() {
        let mut posts = PostsSurface::default();
        posts.handle(&UiEvent::FilterTag("Rust".to_owned()));
        let out = posts.render(&scope()).unwrap();
        assert_eq!(out, "Blog Posts (tag: Rust)\n(no posts)");
    }

    #[test]
    fn test_posts_handle_ignores_store_events() {
        let mut posts = PostsSurface::default();
        assert!(!posts.handle(&UiEvent::AddCategory("X".to_owned())));
        assert!(!posts.handle(&UiEvent::ClearFilter));
        assert!(posts.filter().is_none());
    }

    #[test]
    fn test_categories_management_sees_added_category() {
        let scope = scope();
        use_blog(&scope).unwrap().add_category("Rust");
        let out = CategoriesSurface.render(&scope).unwrap();
        assert!(out.ends_with("- Rust: 0 posts"));
    }
}
