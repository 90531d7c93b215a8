//! Blog categories, tags, and posts.
//!
//! `count` on [`Category`] and [`Tag`] is display data carried from the seed;
//! nothing recomputes it from the posts.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, PostId, TagId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub count: u32,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub count: u32,
}

impl Tag {
    #[must_use]
    pub fn new(id: TagId, name: impl Into<String>, count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            count,
        }
    }
}

/// A blog post.
///
/// `category` and `tags` refer to categories and tags by name. They are not
/// checked against the category and tag lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Whether the post belongs to the category named exactly `name`.
    #[must_use]
    pub fn in_category(&self, name: &str) -> bool {
        self.category == name
    }

    /// Whether the post carries the tag named exactly `name`.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: PostId::new(2),
            title: "Modern CSS Techniques".to_owned(),
            excerpt: "Explore advanced CSS features for better web design.".to_owned(),
            category: "Design".to_owned(),
            tags: vec!["CSS".to_owned(), "UI/UX".to_owned()],
        }
    }

    #[test]
    fn test_in_category_is_exact() {
        let post = post();
        assert!(post.in_category("Design"));
        assert!(!post.in_category("design"));
        assert!(!post.in_category("Design "));
    }

    #[test]
    fn test_has_tag_is_membership() {
        let post = post();
        assert!(post.has_tag("UI/UX"));
        assert!(!post.has_tag("UI"));
        assert!(!post.has_tag("JavaScript"));
    }
}
