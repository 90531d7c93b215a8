//! Blog store: categories, tags, and the seeded posts.

use std::sync::Arc;

use context_demos_core::{Category, CategoryId, Post, Tag, TagId};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::ContextError;
use crate::ids::MonotonicIds;
use crate::provider::{Provider, Subscription};
use crate::scope::{ContextScope, Store};
use crate::seed;

/// Categories and tags in creation order, plus the fixed post list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogState {
    categories: Vec<Category>,
    tags: Vec<Tag>,
    posts: Vec<Post>,
}

impl BlogState {
    #[must_use]
    pub const fn new(categories: Vec<Category>, tags: Vec<Tag>, posts: Vec<Post>) -> Self {
        Self {
            categories,
            tags,
            posts,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts whose category is exactly `name`.
    #[must_use]
    pub fn posts_by_category(&self, name: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.in_category(name))
            .cloned()
            .collect()
    }

    /// Posts tagged exactly `name`.
    #[must_use]
    pub fn posts_by_tag(&self, name: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.has_tag(name))
            .cloned()
            .collect()
    }

    fn max_seeded_id(&self) -> i64 {
        let categories = self.categories.iter().map(|c| c.id.as_i64());
        let tags = self.tags.iter().map(|t| t.id.as_i64());
        categories.chain(tags).max().unwrap_or(0)
    }

    #[must_use]
    fn with_category(&self, category: Category) -> Self {
        let mut next = self.clone();
        next.categories.push(category);
        next
    }

    #[must_use]
    fn with_tag(&self, tag: Tag) -> Self {
        let mut next = self.clone();
        next.tags.push(tag);
        next
    }
}

/// Shared handle to the blog catalogue.
#[derive(Debug, Clone)]
pub struct BlogStore {
    provider: Provider<BlogState>,
    ids: Arc<MonotonicIds>,
}

impl Store for BlogStore {
    const CONSUMER: &'static str = "use_blog";
    const PROVIDER: &'static str = "BlogProvider";
}

impl BlogStore {
    /// A store starting from `initial`.
    #[must_use]
    pub fn new(initial: BlogState) -> Self {
        let ids = Arc::new(MonotonicIds::above(initial.max_seeded_id()));
        Self {
            provider: Provider::new(Self::PROVIDER, initial),
            ids,
        }
    }

    /// A store holding the seed categories, tags, and posts.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(BlogState::new(
            seed::categories(),
            seed::tags(),
            seed::posts(),
        ))
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<BlogState> {
        self.provider.snapshot()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.snapshot().categories().to_vec()
    }

    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        self.snapshot().tags().to_vec()
    }

    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.snapshot().posts().to_vec()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.provider.version()
    }

    /// Append a category named `name` with count 0.
    ///
    /// Names are not deduplicated against existing categories.
    #[instrument(skip(self, name))]
    pub fn add_category(&self, name: impl Into<String>) -> CategoryId {
        let id = CategoryId::new(self.ids.next_id());
        let category = Category::new(id, name, 0);
        debug!(category_id = %id, name = %category.name, "Adding category");
        self.provider.update(|state| Some(state.with_category(category)));
        id
    }

    /// Append a tag named `name` with count 0.
    #[instrument(skip(self, name))]
    pub fn add_tag(&self, name: impl Into<String>) -> TagId {
        let id = TagId::new(self.ids.next_id());
        let tag = Tag::new(id, name, 0);
        debug!(tag_id = %id, name = %tag.name, "Adding tag");
        self.provider.update(|state| Some(state.with_tag(tag)));
        id
    }

    /// Posts whose category is exactly `name`.
    #[must_use]
    pub fn posts_by_category(&self, name: &str) -> Vec<Post> {
        self.snapshot().posts_by_category(name)
    }

    /// Posts tagged exactly `name`.
    #[must_use]
    pub fn posts_by_tag(&self, name: &str) -> Vec<Post> {
        self.snapshot().posts_by_tag(name)
    }

    /// Call `listener` with every new blog snapshot.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<BlogState>) + Send + Sync + 'static,
    {
        self.provider.subscribe(listener)
    }

    /// Whether both handles share one catalogue.
    #[must_use]
    pub fn same_store(&self, other: &Self) -> bool {
        self.provider.same_provider(&other.provider)
    }
}

/// The blog catalogue provided to `scope`.
///
/// # Errors
///
/// Returns [`ContextError::MissingProvider`] outside a scope that provides a
/// [`BlogStore`].
pub fn use_blog(scope: &ContextScope) -> Result<BlogStore, ContextError> {
    scope.use_context::<BlogStore>()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_by_category_technology() {
        let blog = BlogStore::seeded();
        let posts = blog.posts_by_category("Technology");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Getting Started with React Context API");
    }

    #[test]
    fn test_posts_by_category_no_match() {
        let blog = BlogStore::seeded();
        assert!(blog.posts_by_category("technology").is_empty());
        assert!(blog.posts_by_category("Cooking").is_empty());
    }

    #[test]
    fn test_posts_by_tag() {
        let blog = BlogStore::seeded();
        let titles: Vec<String> = blog
            .posts_by_tag("JavaScript")
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Getting Started with React Context API".to_owned(),
                "JavaScript Best Practices".to_owned(),
            ]
        );
    }

    #[test]
    fn test_add_category_appends_with_zero_count() {
        let blog = BlogStore::seeded();
        let before = blog.categories();

        let id = blog.add_category("X");

        let after = blog.categories();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        let added = after.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.name, "X");
        assert_eq!(added.count, 0);
    }

    #[test]
    fn test_add_category_allows_duplicates() {
        let blog = BlogStore::seeded();
        let first = blog.add_category("Technology");
        let second = blog.add_category("Technology");
        assert_ne!(first, second);
        let named: Vec<_> = blog
            .categories()
            .into_iter()
            .filter(|c| c.name == "Technology")
            .collect();
        assert_eq!(named.len(), 3);
    }

    #[test]
    fn test_add_tag_does_not_touch_posts_or_categories() {
        let blog = BlogStore::seeded();
        let id = blog.add_tag("Rust");
        assert!(id.as_i64() > 4);
        let tags = blog.tags();
        assert_eq!(tags.last().unwrap().name, "Rust");
        // earlier tags keep their order and seeded counts
        assert_eq!(&tags[..4], &seed::tags()[..]);
        assert_eq!(blog.categories(), seed::categories());
        assert_eq!(blog.posts(), seed::posts());
    }

    #[test]
    fn test_use_blog_requires_provider() {
        let err = use_blog(&ContextScope::new()).unwrap_err();
        assert_eq!(err.to_string(), "use_blog must be used within a BlogProvider");
    }
}
