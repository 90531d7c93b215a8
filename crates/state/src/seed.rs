//! Seed data the stores start from.

use context_demos_core::{
    CartItem, Category, CategoryId, CurrencyCode, Post, PostId, Price, Product, ProductId, Tag,
    TagId,
};

/// Products offered on the product display.
#[must_use]
pub fn products(currency: CurrencyCode) -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new(1),
            "Gaming PC",
            Price::from_whole(1299, currency),
            "High-performance gaming computer",
        ),
        Product::new(
            ProductId::new(2),
            "Office PC",
            Price::from_whole(699, currency),
            "Reliable computer for office work",
        ),
    ]
}

/// The cart as it is before any interaction: one Gaming PC.
#[must_use]
pub fn cart_items(currency: CurrencyCode) -> Vec<CartItem> {
    vec![CartItem {
        id: ProductId::new(1),
        name: "Gaming PC".to_owned(),
        price: Price::from_whole(1299, currency),
        quantity: 1,
    }]
}

#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), "Technology", 15),
        Category::new(CategoryId::new(2), "Design", 8),
        Category::new(CategoryId::new(3), "Programming", 12),
    ]
}

#[must_use]
pub fn tags() -> Vec<Tag> {
    vec![
        Tag::new(TagId::new(1), "React", 10),
        Tag::new(TagId::new(2), "JavaScript", 18),
        Tag::new(TagId::new(3), "CSS", 7),
        Tag::new(TagId::new(4), "UI/UX", 5),
    ]
}

#[must_use]
pub fn posts() -> Vec<Post> {
    vec![
        post(
            1,
            "Getting Started with React Context API",
            "Learn how to manage state efficiently in React applications.",
            "Technology",
            &["React", "JavaScript"],
        ),
        post(
            2,
            "Modern CSS Techniques",
            "Explore advanced CSS features for better web design.",
            "Design",
            &["CSS", "UI/UX"],
        ),
        post(
            3,
            "JavaScript Best Practices",
            "Write cleaner and more maintainable JavaScript code.",
            "Programming",
            &["JavaScript"],
        ),
    ]
}

fn post(id: i64, title: &str, excerpt: &str, category: &str, tags: &[&str]) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_owned(),
        excerpt: excerpt.to_owned(),
        category: category.to_owned(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_ids_unique() {
        let categories: HashSet<_> = categories().iter().map(|c| c.id).collect();
        assert_eq!(categories.len(), 3);
        let tags: HashSet<_> = tags().iter().map(|t| t.id).collect();
        assert_eq!(tags.len(), 4);
        let posts: HashSet<_> = posts().iter().map(|p| p.id).collect();
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn test_seed_cart_matches_catalogue() {
        let products = products(CurrencyCode::USD);
        for item in cart_items(CurrencyCode::USD) {
            let product = products.iter().find(|p| p.id == item.id);
            assert!(product.is_some_and(|p| p.price == item.price && p.name == item.name));
        }
    }
}
