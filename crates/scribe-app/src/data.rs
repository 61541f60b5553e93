//! Built-in taxonomy and sample posts.
//!
//! The taxonomy is static configuration shared by reference across the
//! session. The sample posts seed the in-memory store for development and
//! tests.

use smol_str::SmolStr;

use scribe_editor_core::{Category, CategoryOption, Post, Taxonomy};

/// The two-level category taxonomy.
pub fn taxonomy() -> Taxonomy {
    Taxonomy::new(vec![Category::new(
        "study",
        "스터디",
        vec![
            CategoryOption::new("cs", "CS"),
            CategoryOption::new("Algorithm", "알고리즘"),
        ],
    )])
}

/// Sample posts for the in-memory store, keyed by id.
pub fn seed_posts() -> Vec<(SmolStr, Post)> {
    vec![
        (
            SmolStr::new("1"),
            Post {
                title: "나는 1번이다".into(),
                content: "나는 1번이다 이건 테스트임".into(),
                category: "study".into(),
                sub_category: "cs".into(),
            },
        ),
        (
            SmolStr::new("2"),
            Post {
                title: "나는 2번이다".into(),
                content: "나는 2번이다 이건 아까와 똑같은 테스트임".into(),
                category: "study".into(),
                sub_category: "cs".into(),
            },
        ),
    ]
}
