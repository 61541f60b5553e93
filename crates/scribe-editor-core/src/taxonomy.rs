//! The static two-level category lookup.
//!
//! Read-only reference data: a top-level category list, each entry carrying
//! an ordered list of sub-categories. Lookups never fail; an unknown or
//! empty key yields an empty option list.

use smol_str::SmolStr;

/// One selectable option: a stable key plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub key: SmolStr,
    pub label: SmolStr,
}

impl CategoryOption {
    pub fn new(key: impl Into<SmolStr>, label: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A top-level category and its sub-categories, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub option: CategoryOption,
    pub subs: Vec<CategoryOption>,
}

impl Category {
    pub fn new(
        key: impl Into<SmolStr>,
        label: impl Into<SmolStr>,
        subs: Vec<CategoryOption>,
    ) -> Self {
        Self {
            option: CategoryOption::new(key, label),
            subs,
        }
    }
}

/// The two-level category taxonomy, shared by reference across a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Top-level options, in display order.
    pub fn top_level_options(&self) -> impl Iterator<Item = &CategoryOption> {
        self.categories.iter().map(|c| &c.option)
    }

    /// Sub-options for a top-level key, in display order.
    ///
    /// Empty for an unknown or empty key.
    pub fn sub_options(&self, category_key: &str) -> &[CategoryOption] {
        self.categories
            .iter()
            .find(|c| c.option.key == category_key)
            .map(|c| c.subs.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::new(vec![Category::new(
            "study",
            "Study",
            vec![
                CategoryOption::new("cs", "CS"),
                CategoryOption::new("Algorithm", "Algorithms"),
            ],
        )])
    }

    #[test]
    fn test_top_level_options_preserve_order() {
        let keys: Vec<_> = taxonomy()
            .top_level_options()
            .map(|o| o.key.clone())
            .collect();
        assert_eq!(keys, ["study"]);
    }

    #[test]
    fn test_sub_options_preserve_order() {
        let taxonomy = taxonomy();
        let keys: Vec<_> = taxonomy
            .sub_options("study")
            .iter()
            .map(|o| o.key.as_str())
            .collect();
        assert_eq!(keys, ["cs", "Algorithm"]);
    }

    #[test]
    fn test_unknown_and_empty_keys_yield_empty() {
        let taxonomy = taxonomy();
        assert!(taxonomy.sub_options("music").is_empty());
        assert!(taxonomy.sub_options("").is_empty());
    }
}
