use serde::Deserialize;

use super::Product;

#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
}

/// Optional equality predicates, combined with AND. An unset predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub gender: Option<String>,
    pub sub_category: Option<String>,
}

impl ProductFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        fn field_matches(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |value| value == actual)
        }

        field_matches(&self.category, &product.category)
            && field_matches(&self.gender, &product.gender)
            && field_matches(&self.sub_category, &product.sub_category)
    }
}

impl From<ShopQuery> for ProductFilter {
    // empty `?category=` means no filter
    fn from(query: ShopQuery) -> Self {
        Self {
            category: query.category.filter(|c| !c.is_empty()),
            ..Self::default()
        }
    }
}
