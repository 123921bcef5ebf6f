//! Category table queries

use crate::error::LedgerResult;
use crate::models::{Category, CategoryType};

use super::repository::Repository;

/// Repository for category persistence
pub type CategoryRepository = Repository<Category>;

impl Repository<Category> {
    /// Get a category by its (name, type) key
    pub fn get_by_key(
        &self,
        name: &str,
        category_type: CategoryType,
    ) -> LedgerResult<Option<Category>> {
        Ok(self
            .find(|c| c.same_key(name, category_type))?
            .into_iter()
            .next())
    }

    /// Find categories by name regardless of type
    pub fn get_by_name(&self, name: &str) -> LedgerResult<Vec<Category>> {
        let name = name.trim();
        self.find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_by_key_distinguishes_type() {
        let temp_dir = TempDir::new().unwrap();
        let categories = CategoryRepository::new(temp_dir.path().join("categories.json"));
        let expense = categories.insert(Category::expense("Refunds")).unwrap();
        let income = categories.insert(Category::income("Refunds")).unwrap();

        assert_eq!(
            categories.get_by_key("refunds", CategoryType::Expense).unwrap(),
            Some(expense)
        );
        assert_eq!(
            categories.get_by_key("Refunds", CategoryType::Income).unwrap(),
            Some(income)
        );
        assert_eq!(categories.get_by_name("REFUNDS").unwrap().len(), 2);
    }
}
