//! Category service
//!
//! Provides business logic for category management. A category is unique by
//! (name, type) and cannot be deleted while transactions or budgets still
//! point at it.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId, CategoryType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        category_type: CategoryType,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> LedgerResult<Category> {
        let mut category = Category::new(name.trim(), category_type);
        category.icon = icon.map(str::to_string);
        category.color = color.map(str::to_string);

        self.check(&category)?;

        let category = self.storage.categories.insert(category)?;
        self.storage.categories.save()?;

        info!(category = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> LedgerResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by ID, failing if missing
    pub fn require(&self, id: CategoryId) -> LedgerResult<Category> {
        self.get(id)?
            .ok_or_else(|| LedgerError::category_not_found(id.to_string()))
    }

    /// Find a category by name or ID string
    ///
    /// A name shared by an expense and an income category is ambiguous and
    /// matches neither.
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Category>> {
        let mut by_name = self.storage.categories.get_by_name(identifier)?;
        if by_name.len() == 1 {
            return Ok(by_name.pop());
        }

        if let Ok(id) = identifier.trim().parse::<CategoryId>() {
            return self.get(id);
        }

        Ok(None)
    }

    /// Get all categories
    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Replace a stored category
    pub fn update(&self, category: Category) -> LedgerResult<Category> {
        self.require(category.id)?;
        self.check(&category)?;

        self.storage.categories.update(category.clone())?;
        self.storage.categories.save()?;

        info!(category = %category.id, "updated category");
        Ok(category)
    }

    /// Delete a category that nothing references
    pub fn delete(&self, id: CategoryId) -> LedgerResult<()> {
        let category = self.require(id)?;

        let referenced_by = if self.storage.transactions.references_category(id)? {
            Some("transactions")
        } else if self.storage.budgets.references_category(id)? {
            Some("budgets")
        } else {
            None
        };
        if let Some(referenced_by) = referenced_by {
            return Err(LedgerError::InUse {
                entity_type: "Category",
                identifier: category.name,
                referenced_by,
            });
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        info!(category = %id, name = %category.name, "deleted category");
        Ok(())
    }

    fn check(&self, category: &Category) -> LedgerResult<()> {
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        if let Some(existing) = self
            .storage
            .categories
            .get_by_key(&category.name, category.category_type)?
        {
            if existing.id != category.id {
                return Err(LedgerError::Duplicate {
                    entity_type: "Category",
                    identifier: format!("{} ({})", category.name, category.category_type),
                });
            }
        }

        Ok(())
    }
}
