//! Category display formatting

use crate::models::Category;

use super::render_table;

/// Format a list of categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = categories
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.to_string(),
                c.category_type.to_string(),
                c.color.clone().unwrap_or_default(),
            ]
        })
        .collect();

    render_table(&["ID", "Name", "Type", "Color"], rows, &[])
}
