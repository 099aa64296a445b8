//! Category display formatting

use crate::models::Category;

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!("{:<name_width$}  ID\n", "NAME", name_width = name_width));
    for category in categories {
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            category.name,
            category.id,
            name_width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_list(&[]), "No categories found.");
    }

    #[test]
    fn test_list_contains_names_and_ids() {
        let cats = vec![Category::new("Food"), Category::new("Entertainment")];
        let out = format_category_list(&cats);

        assert!(out.contains("Food"));
        assert!(out.contains("Entertainment"));
        assert!(out.contains(&cats[0].id.to_string()));
    }
}
