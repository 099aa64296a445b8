//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::models::{BudgetState, Category};

use super::resolve_category;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },

    /// Delete a category (its transactions move to the first remaining one)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command, returning whether the state was mutated
pub fn handle_category_command(
    state: &mut BudgetState,
    cmd: CategoryCommands,
) -> BudgetResult<bool> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&state.categories));
            Ok(false)
        }

        CategoryCommands::Add { name } => {
            let cat = Category::new(name);
            println!("Added category: {} ({})", cat.name, cat.id);
            state.upsert_category(cat);
            Ok(true)
        }

        CategoryCommands::Rename { category, name } => {
            let mut cat = resolve_category(state, &category)?;
            let old_name = std::mem::replace(&mut cat.name, name);
            println!("Renamed '{}' to '{}'", old_name, cat.name);
            state.upsert_category(cat);
            Ok(true)
        }

        CategoryCommands::Delete { category } => {
            let cat = resolve_category(state, &category)?;
            state.delete_category(cat.id);

            match state.categories.first() {
                Some(fallback) => println!(
                    "Deleted category '{}'; its transactions moved to '{}'",
                    cat.name, fallback.name
                ),
                None => println!(
                    "Deleted category '{}'; its transactions are now uncategorized",
                    cat.name
                ),
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_rename() {
        let mut state = BudgetState::new();

        assert!(handle_category_command(
            &mut state,
            CategoryCommands::Add {
                name: "Food".into()
            }
        )
        .unwrap());
        assert_eq!(state.categories.len(), 1);

        assert!(handle_category_command(
            &mut state,
            CategoryCommands::Rename {
                category: "food".into(),
                name: "Groceries".into()
            }
        )
        .unwrap());
        assert_eq!(state.categories[0].name, "Groceries");
        // Rename keeps the id and position
        assert_eq!(state.categories.len(), 1);
    }

    #[test]
    fn test_delete_unknown_category() {
        let mut state = BudgetState::new();
        let err = handle_category_command(
            &mut state,
            CategoryCommands::Delete {
                category: "Nope".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_does_not_mutate() {
        let mut state = BudgetState::starter();
        let mutated = handle_category_command(&mut state, CategoryCommands::List).unwrap();
        assert!(!mutated);
    }
}
