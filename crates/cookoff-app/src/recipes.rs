//! Recipe submission flow.
//!
//! Builds a full [`Recipe`] record from a form and hands it to the ledger;
//! the ledger owns the chef-must-exist check.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cookoff_ledger::{Ledger, LedgerError};
use cookoff_shared::types::{ChefId, MediaKind, RecipeId};
use cookoff_store::models::Recipe;
use cookoff_store::CollectionStore;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe name is required")]
    NameRequired,

    #[error("Ingredients are required")]
    IngredientsRequired,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Details submitted on the add-recipe form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    pub name: String,
    pub ingredients: String,
    pub time_required: String,
    pub media: Option<String>,
    pub media_kind: Option<MediaKind>,
}

/// Validate the form, mint the recipe, and append it to the chef.
pub fn submit_recipe<S: CollectionStore>(
    ledger: &Ledger<S>,
    chef_id: ChefId,
    form: RecipeForm,
) -> Result<Recipe, RecipeError> {
    if form.name.trim().is_empty() {
        return Err(RecipeError::NameRequired);
    }
    if form.ingredients.trim().is_empty() {
        return Err(RecipeError::IngredientsRequired);
    }

    let recipe = Recipe {
        id: RecipeId::new(),
        chef_id,
        name: form.name.trim().to_string(),
        ingredients: form.ingredients.trim().to_string(),
        time_required: form.time_required.trim().to_string(),
        media: form.media,
        media_kind: form.media_kind,
        created_at: Utc::now(),
    };

    ledger.add_recipe(chef_id, recipe.clone())?;
    tracing::info!(chef_id = %chef_id, recipe_id = %recipe.id, "recipe submitted");
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use cookoff_store::models::Chef;
    use cookoff_store::MemoryStore;

    fn form(name: &str) -> RecipeForm {
        RecipeForm {
            name: name.to_string(),
            ingredients: "rice, lentils, ghee".to_string(),
            time_required: "45 min".to_string(),
            media: None,
            media_kind: None,
        }
    }

    fn registered_chef(ledger: &Ledger<&MemoryStore>) -> ChefId {
        let chef = Chef {
            id: ChefId::new(),
            name: "Asha".to_string(),
            email: "asha@gmail.com".to_string(),
            mobile: "9876543210".to_string(),
            profile_image: None,
            recipes: Vec::new(),
            votes: 0,
            rank: None,
            created_at: Utc::now(),
        };
        let id = chef.id;
        ledger.upsert_chef(chef).unwrap();
        id
    }

    #[test]
    fn test_submit_appends_to_owner() {
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);
        let chef_id = registered_chef(&ledger);

        let recipe = submit_recipe(&ledger, chef_id, form("Dal Tadka")).unwrap();
        assert_eq!(recipe.chef_id, chef_id);

        let chef = ledger.find_chef(chef_id).unwrap().unwrap();
        assert_eq!(chef.recipes.len(), 1);
        assert_eq!(chef.recipes[0].name, "Dal Tadka");
    }

    #[test]
    fn test_blank_name_rejected() {
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);
        let chef_id = registered_chef(&ledger);

        let err = submit_recipe(&ledger, chef_id, form("   ")).unwrap_err();
        assert!(matches!(err, RecipeError::NameRequired));
    }

    #[test]
    fn test_unknown_chef_surfaces_ledger_error() {
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);

        let err = submit_recipe(&ledger, ChefId::new(), form("Dal Tadka")).unwrap_err();
        assert!(matches!(err, RecipeError::Ledger(LedgerError::ChefNotFound(_))));
    }
}
