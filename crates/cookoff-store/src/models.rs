//! Domain model structs persisted in the local collections.
//!
//! Every struct derives `Serialize` and `Deserialize`; fields are renamed to
//! camelCase so the stored JSON matches the collection shape the UI layer
//! reads back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cookoff_shared::types::{AudienceId, ChefId, MediaKind, RecipeId};

// ---------------------------------------------------------------------------
// Chef
// ---------------------------------------------------------------------------

/// A competition participant. Owns its recipes outright; `rank` is only
/// present between a results declaration and the next reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    /// Unique chef identifier.
    pub id: ChefId,
    /// Display name.
    pub name: String,
    /// Registration email (unique among chefs).
    pub email: String,
    /// Ten-digit mobile number.
    pub mobile: String,
    /// Optional profile image reference.
    pub profile_image: Option<String>,
    /// Recipes submitted by this chef, in submission order.
    pub recipes: Vec<Recipe>,
    /// Number of audience votes received.
    pub votes: u32,
    /// Position assigned by the last results declaration, if any.
    pub rank: Option<u32>,
    /// When the chef registered.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A dish submission. Embedded in its owning [`Chef`]; `chef_id` is a
/// back-reference only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: RecipeId,
    /// The chef this recipe belongs to.
    pub chef_id: ChefId,
    /// Dish name.
    pub name: String,
    /// Free-text ingredient list.
    pub ingredients: String,
    /// Free-text preparation time.
    pub time_required: String,
    /// Optional media reference (image or video).
    pub media: Option<String>,
    /// Kind of the attached media, when present.
    pub media_kind: Option<MediaKind>,
    /// When the recipe was submitted.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Audience
// ---------------------------------------------------------------------------

/// A registered voter. `voted_chef_id` is set at most once: casting a vote
/// is a one-way transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    /// Unique audience identifier.
    pub id: AudienceId,
    /// Display name.
    pub name: String,
    /// Registration email (unique among audience members).
    pub email: String,
    /// Ten-digit mobile number.
    pub mobile: String,
    /// The chef this member voted for, once they have voted.
    pub voted_chef_id: Option<ChefId>,
    /// When the member registered.
    pub created_at: DateTime<Utc>,
}

impl Audience {
    /// Whether this member has used their single vote.
    pub fn has_voted(&self) -> bool {
        self.voted_chef_id.is_some()
    }
}

// ---------------------------------------------------------------------------
// Competition state
// ---------------------------------------------------------------------------

/// One entry of a declared ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub chef_id: ChefId,
    pub rank: u32,
}

/// Whether results have been declared, and the frozen rankings when so.
///
/// Undeclared state always carries an empty rankings sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionState {
    pub is_results_declared: bool,
    pub rankings: Vec<RankEntry>,
}

impl Default for CompetitionState {
    fn default() -> Self {
        Self {
            is_results_declared: false,
            rankings: Vec::new(),
        }
    }
}
