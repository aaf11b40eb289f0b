use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Entity identifiers are v7 UUIDs: a millisecond timestamp plus random bits.
// Uniqueness is probabilistic; no registry is consulted at mint time.

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChefId(pub Uuid);

impl ChefId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ChefId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChefId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AudienceId(pub Uuid);

impl AudienceId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for AudienceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AudienceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of media attached to a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}
