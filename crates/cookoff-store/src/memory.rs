//! In-memory collection store.
//!
//! Useful for tests and for hosts that do not want anything on disk.
//! Backed by `RefCell`, so it is single-threaded — the same one-accessor
//! model the whole store layer assumes.

use std::cell::RefCell;

use crate::collections::CollectionStore;
use crate::error::Result;
use crate::models::{Audience, Chef, CompetitionState};

/// Ephemeral implementation of [`CollectionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    chefs: RefCell<Vec<Chef>>,
    audiences: RefCell<Vec<Audience>>,
    competition_state: RefCell<CompetitionState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStore {
    fn read_chefs(&self) -> Result<Vec<Chef>> {
        Ok(self.chefs.borrow().clone())
    }

    fn write_chefs(&self, chefs: &[Chef]) -> Result<()> {
        *self.chefs.borrow_mut() = chefs.to_vec();
        Ok(())
    }

    fn read_audiences(&self) -> Result<Vec<Audience>> {
        Ok(self.audiences.borrow().clone())
    }

    fn write_audiences(&self, audiences: &[Audience]) -> Result<()> {
        *self.audiences.borrow_mut() = audiences.to_vec();
        Ok(())
    }

    fn read_competition_state(&self) -> Result<CompetitionState> {
        Ok(self.competition_state.borrow().clone())
    }

    fn write_competition_state(&self, state: &CompetitionState) -> Result<()> {
        *self.competition_state.borrow_mut() = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cookoff_shared::types::ChefId;

    #[test]
    fn test_reads_are_snapshots() {
        let store = MemoryStore::new();
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
        store.write_chefs(std::slice::from_ref(&chef)).unwrap();

        let mut snapshot = store.read_chefs().unwrap();
        snapshot[0].votes = 99;

        // Mutating the snapshot must not touch stored state.
        assert_eq!(store.read_chefs().unwrap()[0].votes, 0);
    }

    #[test]
    fn test_default_state_is_undeclared() {
        let store = MemoryStore::new();
        let state = store.read_competition_state().unwrap();
        assert!(!state.is_results_declared);
        assert!(state.rankings.is_empty());
    }
}
