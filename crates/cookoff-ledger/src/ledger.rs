//! Ledger operations over the persisted collections.
//!
//! Every method reads the affected collection(s), applies the change in
//! memory, and writes the collection(s) back wholesale. `cast_vote` touches
//! two collections and goes through
//! [`CollectionStore::write_vote`](cookoff_store::CollectionStore::write_vote),
//! which the SQLite store makes transactional.

use cookoff_shared::types::{AudienceId, ChefId, RecipeId};
use cookoff_store::models::{Audience, Chef, CompetitionState, Recipe};
use cookoff_store::CollectionStore;

use crate::error::{LedgerError, Result};
use crate::standings;

/// Outcome of a vote attempt that resolved both parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was recorded and the chef's counter incremented.
    Cast,
    /// The member had already voted; nothing was changed.
    AlreadyVoted,
}

/// The competition ledger.
///
/// Holds a [`CollectionStore`] handle supplied by the hosting application.
/// Thanks to the blanket impl on `&S`, the host can keep ownership of the
/// store and construct the ledger over a borrow.
pub struct Ledger<S: CollectionStore> {
    store: S,
}

impl<S: CollectionStore> Ledger<S> {
    /// Wrap a collection store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Chefs and audiences
    // ------------------------------------------------------------------

    /// Snapshot of all chefs in registration order.
    pub fn list_chefs(&self) -> Result<Vec<Chef>> {
        Ok(self.store.read_chefs()?)
    }

    /// Snapshot of all audience members in registration order.
    pub fn list_audiences(&self) -> Result<Vec<Audience>> {
        Ok(self.store.read_audiences()?)
    }

    /// Find a chef by id. Absence is not an error.
    pub fn find_chef(&self, id: ChefId) -> Result<Option<Chef>> {
        Ok(self.store.read_chefs()?.into_iter().find(|c| c.id == id))
    }

    /// Find an audience member by id. Absence is not an error.
    pub fn find_audience(&self, id: AudienceId) -> Result<Option<Audience>> {
        Ok(self
            .store
            .read_audiences()?
            .into_iter()
            .find(|a| a.id == id))
    }

    /// Insert a chef, or replace the existing record with the same id
    /// wholesale. Callers supply the full record; there is no field merge.
    pub fn upsert_chef(&self, chef: Chef) -> Result<()> {
        let mut chefs = self.store.read_chefs()?;
        match chefs.iter_mut().find(|c| c.id == chef.id) {
            Some(existing) => *existing = chef,
            None => chefs.push(chef),
        }
        Ok(self.store.write_chefs(&chefs)?)
    }

    /// Insert or wholesale-replace an audience member.
    pub fn upsert_audience(&self, audience: Audience) -> Result<()> {
        let mut audiences = self.store.read_audiences()?;
        match audiences.iter_mut().find(|a| a.id == audience.id) {
            Some(existing) => *existing = audience,
            None => audiences.push(audience),
        }
        Ok(self.store.write_audiences(&audiences)?)
    }

    /// Remove a chef (and, with it, the recipes it embeds). Returns whether
    /// a record was removed; removing an unknown id is a no-op.
    ///
    /// Votes already cast for the chef are not retracted: affected audience
    /// members stay marked as having voted, and their `voted_chef_id` keeps
    /// pointing at the removed record.
    pub fn remove_chef(&self, id: ChefId) -> Result<bool> {
        let mut chefs = self.store.read_chefs()?;
        let before = chefs.len();
        chefs.retain(|c| c.id != id);
        if chefs.len() == before {
            return Ok(false);
        }
        self.store.write_chefs(&chefs)?;
        tracing::info!(chef_id = %id, "chef removed");
        Ok(true)
    }

    /// Remove an audience member. Returns whether a record was removed.
    pub fn remove_audience(&self, id: AudienceId) -> Result<bool> {
        let mut audiences = self.store.read_audiences()?;
        let before = audiences.len();
        audiences.retain(|a| a.id != id);
        if audiences.len() == before {
            return Ok(false);
        }
        self.store.write_audiences(&audiences)?;
        tracing::info!(audience_id = %id, "audience member removed");
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Recipes
    // ------------------------------------------------------------------

    /// Append a recipe to a chef's owned sequence.
    pub fn add_recipe(&self, chef_id: ChefId, recipe: Recipe) -> Result<()> {
        let mut chefs = self.store.read_chefs()?;
        let chef = chefs
            .iter_mut()
            .find(|c| c.id == chef_id)
            .ok_or(LedgerError::ChefNotFound(chef_id))?;
        chef.recipes.push(recipe);
        Ok(self.store.write_chefs(&chefs)?)
    }

    /// Remove a recipe from a chef's owned sequence. Removing a recipe id
    /// the chef does not hold is a no-op; an unknown chef is an error.
    pub fn remove_recipe(&self, chef_id: ChefId, recipe_id: RecipeId) -> Result<()> {
        let mut chefs = self.store.read_chefs()?;
        let chef = chefs
            .iter_mut()
            .find(|c| c.id == chef_id)
            .ok_or(LedgerError::ChefNotFound(chef_id))?;
        chef.recipes.retain(|r| r.id != recipe_id);
        Ok(self.store.write_chefs(&chefs)?)
    }

    // ------------------------------------------------------------------
    // Voting
    // ------------------------------------------------------------------

    /// Cast an audience member's single vote for a chef.
    ///
    /// A member who has voted before gets [`VoteOutcome::AlreadyVoted`] and
    /// no state changes, whichever chef they name. An unresolvable chef id
    /// rejects the whole operation before anything is written, so no
    /// voted-but-uncounted state can exist.
    pub fn cast_vote(&self, audience_id: AudienceId, chef_id: ChefId) -> Result<VoteOutcome> {
        let mut audiences = self.store.read_audiences()?;
        let member = audiences
            .iter_mut()
            .find(|a| a.id == audience_id)
            .ok_or(LedgerError::AudienceNotFound(audience_id))?;

        if member.has_voted() {
            return Ok(VoteOutcome::AlreadyVoted);
        }

        let mut chefs = self.store.read_chefs()?;
        let chef = chefs
            .iter_mut()
            .find(|c| c.id == chef_id)
            .ok_or(LedgerError::ChefNotFound(chef_id))?;

        member.voted_chef_id = Some(chef_id);
        chef.votes += 1;
        let votes = chef.votes;

        self.store.write_vote(&audiences, &chefs)?;
        tracing::info!(%audience_id, %chef_id, votes, "vote cast");
        Ok(VoteOutcome::Cast)
    }

    // ------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------

    /// The current competition state (undeclared by default).
    pub fn competition_state(&self) -> Result<CompetitionState> {
        Ok(self.store.read_competition_state()?)
    }

    /// Freeze the current vote counts into a ranking.
    ///
    /// Ranks 1..=N are assigned by vote count descending, ties resolved by
    /// registration order, and written back onto every chef record. Calling
    /// this again without vote changes reproduces the same ranking; calling
    /// it after further votes re-ranks from scratch.
    pub fn declare_results(&self) -> Result<CompetitionState> {
        let mut chefs = self.store.read_chefs()?;
        let rankings = standings::rank_by_votes(&chefs);

        for entry in &rankings {
            if let Some(chef) = chefs.iter_mut().find(|c| c.id == entry.chef_id) {
                chef.rank = Some(entry.rank);
            }
        }
        self.store.write_chefs(&chefs)?;

        let state = CompetitionState {
            is_results_declared: true,
            rankings,
        };
        self.store.write_competition_state(&state)?;

        tracing::info!(chefs = chefs.len(), "results declared");
        Ok(state)
    }

    /// Return to the undeclared state.
    ///
    /// Clears the rankings sequence and every chef's `rank` field, so the
    /// undeclared invariant (no ranks anywhere) holds again.
    pub fn reset_competition(&self) -> Result<()> {
        let mut chefs = self.store.read_chefs()?;
        if chefs.iter().any(|c| c.rank.is_some()) {
            for chef in &mut chefs {
                chef.rank = None;
            }
            self.store.write_chefs(&chefs)?;
        }

        self.store
            .write_competition_state(&CompetitionState::default())?;
        tracing::info!("competition reset");
        Ok(())
    }
}
