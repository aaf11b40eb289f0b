//! The collection-store seam and its SQLite implementation.
//!
//! Exactly three named collections exist: `chefs`, `audiences`, and the
//! `competitionState` singleton. Reads hand back the whole collection
//! (defaulting when absent) and writes replace it wholesale — there is no
//! per-record access at this layer. The store assumes a single logical
//! accessor; no locking is provided.

use crate::database::Database;
use crate::error::Result;
use crate::models::{Audience, Chef, CompetitionState};

/// Name of the persisted chef collection.
pub const COLLECTION_CHEFS: &str = "chefs";
/// Name of the persisted audience collection.
pub const COLLECTION_AUDIENCES: &str = "audiences";
/// Name of the persisted competition-state singleton.
pub const COLLECTION_COMPETITION_STATE: &str = "competitionState";

/// Synchronous access to the three persisted collections.
///
/// The ledger is written against this trait so a hosting application can
/// choose durability ([`Database`]) or keep everything in process memory
/// ([`MemoryStore`](crate::MemoryStore)).
pub trait CollectionStore {
    /// All chef records, in registration order. Empty when never written.
    fn read_chefs(&self) -> Result<Vec<Chef>>;

    /// Replace the chef collection wholesale.
    fn write_chefs(&self, chefs: &[Chef]) -> Result<()>;

    /// All audience records, in registration order. Empty when never written.
    fn read_audiences(&self) -> Result<Vec<Audience>>;

    /// Replace the audience collection wholesale.
    fn write_audiences(&self, audiences: &[Audience]) -> Result<()>;

    /// The competition-state singleton, defaulting to undeclared.
    fn read_competition_state(&self) -> Result<CompetitionState>;

    /// Replace the competition-state singleton.
    fn write_competition_state(&self, state: &CompetitionState) -> Result<()>;

    /// Persist the two collections touched by a vote.
    ///
    /// The default writes the audience record before the chef counter, so a
    /// failure between the two leaves the counter lagging rather than a vote
    /// that was never marked. Stores with real transactions should override
    /// this with an atomic variant.
    fn write_vote(&self, audiences: &[Audience], chefs: &[Chef]) -> Result<()> {
        self.write_audiences(audiences)?;
        self.write_chefs(chefs)
    }
}

// Lets a hosting application keep ownership of the store and lend a
// borrowed handle to the ledger.
impl<S: CollectionStore + ?Sized> CollectionStore for &S {
    fn read_chefs(&self) -> Result<Vec<Chef>> {
        (**self).read_chefs()
    }

    fn write_chefs(&self, chefs: &[Chef]) -> Result<()> {
        (**self).write_chefs(chefs)
    }

    fn read_audiences(&self) -> Result<Vec<Audience>> {
        (**self).read_audiences()
    }

    fn write_audiences(&self, audiences: &[Audience]) -> Result<()> {
        (**self).write_audiences(audiences)
    }

    fn read_competition_state(&self) -> Result<CompetitionState> {
        (**self).read_competition_state()
    }

    fn write_competition_state(&self, state: &CompetitionState) -> Result<()> {
        (**self).write_competition_state(state)
    }

    fn write_vote(&self, audiences: &[Audience], chefs: &[Chef]) -> Result<()> {
        (**self).write_vote(audiences, chefs)
    }
}

impl CollectionStore for Database {
    fn read_chefs(&self) -> Result<Vec<Chef>> {
        Ok(self.read_raw(COLLECTION_CHEFS)?.unwrap_or_default())
    }

    fn write_chefs(&self, chefs: &[Chef]) -> Result<()> {
        self.write_raw(COLLECTION_CHEFS, &chefs)
    }

    fn read_audiences(&self) -> Result<Vec<Audience>> {
        Ok(self.read_raw(COLLECTION_AUDIENCES)?.unwrap_or_default())
    }

    fn write_audiences(&self, audiences: &[Audience]) -> Result<()> {
        self.write_raw(COLLECTION_AUDIENCES, &audiences)
    }

    fn read_competition_state(&self) -> Result<CompetitionState> {
        Ok(self
            .read_raw(COLLECTION_COMPETITION_STATE)?
            .unwrap_or_default())
    }

    fn write_competition_state(&self, state: &CompetitionState) -> Result<()> {
        self.write_raw(COLLECTION_COMPETITION_STATE, state)
    }

    /// Both collections land in one SQLite transaction: a vote either
    /// commits fully or not at all.
    fn write_vote(&self, audiences: &[Audience], chefs: &[Chef]) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;
        self.write_raw(COLLECTION_AUDIENCES, &audiences)?;
        self.write_raw(COLLECTION_CHEFS, &chefs)?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cookoff_shared::types::{AudienceId, ChefId};

    fn sample_chef(name: &str) -> Chef {
        Chef {
            id: ChefId::new(),
            name: name.to_string(),
            email: format!("{name}@gmail.com"),
            mobile: "9876543210".to_string(),
            profile_image: None,
            recipes: Vec::new(),
            votes: 0,
            rank: None,
            created_at: Utc::now(),
        }
    }

    fn sample_audience(name: &str) -> Audience {
        Audience {
            id: AudienceId::new(),
            name: name.to_string(),
            email: format!("{name}@gmail.com"),
            mobile: "9123456789".to_string(),
            voted_chef_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_database_reads_defaults() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.read_chefs().unwrap().is_empty());
        assert!(db.read_audiences().unwrap().is_empty());
        assert_eq!(
            db.read_competition_state().unwrap(),
            CompetitionState::default()
        );
    }

    #[test]
    fn test_chef_collection_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let chefs = vec![sample_chef("asha"), sample_chef("ravi")];

        db.write_chefs(&chefs).unwrap();
        assert_eq!(db.read_chefs().unwrap(), chefs);
    }

    #[test]
    fn test_write_vote_updates_both_collections() {
        let db = Database::open_in_memory().unwrap();
        let mut chefs = vec![sample_chef("asha")];
        let mut audiences = vec![sample_audience("priya")];

        audiences[0].voted_chef_id = Some(chefs[0].id);
        chefs[0].votes = 1;
        db.write_vote(&audiences, &chefs).unwrap();

        assert_eq!(db.read_chefs().unwrap()[0].votes, 1);
        assert!(db.read_audiences().unwrap()[0].has_voted());
    }

    #[test]
    fn test_competition_state_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let chef = sample_chef("asha");
        let state = CompetitionState {
            is_results_declared: true,
            rankings: vec![crate::models::RankEntry {
                chef_id: chef.id,
                rank: 1,
            }],
        };

        db.write_competition_state(&state).unwrap();
        assert_eq!(db.read_competition_state().unwrap(), state);
    }
}
