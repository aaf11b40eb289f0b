//! # cookoff-ledger
//!
//! The competition ledger: every operation that mutates chef, audience, or
//! vote state, plus results declaration and reset. The ledger owns the
//! invariants — one vote per audience member ever, vote counters matching
//! cast votes, ranks only while results stand declared — and surfaces the
//! expected failure modes (`ChefNotFound`, `AudienceNotFound`,
//! `AlreadyVoted`) as values rather than panics.
//!
//! All operations are synchronous and run to completion against a
//! [`CollectionStore`](cookoff_store::CollectionStore) handle supplied by
//! the hosting application.

pub mod ledger;
pub mod standings;

mod error;

pub use error::{LedgerError, Result};
pub use ledger::{Ledger, VoteOutcome};
