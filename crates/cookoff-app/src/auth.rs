//! Sessions and login.
//!
//! A session is a closed set of role variants, each carrying only the
//! identifier it needs; consumers match exhaustively instead of inspecting
//! a generic user shape. Admin login checks the configured static
//! credential pair — there is deliberately no password hashing or session
//! token here.

use thiserror::Error;

use cookoff_ledger::{Ledger, Result as LedgerResult};
use cookoff_shared::types::{AudienceId, ChefId};
use cookoff_store::models::{Audience, Chef};
use cookoff_store::CollectionStore;

use crate::config::AppConfig;
use crate::state::AppState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Who is currently using the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    Chef(ChefId),
    Audience(AudienceId),
    Admin,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        !matches!(self, Session::LoggedOut)
    }
}

impl AppState {
    /// Log in as a registered chef. The id comes from a completed
    /// registration; no credential is involved.
    pub fn login_chef(&mut self, id: ChefId) {
        tracing::info!(chef_id = %id, "chef logged in");
        self.session = Session::Chef(id);
    }

    /// Log in as a registered audience member.
    pub fn login_audience(&mut self, id: AudienceId) {
        tracing::info!(audience_id = %id, "audience member logged in");
        self.session = Session::Audience(id);
    }

    /// Log in as the admin using the configured credential pair.
    pub fn login_admin(
        &mut self,
        config: &AppConfig,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        if email != config.admin_email || password != config.admin_password {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        tracing::info!("admin logged in");
        self.session = Session::Admin;
        Ok(())
    }

    /// Drop the current session.
    pub fn logout(&mut self) {
        self.session = Session::LoggedOut;
    }

    /// Resolve the session to a chef record, when a chef is logged in.
    pub fn current_chef<S: CollectionStore>(
        &self,
        ledger: &Ledger<S>,
    ) -> LedgerResult<Option<Chef>> {
        match self.session {
            Session::Chef(id) => ledger.find_chef(id),
            Session::LoggedOut | Session::Audience(_) | Session::Admin => Ok(None),
        }
    }

    /// Resolve the session to an audience record, when one is logged in.
    pub fn current_audience<S: CollectionStore>(
        &self,
        ledger: &Ledger<S>,
    ) -> LedgerResult<Option<Audience>> {
        match self.session {
            Session::Audience(id) => ledger.find_audience(id),
            Session::LoggedOut | Session::Chef(_) | Session::Admin => Ok(None),
        }
    }
}
