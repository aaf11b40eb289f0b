//! Application state shared across a host's event handlers.

use cookoff_store::Database;

use crate::auth::Session;
use crate::config::AppConfig;

/// Central application state.
///
/// Holds the open database handle and the current session. A host creates
/// one of these at startup and threads it through its event handling; the
/// store assumes a single logical accessor, so there is nothing to lock.
pub struct AppState {
    /// Handle to the local database.
    /// `None` until [`AppState::open`] has run.
    pub database: Option<Database>,

    /// Who is currently logged in.
    pub session: Session,
}

impl AppState {
    /// Create a new, uninitialised application state.
    pub fn new() -> Self {
        Self {
            database: None,
            session: Session::LoggedOut,
        }
    }

    /// Open the configured database and store the handle.
    pub fn open(&mut self, config: &AppConfig) -> cookoff_store::Result<()> {
        self.database = Some(config.open_database()?);
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
