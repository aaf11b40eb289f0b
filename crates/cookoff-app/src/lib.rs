//! # cookoff-app
//!
//! The hosting-application layer of CookOff: configuration, session state,
//! and the registration / recipe-submission flows that sit between a UI and
//! the ledger. Everything a UI needs apart from rendering lives here — the
//! caller-side validation, the duplicate-email checks, the one-time-code
//! handshake, and the tagged role sessions.

pub mod auth;
pub mod config;
pub mod recipes;
pub mod registration;
pub mod state;

pub use auth::{AuthError, Session};
pub use config::AppConfig;
pub use recipes::{submit_recipe, RecipeError, RecipeForm};
pub use registration::{
    begin_audience_registration, begin_chef_registration, AudienceForm, ChefForm,
    PendingAudienceRegistration, PendingChefRegistration, RegistrationError,
};
pub use state::AppState;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging for a CookOff host process.
///
/// Respects `RUST_LOG` when set; library crates never install a subscriber
/// themselves.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("cookoff_app=debug,cookoff_ledger=info,cookoff_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
