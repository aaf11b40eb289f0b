//! # cookoff-shared
//!
//! Types and helpers shared by every CookOff crate: entity identifiers,
//! one-time verification codes, the code-delivery boundary, and the field
//! validation rules that registration callers are responsible for.

pub mod constants;
pub mod delivery;
pub mod types;
pub mod validate;
pub mod verification;

pub use delivery::{CodeDelivery, DeliveryError, OnScreenDelivery};
pub use types::{AudienceId, ChefId, MediaKind, RecipeId};
pub use validate::ValidationError;
pub use verification::VerificationCode;
