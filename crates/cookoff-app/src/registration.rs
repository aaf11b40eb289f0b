//! Two-phase registration with one-time-code verification.
//!
//! Phase one validates the submitted form, rejects duplicate emails within
//! the role's collection, generates a verification code, and hands it to
//! the configured delivery channel. Phase two checks the submitted code and
//! only then persists the new record — nothing is stored for a registration
//! that never verifies. A wrong code can be retried against the same
//! pending value indefinitely.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cookoff_ledger::{Ledger, LedgerError};
use cookoff_shared::delivery::{CodeDelivery, DeliveryError};
use cookoff_shared::types::{AudienceId, ChefId};
use cookoff_shared::validate::{validate_email, validate_mobile, validate_name, ValidationError};
use cookoff_shared::verification::VerificationCode;
use cookoff_store::models::{Audience, Chef};
use cookoff_store::CollectionStore;

use crate::config::AppConfig;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid verification code")]
    CodeMismatch,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Details submitted on the chef registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub profile_image: Option<String>,
}

/// Details submitted on the audience registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

fn check_form(
    config: &AppConfig,
    name: &str,
    email: &str,
    mobile: &str,
) -> Result<(), RegistrationError> {
    validate_name(name)?;
    validate_email(email, &config.email_domain)?;
    validate_mobile(mobile)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Chef registration
// ---------------------------------------------------------------------------

/// A chef registration awaiting code confirmation.
#[derive(Debug)]
pub struct PendingChefRegistration {
    form: ChefForm,
    code: VerificationCode,
}

impl PendingChefRegistration {
    /// The generated code, for hosts that display it directly.
    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    /// Verify the submitted code and persist the new chef.
    pub fn complete<S: CollectionStore>(
        &self,
        ledger: &Ledger<S>,
        submitted_code: &str,
    ) -> Result<Chef, RegistrationError> {
        if !self.code.verify(submitted_code) {
            return Err(RegistrationError::CodeMismatch);
        }

        let chef = Chef {
            id: ChefId::new(),
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            mobile: self.form.mobile.clone(),
            profile_image: self.form.profile_image.clone(),
            recipes: Vec::new(),
            votes: 0,
            rank: None,
            created_at: Utc::now(),
        };

        ledger.upsert_chef(chef.clone())?;
        tracing::info!(chef_id = %chef.id, "chef registration completed");
        Ok(chef)
    }
}

/// Validate a chef form and issue its verification code.
pub fn begin_chef_registration<S: CollectionStore>(
    config: &AppConfig,
    ledger: &Ledger<S>,
    delivery: &impl CodeDelivery,
    form: ChefForm,
) -> Result<PendingChefRegistration, RegistrationError> {
    let form = ChefForm {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        mobile: form.mobile.trim().to_string(),
        profile_image: form.profile_image,
    };

    check_form(config, &form.name, &form.email, &form.mobile)?;

    if ledger.list_chefs()?.iter().any(|c| c.email == form.email) {
        return Err(RegistrationError::DuplicateEmail(form.email));
    }

    let code = VerificationCode::generate();
    delivery.send(&code, &form.mobile)?;

    Ok(PendingChefRegistration { form, code })
}

// ---------------------------------------------------------------------------
// Audience registration
// ---------------------------------------------------------------------------

/// An audience registration awaiting code confirmation.
#[derive(Debug)]
pub struct PendingAudienceRegistration {
    form: AudienceForm,
    code: VerificationCode,
}

impl PendingAudienceRegistration {
    /// The generated code, for hosts that display it directly.
    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    /// Verify the submitted code and persist the new audience member.
    pub fn complete<S: CollectionStore>(
        &self,
        ledger: &Ledger<S>,
        submitted_code: &str,
    ) -> Result<Audience, RegistrationError> {
        if !self.code.verify(submitted_code) {
            return Err(RegistrationError::CodeMismatch);
        }

        let audience = Audience {
            id: AudienceId::new(),
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            mobile: self.form.mobile.clone(),
            voted_chef_id: None,
            created_at: Utc::now(),
        };

        ledger.upsert_audience(audience.clone())?;
        tracing::info!(audience_id = %audience.id, "audience registration completed");
        Ok(audience)
    }
}

/// Validate an audience form and issue its verification code.
pub fn begin_audience_registration<S: CollectionStore>(
    config: &AppConfig,
    ledger: &Ledger<S>,
    delivery: &impl CodeDelivery,
    form: AudienceForm,
) -> Result<PendingAudienceRegistration, RegistrationError> {
    let form = AudienceForm {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        mobile: form.mobile.trim().to_string(),
    };

    check_form(config, &form.name, &form.email, &form.mobile)?;

    if ledger
        .list_audiences()?
        .iter()
        .any(|a| a.email == form.email)
    {
        return Err(RegistrationError::DuplicateEmail(form.email));
    }

    let code = VerificationCode::generate();
    delivery.send(&code, &form.mobile)?;

    Ok(PendingAudienceRegistration { form, code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use cookoff_shared::delivery::OnScreenDelivery;
    use cookoff_store::MemoryStore;

    /// Delivery double that records what was sent.
    #[derive(Default)]
    struct RecordingDelivery {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl CodeDelivery for RecordingDelivery {
        fn send(&self, code: &VerificationCode, destination: &str) -> Result<(), DeliveryError> {
            self.sent
                .borrow_mut()
                .push((code.as_str().to_string(), destination.to_string()));
            Ok(())
        }
    }

    fn chef_form(name: &str, email: &str) -> ChefForm {
        ChefForm {
            name: name.to_string(),
            email: email.to_string(),
            mobile: "9876543210".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn test_chef_registration_happy_path() {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);
        let delivery = RecordingDelivery::default();

        let pending = begin_chef_registration(
            &config,
            &ledger,
            &delivery,
            chef_form("Asha", "asha@gmail.com"),
        )
        .unwrap();

        // Nothing is persisted until the code checks out.
        assert!(ledger.list_chefs().unwrap().is_empty());
        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(delivery.sent.borrow()[0].1, "9876543210");

        let code = pending.code().as_str().to_string();
        let chef = pending.complete(&ledger, &code).unwrap();
        assert_eq!(chef.votes, 0);
        assert_eq!(chef.rank, None);
        assert!(chef.recipes.is_empty());
        assert_eq!(ledger.list_chefs().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_code_can_be_retried() {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);

        let pending = begin_chef_registration(
            &config,
            &ledger,
            &OnScreenDelivery,
            chef_form("Asha", "asha@gmail.com"),
        )
        .unwrap();

        let err = pending.complete(&ledger, "000000").unwrap_err();
        assert!(matches!(err, RegistrationError::CodeMismatch));
        assert!(ledger.list_chefs().unwrap().is_empty());

        // Same pending value, correct code: succeeds.
        let code = pending.code().as_str().to_string();
        assert!(pending.complete(&ledger, &code).is_ok());
    }

    #[test]
    fn test_duplicate_email_rejected_within_role() {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);

        let pending = begin_chef_registration(
            &config,
            &ledger,
            &OnScreenDelivery,
            chef_form("Asha", "asha@gmail.com"),
        )
        .unwrap();
        let code = pending.code().as_str().to_string();
        pending.complete(&ledger, &code).unwrap();

        let err = begin_chef_registration(
            &config,
            &ledger,
            &OnScreenDelivery,
            chef_form("Other Asha", "asha@gmail.com"),
        )
        .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateEmail(_)));

        // Uniqueness is per role: the same email can register as audience.
        let audience_form = AudienceForm {
            name: "Asha Viewer".to_string(),
            email: "asha@gmail.com".to_string(),
            mobile: "9123456789".to_string(),
        };
        assert!(
            begin_audience_registration(&config, &ledger, &OnScreenDelivery, audience_form)
                .is_ok()
        );
    }

    #[test]
    fn test_invalid_fields_rejected_before_code_issue() {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);
        let delivery = RecordingDelivery::default();

        let bad_domain = begin_chef_registration(
            &config,
            &ledger,
            &delivery,
            chef_form("Asha", "asha@example.org"),
        );
        assert!(matches!(
            bad_domain.unwrap_err(),
            RegistrationError::Validation(ValidationError::EmailDomain(_))
        ));

        let mut form = chef_form("Asha", "asha@gmail.com");
        form.mobile = "12345".to_string();
        let bad_mobile = begin_chef_registration(&config, &ledger, &delivery, form);
        assert!(matches!(
            bad_mobile.unwrap_err(),
            RegistrationError::Validation(ValidationError::MobileFormat)
        ));

        // No code ever left the building.
        assert!(delivery.sent.borrow().is_empty());
    }

    #[test]
    fn test_audience_registration_starts_unvoted() {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let ledger = Ledger::new(&store);

        let form = AudienceForm {
            name: "Priya".to_string(),
            email: "priya@gmail.com".to_string(),
            mobile: "9123456789".to_string(),
        };
        let pending =
            begin_audience_registration(&config, &ledger, &OnScreenDelivery, form).unwrap();
        let code = pending.code().as_str().to_string();
        let audience = pending.complete(&ledger, &code).unwrap();

        assert!(!audience.has_voted());
        assert_eq!(ledger.list_audiences().unwrap().len(), 1);
    }
}
