//! Boundary contract for conveying a verification code to the end user.
//!
//! Generating a code and delivering it are separate concerns: the core only
//! produces the value, and the hosting application chooses the channel.
//! [`OnScreenDelivery`] is the default channel and simply surfaces the code
//! for direct display, which is what the competition runs with.

use thiserror::Error;

use crate::verification::VerificationCode;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery channel unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid destination: {0}")]
    InvalidDestination(String),
}

/// An out-of-band channel for handing a code to its recipient.
pub trait CodeDelivery {
    /// Convey `code` to `destination` (a mobile number or email address).
    fn send(&self, code: &VerificationCode, destination: &str) -> Result<(), DeliveryError>;
}

/// Delivery channel that shows the code on screen instead of transmitting it.
#[derive(Debug, Default)]
pub struct OnScreenDelivery;

impl CodeDelivery for OnScreenDelivery {
    fn send(&self, code: &VerificationCode, destination: &str) -> Result<(), DeliveryError> {
        tracing::info!(%destination, code = %code, "verification code ready for display");
        Ok(())
    }
}
