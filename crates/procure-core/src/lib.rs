//! Procure AI Marketing Core
//!
//! This crate holds everything the marketing site needs that is not markup:
//! the section anchor contract, the navbar and registration view models,
//! the button and section style variants, the page content configuration,
//! and the scoped event subscription guard.

pub mod anchor;
pub mod content;
pub mod navigation;
pub mod registration;
pub mod style;
pub mod subscription;

use thiserror::Error;

pub use anchor::SectionAnchor;
pub use content::SiteContent;
pub use navigation::{NavigationState, Viewport};
pub use registration::{
    Acknowledgement, LocalAcknowledger, Registration, RegistrationFormData, RegistrationSink,
    RegistrationState, RegistrationTab,
};
pub use style::{ButtonSize, ButtonVariant, SectionBackground};
pub use subscription::Subscription;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Content parse error: {0}")]
    Content(#[from] serde_json::Error),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Submission error: {0}")]
    Submission(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
