//! Normalizes identity-provider results into [User](crate::user::User)
//! records and manages the signed-in session.

mod provider;
mod session;

pub use provider::{
    AppleFullName, AppleProfile, GoogleProfile, IdentityProvider, ProviderIdentity,
};
pub use session::{Session, SessionState};

use thiserror::Error;

use crate::stores::StoreError;

/// Errors that can occur while signing a user in.
#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    /// The provider result did not include a subject ID.
    #[error("the provider result did not include a subject id")]
    MissingSubject,

    /// The provider result did not include an email address.
    ///
    /// Email absence is fatal for the signed-in state, never silently
    /// defaulted.
    #[error("the provider result did not include an email address")]
    MissingEmail,

    /// The provider returned a string that is not a valid email address.
    #[error("the provider returned an invalid email address: {0}")]
    InvalidEmail(String),

    /// The user cancelled the sign-in flow at the provider.
    #[error("the sign-in was cancelled")]
    Cancelled,

    /// The provider rejected the sign-in.
    ///
    /// Callers should pass in the provider's error as a string.
    #[error("the identity provider rejected the sign-in: {0}")]
    Provider(String),

    /// The session could not be persisted. The in-memory session is left
    /// unchanged when this occurs.
    #[error("could not persist the session: {0}")]
    Store(#[from] StoreError),
}
