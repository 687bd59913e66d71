//! Identity-provider result payloads and their normalization into a [User].
//!
//! The two supported flows return structurally different payloads, so each is
//! modeled as its own variant and normalized into the single [User] shape at
//! this boundary. Every provider-supplied field is genuinely optional here:
//! the SDKs make no guarantees, and Apple in particular omits profile fields
//! on repeat sign-ins.

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthError,
    user::{User, UserID, placeholder_avatar},
};

/// The user profile returned by the Google OAuth flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleProfile {
    /// The subject ID.
    pub id: Option<String>,
    /// The account email address.
    pub email: Option<String>,
    /// The full display name.
    pub name: Option<String>,
    /// A URL for the account's profile photo.
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// The name component of an Apple sign-in result.
///
/// Apple only returns this on the first authorization for an app.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppleFullName {
    /// The user's given name.
    #[serde(rename = "givenName")]
    pub given_name: Option<String>,
    /// The user's family name.
    #[serde(rename = "familyName")]
    pub family_name: Option<String>,
}

/// The credential returned by the Apple sign-in flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppleProfile {
    /// The subject ID ("user" in Apple's credential).
    pub user: Option<String>,
    /// The account email address. Omitted on repeat sign-ins.
    pub email: Option<String>,
    /// The user's name. Omitted on repeat sign-ins.
    #[serde(rename = "fullName")]
    pub full_name: Option<AppleFullName>,
}

/// A successful identity-provider result, tagged by provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ProviderIdentity {
    /// A result from the Google OAuth flow.
    Google(GoogleProfile),
    /// A result from the Apple sign-in flow.
    Apple(AppleProfile),
}

impl ProviderIdentity {
    /// Normalize the provider payload into a [User].
    ///
    /// The subject ID and email address are required; the display name falls
    /// back to the email local part and the photo falls back to a
    /// deterministic placeholder avatar.
    ///
    /// # Errors
    /// This function will return a:
    /// - [AuthError::MissingSubject] if the payload has no subject ID,
    /// - [AuthError::MissingEmail] if the payload has no email address,
    /// - [AuthError::InvalidEmail] if the email address does not parse.
    pub fn normalize(self) -> Result<User, AuthError> {
        let (subject, email, name, photo) = match self {
            ProviderIdentity::Google(profile) => {
                (profile.id, profile.email, profile.name, profile.photo_url)
            }
            ProviderIdentity::Apple(profile) => (
                profile.user,
                profile.email,
                profile.full_name.and_then(|name| name.given_name),
                None,
            ),
        };

        let id = subject
            .filter(|subject| !subject.is_empty())
            .map(UserID::new)
            .ok_or(AuthError::MissingSubject)?;

        let email = email
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingEmail)?;
        let email = match email.parse::<EmailAddress>() {
            Ok(address) => address,
            Err(_) => return Err(AuthError::InvalidEmail(email)),
        };

        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.local_part().to_owned());

        let photo = photo
            .filter(|photo| !photo.is_empty())
            .unwrap_or_else(|| placeholder_avatar(&name));

        Ok(User {
            id,
            name,
            email,
            photo: Some(photo),
        })
    }
}

/// An external identity provider, e.g. the Google or Apple sign-in SDK.
///
/// Implementations should map a user-cancelled flow to
/// [AuthError::Cancelled] and any provider-side failure to
/// [AuthError::Provider].
#[async_trait]
pub trait IdentityProvider {
    /// Run the provider's sign-in flow and return the resulting identity.
    async fn authenticate(&self) -> Result<ProviderIdentity, AuthError>;
}
