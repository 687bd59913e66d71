//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A newtype wrapper for the opaque subject IDs handed out by identity
/// providers. This helps disambiguate user IDs from other strings, leading to
/// better compile time errors when building storage keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(String);

impl UserID {
    /// Wrap a provider subject ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application.
///
/// Users are created by normalizing an identity-provider result (see
/// [crate::auth::ProviderIdentity]) and persisted wholesale under the single
/// session slot. At most one user is active per device session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The subject ID assigned by the identity provider.
    pub id: UserID,
    /// The display name. Derived from the email address when the provider
    /// does not supply one.
    pub name: String,
    /// The email address associated with the user.
    pub email: EmailAddress,
    /// A URL for the user's profile photo.
    pub photo: Option<String>,
}

impl User {
    /// The URL to display for the user's avatar.
    ///
    /// Falls back to a deterministic placeholder for records persisted
    /// without a photo.
    pub fn avatar_url(&self) -> String {
        self.photo
            .clone()
            .unwrap_or_else(|| placeholder_avatar(&self.name))
    }
}

/// A deterministic placeholder avatar URL for users whose provider did not
/// supply a profile photo, rendered from the initials of `name`.
pub fn placeholder_avatar(name: &str) -> String {
    format!("https://ui-avatars.com/api/?name={}&length=2", initials(name))
}

/// The first grapheme of up to the first two words of `name`, uppercased.
fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.graphemes(true).next())
        .collect();

    if initials.is_empty() {
        return "?".to_owned();
    }

    initials.to_uppercase()
}
