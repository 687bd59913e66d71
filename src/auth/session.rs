//! The session manager: holds the signed-in user and keeps the persisted
//! session slot in sync with it.
//!
//! There is no ambient/global session. A [Session] is created once at
//! startup, restored asynchronously, and passed explicitly to whatever
//! component needs the active identity.

use crate::{
    auth::{AuthError, IdentityProvider, ProviderIdentity},
    keys,
    stores::{KeyValueStore, StoreError},
    user::User,
};

/// The lifecycle of the device session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Restore has not completed yet.
    Loading,
    /// No user is signed in.
    SignedOut,
    /// A user is signed in.
    SignedIn(User),
}

/// Holds the current user identity and persists it across restarts.
///
/// State transitions: [SessionState::Loading] is the initial state while
/// [Session::restore] is in flight; it moves to [SessionState::SignedIn] on a
/// successful restore or sign-in and to [SessionState::SignedOut] when
/// nothing is persisted. A signed-in session only becomes signed out through
/// an explicit [Session::sign_out].
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    state: SessionState,
}

impl<S> Session<S>
where
    S: KeyValueStore,
{
    /// Create a session manager backed by `store`, in the loading state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: SessionState::Loading,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Attempt to load a previously persisted identity.
    ///
    /// Returns `None` when nothing is persisted, when the store cannot be
    /// read, or when the persisted blob is corrupt. A corrupt blob is cleared
    /// so it is not re-parsed on every startup. Storage failures are absorbed
    /// here so the caller always ends up in a renderable state.
    pub async fn restore(&mut self) -> Option<User> {
        let text = match self.store.get(keys::SESSION_USER).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.state = SessionState::SignedOut;
                return None;
            }
            Err(error) => {
                tracing::warn!("could not read the persisted session: {error}");
                self.state = SessionState::SignedOut;
                return None;
            }
        };

        match serde_json::from_str::<User>(&text) {
            Ok(user) => {
                tracing::info!(user = %user.id, "restored session");
                self.state = SessionState::SignedIn(user.clone());
                Some(user)
            }
            Err(error) => {
                tracing::warn!("discarding corrupt session data: {error}");

                if let Err(error) = self.store.remove(keys::SESSION_USER).await {
                    tracing::warn!("could not clear the corrupt session slot: {error}");
                }

                self.state = SessionState::SignedOut;
                None
            }
        }
    }

    /// Normalize `identity`, persist the resulting user, and make it the
    /// active identity.
    ///
    /// Validation happens before the write and the in-memory state changes
    /// last, so a failed sign-in never leaves a partially-written session.
    ///
    /// # Errors
    /// This function will return an [AuthError] if the payload lacks required
    /// fields (see [ProviderIdentity::normalize]) or if the store write
    /// fails.
    pub async fn sign_in(&mut self, identity: ProviderIdentity) -> Result<User, AuthError> {
        let user = identity.normalize()?;

        let payload = serde_json::to_string(&user)
            .map_err(|error| StoreError::Write(error.to_string()))?;
        self.store.set(keys::SESSION_USER, &payload).await?;

        tracing::info!(user = %user.id, "signed in");
        self.state = SessionState::SignedIn(user.clone());

        Ok(user)
    }

    /// Run `provider`'s sign-in flow and sign in with the result.
    ///
    /// # Errors
    /// Returns the provider's error (including [AuthError::Cancelled])
    /// unchanged, or any error from [Session::sign_in].
    pub async fn sign_in_with<P>(&mut self, provider: &P) -> Result<User, AuthError>
    where
        P: IdentityProvider + Sync,
    {
        let identity = provider.authenticate().await?;

        self.sign_in(identity).await
    }

    /// Clear the active identity and remove its persisted blob.
    ///
    /// Idempotent: signing out of an already signed-out session is a no-op.
    ///
    /// # Errors
    /// Returns a [StoreError] if the persisted blob could not be removed; the
    /// in-memory state is left unchanged so the caller can retry.
    pub async fn sign_out(&mut self) -> Result<(), StoreError> {
        self.store.remove(keys::SESSION_USER).await?;

        if matches!(self.state, SessionState::SignedIn(_)) {
            tracing::info!("signed out");
        }
        self.state = SessionState::SignedOut;

        Ok(())
    }
}
