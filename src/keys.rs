//! The storage keys under which application state is persisted.
//!
//! Every logical entity lives under its own key, so the store only needs
//! atomic get/set/remove per key.

use crate::user::UserID;

/// The single slot holding the signed-in user's identity. Not user-scoped:
/// there is at most one active user per device session.
pub const SESSION_USER: &str = "session:user";

/// The key holding the ordered transaction list for `user_id`.
pub fn transactions(user_id: &UserID) -> String {
    format!("transactions:user:{user_id}")
}

#[cfg(test)]
mod keys_tests {
    use crate::user::UserID;

    use super::transactions;

    #[test]
    fn transaction_keys_are_scoped_by_user() {
        assert_eq!(
            transactions(&UserID::new("u1")),
            "transactions:user:u1".to_owned()
        );
    }
}
