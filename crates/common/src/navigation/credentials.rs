use crate::store::{LocalStore, TOKEN_KEY};

/// Answers one question for the guard: is there a session token?
///  The token is never parsed or validated; presence is enough.
pub trait CredentialProvider {
    fn has_token(&self) -> bool;
}

impl CredentialProvider for bool {
    fn has_token(&self) -> bool {
        *self
    }
}

impl CredentialProvider for Option<String> {
    fn has_token(&self) -> bool {
        self.as_deref().is_some_and(|token| !token.is_empty())
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for &T {
    fn has_token(&self) -> bool {
        (**self).has_token()
    }
}

/// Token presence read from the persisted key-value store
#[derive(Debug, Clone)]
pub struct StoredToken {
    store: LocalStore,
}

impl StoredToken {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl CredentialProvider for StoredToken {
    fn has_token(&self) -> bool {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.has_token(),
            Err(e) => {
                // An unreadable store is treated as signed out
                tracing::warn!(path = %self.store.path().display(), error = %e, "failed to read session store");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_option_token() {
        assert!(Some("tok".to_string()).has_token());
        assert!(!Some(String::new()).has_token());
        assert!(!None::<String>.has_token());
    }

    #[test]
    fn test_stored_token_follows_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalStore::open(temp_dir.path().join("session.toml"));
        let credentials = StoredToken::new(store.clone());

        assert!(!credentials.has_token());

        store.set(TOKEN_KEY, "tok").unwrap();
        assert!(credentials.has_token());

        store.set(TOKEN_KEY, "").unwrap();
        assert!(!credentials.has_token());

        store.set(TOKEN_KEY, "tok").unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert!(!credentials.has_token());
    }

    #[test]
    fn test_unreadable_store_is_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(!StoredToken::new(LocalStore::open(path)).has_token());
    }
}
