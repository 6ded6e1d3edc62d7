//! The `Storage` trait and typed accessors.

use serde::{de::DeserializeOwned, Serialize};

use crate::StorageError;

/// A string-keyed blob store.
///
/// Implementations take `&self` and provide their own interior mutability
/// where needed, so a single store handle can back several engines at
/// once (cart session and content store share one data directory).
pub trait Storage {
    /// Get the raw bytes stored under `key`, or `None` if absent.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store raw bytes under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether a value exists under `key`.
    fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// List all keys currently present, sorted.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// JSON-typed accessors layered over any [`Storage`].
///
/// # Example
///
/// ```rust,ignore
/// let cart: Option<Vec<LineItem>> = store.get("cart")?;
/// store.set("cart", &items)?;
/// ```
pub trait StorageExt: Storage {
    /// Get and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist. A present-but-unparseable
    /// blob is an error; callers that want degrade-to-default semantics
    /// handle that at their own layer.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and store a value under `key`.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

/// Validate a storage key: non-empty, `[A-Za-z0-9._-]` only.
///
/// Keys double as file names in the file-backed store, so path separators
/// and other special characters are rejected up front for every backend.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(check_key("cart").is_ok());
        assert!(check_key("cms-content").is_ok());
        assert!(check_key("products.v2").is_ok());
        assert!(check_key("snake_case").is_ok());
    }

    #[test]
    fn test_invalid_keys() {
        assert!(check_key("").is_err());
        assert!(check_key("a/b").is_err());
        assert!(check_key("..").is_ok()); // dots alone are fine
        assert!(check_key("sp ace").is_err());
        assert!(check_key("col:on").is_err());
    }
}
