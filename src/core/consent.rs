use sha2::{Digest, Sha256};

/// Fallback salt used when none is configured. Must stay byte-identical:
/// existing suppression records are keyed by hashes derived from it.
pub const DEFAULT_SALT: &str = "default-salt";

/// One-way hasher for contact email addresses.
///
/// The digest is the only representation of an email that ever reaches the
/// suppression store; the raw address is never persisted.
#[derive(Debug, Clone)]
pub struct ConsentHasher {
    salt: String,
}

impl ConsentHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    pub fn with_default_salt() -> Self {
        Self::new(DEFAULT_SALT)
    }

    /// Hex-encoded SHA-256 of the lower-cased email concatenated with the
    /// salt. Case-insensitive on the email, case-sensitive on the salt.
    pub fn hash_email(&self, email: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(email.to_lowercase().as_bytes());
        hasher.update(self.salt.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Default for ConsentHasher {
    fn default() -> Self {
        Self::with_default_salt()
    }
}
