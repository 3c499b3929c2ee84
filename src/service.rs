use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::digest::KeyInit;
use hmac::Mac;
use subtle::ConstantTimeEq as _;

use crate::error::ConfigurationError;
use crate::keyed::{finish, keyed, HmacSha1, HmacSha256};

/// Hashes and checks passwords under one validation key.
///
/// The default MAC is HMAC-SHA1, whose digests encode to 28 characters.
pub type HmacSha1Service = PasswordService<HmacSha1>;

/// Same contract as [`HmacSha1Service`] with HMAC-SHA256, encoding to 44 characters.
pub type HmacSha256Service = PasswordService<HmacSha256>;

/// A password verifier bound to a secret validation key.
///
/// There are no setters, the key is fixed for the lifetime of the value. All operations take
/// `&self` and only touch call-local copies of the keyed state, so a service can be shared
/// between threads as is.
#[derive(Clone)]
pub struct PasswordService<M = HmacSha1> {
    /// The MAC, already keyed with the validation key but not fed any message.
    ///
    /// Cloned for every digest. The raw key bytes are not retained beyond construction.
    prepared: M,
}

impl<M> PasswordService<M>
where
    M: Mac + KeyInit + Clone,
{
    /// Construct from the hexadecimal text of the validation key.
    ///
    /// Whitespace around the key is ignored, so the contents of a key file can be passed
    /// directly. Both letter cases are accepted.
    pub fn from_hex(key: &str) -> Result<Self, ConfigurationError> {
        let key = key.trim();

        if key.is_empty() {
            return Err(ConfigurationError::EmptyKey);
        }

        let bytes = hex::decode(key)?;
        Self::new(&bytes)
    }

    /// Construct from the raw validation key.
    pub fn new(key: &[u8]) -> Result<Self, ConfigurationError> {
        if key.is_empty() {
            return Err(ConfigurationError::EmptyKey);
        }

        let prepared = keyed::<M>(key)?;
        tracing::debug!(key_len = key.len(), "Validation key prepared");

        Ok(PasswordService { prepared })
    }

    /// Hash a password with the empty salt.
    pub fn hash(&self, password: &str) -> String {
        self.hash_salted(password, "")
    }

    /// Hash a password followed by a salt.
    ///
    /// The MAC input is the UTF-8 of `password` immediately followed by the UTF-8 of `salt`,
    /// without a separator. The result is the standard, padded base64 of the raw MAC output.
    pub fn hash_salted(&self, password: &str, salt: &str) -> String {
        let digest = finish(self.prepared.clone(), &[password.as_bytes(), salt.as_bytes()]);
        STANDARD.encode(digest)
    }

    /// Check a password hashed with the empty salt.
    pub fn check(&self, password: &str, candidate: &str) -> bool {
        self.check_salted(password, candidate, "")
    }

    /// Check that `candidate` is the hash of `password` with `salt`.
    ///
    /// Anything that is not exactly the expected encoding, including malformed base64 or a
    /// candidate of the wrong length, is a mismatch.
    pub fn check_salted(&self, password: &str, candidate: &str, salt: &str) -> bool {
        let expected = self.hash_salted(password, salt);
        // Compares all bytes, the position of a difference does not change the timing.
        let matched: bool = expected.as_bytes().ct_eq(candidate.as_bytes()).into();
        tracing::trace!(matched, "Password checked");
        matched
    }

    /// The length of every string returned by [`Self::hash`].
    pub fn digest_len(&self) -> usize {
        <M as hmac::digest::OutputSizeUser>::output_size().div_ceil(3) * 4
    }
}

impl<M> fmt::Debug for PasswordService<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PasswordService")
            .field("validation_key", &"<redacted>")
            .finish()
    }
}
