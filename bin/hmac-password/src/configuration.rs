use hmac_password::{ConfigurationError, HmacSha1Service, HmacSha256Service};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Configuration {
    /// Hexadecimal text of the secret key.
    pub validation_key: String,
    #[serde(default)]
    pub algorithm: Algorithm,
}

#[derive(Deserialize, clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
}

impl Configuration {
    pub fn from_str(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// A service for whichever algorithm was configured.
pub enum Verifier {
    Sha1(HmacSha1Service),
    Sha256(HmacSha256Service),
}

impl Verifier {
    pub fn new(algorithm: Algorithm, key: &str) -> Result<Self, ConfigurationError> {
        Ok(match algorithm {
            Algorithm::Sha1 => Verifier::Sha1(HmacSha1Service::from_hex(key)?),
            Algorithm::Sha256 => Verifier::Sha256(HmacSha256Service::from_hex(key)?),
        })
    }

    pub fn hash(&self, password: &str, salt: &str) -> String {
        match self {
            Verifier::Sha1(service) => service.hash_salted(password, salt),
            Verifier::Sha256(service) => service.hash_salted(password, salt),
        }
    }

    pub fn check(&self, password: &str, hash: &str, salt: &str) -> bool {
        match self {
            Verifier::Sha1(service) => service.check_salted(password, hash, salt),
            Verifier::Sha256(service) => service.check_salted(password, hash, salt),
        }
    }
}
