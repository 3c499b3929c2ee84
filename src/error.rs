use hmac::digest::InvalidLength;
use std::fmt;

#[derive(Debug)]
/// The validation key could not be used to construct a service.
pub enum ConfigurationError {
    /// No key material was given.
    EmptyKey,
    /// The textual key is not hexadecimal.
    InvalidKey(hex::FromHexError),
    /// The MAC does not take keys of this length. Never returned for HMAC.
    UnsupportedKeyLength(InvalidLength),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationError::EmptyKey => write!(f, "Validation key is empty"),
            ConfigurationError::InvalidKey(_) => write!(f, "Validation key is not valid hex"),
            ConfigurationError::UnsupportedKeyLength(_) => {
                write!(f, "Validation key length is not supported by the MAC")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::InvalidKey(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for ConfigurationError {
    fn from(err: hex::FromHexError) -> ConfigurationError {
        ConfigurationError::InvalidKey(err)
    }
}

impl From<InvalidLength> for ConfigurationError {
    fn from(err: InvalidLength) -> ConfigurationError {
        ConfigurationError::UnsupportedKeyLength(err)
    }
}
