//! Hash and check passwords under a secret validation key.
//!
//! A [`PasswordService`] is constructed once from the validation key and is then an immutable,
//! freely shareable verifier with exactly two operations:
//!
//! ```
//! use hmac_password::HmacSha1Service;
//!
//! let service = HmacSha1Service::from_hex("C7D461D13B86BED2A574C1E57A90DCD6").unwrap();
//!
//! let stored = service.hash_salted("password", "magic");
//! assert!(service.check_salted("password", &stored, "magic"));
//! assert!(!service.check("password", &stored));
//! ```
//!
//! The salt is not part of the stored digest. Whoever stores the digest must also store the salt
//! and pass it again when checking.
mod error;
mod keyed;
mod service;


pub use crate::error::ConfigurationError;
pub use crate::keyed::{digest, finish, keyed, HmacSha1, HmacSha256, DIGEST_LEN};
pub use crate::service::{HmacSha1Service, HmacSha256Service, PasswordService};
