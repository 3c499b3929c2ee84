use hmac::digest::{InvalidLength, KeyInit, Output};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;

/// Size of the raw HMAC-SHA1 output, in bytes.
pub const DIGEST_LEN: usize = 20;

/// HMAC-SHA1 of `message` under `key`.
///
/// Keys of any length are accepted, longer ones are hashed down to the block size first.
pub fn digest(key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
    let mac = keyed::<HmacSha1>(key).expect("HMAC accepts keys of any length");
    let output = finish(mac, &[message]);

    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&output);
    bytes
}

/// Key a MAC.
///
/// The returned state holds no message yet and is cloned for every message digested under the
/// same key, so the key schedule is only computed once.
pub fn keyed<M>(key: &[u8]) -> Result<M, InvalidLength>
where
    M: Mac + KeyInit,
{
    <M as KeyInit>::new_from_slice(key)
}

/// Feed `parts`, in order, into a keyed MAC and return the raw output.
pub fn finish<M: Mac>(mut mac: M, parts: &[&[u8]]) -> Output<M> {
    for part in parts {
        mac.update(part);
    }

    mac.finalize().into_bytes()
}
