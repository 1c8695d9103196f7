use sha2::{Digest, Sha256};

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// The process-wide shared secret.
///
/// Only the SHA-256 digest is retained. Candidates are digested the same
/// way and compared in constant time, so neither the contents nor the length
/// of the secret leak through response timing.
#[derive(Clone)]
pub struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: sha256(secret.as_bytes()),
        }
    }

    /// True when `candidate` is byte-for-byte equal to the configured secret
    pub fn verify(&self, candidate: &[u8]) -> bool {
        constant_time_eq(&self.digest, &sha256(candidate))
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(bytes));
    out
}

fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}
