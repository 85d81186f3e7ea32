//! Cryptographic primitives and the one-time readiness gate
//!
//! Hashing is BLAKE3 and needs no setup. Anything touching the CSPRNG or
//! Ed25519 requires a [`Primitives`] handle, which can only be obtained once
//! the process-wide self test has passed.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::OnceLock;
use thiserror::Error;
use zeroize::Zeroizing;

/// Ed25519 keys are generated from exactly 32 seed bytes
pub const ED25519_SEED_LENGTH: usize = 32;

/// BLAKE3 output length when none is requested
pub const DEFAULT_HASH_LENGTH: usize = blake3::OUT_LEN;

/// Multicodec tag prepended to Ed25519 public keys
pub const ED25519_PUBLIC_KEY_PREFIX: u8 = 0xed;

/// RFC 8032 section 7.1, test 1
const SELF_TEST_SEED: [u8; 32] = [
    0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c, 0xc4,
    0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae, 0x7f, 0x60,
];
const SELF_TEST_PUBLIC: [u8; 32] = [
    0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64, 0x07, 0x3a,
    0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68, 0xf7, 0x07, 0x51, 0x1a,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitivesError {
    #[error("Cryptographic primitives unavailable: {0}")]
    Unavailable(String),
}

static READY: OnceLock<Result<(), String>> = OnceLock::new();

/// Proof that the cryptographic primitives initialized successfully.
///
/// Cheap to copy; pass it by reference to every operation that needs
/// randomness or key construction.
#[derive(Debug, Clone, Copy)]
pub struct Primitives {
    _ready: (),
}

impl Primitives {
    /// Run the one-time initialization, or return its cached outcome.
    ///
    /// Safe to call from any number of threads; the self test runs once per
    /// process.
    pub fn ready() -> Result<Self, PrimitivesError> {
        READY
            .get_or_init(self_test)
            .clone()
            .map(|()| Self { _ready: () })
            .map_err(PrimitivesError::Unavailable)
    }

    /// Operating system CSPRNG
    pub fn rng(&self) -> OsRng {
        OsRng
    }

    /// Fill a fresh buffer with `len` secure random bytes.
    pub fn random_bytes(&self, len: usize) -> Result<Zeroizing<Vec<u8>>, PrimitivesError> {
        let mut bytes = Zeroizing::new(vec![0u8; len]);
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| PrimitivesError::Unavailable(e.to_string()))?;
        Ok(bytes)
    }

    /// Deterministic Ed25519 key from a 32-byte seed
    pub fn signing_key_from_seed(&self, seed: &[u8; ED25519_SEED_LENGTH]) -> SigningKey {
        SigningKey::from_bytes(seed)
    }
}

fn self_test() -> Result<(), String> {
    let mut probe = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut probe)
        .map_err(|e| format!("OS random source failed: {}", e))?;

    let public = SigningKey::from_bytes(&SELF_TEST_SEED).verifying_key().to_bytes();
    if public != SELF_TEST_PUBLIC {
        return Err("Ed25519 known-answer test failed".into());
    }

    log::debug!("cryptographic primitives ready");
    Ok(())
}

/// BLAKE3 of `data`, extended to `output_length` bytes.
///
/// The first 32 bytes of any output length equal the default digest.
pub fn hash(data: &[u8], output_length: usize) -> Vec<u8> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    let mut output = vec![0u8; output_length];
    hasher.finalize_xof().fill(&mut output);
    output
}
