//! Ed25519 key derivation
//!
//! Keys come from one of three seeds:
//! - fresh random bytes ([`generate_keypair_and_seed`])
//! - a recovery phrase, via BLAKE3 of its packed seed ([`keypair_from_phrase`])
//! - a master key and a context value, via BLAKE3 of their concatenation
//!   ([`derive_ed25519`])
//!
//! Key material is encoded as unpadded URL-safe base64. Public keys carry the
//! one-byte `0xed` type prefix; `public_key_raw` drops it.

use crate::phrase::{seed_from_phrase, PhraseError};
use crate::primitives::{
    hash, Primitives, PrimitivesError, DEFAULT_HASH_LENGTH, ED25519_PUBLIC_KEY_PREFIX,
    ED25519_SEED_LENGTH,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Default length of a freshly generated random seed
pub const DEFAULT_RANDOM_SEED_LENGTH: usize = ED25519_SEED_LENGTH;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error(transparent)]
    Phrase(#[from] PhraseError),
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
    #[error("Ed25519 seed must be {expected} bytes, got {found}")]
    InvalidSeedLength { expected: usize, found: usize },
}

/// Keypair plus the random seed it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairAndSeed {
    pub private_key: String,
    pub public_key: String,
    pub public_key_raw: String,
    /// Lowercase hex of the random seed
    pub seed: String,
}

/// Keypair derived from a recovery phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub private_key: String,
    pub public_key: String,
    pub public_key_raw: String,
}

/// Keypair derived from a master key and context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct DerivedKeyPair {
    pub private_key: String,
    pub public_key: String,
}

/// Ed25519 keypair in the byte layout used at the encoding boundary.
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    pub fn from_seed(prims: &Primitives, seed: &[u8]) -> Result<Self, KeyError> {
        let seed: &[u8; ED25519_SEED_LENGTH] =
            seed.try_into().map_err(|_| KeyError::InvalidSeedLength {
                expected: ED25519_SEED_LENGTH,
                found: seed.len(),
            })?;

        Ok(Self {
            signing_key: prims.signing_key_from_seed(seed),
        })
    }

    /// 64-byte private key: seed followed by the public key
    pub fn extract_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    /// Public key with its type prefix
    pub fn public_key(&self) -> [u8; 33] {
        let mut bytes = [0u8; 33];
        bytes[0] = ED25519_PUBLIC_KEY_PREFIX;
        bytes[1..].copy_from_slice(&self.public_key_raw());
        bytes
    }

    /// Public key without its type prefix
    pub fn public_key_raw(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }
}

/// Unpadded URL-safe base64
pub fn encode_base64_url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Generate a keypair from `length` fresh random bytes.
///
/// Ed25519 only accepts 32-byte seeds, so any other length is rejected
/// before drawing randomness.
pub fn generate_keypair_and_seed(
    prims: &Primitives,
    length: usize,
) -> Result<KeyPairAndSeed, KeyError> {
    if length != ED25519_SEED_LENGTH {
        return Err(KeyError::InvalidSeedLength {
            expected: ED25519_SEED_LENGTH,
            found: length,
        });
    }

    let random_seed = prims.random_bytes(length)?;
    let keypair = Ed25519KeyPair::from_seed(prims, &random_seed)?;

    Ok(KeyPairAndSeed {
        private_key: encode_base64_url(&*keypair.extract_bytes()),
        public_key: encode_base64_url(&keypair.public_key()),
        public_key_raw: encode_base64_url(&keypair.public_key_raw()),
        seed: hex::encode(&*random_seed),
    })
}

/// Derive the keypair belonging to a recovery phrase.
pub fn keypair_from_phrase(prims: &Primitives, phrase: &str) -> Result<KeyPair, KeyError> {
    let seed = seed_from_phrase(phrase)?;
    let keypair = Ed25519KeyPair::from_seed(prims, &*seed)?;

    Ok(KeyPair {
        private_key: encode_base64_url(&*keypair.extract_bytes()),
        public_key: encode_base64_url(&keypair.public_key()),
        public_key_raw: encode_base64_url(&keypair.public_key_raw()),
    })
}

/// Master key and context for hierarchical derivation.
///
/// The same pair always yields the same keypair; changing either input
/// yields an unrelated one.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivationContext {
    master_key: Vec<u8>,
    data_seed: Vec<u8>,
    #[zeroize(skip)]
    output_length: Option<usize>,
}

impl DerivationContext {
    /// Text inputs are taken as their UTF-8 bytes.
    pub fn new(master_key: impl AsRef<[u8]>, data_seed: impl AsRef<[u8]>) -> Self {
        Self {
            master_key: master_key.as_ref().to_vec(),
            data_seed: data_seed.as_ref().to_vec(),
            output_length: None,
        }
    }

    /// Request a specific digest length instead of the BLAKE3 default.
    pub fn with_output_length(mut self, output_length: usize) -> Self {
        self.output_length = Some(output_length);
        self
    }

    pub fn output_length(&self) -> usize {
        self.output_length.unwrap_or(DEFAULT_HASH_LENGTH)
    }

    /// `BLAKE3(master_key || data_seed)` at the requested length
    pub fn digest(&self) -> Zeroizing<Vec<u8>> {
        let mut input = Zeroizing::new(Vec::with_capacity(self.master_key.len() + self.data_seed.len()));
        input.extend_from_slice(&self.master_key);
        input.extend_from_slice(&self.data_seed);
        Zeroizing::new(hash(&input, self.output_length()))
    }

    /// Use the digest directly as the Ed25519 seed.
    pub fn derive(&self, prims: &Primitives) -> Result<DerivedKeyPair, KeyError> {
        let digest = self.digest();
        let keypair = Ed25519KeyPair::from_seed(prims, &digest)?;

        Ok(DerivedKeyPair {
            private_key: encode_base64_url(&*keypair.extract_bytes()),
            public_key: encode_base64_url(&keypair.public_key()),
        })
    }
}

/// Derive a child keypair from a master key and a data seed.
pub fn derive_ed25519(
    prims: &Primitives,
    master_key: impl AsRef<[u8]>,
    data_seed: impl AsRef<[u8]>,
    output_length: Option<usize>,
) -> Result<DerivedKeyPair, KeyError> {
    let mut context = DerivationContext::new(master_key, data_seed);
    if let Some(length) = output_length {
        context = context.with_output_length(length);
    }
    context.derive(prims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_PHRASE: &str =
        "dash life awesome toast adapt orbit flight wheat animal rule dinner whale about game hair";

    #[test]
    fn test_encode_base64_url() {
        assert_eq!(encode_base64_url(&[0xfb, 0xff]), "-_8");
        assert_eq!(encode_base64_url(b"any carnal pleas"), "YW55IGNhcm5hbCBwbGVhcw");
        assert_eq!(encode_base64_url(&[]), "");
    }

    #[test]
    fn test_ed25519_keypair_layout() {
        let prims = Primitives::ready().unwrap();
        let seed =
            hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60").unwrap();
        let keypair = Ed25519KeyPair::from_seed(&prims, &seed).unwrap();

        let public_raw = keypair.public_key_raw();
        assert_eq!(
            hex::encode(public_raw),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );

        let public = keypair.public_key();
        assert_eq!(public[0], 0xed);
        assert_eq!(&public[1..], &public_raw);

        let private = keypair.extract_bytes();
        assert_eq!(&private[..32], &seed[..]);
        assert_eq!(&private[32..], &public_raw);
    }

    #[test]
    fn test_ed25519_keypair_rejects_bad_seed_length() {
        let prims = Primitives::ready().unwrap();
        assert!(matches!(
            Ed25519KeyPair::from_seed(&prims, &[0u8; 16]),
            Err(KeyError::InvalidSeedLength {
                expected: 32,
                found: 16
            })
        ));
    }

    #[test]
    fn test_generate_keypair_and_seed() {
        let prims = Primitives::ready().unwrap();
        let generated = generate_keypair_and_seed(&prims, DEFAULT_RANDOM_SEED_LENGTH).unwrap();

        assert_eq!(generated.seed.len(), 64);
        assert!(generated.seed.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        // 64 bytes -> 86 chars, 33 -> 44, 32 -> 43
        assert_eq!(generated.private_key.len(), 86);
        assert_eq!(generated.public_key.len(), 44);
        assert_eq!(generated.public_key_raw.len(), 43);
        assert!(generated.public_key.starts_with("7"));

        // Regenerating from the reported seed gives the same keys
        let seed = hex::decode(&generated.seed).unwrap();
        let keypair = Ed25519KeyPair::from_seed(&prims, &seed).unwrap();
        assert_eq!(generated.public_key, encode_base64_url(&keypair.public_key()));
        assert_eq!(generated.private_key, encode_base64_url(&*keypair.extract_bytes()));

        let other = generate_keypair_and_seed(&prims, DEFAULT_RANDOM_SEED_LENGTH).unwrap();
        assert_ne!(generated.seed, other.seed);
    }

    #[test]
    fn test_generate_keypair_rejects_other_lengths() {
        let prims = Primitives::ready().unwrap();
        assert_eq!(
            generate_keypair_and_seed(&prims, 16),
            Err(KeyError::InvalidSeedLength {
                expected: 32,
                found: 16
            })
        );
    }

    #[test]
    fn test_keypair_from_phrase_known_vector() {
        let prims = Primitives::ready().unwrap();
        let keypair = keypair_from_phrase(&prims, KNOWN_PHRASE).unwrap();

        assert_eq!(
            keypair.private_key,
            "WViXi7muAhneuvr6dtGtf0cqc4XVTV0Q26kLREMn_j3CPAwq2S4Ciq9IRdqmsa55BGPbY3Jhugzcx5drcmKeAQ"
        );
        assert_eq!(keypair.public_key, "7cI8DCrZLgKKr0hF2qaxrnkEY9tjcmG6DNzHl2tyYp4B");
        assert_eq!(keypair.public_key_raw, "wjwMKtkuAoqvSEXaprGueQRj22NyYboM3MeXa3JingE");
    }

    #[test]
    fn test_keypair_from_invalid_phrase() {
        let prims = Primitives::ready().unwrap();
        let result = keypair_from_phrase(&prims, "zoo zoo zoo");
        assert!(matches!(
            result,
            Err(KeyError::Phrase(PhraseError::WrongWordCount { .. }))
        ));
    }

    #[test]
    fn test_derive_ed25519_known_vectors() {
        let prims = Primitives::ready().unwrap();

        let account1 = derive_ed25519(&prims, "root", "account-1", None).unwrap();
        assert_eq!(
            account1.private_key,
            "LdWoglKlcTzcEOL_EwmSCto1RBAQRn_u6ik7o_xbST2ajCGmylUWd_e_6kwo0cNiSI_3GqCoTkQeRiefJ-VSwA"
        );
        assert_eq!(account1.public_key, "7ZqMIabKVRZ397_qTCjRw2JIj_caoKhORB5GJ58n5VLA");

        let account2 = derive_ed25519(&prims, "root", "account-2", None).unwrap();
        assert_eq!(account2.public_key, "7eFb7GQZvR8OnsR1RueJgWedho84G43DiI5C_7Y31QN2");
    }

    #[test]
    fn test_derive_ed25519_is_deterministic() {
        let prims = Primitives::ready().unwrap();
        let first = derive_ed25519(&prims, "root", "account-1", None).unwrap();
        let second = derive_ed25519(&prims, "root", "account-1", None).unwrap();
        assert_eq!(first, second);

        let other = derive_ed25519(&prims, "root", "account-2", None).unwrap();
        assert_ne!(first.public_key, other.public_key);
    }

    #[test]
    fn test_derive_text_and_bytes_agree() {
        let prims = Primitives::ready().unwrap();
        let text = derive_ed25519(&prims, "root", "account-1", None).unwrap();
        let bytes = derive_ed25519(&prims, b"root".as_slice(), b"account-1".to_vec(), None).unwrap();
        assert_eq!(text, bytes);

        // Only the concatenation matters
        let split = derive_ed25519(&prims, "roo", "taccount-1", None).unwrap();
        assert_eq!(text, split);
    }

    #[test]
    fn test_derive_output_length() {
        let prims = Primitives::ready().unwrap();
        let default = derive_ed25519(&prims, "root", "account-1", None).unwrap();
        let explicit = derive_ed25519(&prims, "root", "account-1", Some(32)).unwrap();
        assert_eq!(default, explicit);

        assert_eq!(
            derive_ed25519(&prims, "root", "account-1", Some(64)),
            Err(KeyError::InvalidSeedLength {
                expected: 32,
                found: 64
            })
        );
    }

    #[test]
    fn test_derivation_context_digest() {
        let context = DerivationContext::new("", "");
        assert_eq!(context.output_length(), 32);
        assert_eq!(
            hex::encode(&*context.digest()),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
        assert_eq!(context.with_output_length(16).digest().len(), 16);
    }

    #[test]
    fn test_key_outputs_serialize_camel_case() {
        let prims = Primitives::ready().unwrap();
        let keypair = keypair_from_phrase(&prims, KNOWN_PHRASE).unwrap();
        let json = serde_json::to_value(&keypair).unwrap();
        assert_eq!(json["publicKeyRaw"], "wjwMKtkuAoqvSEXaprGueQRj22NyYboM3MeXa3JingE");
        assert!(json.get("privateKey").is_some());

        let parsed: KeyPair = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, keypair);
    }
}
