//! RSA signing, verification, and envelope encryption
//!
//! [`RsaAuthenticator`] holds the merchant's private key and the gateway's
//! public key, loaded once at client construction. Every operation is a
//! single-shot, stateless transformation over the fixed keys, so a shared
//! reference can be used from any number of threads without locking.

use base64::{engine::general_purpose, Engine as _};
use rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    signature::{SignatureEncoding, Signer, Verifier},
    Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey,
};
use sha2::Sha256;
use serde_json::Value;
use std::collections::HashMap;

use super::{canonical, keys};
use crate::{AddPayError, Result};

/// RSA request authenticator: signs outbound payloads with the merchant's
/// private key and verifies/decrypts gateway material with the gateway's
/// public key.
///
/// Construction fails entirely unless both keys parse; no half-initialized
/// authenticator is observable. Signing uses SHA-256 with PKCS#1 v1.5
/// padding, which is deterministic for a fixed key and payload (matches
/// the gateway's Java SDK).
#[derive(Clone)]
pub struct RsaAuthenticator {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl std::fmt::Debug for RsaAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        f.debug_struct("RsaAuthenticator").finish_non_exhaustive()
    }
}

impl RsaAuthenticator {
    /// Create an authenticator from raw key material in any supported
    /// encoding (see [`super::keys`]). The first key that fails to parse
    /// aborts construction.
    pub fn new(private_key_raw: &[u8], public_key_raw: &[u8]) -> Result<Self> {
        let private_key = keys::load_private_key(private_key_raw)?;
        let public_key = keys::load_public_key(public_key_raw)?;

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Sign a payload: SHA-256 digest, PKCS#1 v1.5 padding, base64
    /// (standard alphabet, padded) output.
    pub fn sign(&self, payload: &[u8]) -> Result<String> {
        let signing_key = SigningKey::<Sha256>::new(self.private_key.clone());
        let signature = signing_key
            .try_sign(payload)
            .map_err(|e| AddPayError::signing_failure(e.to_string()))?;

        Ok(general_purpose::STANDARD.encode(signature.to_bytes()))
    }

    /// Verify a base64 signature over a payload against the gateway's
    /// public key.
    ///
    /// A signature that decodes but does not match yields
    /// [`AddPayError::VerificationFailed`]; malformed base64 yields
    /// [`AddPayError::InvalidEncoding`] instead, so callers can tell an
    /// expected mismatch apart from garbage input.
    pub fn verify(&self, payload: &[u8], signature_b64: &str) -> Result<()> {
        let sig_bytes = general_purpose::STANDARD
            .decode(signature_b64)
            .map_err(|e| AddPayError::invalid_encoding(format!("malformed base64 signature: {e}")))?;

        let signature = Signature::try_from(sig_bytes.as_slice())
            .map_err(|e| AddPayError::verification_failed(format!("unusable signature: {e}")))?;

        let verifying_key = VerifyingKey::<Sha256>::new(self.public_key.clone());
        verifying_key
            .verify(payload, &signature)
            .map_err(|_| AddPayError::verification_failed("signature does not match payload"))
    }

    /// Encrypt a small secret with the gateway's public key (PKCS#1 v1.5
    /// envelope). The plaintext must be at most the modulus size minus 11
    /// bytes of padding overhead; anything longer fails, it is never
    /// truncated.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let mut rng = rand::thread_rng();
        let ciphertext = self
            .public_key
            .encrypt(&mut rng, Pkcs1v15Encrypt, plaintext)
            .map_err(|e| AddPayError::encryption_failure(e.to_string()))?;

        Ok(general_purpose::STANDARD.encode(ciphertext))
    }

    /// Decrypt a base64 PKCS#1 v1.5 envelope with the merchant's private
    /// key.
    pub fn decrypt(&self, ciphertext_b64: &str) -> Result<Vec<u8>> {
        let ciphertext = general_purpose::STANDARD.decode(ciphertext_b64).map_err(|e| {
            AddPayError::decryption_failure(format!("malformed base64 ciphertext: {e}"))
        })?;

        self.private_key
            .decrypt(Pkcs1v15Encrypt, &ciphertext)
            .map_err(|e| AddPayError::decryption_failure(e.to_string()))
    }

    /// Sign a form-style parameter map over its canonical encoding (see
    /// [`super::canonical`]): drop the `sign` slot and empty/`"0"` values,
    /// sort keys, form-encode, then sign the resulting string exactly as
    /// [`Self::sign`] would.
    pub fn sign_parameters(&self, params: &HashMap<String, Value>) -> Result<String> {
        let canonical = canonical::canonical_query_string(params);
        self.sign(canonical.as_bytes())
    }
}
