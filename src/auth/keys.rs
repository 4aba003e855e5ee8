//! RSA key-material parsing
//!
//! The keys handed to this SDK come from several interoperating gateway
//! SDKs, each with its own idea of an encoding: PEM-wrapped PKCS#1 or
//! PKCS#8 for private keys, PEM-wrapped SubjectPublicKeyInfo for public
//! keys, or the same DER structures as bare base64 text with no PEM armor
//! (the Java SDK ships keys that way). The loaders here normalize all of
//! them into [`RsaPrivateKey`] / [`RsaPublicKey`] handles.
//!
//! Parsing is an ordered list of attempts, first match wins. Key formats
//! are a closed, small set, so there is no trait indirection here.

use base64::{engine::general_purpose, Engine as _};
use const_oid::ObjectIdentifier;
use der::{Document, SecretDocument};
use pkcs1::DecodeRsaPrivateKey;
use pkcs8::{DecodePrivateKey, PrivateKeyInfo};
use rsa::{RsaPrivateKey, RsaPublicKey};
use spki::{DecodePublicKey, SubjectPublicKeyInfoRef};

use crate::{AddPayError, Result};

/// OID for rsaEncryption, the algorithm identifier carried by PKCS#8 and
/// SubjectPublicKeyInfo structures wrapping RSA keys.
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Marker that distinguishes PEM text from bare base64 key material
const PEM_MARKER: &str = "-----BEGIN";

/// Parse a private key from PEM (PKCS#1 or PKCS#8) or bare base64
/// (PKCS#1 or PKCS#8 DER).
///
/// No minimum key size is enforced; the returned key has whatever modulus
/// and exponent were embedded in the input.
pub fn load_private_key(raw: &[u8]) -> Result<RsaPrivateKey> {
    let text = key_text(raw, "private key")?;

    if text.starts_with(PEM_MARKER) {
        // PEM path: PKCS#8 first, then PKCS#1 (mirrors the order keys
        // show up in practice: openssl genpkey vs. legacy genrsa output).
        let (_label, doc) = SecretDocument::from_pem(text)
            .map_err(|e| AddPayError::invalid_encoding(format!("malformed PEM block: {e}")))?;

        match pkcs8_private_key(doc.as_bytes()) {
            Ok(key) => Ok(key),
            Err(err @ AddPayError::WrongKeyAlgorithm(_)) => Err(err),
            Err(_) => RsaPrivateKey::from_pkcs1_der(doc.as_bytes()).map_err(|e| {
                AddPayError::unsupported_key_structure(format!(
                    "PEM block is neither a PKCS#8 nor a PKCS#1 private key: {e}"
                ))
            }),
        }
    } else {
        // Bare base64 path: PKCS#1 first (the common legacy form), then
        // PKCS#8 (the Java SDK form).
        let der = decode_base64_key(text)?;

        if let Ok(key) = RsaPrivateKey::from_pkcs1_der(&der) {
            return Ok(key);
        }
        pkcs8_private_key(&der)
    }
}

/// Parse a public key from PEM or bare base64. The only structure
/// attempted is SubjectPublicKeyInfo (X.509); there is no PKCS#1-only
/// public key fallback.
pub fn load_public_key(raw: &[u8]) -> Result<RsaPublicKey> {
    let text = key_text(raw, "public key")?;

    let der = if text.starts_with(PEM_MARKER) {
        let (_label, doc) = Document::from_pem(text)
            .map_err(|e| AddPayError::invalid_encoding(format!("malformed PEM block: {e}")))?;
        doc.into_vec()
    } else {
        decode_base64_key(text)?
    };

    spki_public_key(&der)
}

/// Trim the raw blob and reject empty or non-textual input. Both supported
/// encodings (PEM and bare base64) are text.
fn key_text<'a>(raw: &'a [u8], role: &str) -> Result<&'a str> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| AddPayError::invalid_encoding(format!("{role} is not valid UTF-8 text")))?
        .trim();

    if text.is_empty() {
        return Err(AddPayError::empty_key_material(format!(
            "{role} is empty or whitespace-only"
        )));
    }
    Ok(text)
}

/// Decode bare base64 key material. Interior whitespace is stripped first:
/// keys copied out of config files are often wrapped at 64 columns even
/// without PEM armor.
fn decode_base64_key(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AddPayError::invalid_encoding(format!("malformed base64 key material: {e}")))
}

/// Parse a PKCS#8 private key, checking the embedded algorithm OID before
/// handing the inner key data to the RSA decoder. A structurally valid
/// PKCS#8 envelope around a non-RSA key must surface as a wrong-algorithm
/// error, not as a generic parse failure.
fn pkcs8_private_key(der_bytes: &[u8]) -> Result<RsaPrivateKey> {
    let info = PrivateKeyInfo::try_from(der_bytes).map_err(|e| {
        AddPayError::unsupported_key_structure(format!("not a PKCS#8 structure: {e}"))
    })?;

    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(AddPayError::wrong_key_algorithm(format!(
            "expected an RSA private key, found algorithm {}",
            info.algorithm.oid
        )));
    }

    RsaPrivateKey::from_pkcs8_der(der_bytes).map_err(|e| {
        AddPayError::unsupported_key_structure(format!("invalid RSA key data in PKCS#8: {e}"))
    })
}

/// Parse a SubjectPublicKeyInfo public key with the same OID check as the
/// private-key path.
fn spki_public_key(der_bytes: &[u8]) -> Result<RsaPublicKey> {
    let info = SubjectPublicKeyInfoRef::try_from(der_bytes).map_err(|e| {
        AddPayError::unsupported_key_structure(format!(
            "not a SubjectPublicKeyInfo structure: {e}"
        ))
    })?;

    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Err(AddPayError::wrong_key_algorithm(format!(
            "expected an RSA public key, found algorithm {}",
            info.algorithm.oid
        )));
    }

    RsaPublicKey::from_public_key_der(der_bytes).map_err(|e| {
        AddPayError::unsupported_key_structure(format!(
            "invalid RSA key data in SubjectPublicKeyInfo: {e}"
        ))
    })
}
