/*
[INPUT]:  Command objects and wire-format response bodies
[OUTPUT]: base64(DES3-ECB(JSON)) envelopes and decrypted plaintext
[POS]:    Codec layer - wire envelope encode/decode
[UPDATE]: When the wire format or key handling changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::codec::cipher;
use crate::http::{BitbitxError, Result};
use crate::types::Command;

/// Codec for the bitbitx encrypted RPC envelope.
///
/// Request direction: JSON-serialize the command, DES3-ECB encrypt,
/// base64-encode. Response direction: base64-decode, DES3-ECB decrypt.
/// The envelope carries no length field, checksum, or version; the key
/// and cipher mode are the only integrity mechanism.
#[derive(Debug, Clone)]
pub struct EnvelopeCodec {
    key: Vec<u8>,
}

impl EnvelopeCodec {
    /// Create a codec, validating the DES3 key length up front.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        cipher::validate_key(&key)?;
        Ok(Self { key })
    }

    /// Serialize and seal a command into a wire envelope.
    pub fn seal(&self, command: &Command) -> Result<String> {
        let json = serde_json::to_vec(command)?;
        self.seal_bytes(&json)
    }

    /// Seal pre-serialized plaintext into a wire envelope.
    pub fn seal_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let ciphertext = cipher::encrypt(&self.key, plaintext)?;
        Ok(STANDARD.encode(ciphertext))
    }

    /// Open a wire envelope back into plaintext bytes.
    ///
    /// Base64 and cipher failures are both reported as decrypt errors;
    /// JSON parsing of the plaintext is the caller's concern so that a
    /// parse failure stays distinguishable from a cipher failure.
    pub fn open(&self, wire: &str) -> Result<Vec<u8>> {
        let ciphertext = STANDARD
            .decode(wire.trim())
            .map_err(|e| BitbitxError::Decrypt(format!("base64 decode: {e}")))?;
        cipher::decrypt(&self.key, &ciphertext)
    }
}
