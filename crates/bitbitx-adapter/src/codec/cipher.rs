/*
[INPUT]:  DES3 key material and raw byte payloads
[OUTPUT]: DES3-ECB encrypted/decrypted bytes with PKCS#7 padding
[POS]:    Codec layer - block cipher primitive
[UPDATE]: When key handling or cipher parameters change
*/

use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, block_padding::Pkcs7};
use des::{TdesEde2, TdesEde3};

use crate::http::{BitbitxError, Result};

/// DES3 block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// Two-key 3DES (K1 K2 K1) key length
pub const KEY_LEN_2KEY: usize = 16;

/// Three-key 3DES key length
pub const KEY_LEN_3KEY: usize = 24;

/// Validate DES3 key length before it reaches the cipher primitive.
///
/// The exchange accepts both triple-DES keying options: 16 bytes
/// (two-key, K1 K2 K1) and 24 bytes (three-key).
pub fn validate_key(key: &[u8]) -> Result<()> {
    match key.len() {
        KEY_LEN_2KEY | KEY_LEN_3KEY => Ok(()),
        length => Err(BitbitxError::InvalidKey { length }),
    }
}

/// Encrypt with DES3 in ECB mode, PKCS#7 padding.
///
/// ECB has no IV and no diffusion across blocks: identical plaintext
/// blocks yield identical ciphertext blocks. The bitbitx server speaks
/// exactly this mode, so it is kept bit-exact despite the weakness.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        KEY_LEN_2KEY => {
            let enc = ecb::Encryptor::<TdesEde2>::new_from_slice(key)
                .map_err(|e| BitbitxError::Encrypt(e.to_string()))?;
            Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        KEY_LEN_3KEY => {
            let enc = ecb::Encryptor::<TdesEde3>::new_from_slice(key)
                .map_err(|e| BitbitxError::Encrypt(e.to_string()))?;
            Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        length => Err(BitbitxError::InvalidKey { length }),
    }
}

/// Decrypt DES3-ECB ciphertext and strip PKCS#7 padding.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    match key.len() {
        KEY_LEN_2KEY => {
            let dec = ecb::Decryptor::<TdesEde2>::new_from_slice(key)
                .map_err(|e| BitbitxError::Decrypt(e.to_string()))?;
            dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|e| BitbitxError::Decrypt(e.to_string()))
        }
        KEY_LEN_3KEY => {
            let dec = ecb::Decryptor::<TdesEde3>::new_from_slice(key)
                .map_err(|e| BitbitxError::Decrypt(e.to_string()))?;
            dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|e| BitbitxError::Decrypt(e.to_string()))
        }
        length => Err(BitbitxError::InvalidKey { length }),
    }
}
