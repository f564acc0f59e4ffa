use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, block_padding::Pkcs7};
use thiserror::Error;

use crate::keys::derive_key;

type Aes128EcbEnc = ecb::Encryptor<aes::Aes128>;
type Aes128EcbDec = ecb::Decryptor<aes::Aes128>;

const BLOCK_LEN: usize = 16;

/// Why a stored value failed to decode.
///
/// Variants carry positions and lengths only. Neither plaintext nor key
/// material ever appears in an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("hex input has odd length")]
    OddLength,
    #[error("invalid hex digit at offset {0}")]
    InvalidHex(usize),
    #[error("ciphertext of {0} bytes is not a whole number of blocks")]
    BadCiphertextLength(usize),
    #[error("decryption produced invalid padding")]
    BadPadding,
    #[error("decrypted bytes are not valid UTF-8")]
    NotUtf8,
}

/// Encrypt `plaintext` under `password` into the stored hex form.
///
/// Infallible: any password becomes a key via [`derive_key`] and any
/// plaintext length is padded. Equal inputs give equal output.
pub fn encode(plaintext: &str, password: &str) -> String {
    let key = derive_key(password);
    let mut bytes =
        Aes128EcbEnc::new(&key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    bias(&mut bytes);
    hex::encode(bytes)
}

/// Invert [`encode`] for the same password.
///
/// A wrong password is not detected directly; it surfaces as
/// [`CryptoError::BadPadding`] or [`CryptoError::NotUtf8`] almost always.
pub fn decode(encoded: &str, password: &str) -> Result<String, CryptoError> {
    let mut bytes = hex::decode(encoded).map_err(|e| match e {
        hex::FromHexError::OddLength => CryptoError::OddLength,
        hex::FromHexError::InvalidHexCharacter { index, .. } => CryptoError::InvalidHex(index),
        hex::FromHexError::InvalidStringLength => CryptoError::OddLength,
    })?;
    if bytes.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::BadCiphertextLength(bytes.len()));
    }
    bias(&mut bytes);

    let key = derive_key(password);
    let plain = Aes128EcbDec::new(&key.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
        .map_err(|_| CryptoError::BadPadding)?;
    String::from_utf8(plain).map_err(|_| CryptoError::NotUtf8)
}

/// The stored format offsets every ciphertext byte by 128 before hex
/// rendering. Offsetting by 128 mod 256 is an XOR with the high bit, so the
/// same pass undoes itself on decode.
fn bias(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b ^= 0x80;
    }
}
