/// AES-128 key length in bytes.
pub const KEY_LEN: usize = 16;

/// Filler byte for short passwords, inherited from the stored format.
pub const KEY_PAD: u8 = b'*';

/// Normalize a password into exactly [`KEY_LEN`] key bytes.
///
/// Longer passwords are truncated, shorter ones right-padded with `'*'`,
/// both counted in bytes. Every password yields a usable key, and two
/// passwords agreeing on their first 16 bytes yield the same key.
pub fn derive_key(password: &str) -> [u8; KEY_LEN] {
    let mut key = [KEY_PAD; KEY_LEN];
    let bytes = password.as_bytes();
    let take = bytes.len().min(KEY_LEN);
    key[..take].copy_from_slice(&bytes[..take]);
    key
}
