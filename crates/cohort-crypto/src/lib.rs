//! Legacy credential codec.
//!
//! Short secrets (stored passwords and similar fields) are encrypted with
//! AES-128-ECB + PKCS7 and rendered as lowercase hex with every byte offset
//! by 128. No IV, no salt: equal inputs always produce equal output.
//!
//! ECB without an IV is a known-weak construction. It is kept on purpose,
//! because every credential already at rest decodes only under this exact
//! scheme. Replacing it is a stored-data migration, not a code change.

pub mod codec;
pub mod keys;

pub use codec::{CryptoError, decode, encode};
pub use keys::derive_key;
