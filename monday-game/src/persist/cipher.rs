//! Save file encryption.
//!
//! Tokens follow the Fernet layout so saves written by earlier releases stay
//! readable:
//!
//! ```text
//! 0x80 | timestamp (u64 BE) | IV (16) | AES-128-CBC ciphertext | HMAC-SHA256 (32)
//! ```
//!
//! encoded as URL-safe base64. The key is the SHA-256 of a passphrase that
//! ships with the game, so this keeps casual editors out and nothing more.

#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("token is not valid base64")]
    Encoding,
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    Signature,
    #[error("token ciphertext has bad padding")]
    Padding,
    #[error("signing key rejected")]
    Key,
}

#[cfg(feature = "encryption")]
mod fernet {
    use aes::Aes128;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE;
    use cbc::cipher::block_padding::Pkcs7;
    use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
    use hmac::{Hmac, Mac};
    use sha2::{Digest, Sha256};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::CipherError;

    type HmacSha256 = Hmac<Sha256>;
    type Aes128CbcEnc = cbc::Encryptor<Aes128>;
    type Aes128CbcDec = cbc::Decryptor<Aes128>;

    const VERSION: u8 = 0x80;
    const HEADER_LEN: usize = 1 + 8 + 16;
    const TAG_LEN: usize = 32;
    const BLOCK_LEN: usize = 16;

    /// Symmetric key pair derived from a passphrase.
    #[derive(Clone)]
    pub struct Cipher {
        signing_key: [u8; 16],
        encryption_key: [u8; 16],
    }

    impl std::fmt::Debug for Cipher {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("Cipher { .. }")
        }
    }

    impl Cipher {
        #[must_use]
        pub fn from_passphrase(passphrase: &str) -> Option<Self> {
            let digest = Sha256::digest(passphrase.as_bytes());
            let mut signing_key = [0u8; 16];
            let mut encryption_key = [0u8; 16];
            signing_key.copy_from_slice(&digest[..16]);
            encryption_key.copy_from_slice(&digest[16..]);
            Some(Self {
                signing_key,
                encryption_key,
            })
        }

        fn mac(&self) -> Result<HmacSha256, CipherError> {
            <HmacSha256 as Mac>::new_from_slice(&self.signing_key).map_err(|_| CipherError::Key)
        }

        /// Encrypt and sign `plaintext` into a base64 token.
        ///
        /// # Errors
        ///
        /// Fails only if the signing key is rejected by HMAC.
        pub fn seal(&self, plaintext: &[u8]) -> Result<String, CipherError> {
            let iv: [u8; 16] = rand::random();
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs());
            let ciphertext = Aes128CbcEnc::new(&self.encryption_key.into(), &iv.into())
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

            let mut token = Vec::with_capacity(HEADER_LEN + ciphertext.len() + TAG_LEN);
            token.push(VERSION);
            token.extend_from_slice(&timestamp.to_be_bytes());
            token.extend_from_slice(&iv);
            token.extend_from_slice(&ciphertext);
            let mut mac = self.mac()?;
            mac.update(&token);
            token.extend_from_slice(&mac.finalize().into_bytes());
            Ok(URL_SAFE.encode(token))
        }

        /// Verify and decrypt a token produced by [`Cipher::seal`].
        ///
        /// # Errors
        ///
        /// Fails if the token is not base64, is truncated, carries the wrong
        /// version byte, has been tampered with, or decrypts to bad padding.
        pub fn open(&self, token: &[u8]) -> Result<Vec<u8>, CipherError> {
            let token = URL_SAFE
                .decode(token.trim_ascii())
                .map_err(|_| CipherError::Encoding)?;
            if token.len() < HEADER_LEN + BLOCK_LEN + TAG_LEN || token[0] != VERSION {
                return Err(CipherError::Malformed);
            }
            let (signed, tag) = token.split_at(token.len() - TAG_LEN);
            let mut mac = self.mac()?;
            mac.update(signed);
            mac.verify_slice(tag).map_err(|_| CipherError::Signature)?;

            let ciphertext = &signed[HEADER_LEN..];
            if ciphertext.len() % BLOCK_LEN != 0 {
                return Err(CipherError::Malformed);
            }
            let mut iv = [0u8; 16];
            iv.copy_from_slice(&signed[9..HEADER_LEN]);
            Aes128CbcDec::new(&self.encryption_key.into(), &iv.into())
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| CipherError::Padding)
        }
    }
}

#[cfg(not(feature = "encryption"))]
mod fernet {
    use super::CipherError;

    /// Encryption is compiled out; no cipher can exist.
    #[derive(Debug, Clone)]
    pub enum Cipher {}

    impl Cipher {
        #[must_use]
        pub fn from_passphrase(_passphrase: &str) -> Option<Self> {
            None
        }

        /// # Errors
        ///
        /// Never returns; the type is uninhabited.
        pub fn seal(&self, _plaintext: &[u8]) -> Result<String, CipherError> {
            match *self {}
        }

        /// # Errors
        ///
        /// Never returns; the type is uninhabited.
        pub fn open(&self, _token: &[u8]) -> Result<Vec<u8>, CipherError> {
            match *self {}
        }
    }
}

pub use fernet::Cipher;
