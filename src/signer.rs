use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{Result, WowError};

type HmacSha1 = Hmac<Sha1>;

/// Fixed signature emitted by [`SignatureMode::Placeholder`]
const PLACEHOLDER_SIGNATURE: &[u8] = b"hi";

/// How the request signature is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMode {
    /// Base64 HMAC-SHA1 over the string to sign
    #[default]
    Hmac,
    /// Always the base64 of a fixed string, reproducing older clients that
    /// never sent a valid signature. Only useful for replaying recorded traffic.
    Placeholder,
}

/// Credentials represent an application's public key and shared secret
/// used to sign requests.
#[derive(Clone)]
pub struct Credentials {
    /// Public key sent in clear in the Authorization header
    pub public_key: String,
    secret: String,
    /// Signature production mode
    pub mode: SignatureMode,
}

impl Credentials {
    /// Create new Credentials from a public key and its shared secret
    pub fn new(public_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            public_key: public_key.into(),
            secret: secret.into(),
            mode: SignatureMode::default(),
        }
    }

    /// Set the signature mode
    pub fn with_mode(mut self, mode: SignatureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether a secret is configured; requests are only signed when it is
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Build the string covered by the signature
    ///
    /// # Arguments
    /// * `verb` - HTTP method (GET)
    /// * `date` - HTTP date also sent in the Date header
    /// * `path` - URL path, starting with `/api/wow/`
    pub fn string_to_sign(verb: &str, date: &str, path: &str) -> String {
        [verb, date, path, ""].join("\n")
    }

    /// Generate the base64 signature for a request
    pub fn signature(&self, verb: &str, date: &str, path: &str) -> Result<String> {
        match self.mode {
            SignatureMode::Placeholder => Ok(STANDARD.encode(PLACEHOLDER_SIGNATURE)),
            SignatureMode::Hmac => {
                let to_sign = Self::string_to_sign(verb, date, path);
                tracing::trace!(len = to_sign.len(), "signing request");

                let mut mac = HmacSha1::new_from_slice(self.secret.as_bytes())
                    .map_err(|e| WowError::Signing(e.to_string()))?;
                mac.update(to_sign.as_bytes());
                Ok(STANDARD.encode(mac.finalize().into_bytes()))
            }
        }
    }

    /// Format the Authorization header value for a signature
    pub fn authorization(&self, signature: &str) -> String {
        format!("BNET {}:{}", self.public_key, signature)
    }

    /// Sign a request and return the full Authorization header value
    pub fn authorize(&self, verb: &str, date: &str, path: &str) -> Result<String> {
        let signature = self.signature(verb, date, path)?;
        Ok(self.authorization(&signature))
    }
}

// Implement Debug manually to avoid exposing the secret
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret", &"<redacted>")
            .field("mode", &self.mode)
            .finish()
    }
}
