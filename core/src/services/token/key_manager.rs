//! RS256 key management for JWT signing and verification

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};
use tg_shared::JwtConfig;

use crate::errors::TokenError;

/// PEM private key compiled into the binary for development and tests
pub const EMBEDDED_PRIVATE_KEY_PEM: &str = include_str!("../../../keys/jwt_private_key.pem");

/// PEM public key matching [`EMBEDDED_PRIVATE_KEY_PEM`]
pub const EMBEDDED_PUBLIC_KEY_PEM: &str = include_str!("../../../keys/jwt_public_key.pem");

#[derive(Debug, Clone, PartialEq, Eq)]
enum KeySource {
    Embedded,
    Files { private: PathBuf, public: PathBuf },
    Memory,
}

/// Holder of the one RS256 key pair used for the service's lifetime
///
/// Keys are parsed once at construction. There is no rotation or reload.
#[derive(Clone)]
pub struct Rs256KeyManager {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: DecodingKey,
    source: KeySource,
}

impl std::fmt::Debug for Rs256KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rs256KeyManager")
            .field("source", &self.source)
            .finish()
    }
}

impl Rs256KeyManager {
    /// Loads the key pair compiled in from `core/keys/`
    pub fn embedded() -> Result<Self, TokenError> {
        let mut manager = Self::from_pem_strings(EMBEDDED_PRIVATE_KEY_PEM, EMBEDDED_PUBLIC_KEY_PEM)?;
        manager.source = KeySource::Embedded;
        Ok(manager)
    }

    /// Creates a new RS256 key manager from key file paths
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded private key file
    /// * `public_key_path` - Path to the PEM-encoded public key file
    ///
    /// # Returns
    ///
    /// * `Ok(Rs256KeyManager)` - Key manager initialized successfully
    /// * `Err(TokenError::Configuration)` - A file is unreadable or not a valid RSA PEM key
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tg_core::services::token::Rs256KeyManager;
    ///
    /// let key_manager = Rs256KeyManager::from_files(
    ///     "core/keys/jwt_private_key.pem",
    ///     "core/keys/jwt_public_key.pem",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn from_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, TokenError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = fs::read(&private_key_path).map_err(|e| TokenError::Configuration {
            message: format!("Failed to read private key {}: {}", private_key_path.display(), e),
        })?;

        let public_key_pem = fs::read(&public_key_path).map_err(|e| TokenError::Configuration {
            message: format!("Failed to read public key {}: {}", public_key_path.display(), e),
        })?;

        let (encoding_key, decoding_key) = Self::parse(&private_key_pem, &public_key_pem)?;

        Ok(Self {
            encoding_key,
            decoding_key,
            source: KeySource::Files {
                private: private_key_path,
                public: public_key_path,
            },
        })
    }

    /// Creates a key manager from PEM strings
    pub fn from_pem_strings(private_key_pem: &str, public_key_pem: &str) -> Result<Self, TokenError> {
        let (encoding_key, decoding_key) =
            Self::parse(private_key_pem.as_bytes(), public_key_pem.as_bytes())?;

        Ok(Self {
            encoding_key,
            decoding_key,
            source: KeySource::Memory,
        })
    }

    /// Key files when both paths are configured, the embedded pair otherwise
    pub fn from_config(config: &JwtConfig) -> Result<Self, TokenError> {
        match (&config.private_key_path, &config.public_key_path) {
            (Some(private), Some(public)) => Self::from_files(private, public),
            (None, None) => Self::embedded(),
            _ => Err(TokenError::Configuration {
                message: "JWT_PRIVATE_KEY_PATH and JWT_PUBLIC_KEY_PATH must be set together"
                    .to_string(),
            }),
        }
    }

    fn parse(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<(EncodingKey, DecodingKey), TokenError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem).map_err(|e| {
            TokenError::Configuration {
                message: format!("Invalid private key format: {}", e),
            }
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem).map_err(|e| {
            TokenError::Configuration {
                message: format!("Invalid public key format: {}", e),
            }
        })?;

        Ok((encoding_key, decoding_key))
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the paths to the key files, if the keys came from disk
    pub fn key_paths(&self) -> Option<(&Path, &Path)> {
        match &self.source {
            KeySource::Files { private, public } => Some((private.as_path(), public.as_path())),
            _ => None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.source == KeySource::Embedded
    }
}
