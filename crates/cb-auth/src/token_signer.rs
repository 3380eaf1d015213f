use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Signed envelope over [`Claims`]: issue on login/signup, verify on every
/// protected request. HS256 with a process-wide secret.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp/nbf; presence of a valid signature is the
        // whole credential.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Encode and sign the claims. Deterministic for identical claims and
    /// secret.
    #[track_caller]
    pub fn issue(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|source| {
            AuthError::TokenEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return its claims. Total: missing, malformed,
    /// or wrongly-signed input yields `None`, never an error.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let data = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("Rejected login token: {}", e);
                return None;
            }
        };

        if let Err(e) = data.claims.validate() {
            log::debug!("Rejected login token claims: {}", e);
            return None;
        }

        Some(data.claims)
    }
}
