use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::principal::Principal;

/// Issues and validates signed, stateless tokens.
///
/// Tokens are HS256 JWTs signed with a server-held symmetric secret. The
/// signature covers the whole claim set, so any mutation of the payload
/// invalidates it. Validation order is fixed: structure, then signature,
/// then expiry — timestamps are never trusted before the signature checks
/// out.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity_seconds: i64,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256);
    ///   every replica of the service must hold the same secret
    /// * `validity_seconds` - Fixed validity window applied to issued tokens
    pub fn new(secret: &[u8], validity_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity_seconds,
        }
    }

    /// Issue a signed token for a principal.
    ///
    /// # Errors
    /// * `Signing` - Token could not be signed
    pub fn issue(&self, principal: &Principal) -> Result<String, TokenError> {
        let claims = Claims::for_principal(principal, self.validity_seconds);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate a presented token and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Not a well-formed token (wrong segment count,
    ///   undecodable header or payload)
    /// * `SignatureInvalid` - Signature does not match the claim set
    /// * `Expired` - Signature is valid but the expiry has passed
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is compared explicitly below, after the signature check,
        // with no leeway: a token whose window has elapsed is rejected even
        // one second past exp.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
