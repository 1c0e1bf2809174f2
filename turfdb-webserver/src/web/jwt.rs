use std::{collections::HashSet, time::Duration};

use anyhow::{anyhow, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account id
    pub sub: String,
    pub role: String,
    /// Expiry time as Unix timestamp
    pub exp: u64,
}

struct Key {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Key {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    fn random() -> Self {
        let secret = BASE64.encode(rand::random::<[u8; 32]>());
        Self::new(secret.as_bytes())
    }
}

pub struct JwtState {
    key: Key,
    token_ttl: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(secret: &str, token_ttl: Duration) -> Self {
        Self::with_key(Key::new(secret.as_bytes()), token_ttl)
    }

    pub fn with_random_secret(token_ttl: Duration) -> Self {
        Self::with_key(Key::random(), token_ttl)
    }

    fn with_key(key: Key, token_ttl: Duration) -> Self {
        Self {
            key,
            token_ttl,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, subject: &str, role: &str) -> Result<String> {
        let expires_at = OffsetDateTime::now_utc() + self.token_ttl;
        let claims = Claims {
            sub: subject.to_owned(),
            role: role.to_owned(),
            exp: u64::try_from(expires_at.unix_timestamp())?,
        };
        self.encode(&claims)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        self.decode(token)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn encode(&self, claims: &Claims) -> Result<String> {
        Ok(encode(&Header::default(), claims, &self.key.encoding_key)?)
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens don't need to be blacklisted anymore
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_state() -> JwtState {
        JwtState::new("secret", Duration::from_secs(60))
    }

    #[test]
    fn blacklisting_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("a1", ADMIN_ROLE).unwrap();
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
    }

    #[test]
    fn validation_works() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("a1", ADMIN_ROLE).unwrap();
        let claims = jwt_state.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "a1");
        assert_eq!(claims.role, ADMIN_ROLE);
        jwt_state.blacklist_token(token.clone());
        assert!(jwt_state.validate_token(&token).is_err())
    }

    #[test]
    fn invalid_tokens_are_removed() {
        let jwt_state = jwt_state();
        let token = jwt_state.generate_token("a1", ADMIN_ROLE).unwrap();
        let invalid_token = "dubidubidu".to_string();
        jwt_state.blacklist_token(token.clone());
        jwt_state.blacklist_token(invalid_token.clone());
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(jwt_state.is_on_blacklist(&invalid_token));
        jwt_state.remove_invalid_tokens();
        assert!(jwt_state.is_on_blacklist(&token));
        assert!(!jwt_state.is_on_blacklist(&invalid_token));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let jwt_state = jwt_state();
        let an_hour_ago = OffsetDateTime::now_utc().unix_timestamp() - 3600;
        let token = jwt_state
            .encode(&Claims {
                sub: "a1".into(),
                role: ADMIN_ROLE.into(),
                exp: an_hour_ago as u64,
            })
            .unwrap();
        assert!(jwt_state.validate_token(&token).is_err());
    }

    #[test]
    fn tokens_of_other_secrets_are_rejected() {
        let token = JwtState::new("other", Duration::from_secs(60))
            .generate_token("a1", ADMIN_ROLE)
            .unwrap();
        assert!(jwt_state().validate_token(&token).is_err());
        assert!(JwtState::with_random_secret(Duration::from_secs(60))
            .validate_token(&token)
            .is_err());
    }
}
