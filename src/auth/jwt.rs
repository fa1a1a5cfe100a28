use crate::models::{Claims, TokenType};
use jsonwebtoken::{DecodingKey, Validation, decode};

/// Decode and validate an access token. Refresh tokens are rejected.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())?;

    if claims.token_type != TokenType::Access {
        return Err("Access token required".to_string());
    }

    Ok(claims)
}

/// Tokens are issued by the login service; tests mint their own.
#[cfg(test)]
pub fn generate_access_token(
    user_id: &str,
    email: &str,
    role: crate::model::role::Role,
    company_id: &str,
    secret: &str,
    ttl: usize,
) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        user_id: user_id.to_string(),
        sub: email.to_string(),
        role: role as u8,
        company_id: company_id.to_string(),
        exp: now + ttl,
        jti: uuid::Uuid::new_v4().to_string(),
        token_type: TokenType::Access,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::Role;

    #[test]
    fn round_trips_claims() {
        let token = generate_access_token("S1", "sup@example.com", Role::Supervisor, "C1", "k", 60);
        let claims = verify_token(&token, "k").unwrap();
        assert_eq!(claims.user_id, "S1");
        assert_eq!(claims.company_id, "C1");
        assert_eq!(claims.role, 2);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_access_token("O1", "owner@example.com", Role::Owner, "C1", "k", 60);
        assert!(verify_token(&token, "other").is_err());
    }
}
