use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owner or supervisor id
    pub user_id: String,
    /// Login email
    pub sub: String,
    pub role: u8, // role id
    /// Tenant the user belongs to
    pub company_id: String,
    pub exp: usize,
    pub jti: String,

    pub token_type: TokenType,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub enum TokenType {
    Access,
    Refresh,
}
