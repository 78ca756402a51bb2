//! Domain Types
//!
//! Wire-level records exchanged with the apostas API. The server owns every
//! record; the client only deserializes what it is sent and serializes the
//! editable subset back.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned bet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApostaId(pub i64);

impl fmt::Display for ApostaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Authenticated user as returned by login and profile
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One ledger entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Aposta {
    pub id: ApostaId,
    /// Calendar date of the bet, no time component
    pub data: NaiveDate,
    /// Stake
    pub entrada: f64,
    /// Odds multiplier
    pub odd: f64,
    /// Stake × odds, computed by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_previsto: f64,
    /// Settled value (signed), `null` while unsettled
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_final: f64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Server-computed aggregate over the current user's bets
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Resumo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_investido: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_retorno_bruto: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_retorno_liquido: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_previsto: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantidade_apostas: u64,
}

/// Body for create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApostaPayload {
    pub data: NaiveDate,
    pub entrada: f64,
    pub odd: f64,
    pub valor_final: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Predicted total shown while the user types
pub fn predicted_total(entrada: f64, odd: f64) -> f64 {
    entrada * odd
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
