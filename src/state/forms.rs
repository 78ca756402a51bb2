//! Form State
//!
//! Raw input values as the user typed them. Nothing here is trusted until
//! [`BetForm::to_payload`] has parsed it.

use chrono::NaiveDate;
use thiserror::Error;

use crate::format;
use crate::model::{predicted_total, Aposta, ApostaPayload, LoginRequest, RegisterRequest};

/// Client-side parse failures, surfaced before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("Valor inválido para {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Inputs of the create and edit forms
#[derive(Debug, Clone, PartialEq)]
pub struct BetForm {
    /// `YYYY-MM-DD`, as produced by a date input
    pub data: String,
    pub entrada: String,
    pub odd: String,
    pub valor_final: String,
}

impl BetForm {
    /// Blank entry form: today's date, zero final value
    pub fn new(today: NaiveDate) -> Self {
        Self {
            data: today.format("%Y-%m-%d").to_string(),
            entrada: String::new(),
            odd: String::new(),
            valor_final: "0".to_string(),
        }
    }

    /// Edit form pre-filled from a cached record
    pub fn from_aposta(aposta: &Aposta) -> Self {
        Self {
            data: aposta.data.format("%Y-%m-%d").to_string(),
            entrada: aposta.entrada.to_string(),
            odd: aposta.odd.to_string(),
            valor_final: aposta.valor_final.to_string(),
        }
    }

    /// Stake × odds for the live preview. Unparseable inputs count as zero.
    pub fn preview_total(&self) -> f64 {
        let entrada = parse_decimal(&self.entrada).unwrap_or(0.0);
        let odd = parse_decimal(&self.odd).unwrap_or(0.0);
        predicted_total(entrada, odd)
    }

    pub fn preview_label(&self) -> String {
        format::currency(self.preview_total())
    }

    pub fn to_payload(&self) -> Result<ApostaPayload, FormError> {
        let data = NaiveDate::parse_from_str(self.data.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.data.clone()))?;

        let entrada = parse_decimal(&self.entrada).ok_or_else(|| FormError::InvalidNumber {
            field: "entrada",
            value: self.entrada.clone(),
        })?;

        let odd = parse_decimal(&self.odd).ok_or_else(|| FormError::InvalidNumber {
            field: "odd",
            value: self.odd.clone(),
        })?;

        let valor_final = if self.valor_final.trim().is_empty() {
            0.0
        } else {
            parse_decimal(&self.valor_final).ok_or_else(|| FormError::InvalidNumber {
                field: "valor final",
                value: self.valor_final.clone(),
            })?
        };

        Ok(ApostaPayload {
            data,
            entrada,
            odd,
            valor_final,
        })
    }
}

/// Parse a decimal typed by a user; accepts `,` as the decimal separator
pub fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
