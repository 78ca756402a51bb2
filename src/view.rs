//! View Models
//!
//! Pre-formatted, render-ready projections of the ledger and the summary.
//! Both the Leptos components and the terminal client render from these.

use crate::format;
use crate::model::{Aposta, ApostaId, Resumo};

/// Placeholder shown when the ledger is empty
pub const EMPTY_LEDGER_MESSAGE: &str = "Nenhuma aposta cadastrada ainda.";

/// Visual treatment of a signed money figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Summary net return: zero counts as positive
    pub fn net_return(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    /// Ledger row final value: only a strictly positive result is positive
    pub fn settled(value: f64) -> Self {
        if value > 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
        }
    }
}

/// One rendered ledger row
#[derive(Debug, Clone, PartialEq)]
pub struct ApostaRow {
    pub id: ApostaId,
    pub data: String,
    pub entrada: String,
    pub odd: String,
    pub total_previsto: String,
    pub valor_final: String,
    pub valor_final_tone: Tone,
}

impl From<&Aposta> for ApostaRow {
    fn from(aposta: &Aposta) -> Self {
        Self {
            id: aposta.id,
            data: format::date(aposta.data),
            entrada: format::currency(aposta.entrada),
            odd: format::odd(aposta.odd),
            total_previsto: format::currency(aposta.total_previsto),
            valor_final: format::currency(aposta.valor_final),
            valor_final_tone: Tone::settled(aposta.valor_final),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerView {
    Empty(&'static str),
    Rows(Vec<ApostaRow>),
}

impl LedgerView {
    pub fn build(apostas: &[Aposta]) -> Self {
        if apostas.is_empty() {
            LedgerView::Empty(EMPTY_LEDGER_MESSAGE)
        } else {
            LedgerView::Rows(apostas.iter().map(ApostaRow::from).collect())
        }
    }
}

/// The four dashboard figures
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_investido: String,
    pub total_retorno_liquido: String,
    pub retorno_tone: Tone,
    pub total_previsto: String,
    pub quantidade_apostas: String,
}

impl From<&Resumo> for SummaryView {
    fn from(resumo: &Resumo) -> Self {
        Self {
            total_investido: format::currency(resumo.total_investido),
            total_retorno_liquido: format::currency(resumo.total_retorno_liquido),
            retorno_tone: Tone::net_return(resumo.total_retorno_liquido),
            total_previsto: format::currency(resumo.total_previsto),
            quantidade_apostas: resumo.quantidade_apostas.to_string(),
        }
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        SummaryView::from(&Resumo::default())
    }
}
