//! Display Formatting
//!
//! pt-BR currency and date rendering shared by the browser and terminal
//! front ends.

use chrono::NaiveDate;

/// Format a value as Brazilian reais, e.g. `R$ 1.234,56` or `-R$ 50,00`.
///
/// Non-finite input renders as zero.
pub fn currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let negative = value < 0.0 && cents > 0;

    let reais = group_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, reais, cents % 100)
}

/// Format a calendar date as `dd/mm/yyyy`
pub fn date(value: NaiveDate) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Odds as the plain decimal the server sent (`2.5`, `1.85`)
pub fn odd(value: f64) -> String {
    format!("{}", value)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_basic() {
        assert_eq!(currency(250.0), "R$ 250,00");
        assert_eq!(currency(0.0), "R$ 0,00");
        assert_eq!(currency(0.5), "R$ 0,50");
    }

    #[test]
    fn test_currency_thousands() {
        assert_eq!(currency(1234.56), "R$ 1.234,56");
        assert_eq!(currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(currency(1000.0), "R$ 1.000,00");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(currency(-50.0), "-R$ 50,00");
        assert_eq!(currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_currency_rounding() {
        assert_eq!(currency(2.005 * 100.0), "R$ 200,50");
        assert_eq!(currency(19.999), "R$ 20,00");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(currency(f64::NAN), "R$ 0,00");
        assert_eq!(currency(f64::INFINITY), "R$ 0,00");
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date(d), "05/03/2024");
    }

    #[test]
    fn test_odd() {
        assert_eq!(odd(2.5), "2.5");
        assert_eq!(odd(3.0), "3");
    }
}
