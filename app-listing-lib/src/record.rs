//! The application record read from the input JSON array.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an application on the listing site.
///
/// Input files use either strings or numbers. Strings are used verbatim;
/// numbers are written in their shortest decimal form, so `1e3` becomes
/// `1000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppId::Number(number) => write_number(number, f),
            AppId::Text(text) => f.write_str(text),
        }
    }
}

/// Integral values below 1e21 print without a fraction; larger magnitudes
/// use exponent notation with an explicit sign (`1e+21`).
fn write_number(number: &serde_json::Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_u64() || number.is_i64() {
        return write!(f, "{number}");
    }

    let Some(value) = number.as_f64() else {
        return write!(f, "{number}");
    };

    if value.abs() >= 1e21 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&text),
        };
    }

    if value.fract() == 0.0 {
        write!(f, "{value:.0}")
    } else {
        write!(f, "{value}")
    }
}

impl From<u64> for AppId {
    fn from(value: u64) -> Self {
        AppId::Number(value.into())
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        AppId::Text(value.to_string())
    }
}

/// One application's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub id: AppId,
    pub name: String,
    pub description: String,
    pub app_store_link: String,
}
