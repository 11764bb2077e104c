use serde::Deserialize;

use super::error::TransportError;
use crate::domain::AccountCredit;

const CREDIT_FIELD: &str = "credit";

#[derive(Debug, Clone, Deserialize)]
struct CreditJsonResponse {
    #[serde(default)]
    credit: Option<serde_json::Value>,
}

/// Decode `{"credit": number}`; numeric strings are accepted as well.
pub fn decode_credit_json_response(json: &str) -> Result<AccountCredit, TransportError> {
    let parsed: CreditJsonResponse = serde_json::from_str(json)?;
    let value = match parsed.credit {
        None | Some(serde_json::Value::Null) => {
            return Err(TransportError::MissingField {
                field: CREDIT_FIELD,
            });
        }
        Some(value) => value,
    };

    let credit = match &value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match credit {
        Some(credit) if credit.is_finite() && credit >= 0.0 => Ok(AccountCredit { credit }),
        _ => Err(TransportError::InvalidAmount {
            field: CREDIT_FIELD,
            value: value.to_string(),
        }),
    }
}
