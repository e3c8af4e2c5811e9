use serde::{Deserialize, Serialize};

/// Basic information about an invoice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    /// Total price in the smallest units of the currency.
    pub total_amount: i64,
}

impl Invoice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_parameter: impl Into<String>,
        currency: impl Into<String>,
        total_amount: i64,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_parameter: start_parameter.into(),
            currency: currency.into(),
            total_amount,
        }
    }
}
