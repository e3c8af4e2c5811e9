use serde::{Deserialize, Serialize};

/// Confirmation of a completed payment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

natural_key!(SuccessfulPayment => telegram_payment_charge_id);

impl SuccessfulPayment {
    pub fn new(
        currency: impl Into<String>,
        total_amount: i64,
        invoice_payload: impl Into<String>,
        telegram_payment_charge_id: impl Into<String>,
        provider_payment_charge_id: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            total_amount,
            invoice_payload: invoice_payload.into(),
            telegram_payment_charge_id: telegram_payment_charge_id.into(),
            provider_payment_charge_id: provider_payment_charge_id.into(),
        }
    }
}
