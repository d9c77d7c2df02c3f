/// Client-side argument checks, run before signing or any network activity.
use crate::errors::TokopayError;
use crate::models::PaymentMethod;

/// Amount must be finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<(), TokopayError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TokopayError::validation(
            "Invalid amount. Amount must be a positive number",
        ));
    }
    Ok(())
}

pub fn validate_ref_id(ref_id: &str) -> Result<(), TokopayError> {
    if ref_id.is_empty() {
        return Err(TokopayError::validation(
            "Invalid reference ID. Reference ID must be a non-empty string",
        ));
    }
    Ok(())
}

/// Resolve a channel code; the error message lists every valid code.
pub fn validate_payment_method(method: &str) -> Result<PaymentMethod, TokopayError> {
    method.parse()
}

pub fn validate_customer(name: &str, email: &str) -> Result<(), TokopayError> {
    if name.is_empty() || email.is_empty() {
        return Err(TokopayError::validation(
            "Customer name and email are required",
        ));
    }
    Ok(())
}
