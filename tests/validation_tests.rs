/// Unit tests for client-side argument validation.
use tokopay_sdk::validation::*;
use tokopay_sdk::{ErrorCode, PaymentMethod};

#[test]
fn test_positive_amounts_pass() {
    for amount in [0.01, 1.0, 100.0, 10_000.5, 1e12] {
        assert!(validate_amount(amount).is_ok(), "{amount} should pass");
    }
}

#[test]
fn test_non_positive_and_non_finite_amounts_fail() {
    for amount in [0.0, -0.0, -1.0, -1e9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = validate_amount(amount).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError, "{amount} should fail");
        assert_eq!(err.message, "Invalid amount. Amount must be a positive number");
    }
}

#[test]
fn test_ref_id() {
    assert!(validate_ref_id("INV-1").is_ok());
    assert!(validate_ref_id(" ").is_ok());

    let err = validate_ref_id("").unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);
    assert_eq!(
        err.message,
        "Invalid reference ID. Reference ID must be a non-empty string"
    );
}

#[test]
fn test_every_known_payment_method_parses() {
    for method in PaymentMethod::ALL {
        assert_eq!(validate_payment_method(method.code()).unwrap(), method);
    }
    assert_eq!(
        validate_payment_method("QRIS_REALTIME_NOBU").unwrap(),
        PaymentMethod::QrisRealtimeNobu
    );
}

#[test]
fn test_unknown_payment_methods_fail_and_list_valid_set() {
    for method in ["OVO", "gopay", "", "BRI VA", "QRIS "] {
        let err = validate_payment_method(method).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("Invalid payment method. Valid methods are: "));
        for valid in PaymentMethod::ALL {
            assert!(err.message.contains(valid.code()));
        }
    }
}

#[test]
fn test_valid_codes_list_is_complete_and_ordered() {
    assert_eq!(
        PaymentMethod::valid_codes(),
        "BRIVA, BCAVA, BNIVA, MANDIRIVA, PERMATAVA, PERMATAVAA, CIMBVA, DANAMONVA, \
         BSIVA, BNCVA, TELKOMSEL, AXIS, XL, TRI, SHOPEEPAY, GOPAY, DANA, LINKAJA, \
         QRIS, QRISREALTIME, QRIS_REALTIME_NOBU"
    );
}

#[test]
fn test_customer_fields() {
    assert!(validate_customer("John Doe", "john@example.com").is_ok());

    for (name, email) in [("", "john@example.com"), ("John Doe", ""), ("", "")] {
        let err = validate_customer(name, email).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Customer name and email are required");
    }
}
