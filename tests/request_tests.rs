/// Unit tests for request construction.
///
/// Field names and paths are the gateway's wire contract; these tests pin
/// them per endpoint, including the spots where the gateway is inconsistent.
use serde_json::json;
use tokopay_sdk::api::*;
use tokopay_sdk::encoding::{amount_json_value, amount_query_value};
use tokopay_sdk::{sign, CreateOrderParams, Credentials, OrderItem, PaymentMethod};

const BASE: &str = "https://api.tokopay.id";

fn creds() -> Credentials {
    Credentials::new("M123", "secret").unwrap()
}

#[test]
fn test_endpoint_methods_and_paths() {
    let cases = [
        (Endpoint::MerchantBalance, HttpMethod::Get, "/v1/merchant/balance"),
        (Endpoint::OrderQuery, HttpMethod::Get, "/v1/order"),
        (Endpoint::CreateOrder, HttpMethod::Post, "/v1/order"),
        (Endpoint::TarikSaldo, HttpMethod::Post, "/v1/merchant/tarik-saldo"),
        (Endpoint::RetryOrder, HttpMethod::Post, "/v1/order/retry"),
        (Endpoint::CancelOrder, HttpMethod::Post, "/v1/order/cancel"),
    ];
    for (endpoint, method, path) in cases {
        assert_eq!(endpoint.method(), method);
        assert_eq!(endpoint.path(), path);
    }
}

#[test]
fn test_merchant_balance_query() {
    let req = merchant_balance(BASE, &creds());
    assert_eq!(req.method(), HttpMethod::Get);
    assert_eq!(req.url, "https://api.tokopay.id/v1/merchant/balance");
    assert_eq!(
        req.params,
        Params::Query(vec![
            ("merchant", "M123".to_string()),
            ("signature", sign("M123", "secret", None)),
        ])
    );
    assert!(req.query_param("secret").is_none());
}

#[test]
fn test_order_query_uses_raw_secret_and_ref_id() {
    let req = order_query(BASE, &creds(), "INV-1", PaymentMethod::Gopay, 100.0);
    assert_eq!(req.url, "https://api.tokopay.id/v1/order");
    assert_eq!(req.query_param("merchant"), Some("M123"));
    assert_eq!(req.query_param("secret"), Some("secret"));
    assert_eq!(req.query_param("ref_id"), Some("INV-1"));
    assert_eq!(req.query_param("nominal"), Some("100"));
    assert_eq!(req.query_param("metode"), Some("GOPAY"));
    assert!(req.query_param("signature").is_none());
    assert!(req.body().is_none());
}

#[test]
fn test_create_order_body_minimal() {
    let params = CreateOrderParams::new("DANA", "INV-2", 15000.0, "John Doe", "john@example.com");
    let req = create_order(BASE, &creds(), &params, PaymentMethod::Dana).unwrap();
    assert_eq!(req.method(), HttpMethod::Post);
    assert_eq!(req.url, "https://api.tokopay.id/v1/order");
    assert_eq!(
        req.body().unwrap(),
        &json!({
            "merchant_id": "M123",
            "kode_channel": "DANA",
            "reff_id": "INV-2",
            "amount": 15000,
            "customer_name": "John Doe",
            "customer_email": "john@example.com",
            "expired_ts": 0,
            "signature": sign("M123", "secret", Some("INV-2")),
        })
    );
}

#[test]
fn test_create_order_body_with_optionals() {
    let params = CreateOrderParams::new("BRIVA", "INV-3", 25000.5, "Jane", "jane@example.com")
        .customer_phone("081234567890")
        .redirect_url("https://shop.example.com/callback")
        .expired_ts(1_700_000_000)
        .items(vec![OrderItem {
            product_code: "SKU-1".into(),
            name: "Test Product".into(),
            price: 25000.5,
            product_url: Some("https://shop.example.com/p/1".into()),
            image_url: None,
        }]);
    let req = create_order(BASE, &creds(), &params, PaymentMethod::Briva).unwrap();
    let body = req.body().unwrap();
    assert_eq!(body["amount"], json!(25000.5));
    assert_eq!(body["customer_phone"], json!("081234567890"));
    assert_eq!(body["redirect_url"], json!("https://shop.example.com/callback"));
    assert_eq!(body["expired_ts"], json!(1_700_000_000u64));
    assert_eq!(
        body["items"],
        json!([{
            "product_code": "SKU-1",
            "name": "Test Product",
            "price": 25000.5,
            "product_url": "https://shop.example.com/p/1",
        }])
    );
    assert!(body.get("ref_id").is_none());
}

#[test]
fn test_tarik_saldo_body() {
    let req = tarik_saldo(BASE, &creds(), 50000.0);
    assert_eq!(req.url, "https://api.tokopay.id/v1/merchant/tarik-saldo");
    assert_eq!(
        req.body().unwrap(),
        &json!({
            "nominal": 50000,
            "merchant_id": "M123",
            "signature": sign("M123", "secret", None),
        })
    );
}

#[test]
fn test_retry_and_cancel_bodies() {
    let expected = json!({
        "merchant_id": "M123",
        "ref_id": "INV-9",
        "signature": sign("M123", "secret", Some("INV-9")),
    });

    let retry = retry_order(BASE, &creds(), "INV-9");
    assert_eq!(retry.url, "https://api.tokopay.id/v1/order/retry");
    assert_eq!(retry.body().unwrap(), &expected);

    let cancel = cancel_order(BASE, &creds(), "INV-9");
    assert_eq!(cancel.url, "https://api.tokopay.id/v1/order/cancel");
    assert_eq!(cancel.body().unwrap(), &expected);
}

#[test]
fn test_debug_output_redacts_secret() {
    let creds = Credentials::new("M123", "very-secret").unwrap();
    let req = order_query(BASE, &creds, "INV-1", PaymentMethod::Qris, 100.0);
    let debug = format!("{req:?}");
    assert!(debug.contains("INV-1"));
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("very-secret"));
    // The real request still carries it.
    assert_eq!(req.query_param("secret"), Some("very-secret"));
}

#[test]
fn test_debug_output_redacts_signatures() {
    let creds = Credentials::new("M123", "very-secret").unwrap();
    let plain = sign("M123", "very-secret", None);
    let with_ref = sign("M123", "very-secret", Some("INV-1"));

    let balance = merchant_balance(BASE, &creds);
    let debug = format!("{balance:?}");
    assert!(!debug.contains(&plain));
    assert!(debug.contains("<redacted>"));
    assert_eq!(balance.query_param("signature"), Some(plain.as_str()));

    let withdrawal = tarik_saldo(BASE, &creds, 50000.0);
    let debug = format!("{withdrawal:?}");
    assert!(!debug.contains(&plain));
    assert!(debug.contains("M123"));
    assert_eq!(withdrawal.body().unwrap()["signature"], json!(plain));

    for req in [
        retry_order(BASE, &creds, "INV-1"),
        cancel_order(BASE, &creds, "INV-1"),
        create_order(
            BASE,
            &creds,
            &CreateOrderParams::new("DANA", "INV-1", 100.0, "John", "john@example.com"),
            PaymentMethod::Dana,
        )
        .unwrap(),
    ] {
        let debug = format!("{req:?}");
        assert!(!debug.contains(&with_ref), "{debug}");
        assert!(debug.contains("INV-1"));
    }
}

#[test]
fn test_amount_encoding() {
    assert_eq!(amount_query_value(100.0), "100");
    assert_eq!(amount_query_value(10_000.0), "10000");
    assert_eq!(amount_query_value(99.5), "99.5");
    assert_eq!(amount_json_value(100.0), json!(100));
    assert_eq!(amount_json_value(0.25), json!(0.25));
}
