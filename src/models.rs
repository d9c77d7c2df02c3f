/// Data models for Tokopay API payloads.
///
/// Response models are lenient: every field is optional and numeric fields
/// accept either JSON numbers or numeric strings, since the gateway is not
/// consistent about either.
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::TokopayError;

/// Deserialize an optional value that may be a JSON number or a numeric string.
/// Values that are neither decode as `None` rather than failing the payload.
fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(n) => Ok(Some(n)),
            Err(e) => {
                debug!("models.number unparseable value={:?} error={}", s, e);
                Ok(None)
            }
        },
        Some(serde_json::Value::Null) | None => Ok(None),
        Some(v) => {
            debug!("models.number unexpected value={}", v);
            Ok(None)
        }
    }
}

/// Deserialize a payment status; anything that is not a known label is `Unknown`.
fn deserialize_optional_payment_status<'de, D>(
    deserializer: D,
) -> Result<Option<PaymentStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Null) | None => None,
        Some(v) => Some(serde_json::from_value(v).unwrap_or(PaymentStatus::Unknown)),
    })
}

/// Deserialize an optional value that may be a JSON string or number, storing as String.
fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Null) | None => Ok(None),
        Some(v) => Ok(Some(v.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Payment Method
// ---------------------------------------------------------------------------

/// Payment channel codes accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "BRIVA")]
    Briva,
    #[serde(rename = "BCAVA")]
    Bcava,
    #[serde(rename = "BNIVA")]
    Bniva,
    #[serde(rename = "MANDIRIVA")]
    Mandiriva,
    #[serde(rename = "PERMATAVA")]
    Permatava,
    #[serde(rename = "PERMATAVAA")]
    Permatavaa,
    #[serde(rename = "CIMBVA")]
    Cimbva,
    #[serde(rename = "DANAMONVA")]
    Danamonva,
    #[serde(rename = "BSIVA")]
    Bsiva,
    #[serde(rename = "BNCVA")]
    Bncva,
    #[serde(rename = "TELKOMSEL")]
    Telkomsel,
    #[serde(rename = "AXIS")]
    Axis,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "TRI")]
    Tri,
    #[serde(rename = "SHOPEEPAY")]
    Shopeepay,
    #[serde(rename = "GOPAY")]
    Gopay,
    #[serde(rename = "DANA")]
    Dana,
    #[serde(rename = "LINKAJA")]
    Linkaja,
    #[serde(rename = "QRIS")]
    Qris,
    #[serde(rename = "QRISREALTIME")]
    QrisRealtime,
    #[serde(rename = "QRIS_REALTIME_NOBU")]
    QrisRealtimeNobu,
}

impl PaymentMethod {
    /// Every channel code, in the order the gateway documents them.
    pub const ALL: [PaymentMethod; 21] = [
        PaymentMethod::Briva,
        PaymentMethod::Bcava,
        PaymentMethod::Bniva,
        PaymentMethod::Mandiriva,
        PaymentMethod::Permatava,
        PaymentMethod::Permatavaa,
        PaymentMethod::Cimbva,
        PaymentMethod::Danamonva,
        PaymentMethod::Bsiva,
        PaymentMethod::Bncva,
        PaymentMethod::Telkomsel,
        PaymentMethod::Axis,
        PaymentMethod::Xl,
        PaymentMethod::Tri,
        PaymentMethod::Shopeepay,
        PaymentMethod::Gopay,
        PaymentMethod::Dana,
        PaymentMethod::Linkaja,
        PaymentMethod::Qris,
        PaymentMethod::QrisRealtime,
        PaymentMethod::QrisRealtimeNobu,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Briva => "BRIVA",
            PaymentMethod::Bcava => "BCAVA",
            PaymentMethod::Bniva => "BNIVA",
            PaymentMethod::Mandiriva => "MANDIRIVA",
            PaymentMethod::Permatava => "PERMATAVA",
            PaymentMethod::Permatavaa => "PERMATAVAA",
            PaymentMethod::Cimbva => "CIMBVA",
            PaymentMethod::Danamonva => "DANAMONVA",
            PaymentMethod::Bsiva => "BSIVA",
            PaymentMethod::Bncva => "BNCVA",
            PaymentMethod::Telkomsel => "TELKOMSEL",
            PaymentMethod::Axis => "AXIS",
            PaymentMethod::Xl => "XL",
            PaymentMethod::Tri => "TRI",
            PaymentMethod::Shopeepay => "SHOPEEPAY",
            PaymentMethod::Gopay => "GOPAY",
            PaymentMethod::Dana => "DANA",
            PaymentMethod::Linkaja => "LINKAJA",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::QrisRealtime => "QRISREALTIME",
            PaymentMethod::QrisRealtimeNobu => "QRIS_REALTIME_NOBU",
        }
    }

    /// Comma-separated list of every code, used in validation messages.
    pub fn valid_codes() -> String {
        PaymentMethod::ALL
            .iter()
            .map(PaymentMethod::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = TokopayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| {
                TokopayError::validation(format!(
                    "Invalid payment method. Valid methods are: {}",
                    PaymentMethod::valid_codes()
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Payment state reported for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Expired,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A line item attached to a full order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_code: String,
    pub name: String,
    #[serde(serialize_with = "crate::encoding::serialize_amount")]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Parameters for [`TokopayClient::create_order`](crate::TokopayClient::create_order).
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    /// Payment channel code, validated against [`PaymentMethod`].
    pub kode_channel: String,
    pub ref_id: String,
    pub amount: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub redirect_url: Option<String>,
    /// Unix expiry timestamp; 0 lets the gateway pick its default.
    pub expired_ts: u64,
    pub items: Option<Vec<OrderItem>>,
}

impl CreateOrderParams {
    pub fn new(
        kode_channel: impl Into<String>,
        ref_id: impl Into<String>,
        amount: f64,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            kode_channel: kode_channel.into(),
            ref_id: ref_id.into(),
            amount,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: None,
            redirect_url: None,
            expired_ts: 0,
            items: None,
        }
    }

    pub fn customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn expired_ts(mut self, ts: u64) -> Self {
        self.expired_ts = ts;
        self
    }

    pub fn items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = Some(items);
        self
    }
}

/// `data` of GET /v1/order when checking an existing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatus {
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub trx_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_payment_status")]
    pub status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub pay_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub qr_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub qr_string: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub panduan_pembayaran: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub other: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub total_bayar: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub total_diterima: Option<f64>,
}

/// `data` of order creation, retry and cancel calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreated {
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub trx_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub pay_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub nomor_va: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub qr_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub qr_string: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub panduan_pembayaran: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub total_bayar: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub total_diterima: Option<f64>,
}

// ---------------------------------------------------------------------------
// Merchant
// ---------------------------------------------------------------------------

/// `data` of GET /v1/merchant/balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantInfo {
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub merchant_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub nama_toko: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub saldo_tersedia: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub saldo_tertahan: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub balance: Option<f64>,
}

/// `data` of POST /v1/merchant/tarik-saldo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Withdrawal {
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub transaction_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub fee: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub total: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payment_method_serde_matches_codes() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_value(method).unwrap();
            assert_eq!(json, json!(method.code()));
        }
    }

    #[test]
    fn unknown_payment_status_falls_back() {
        let status: PaymentStatus = serde_json::from_value(json!("Refunded")).unwrap();
        assert_eq!(status, PaymentStatus::Unknown);
        let status: PaymentStatus = serde_json::from_value(json!("Paid")).unwrap();
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn numbers_accept_strings() {
        let w: Withdrawal = serde_json::from_value(json!({
            "transaction_id": 991,
            "amount": "50000",
            "fee": 2500,
            "total": null
        }))
        .unwrap();
        assert_eq!(w.transaction_id.as_deref(), Some("991"));
        assert_eq!(w.amount, Some(50000.0));
        assert_eq!(w.fee, Some(2500.0));
        assert_eq!(w.total, None);
    }

    #[test]
    fn non_numeric_values_decode_as_none() {
        let w: Withdrawal =
            serde_json::from_value(json!({ "amount": "lots", "fee": [1], "total": true })).unwrap();
        assert_eq!(w.amount, None);
        assert_eq!(w.fee, None);
        assert_eq!(w.total, None);
    }

    #[test]
    fn string_fields_accept_numbers_and_odd_statuses() {
        let status: OrderStatus = serde_json::from_value(json!({
            "trx_id": 123,
            "pay_url": null,
            "status": 2,
            "other": false
        }))
        .unwrap();
        assert_eq!(status.trx_id.as_deref(), Some("123"));
        assert_eq!(status.pay_url, None);
        assert_eq!(status.status, Some(PaymentStatus::Unknown));
        assert_eq!(status.other.as_deref(), Some("false"));
    }

    #[test]
    fn order_item_omits_unset_urls() {
        let item = OrderItem {
            product_code: "SKU-1".into(),
            name: "Test Product".into(),
            price: 15000.0,
            product_url: None,
            image_url: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], json!(15000));
        assert!(json.get("product_url").is_none());
        assert!(json.get("image_url").is_none());
    }
}
