/// Request construction for every Tokopay endpoint.
///
/// Builders here are pure: they take already-validated arguments and produce
/// an [`ApiRequest`] that any [`Transport`](crate::transport::Transport) can
/// execute. Field names follow the gateway exactly, including its
/// inconsistencies (`ref_id` vs `reff_id`, `nominal` vs `amount`).
use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::encoding::{amount_json_value, amount_query_value, serialize_amount};
use crate::models::{CreateOrderParams, OrderItem, PaymentMethod};
use crate::signer::Credentials;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote endpoints consumed by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// GET /v1/merchant/balance
    MerchantBalance,
    /// GET /v1/order (status check and simple order share it)
    OrderQuery,
    /// POST /v1/order
    CreateOrder,
    /// POST /v1/merchant/tarik-saldo
    TarikSaldo,
    /// POST /v1/order/retry
    RetryOrder,
    /// POST /v1/order/cancel
    CancelOrder,
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::MerchantBalance | Endpoint::OrderQuery => HttpMethod::Get,
            Endpoint::CreateOrder
            | Endpoint::TarikSaldo
            | Endpoint::RetryOrder
            | Endpoint::CancelOrder => HttpMethod::Post,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::MerchantBalance => "/v1/merchant/balance",
            Endpoint::OrderQuery | Endpoint::CreateOrder => "/v1/order",
            Endpoint::TarikSaldo => "/v1/merchant/tarik-saldo",
            Endpoint::RetryOrder => "/v1/order/retry",
            Endpoint::CancelOrder => "/v1/order/cancel",
        }
    }
}

/// Request parameters: a query string for GET, a JSON body for POST.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    Query(Vec<(&'static str, String)>),
    Json(Value),
}

/// A fully built request, ready for a transport.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub url: String,
    pub params: Params,
}

impl ApiRequest {
    fn new(api_base: &str, endpoint: Endpoint, params: Params) -> Self {
        Self {
            endpoint,
            url: format!("{}{}", api_base, endpoint.path()),
            params,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.endpoint.method()
    }

    /// Value of a query parameter, `None` for body requests.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        match &self.params {
            Params::Query(pairs) => pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
            Params::Json(_) => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match &self.params {
            Params::Json(body) => Some(body),
            Params::Query(_) => None,
        }
    }
}

/// Parameter keys whose values authenticate a request and never reach logs.
const REDACTED_KEYS: [&str; 2] = ["secret", "signature"];
const REDACTED: &str = "<redacted>";

// The raw secret and the replayable signature ride along in requests.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = match &self.params {
            Params::Query(pairs) => Params::Query(
                pairs
                    .iter()
                    .map(|(k, v)| {
                        if REDACTED_KEYS.contains(k) {
                            (*k, REDACTED.to_string())
                        } else {
                            (*k, v.clone())
                        }
                    })
                    .collect(),
            ),
            Params::Json(body) => {
                let mut body = body.clone();
                if let Some(map) = body.as_object_mut() {
                    for key in REDACTED_KEYS {
                        if let Some(value) = map.get_mut(key) {
                            *value = Value::String(REDACTED.to_string());
                        }
                    }
                }
                Params::Json(body)
            }
        };
        f.debug_struct("ApiRequest")
            .field("method", &self.method())
            .field("url", &self.url)
            .field("params", &params)
            .finish()
    }
}

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    merchant_id: &'a str,
    kode_channel: PaymentMethod,
    reff_id: &'a str,
    #[serde(serialize_with = "serialize_amount")]
    amount: f64,
    customer_name: &'a str,
    customer_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    expired_ts: u64,
    signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<&'a [OrderItem]>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// GET /v1/merchant/balance
pub fn merchant_balance(api_base: &str, credentials: &Credentials) -> ApiRequest {
    ApiRequest::new(
        api_base,
        Endpoint::MerchantBalance,
        Params::Query(vec![
            ("merchant", credentials.merchant_id().to_string()),
            ("signature", credentials.signature()),
        ]),
    )
}

/// GET /v1/order. Authenticated with the raw secret, not a signature.
pub fn order_query(
    api_base: &str,
    credentials: &Credentials,
    ref_id: &str,
    method: PaymentMethod,
    nominal: f64,
) -> ApiRequest {
    ApiRequest::new(
        api_base,
        Endpoint::OrderQuery,
        Params::Query(vec![
            ("merchant", credentials.merchant_id().to_string()),
            ("secret", credentials.secret().to_string()),
            ("ref_id", ref_id.to_string()),
            ("nominal", amount_query_value(nominal)),
            ("metode", method.code().to_string()),
        ]),
    )
}

/// POST /v1/order
pub fn create_order(
    api_base: &str,
    credentials: &Credentials,
    params: &CreateOrderParams,
    kode_channel: PaymentMethod,
) -> Result<ApiRequest, serde_json::Error> {
    let body = CreateOrderBody {
        merchant_id: credentials.merchant_id(),
        kode_channel,
        reff_id: &params.ref_id,
        amount: params.amount,
        customer_name: &params.customer_name,
        customer_email: &params.customer_email,
        customer_phone: params.customer_phone.as_deref(),
        redirect_url: params.redirect_url.as_deref(),
        expired_ts: params.expired_ts,
        signature: credentials.signature_for(&params.ref_id),
        items: params.items.as_deref(),
    };
    Ok(ApiRequest::new(
        api_base,
        Endpoint::CreateOrder,
        Params::Json(serde_json::to_value(body)?),
    ))
}

/// POST /v1/merchant/tarik-saldo
pub fn tarik_saldo(api_base: &str, credentials: &Credentials, nominal: f64) -> ApiRequest {
    ApiRequest::new(
        api_base,
        Endpoint::TarikSaldo,
        Params::Json(json!({
            "nominal": amount_json_value(nominal),
            "merchant_id": credentials.merchant_id(),
            "signature": credentials.signature(),
        })),
    )
}

/// POST /v1/order/retry
pub fn retry_order(api_base: &str, credentials: &Credentials, ref_id: &str) -> ApiRequest {
    ApiRequest::new(
        api_base,
        Endpoint::RetryOrder,
        ref_id_body(credentials, ref_id),
    )
}

/// POST /v1/order/cancel
pub fn cancel_order(api_base: &str, credentials: &Credentials, ref_id: &str) -> ApiRequest {
    ApiRequest::new(
        api_base,
        Endpoint::CancelOrder,
        ref_id_body(credentials, ref_id),
    )
}

fn ref_id_body(credentials: &Credentials, ref_id: &str) -> Params {
    Params::Json(json!({
        "merchant_id": credentials.merchant_id(),
        "ref_id": ref_id,
        "signature": credentials.signature_for(ref_id),
    }))
}
