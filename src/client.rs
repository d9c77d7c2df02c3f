/// High-level TokopayClient, one async method per gateway endpoint.
///
/// Each method validates its arguments, signs, builds the request, hands it
/// to the transport and normalizes the answer. Calls are independent: the
/// client keeps no state besides its credentials and configuration, and can
/// be cloned and shared across tasks freely.
use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;

use crate::api::{self, ApiRequest};
use crate::config::ClientConfig;
use crate::errors::{ErrorCode, TokopayError};
use crate::models::*;
use crate::response::{classify_transport_error, normalize_payload, ApiOutcome};
use crate::signer::Credentials;
use crate::transport::{HttpTransport, Transport};
use crate::validation::{validate_amount, validate_customer, validate_payment_method, validate_ref_id};

/// Environment variable holding the merchant id for [`TokopayClient::from_env`].
pub const MERCHANT_ID_ENV: &str = "TOKOPAY_MERCHANT_ID";
/// Environment variable holding the secret key for [`TokopayClient::from_env`].
pub const SECRET_ENV: &str = "TOKOPAY_SECRET";

const TRACE_TARGET: &str = "tokopay_sdk::trace";

/// The Tokopay gateway client.
#[derive(Debug, Clone)]
pub struct TokopayClient {
    credentials: Credentials,
    config: ClientConfig,
    api_base: String,
    transport: Arc<dyn Transport>,
}

impl TokopayClient {
    /// Create a client against the production gateway.
    pub fn new(merchant_id: &str, secret: &str) -> Result<Self, TokopayError> {
        Self::with_config(merchant_id, secret, ClientConfig::default())
    }

    /// Create a client with a custom configuration and the default HTTP transport.
    pub fn with_config(
        merchant_id: &str,
        secret: &str,
        config: ClientConfig,
    ) -> Result<Self, TokopayError> {
        let credentials = Credentials::new(merchant_id, secret)?;
        let transport = HttpTransport::new(&config)?;
        Self::assemble(credentials, config, Arc::new(transport))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(
        merchant_id: &str,
        secret: &str,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, TokopayError> {
        let credentials = Credentials::new(merchant_id, secret)?;
        Self::assemble(credentials, config, transport)
    }

    /// Read credentials from `TOKOPAY_MERCHANT_ID` and `TOKOPAY_SECRET`.
    pub fn from_env() -> Result<Self, TokopayError> {
        let merchant_id = std::env::var(MERCHANT_ID_ENV).unwrap_or_default();
        let secret = std::env::var(SECRET_ENV).unwrap_or_default();
        Self::new(&merchant_id, &secret)
    }

    fn assemble(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, TokopayError> {
        let api_base = config.normalized_api_base()?;
        debug!(
            "client.new merchant_id={} api_base={} debug={}",
            credentials.merchant_id(),
            api_base,
            config.debug
        );
        Ok(Self {
            credentials,
            config,
            api_base,
            transport,
        })
    }

    pub fn merchant_id(&self) -> &str {
        self.credentials.merchant_id()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Request execution
    // -----------------------------------------------------------------------

    async fn send<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        rejection_code: ErrorCode,
    ) -> Result<ApiOutcome<T>, TokopayError> {
        if self.config.debug {
            debug!(target: TRACE_TARGET, "Making request: {:?}", request);
        }
        let payload = self
            .transport
            .execute(&request)
            .await
            .map_err(|e| {
                if self.config.debug {
                    debug!(target: TRACE_TARGET, "Request failed: {:?}", e);
                }
                classify_transport_error(e)
            })?;
        if self.config.debug {
            debug!(target: TRACE_TARGET, "Received response: {:?}", payload);
        }
        normalize_payload(payload, rejection_code)?.decode()
    }

    // -----------------------------------------------------------------------
    // Merchant
    // -----------------------------------------------------------------------

    /// GET /v1/merchant/balance - Merchant account information and balance.
    pub async fn info(&self) -> Result<ApiOutcome<MerchantInfo>, TokopayError> {
        debug!("client.info");
        let request = api::merchant_balance(&self.api_base, &self.credentials);
        self.send(request, ErrorCode::MerchantError).await
    }

    /// POST /v1/merchant/tarik-saldo - Withdraw balance to the merchant's bank account.
    pub async fn tarik_saldo(&self, nominal: f64) -> Result<ApiOutcome<Withdrawal>, TokopayError> {
        validate_amount(nominal)?;
        debug!("client.tarik_saldo nominal={}", nominal);
        let request = api::tarik_saldo(&self.api_base, &self.credentials, nominal);
        self.send(request, ErrorCode::WithdrawalError).await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    /// GET /v1/order - Status of an existing order.
    pub async fn check_order_status(
        &self,
        ref_id: &str,
        metode: &str,
        nominal: f64,
    ) -> Result<ApiOutcome<OrderStatus>, TokopayError> {
        validate_ref_id(ref_id)?;
        let method = validate_payment_method(metode)?;
        validate_amount(nominal)?;
        debug!(
            "client.check_order_status ref_id={} metode={} nominal={}",
            ref_id, method, nominal
        );
        let request = api::order_query(&self.api_base, &self.credentials, ref_id, method, nominal);
        self.send(request, ErrorCode::UnknownError).await
    }

    /// GET /v1/order - Create an order with just a channel and an amount.
    ///
    /// The gateway creates the order on first sight of `ref_id` and reports
    /// it on later calls with the same arguments.
    pub async fn simple_order(
        &self,
        ref_id: &str,
        metode: &str,
        nominal: f64,
    ) -> Result<ApiOutcome<OrderCreated>, TokopayError> {
        validate_ref_id(ref_id)?;
        let method = validate_payment_method(metode)?;
        validate_amount(nominal)?;
        debug!(
            "client.simple_order ref_id={} metode={} nominal={}",
            ref_id, method, nominal
        );
        let request = api::order_query(&self.api_base, &self.credentials, ref_id, method, nominal);
        self.send(request, ErrorCode::UnknownError).await
    }

    /// POST /v1/order - Create an order with customer details and items.
    pub async fn create_order(
        &self,
        params: &CreateOrderParams,
    ) -> Result<ApiOutcome<OrderCreated>, TokopayError> {
        validate_ref_id(&params.ref_id)?;
        let method = validate_payment_method(&params.kode_channel)?;
        validate_amount(params.amount)?;
        validate_customer(&params.customer_name, &params.customer_email)?;
        debug!(
            "client.create_order ref_id={} kode_channel={} amount={} items={}",
            params.ref_id,
            method,
            params.amount,
            params.items.as_ref().map_or(0, Vec::len)
        );
        let request = api::create_order(&self.api_base, &self.credentials, params, method)?;
        self.send(request, ErrorCode::UnknownError).await
    }

    /// POST /v1/order/retry - Retry a failed order.
    pub async fn retry_order(&self, ref_id: &str) -> Result<ApiOutcome<OrderCreated>, TokopayError> {
        validate_ref_id(ref_id)?;
        debug!("client.retry_order ref_id={}", ref_id);
        let request = api::retry_order(&self.api_base, &self.credentials, ref_id);
        self.send(request, ErrorCode::UnknownError).await
    }

    /// POST /v1/order/cancel - Cancel a pending order.
    pub async fn cancel_order(&self, ref_id: &str) -> Result<ApiOutcome<OrderCreated>, TokopayError> {
        validate_ref_id(ref_id)?;
        debug!("client.cancel_order ref_id={}", ref_id);
        let request = api::cancel_order(&self.api_base, &self.credentials, ref_id);
        self.send(request, ErrorCode::UnknownError).await
    }
}
