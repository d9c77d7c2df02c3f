/// Request signing for the Tokopay API.
///
/// The remote server authenticates a request by recomputing
/// `md5("{merchant}:{secret}")` or `md5("{merchant}:{secret}:{ref_id}")`
/// and comparing it with the `signature` field, so the field order,
/// the `:` delimiter and lowercase hex output are all part of the contract.
use std::fmt;

use md5::{Digest, Md5};

use crate::errors::TokopayError;

const DELIMITER: &str = ":";

/// Compute the request signature, lowercase hex.
pub fn sign(merchant: &str, secret: &str, ref_id: Option<&str>) -> String {
    let mut hasher = Md5::new();
    hasher.update(merchant.as_bytes());
    hasher.update(DELIMITER.as_bytes());
    hasher.update(secret.as_bytes());
    if let Some(ref_id) = ref_id {
        hasher.update(DELIMITER.as_bytes());
        hasher.update(ref_id.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Merchant credentials. Immutable once constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    merchant_id: String,
    secret: String,
}

impl Credentials {
    /// Both values must be non-empty.
    pub fn new(
        merchant_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, TokopayError> {
        let merchant_id = merchant_id.into();
        let secret = secret.into();
        if merchant_id.is_empty() || secret.is_empty() {
            return Err(TokopayError::validation(
                "Merchant ID and Secret Key are required",
            ));
        }
        Ok(Self {
            merchant_id,
            secret,
        })
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// `md5(merchant:secret)`, used by balance and withdrawal calls.
    pub fn signature(&self) -> String {
        sign(&self.merchant_id, &self.secret, None)
    }

    /// `md5(merchant:secret:ref_id)`, used by order mutation calls.
    pub fn signature_for(&self, ref_id: &str) -> String {
        sign(&self.merchant_id, &self.secret, Some(ref_id))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
