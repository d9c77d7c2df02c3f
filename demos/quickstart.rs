/// Quickstart example: minimal end-to-end Tokopay flow.
///
/// Demonstrates: merchant balance, simple order, status check, cancel.
/// Reads credentials from TOKOPAY_MERCHANT_ID / TOKOPAY_SECRET.
use std::time::{SystemTime, UNIX_EPOCH};

use tokopay_sdk::{ApiOutcome, ClientConfig, TokopayClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let merchant = std::env::var("TOKOPAY_MERCHANT_ID")?;
    let secret = std::env::var("TOKOPAY_SECRET")?;
    let client = TokopayClient::with_config(&merchant, &secret, ClientConfig::default().with_debug(true))?;

    // 1. Merchant balance
    match client.info().await? {
        ApiOutcome::Success(info) => println!(
            "Merchant {}: available {:?}, held {:?}",
            info.merchant_id.unwrap_or_default(),
            info.saldo_tersedia,
            info.saldo_tertahan
        ),
        ApiOutcome::Rejected(err) => println!("Balance lookup rejected: {}", err.message),
    }

    // 2. Simple QRIS order
    let ref_id = format!(
        "ORDER-{}",
        SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis()
    );
    println!("Creating order {ref_id}...");
    let order = client.simple_order(&ref_id, "QRIS", 10_000.0).await?.into_result()?;
    println!("Pay at: {}", order.pay_url.unwrap_or_default());
    if let Some(qr) = order.qr_string {
        println!("QR string: {qr}");
    }

    // 3. Check status
    let status = client.check_order_status(&ref_id, "QRIS", 10_000.0).await?;
    println!("Status: {status:?}");

    // 4. Cancel
    let cancelled = client.cancel_order(&ref_id).await?;
    println!("Cancelled: {}", cancelled.is_success());

    Ok(())
}
