//! List open invoices example.
//!
//! This example checks that lexoffice is reachable, lists all open
//! invoices, and prints their payment state.
//!
//! Run with: LEXOFFICE_API_KEY=... cargo run --example list_invoices

use std::time::Duration;

use lexoffice_rs::client::ListOptions;
use lexoffice_rs::models::VoucherStatus;
use lexoffice_rs::{LexofficeClient, RateLimitPolicy};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> lexoffice_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = lexoffice_rs::ClientConfig::from_env()?
        .with_rate_limit(RateLimitPolicy::lexoffice_default());
    let client = LexofficeClient::with_config(config)?;
    client.set_error_hook(|e| eprintln!("lexoffice: {e}"));

    if !client.is_access_token_valid() {
        eprintln!("LEXOFFICE_API_KEY does not look like a lexoffice key, trying anyway");
    }

    client.check_online(Duration::from_secs(5)).await;
    if !client.is_online() {
        eprintln!("lexoffice is not reachable");
        return Ok(());
    }

    let entries = client
        .invoices()
        .list(VoucherStatus::Open, false, ListOptions::default().size(100))
        .await?;
    println!("Found {} open invoice(s):", entries.len());

    for entry in &entries {
        println!(
            "  - {} {} ({})",
            entry.voucher_number.as_deref().unwrap_or("(draft)"),
            entry.contact_name.as_deref().unwrap_or("unknown recipient"),
            entry.voucher_status,
        );

        if let Some(payments) = client.payments().get(entry.id).await? {
            println!(
                "    open: {} {}, paid so far: {}",
                payments.open_amount,
                payments.currency,
                payments.total_paid()
            );
        }
    }

    Ok(())
}
