use mpo_api_sdk::{ModelRequestBuilder, MpoClient, MpoError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_url = env::var("MPO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:9000".to_string());
    let client = MpoClient::new(&api_url)?;

    // Check if the server is healthy
    match client.health_check().await {
        Ok(true) => println!("✓ Server is healthy"),
        Ok(false) => println!("⚠ Server returned non-success status"),
        Err(e) => println!("✗ Health check failed: {}", e),
    }

    // Three periods, two risky assets, everything back in cash at the end
    let request = ModelRequestBuilder::new()
        .initial_weight("CASH", 0.5)
        .initial_weight("AAPL", 0.3)
        .initial_weight("MSFT", 0.2)
        .return_series("AAPL", [0.02, -0.01, 0.015])
        .return_series("MSFT", [-0.005, 0.03, 0.01])
        .max_weight(0.6)
        .max_trade_size(0.4)
        .transaction_cost(0.002)
        .build()?;

    println!("\n📊 Running rebalancing model...\n");

    let response = match client.run_model(request).await {
        Ok(response) => response,
        Err(MpoError::Rejected(reason)) => {
            eprintln!("✗ Request rejected: {}", reason);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !response.is_optimal() {
        println!("⚠ No optimal solution; values must not be used");
        return Ok(());
    }

    for (asset, row) in &response.output.weights {
        let path: Vec<String> = row
            .values()
            .map(|w| w.map_or("-".to_string(), |w| format!("{:.3}", w)))
            .collect();
        println!("{:>6}: {}", asset, path.join(" → "));
    }

    Ok(())
}
