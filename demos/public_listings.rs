//! Browse the public listings and chat with the concierge about the first
//! one.
//!
//! Run with:
//! ```bash
//! COASTLINE_BASE_URL=http://localhost:8000 cargo run --example public_listings
//! ```

use coastline::{ChatRequest, Coastline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Coastline::new(None)?;

    let properties = client.public_properties().await?;
    println!("{} listings on the market", properties.len());
    for p in &properties {
        println!("  #{} {}, {}, {} {}", p.id, p.address, p.city, p.state, p.zip_code);
    }

    if let Some(first) = properties.first() {
        let question = format!("Tell me about the area around {}", first.address);
        let reply = client.chat(ChatRequest::new(question)).await?;
        println!("\nConcierge: {}", reply);
    }

    Ok(())
}
