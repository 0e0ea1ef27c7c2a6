//! Log in, upload two images concurrently, and create a listing that
//! references them in a chosen display order.
//!
//! Run with:
//! ```bash
//! COASTLINE_BASE_URL=http://localhost:8000 \
//! COASTLINE_USERNAME=broker@example.com \
//! COASTLINE_PASSWORD=secret \
//! cargo run --example upload_and_create -- front.jpg back.jpg
//! ```

use std::path::Path;

use coastline::{Coastline, PropertyCreateParams, PropertyImageParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.len() != 2 {
        eprintln!("Usage: upload_and_create <front-image> <back-image>");
        std::process::exit(1);
    }

    let username = std::env::var("COASTLINE_USERNAME")?;
    let password = std::env::var("COASTLINE_PASSWORD")?;

    let client = Coastline::new(None)?;
    client.login(&username, &password).await?;

    // Uploads are independent; completion order is irrelevant because the
    // display order comes from order_index below.
    let (front, back) = futures::future::join(
        client.upload_image_file(Path::new(&paths[0])),
        client.upload_image_file(Path::new(&paths[1])),
    )
    .await;
    let (front, back) = (front?, back?);

    let params = PropertyCreateParams::new("12 Palmetto Ave", "Charleston", "SC", "29401")
        .with_price(425000.0)
        .with_beds(3)
        .with_baths(2.5)
        .with_images(vec![
            PropertyImageParams::new(front)
                .with_caption("Front elevation")
                .with_order_index(1),
            PropertyImageParams::new(back)
                .with_caption("Back yard")
                .with_order_index(2),
        ]);

    let property = client.create_property(params).await?;
    println!(
        "Created listing #{} with {} images",
        property.id,
        property.images.len()
    );

    Ok(())
}
