//! Example: Resolve a batch of image locations and print the bundle
//!
//! Run with: cargo run -p imgbatch --example resolve_urls
//!
//! The middle line is intentionally broken to show per-entry skipping.

use imgbatch::{resolve, ResolveRequest};

const LOCATIONS: &str = "\
https://httpbin.org/image/png
notaurl
https://httpbin.org/image/jpeg";

#[tokio::main]
async fn main() {
    let req = ResolveRequest::new(LOCATIONS).error_message("no valid image links");

    match resolve(req).await {
        Ok(bundle) => {
            println!("status:          {}", bundle.status);
            println!("valid / total:   {} / {}", bundle.valid_count, bundle.total_count);
            println!("valid locations:");
            for location in bundle.valid_locations.lines() {
                println!("  {location}");
            }
            for (i, image) in bundle.images.iter().enumerate() {
                println!("image {i}: shape {:?}", image.shape());
            }
        }
        Err(err) => {
            eprintln!("resolution failed: {err}");
            std::process::exit(1);
        }
    }
}
