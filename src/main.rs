//! circle-points CLI entry point
//!
//! Points on a circle - CLI + web app

use circle_points::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
