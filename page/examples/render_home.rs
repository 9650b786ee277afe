//! Render the built-in homepage.
//!
//! Run with: `cargo run -p tiffany-page --example render_home`

use tiffany_page::render_default_page;

fn main() {
    let html = render_default_page();

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
