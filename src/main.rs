//! Terminal entry point; the browser build starts from `web::start`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    crypto_dashboard::native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
