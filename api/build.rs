//! Bakes `EXAMINIE_API_URL` from the environment or a `.env` file into the
//! crate, so wasm builds (which have no process environment) can still be
//! pointed at another backend.

fn main() {
    println!("cargo:rerun-if-env-changed=EXAMINIE_API_URL");

    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    if let Ok(url) = std::env::var("EXAMINIE_API_URL") {
        println!("cargo:rustc-env=EXAMINIE_API_URL={url}");
    }
}
