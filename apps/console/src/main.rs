//! # Shopfront Console Entry Point
//!
//! ```text
//! $ printf '%s\n' \
//!     '{"kind":"login","userName":"alice","role":"admin"}' \
//!     '{"kind":"addToCartById","productId":1}' \
//!     '{"kind":"viewCart"}' | shopfront
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shopfront_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopfront: {}", err);
            ExitCode::FAILURE
        }
    }
}
