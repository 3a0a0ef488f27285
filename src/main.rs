//! Shortcut launcher - converts shortcut files into standalone launchers.
//!
//! The same binary generates launchers and, once recompiled by itself with
//! a shortcut target baked in, acts as one.

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Failures always exit non-zero so callers can detect them
    let exit_code = match shortcut_launcher::cli::run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    process::exit(exit_code);
}
