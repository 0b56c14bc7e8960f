/// Install the platform logger.
///
/// `env_logger` (configured through `RUST_LOG`) on native targets, the browser
/// console on the web. Calling this twice only prints a warning.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {}", e);
        }
    }
}
