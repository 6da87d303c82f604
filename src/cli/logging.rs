use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize the logging system. Debug mode lowers the filter so the
/// per-pass diagnostics from the collapse passes show up.
pub fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
