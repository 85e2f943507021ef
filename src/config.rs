//! Config handling

use simple_logger::SimpleLogger;
use tracing::log::LevelFilter;

/// Outbound HTTP and font crates that stay quiet unless debugging.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("tracing", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("rustls", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("h2", LevelFilter::Info),
    ("rusttype", LevelFilter::Warn),
];

fn build_logger(debug: bool) -> SimpleLogger {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = SimpleLogger::new().with_level(level);
    if !debug {
        for (module, module_level) in QUIET_MODULES {
            logger = logger.with_module_level(module, *module_level);
        }
    }
    logger
}

/// Sets up logging based on the debug flag, `RUST_LOG` overrides it when set.
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    build_logger(debug).env().init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}
