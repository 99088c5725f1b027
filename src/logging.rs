use env_logger::Builder;
use log::LevelFilter;

/// Configures the process-wide logger. Informational logging is on by
/// default and silenced by `-q`/`--quiet`; warnings always get through.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
