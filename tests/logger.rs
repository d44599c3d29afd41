// No `colored` import here: the macros must resolve it through the crate itself.
use sysclean::{log_debug, log_error, log_info, log_warn, logger};

#[test]
fn macros_work_without_caller_importing_colored() {
    logger::init(true);
    log_debug!("debug {}", 1);
    log_info!("info {}", "two");
    log_warn!("warn {:?}", [3]);
    log_error!("error {}", 4.0);
    assert!(logger::is_debug_enabled());
}
