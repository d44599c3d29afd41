use sysclean::cli::{self, wait_for_acknowledgement};
use sysclean::core::orchestrator;
use sysclean::core::report;
use sysclean::core::targets::SystemPaths;
use sysclean::{log_debug, log_error, logger, platform};

/// Entry point of `sysclean`.
///
/// 1. Parses the command line and initializes the logger.
/// 2. Resolves the cleanup locations from the environment.
/// 3. Runs the cleanup against the native platform.
/// 4. Waits for Enter unless `--no-pause` was given.
fn main() {
    let cli = cli::parse();
    logger::init(cli.debug);

    report::print_banner();

    let paths = SystemPaths::discover();
    log_debug!(
        "User temp: {}, system root: {}",
        paths.user_temp.display().to_string().bright_blue(),
        paths.system_root.display().to_string().bright_blue()
    );

    let platform = platform::native();
    // Every failure inside the run is absorbed and reported there.
    let summary = orchestrator::run(&paths, &platform);
    log_debug!("Freed {} bytes in total", summary.total_freed());

    report::print_complete();

    if !cli.no_pause {
        if let Err(e) = wait_for_acknowledgement() {
            log_error!("Could not read from stdin: {}", e);
        }
    }
}
