use std::sync::atomic::{AtomicBool, Ordering};

// Process-wide switch for debug output, set once by `init`.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initializes the logger.
///
/// When `debug` is `true`, `log_debug!` messages are printed; otherwise only
/// info, warn and error messages are shown.
pub fn init(debug: bool) {
    DEBUG_ENABLED.store(debug, Ordering::Relaxed);
}

/// Returns whether debug-level logging was enabled via `init`.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Logs a debug message to stderr. Suppressed unless debug logging is enabled.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::logger::is_debug_enabled() {
            use $crate::colored::Colorize as _;
            eprintln!("{} {}", "[DEBUG]".bright_black(), format!($($arg)*));
        }
    }};
}

/// Logs an informational message to stderr.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        eprintln!("{} {}", "[INFO]".bright_cyan(), format!($($arg)*));
    }};
}

/// Logs a warning to stderr.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        eprintln!("{} {}", "[WARN]".bright_yellow(), format!($($arg)*));
    }};
}

/// Logs an error to stderr.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use $crate::colored::Colorize as _;
        eprintln!("{} {}", "[ERROR]".bright_red(), format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_toggles_debug_flag() {
        init(true);
        assert!(is_debug_enabled());
        init(false);
        assert!(!is_debug_enabled());
    }
}
