// src/log.rs
// =============================================================================
// Crawl progress logging for the library.
//
// The binary talks to the user with println!/eprintln!, but the library should
// stay quiet unless asked. `debug_log!` prints to stderr only when the crate is
// built with `--features debug_logs`; otherwise it compiles to nothing.
// =============================================================================

#[cfg(feature = "debug_logs")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

#[cfg(not(feature = "debug_logs"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        // Keep the arguments type-checked (and "used") without printing them
        if false {
            eprintln!($($arg)*);
        }
    }};
}
