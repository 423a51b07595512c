//! Structured terminal output with box-drawing decoration.
//!
//! Human-readable command output is drawn as a vertical pipe with branches:
//!
//! ```text
//! ┏ sunstate v0.3.0 ━━╸
//! ┃
//! ┣ Sun state for 2025-06-21 12:00:00 on Caucasus
//! ┃   state:   day
//! ╹
//! ```
//!
//! Logging can be switched off process-wide. Commands do this for `--json`
//! so stdout only carries the JSON document; failures are then reported on
//! stderr with [`log_error_standalone!`].

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Logging switch and output routing used by the macros.
///
/// ## Conventions
///
/// - `log_block_start!` opens a new block (`┃` spacer then `┣ message`).
/// - `log_decorated!` continues a block (`┣ message`).
/// - `log_indented!` lists details under a block entry (`┃   message`).
/// - `log_pipe!` inserts a bare `┃` before a levelled message that opens a block.
/// - `log_version!` and `log_end!` frame the whole output.
/// - `log_info!`, `log_warning!`, `log_error!`, `log_debug!` carry a coloured level tag.
pub struct Log;

impl Log {
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

// Public so the exported macros can reach it
pub fn write_output(text: &str) {
    if captured(text) {
        return;
    }
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

// Errors that must survive `--json` go to stderr regardless of the switch
pub fn write_error(text: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(text.as_bytes());
    let _ = stderr.flush();
}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(test)]
fn captured(text: &str) -> bool {
    CAPTURED.with(|buf| match buf.borrow_mut().as_mut() {
        Some(out) => {
            out.push_str(text);
            true
        }
        None => false,
    })
}

#[cfg(not(test))]
fn captured(_text: &str) -> bool {
    false
}

/// Run `f` and collect everything it writes to stdout on this thread.
#[cfg(test)]
pub(crate) fn capture_output<R>(f: impl FnOnce() -> R) -> (R, String) {
    CAPTURED.with(|buf| *buf.borrow_mut() = Some(String::new()));
    let result = f();
    let out = CAPTURED.with(|buf| buf.borrow_mut().take()).unwrap_or_default();
    (result, out)
}

/// Shared body of the line macros: format, prefix, write if enabled.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($head:expr, $fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("{}{message}\n", $head));
        }
    }};
    ($head:expr, $expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("{}{expr}\n", $head));
        }
    }};
}

/// Log a message as part of the current block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => { $crate::__log_line!("┣ ", $($arg)+) };
}

/// Log a detail line under a block entry.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => { $crate::__log_line!("┃   ", $($arg)+) };
}

/// Log a bare pipe for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Start a new block of related lines.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => { $crate::__log_line!("┃\n┣ ", $($arg)+) };
}

/// Log the version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ sunstate v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning in yellow.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[33mWARNING\x1b[0m] ", $($arg)+) };
}

/// Log an error in red.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[31mERROR\x1b[0m] ", $($arg)+) };
}

/// Log an error that ends the output, closing the pipe.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)+) => { $crate::__log_line!("┃\n┗[\x1b[31mERROR\x1b[0m] ", $($arg)+) };
}

/// Log an error to stderr without decoration, even when logging is disabled.
#[macro_export]
macro_rules! log_error_standalone {
    ($fmt:literal $($arg:tt)*) => {{
        let message = format!($fmt $($arg)*);
        $crate::logger::write_error(&format!("[ERROR] {message}\n"));
    }};
    ($expr:expr) => {{
        let expr = $expr;
        $crate::logger::write_error(&format!("[ERROR] {expr}\n"));
    }};
}

/// Log a warning to stderr without decoration, even when logging is disabled.
#[macro_export]
macro_rules! log_warning_standalone {
    ($fmt:literal $($arg:tt)*) => {{
        let message = format!($fmt $($arg)*);
        $crate::logger::write_error(&format!("[WARNING] {message}\n"));
    }};
    ($expr:expr) => {{
        let expr = $expr;
        $crate::logger::write_error(&format!("[WARNING] {expr}\n"));
    }};
}

/// Log an informational message in green.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[32mINFO\x1b[0m] ", $($arg)+) };
}

/// Log a debug message in green.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::__log_line!("┣[\x1b[32mDEBUG\x1b[0m] ", $($arg)+) };
}
