//! Terminal UI utilities for formatted status output.
//!
//! Status lines go to stderr; stdout is reserved for the emitted
//! configuration so the command can be piped into other tools.

mod messages;

// Re-exports for convenient access
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if stderr is a terminal
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// owo-colors respects NO_COLOR and terminal capabilities on its own; this
/// performs the detection once up front and exists for future extension.
pub fn init_colors() {
    let _ = should_use_color();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_disables() {
        std::env::set_var("NO_COLOR", "1");
        std::env::remove_var("FORCE_COLOR");
        assert!(!should_use_color());
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn init_colors_does_not_panic() {
        init_colors();
    }
}
