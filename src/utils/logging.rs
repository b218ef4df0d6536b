// ============================================================================
// Logging Setup
// ============================================================================

use tracing::Level;

/// Install a `fmt` subscriber printing codec events at `level` and above.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}
