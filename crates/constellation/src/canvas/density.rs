//! Automatic connection suppression above a diagram-count threshold.
//!
//! With many diagrams on the canvas the O(n²) connection overlay becomes
//! visual noise, so the canvas forces the connection mode to `none` when the
//! count climbs past the threshold while the mode is `all`, and restores
//! `all` when the count drops back — but only when the suppression was
//! automatic. A user's explicit mode choice is never overridden: any manual
//! change through the settings surface clears the automatic flag.

use log::info;

use crate::relation::visible::ConnectionMode;

/// Diagram count above which connections are automatically hidden.
pub(crate) const AUTO_SUPPRESS_THRESHOLD: usize = 10;

/// Two-state guard: `Manual` (flag clear) or `AutoSuppressed` (flag set).
#[derive(Debug, Default)]
pub(crate) struct DensityGuard {
    auto_suppressed: bool,
}

impl DensityGuard {
    /// Reacts to a change in the diagram count.
    ///
    /// May rewrite `mode` in place: forces `none` when the count exceeds the
    /// threshold while the mode is `all`, and restores `all` when the count
    /// is back within the threshold and the current suppression was
    /// automatic.
    pub(crate) fn on_count_changed(&mut self, count: usize, mode: &mut ConnectionMode) {
        if !self.auto_suppressed && count > AUTO_SUPPRESS_THRESHOLD && *mode == ConnectionMode::All
        {
            *mode = ConnectionMode::None;
            self.auto_suppressed = true;
            info!(diagram_count = count; "Connections auto-hidden above density threshold");
        } else if self.auto_suppressed && count <= AUTO_SUPPRESS_THRESHOLD {
            *mode = ConnectionMode::All;
            self.auto_suppressed = false;
            info!(diagram_count = count; "Connections restored below density threshold");
        }
    }

    /// Records an explicit user mode change, pinning the current mode.
    pub(crate) fn on_manual_change(&mut self) {
        self.auto_suppressed = false;
    }

    /// Whether the current mode was forced by the density guard.
    pub(crate) fn is_auto_suppressed(&self) -> bool {
        self.auto_suppressed
    }
}
