// Application configuration types
//
// This module contains configuration constants and structs for:
// - Octopus graph geometry
// - Neighbor display limits
// - Refresh intervals

use std::time::{Duration, Instant};

// ============================================================================
// Graph Constants
// ============================================================================

/// Maximum number of neighbor cards shown per side before the rest collapse
/// into a summary list. Keeps the graph from growing unbounded vertically.
pub const MAX_NEIGHBORS: usize = 6;

/// Height of one neighbor slot in arrow-strip canvas units
pub const BASE_HEIGHT: f64 = 180.0;

/// Width of an arrow strip in canvas units
pub const ARROW_WIDTH: f64 = 75.0;

/// Terminal rows occupied by one slot (card plus spacer)
pub const SLOT_ROWS: u16 = 7;

/// Terminal rows occupied by a resource card
pub const CARD_ROWS: u16 = 6;

// ============================================================================
// Refresh Constants
// ============================================================================

/// Minimum refresh interval in milliseconds
pub const MIN_REFRESH_MS: u64 = 50;

/// Maximum refresh interval in milliseconds
pub const MAX_REFRESH_MS: u64 = 10000;

/// Refresh interval adjustment step in milliseconds
pub const REFRESH_STEP: u64 = 50;

/// Default refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 500;

/// Data refresh multiplier (snapshot reloads at N times the UI interval)
pub const DATA_REFRESH_MULTIPLIER: u64 = 10;

/// Duration to highlight recently changed refresh intervals
pub const CHANGE_HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

// ============================================================================
// Configuration Structs
// ============================================================================

/// Configuration for refresh intervals
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// UI refresh interval in milliseconds
    /// Snapshot reloads use this * DATA_REFRESH_MULTIPLIER
    pub refresh_ms: u64,

    /// Timestamp of last interval change (for visual feedback)
    pub last_change: Option<Instant>,
}

impl RefreshConfig {
    /// Create a new RefreshConfig with default values
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_REFRESH_MS)
    }

    /// Create a RefreshConfig with the given interval, clamped to bounds
    pub fn with_interval(refresh_ms: u64) -> Self {
        Self {
            refresh_ms: refresh_ms.clamp(MIN_REFRESH_MS, MAX_REFRESH_MS),
            last_change: None,
        }
    }

    /// Get UI refresh interval as Duration
    pub fn ui_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    /// Get data refresh interval as Duration (10x UI interval)
    pub fn data_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms * DATA_REFRESH_MULTIPLIER)
    }

    /// Whether the interval changed within CHANGE_HIGHLIGHT_DURATION
    pub fn recently_changed(&self) -> bool {
        self.last_change
            .map(|t| t.elapsed() < CHANGE_HIGHLIGHT_DURATION)
            .unwrap_or(false)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}
