//! Constants for the interactive TUI module
//!
//! This module centralizes timing values and user-facing strings.

// Timing constants
/// Quiet period after the last keystroke before a search is issued
pub const SEARCH_DEBOUNCE_MS: u64 = 350;

/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Search behaviour
/// Queries shorter than this (after trimming) never reach the network
pub const MIN_QUERY_CHARS: usize = 2;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Maximum number of suggestion rows shown at once
pub const SUGGESTION_PANEL_MAX_ROWS: u16 = 10;

/// Page size for PageUp/PageDown scrolling in the detail card
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 80;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// User-facing messages
pub const SEARCH_CONNECTION_ERROR: &str = "Unable to connect to the terminology database. Please check your internet connection and try again.";
pub const LOOKUP_FAILED_ERROR: &str = "Failed to load terminology details. Please try again.";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
