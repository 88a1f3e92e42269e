//! Application-level configuration constants.

// Timing
pub const DEFAULT_COMBO_SECONDS: u32 = 20;
pub const COMBO_SECONDS_OPTIONS: [u32; 6] = [10, 20, 30, 40, 50, 60];
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

// Persistence
pub const STRIKE_MODE_STORAGE_KEY: &str = "muayThaiMode";

// UI text
pub const STRIKE_MODE_LABEL: &str = "Muay Thai Mode";
pub const INTERVAL_LABEL: &str = "Time";
