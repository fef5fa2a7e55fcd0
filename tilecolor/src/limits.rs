// Centralized caps for externally supplied sizes (viewport dimensions, config documents)

// Grid caps; larger requests are clamped
pub const MAX_ROWS: u32 = 256;
pub const MAX_COLS: u32 = 256;

// Palette cap; color indices are stored as u8
pub const MAX_PALETTE: usize = 16;

// Tentative color trials per assignment call before giving up
pub const DEFAULT_STEP_BUDGET: u64 = 200_000;

/// Non-positive dimensions collapse to 0 (empty graph); large ones clamp to `max`.
#[inline]
pub fn clamp_dim(n: i32, max: u32) -> u32 {
    if n <= 0 { 0 } else { (n as u32).min(max) }
}
