// SPDX-License-Identifier: MIT
//
// Linear-light channel table.
//
// Luminance needs the linear-light intensity of each 8-bit channel, and
// there are only 256 of them. The table is built once on first use and
// shared read-only afterwards, replacing a `powf` per channel with an index.

use std::sync::LazyLock;

/// Number of entries in the channel table (one per 8-bit channel value).
pub const TABLE_LEN: usize = 256;

static CHANNEL_TABLE: LazyLock<[f64; TABLE_LEN]> = LazyLock::new(build_channel_table);

fn build_channel_table() -> [f64; TABLE_LEN] {
    let mut table = [0.0f64; TABLE_LEN];
    for (value, slot) in (0u8..=u8::MAX).zip(table.iter_mut()) {
        *slot = srgb_to_linear(f64::from(value) / 255.0);
    }
    table
}

/// The full table, index = 8-bit sRGB channel value.
#[must_use]
pub fn channel_table() -> &'static [f64; TABLE_LEN] {
    &CHANNEL_TABLE
}

/// Linear-light intensity (0.0–1.0) of an 8-bit sRGB channel.
#[inline]
#[must_use]
pub fn channel_to_linear(channel: u8) -> f64 {
    CHANNEL_TABLE[usize::from(channel)]
}

/// Convert a single sRGB component (0.0–1.0) to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
