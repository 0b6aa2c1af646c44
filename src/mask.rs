//! Configuration bit-mask helpers
//!
//! Converts named configuration flags into the packed integers carried by
//! CFG-CFG (clear/save/load masks) and CFG-RST (battery-backed RAM mask,
//! reset mode). The pseudo-values `none` and `all` select the empty and
//! full mask respectively.

use crate::error::{Result, UbxError};

/// A name → bit-position table
pub type BitTable = &'static [(&'static str, u32)];

/// Bit positions for the CFG-CFG clearMask/saveMask/loadMask fields
pub const CFG_SECTION_BITS: BitTable = &[
    ("ioPort", 0),
    ("msgConf", 1),
    ("infMsg", 2),
    ("navConf", 3),
    ("rxmConf", 4),
    ("rinvConf", 9),
    ("antConf", 10),
    ("logConf", 11),
];

/// Bit positions for the CFG-RST nav_bbr field
pub const NAV_BBR_BITS: BitTable = &[
    ("eph", 0),
    ("alm", 1),
    ("health", 2),
    ("klob", 3),
    ("pos", 4),
    ("clkd", 5),
    ("osc", 6),
    ("utc", 7),
    ("rtc", 8),
    ("aop", 15),
];

/// CFG-RST Reset field values (not a bit mask, a plain enumeration)
pub const RESET_MODES: &[(&str, u8)] = &[
    ("hw", 0),
    ("sw", 1),
    ("swGnssOnly", 2),
    ("hwAfterShutdown", 4),
    ("gnssStop", 8),
    ("gnssStart", 9),
];

/// Build a mask from named bits
///
/// `["none"]` (or an empty list) yields 0; a list containing `"all"` yields
/// the OR of every bit in the table.
///
/// # Errors
///
/// `InvalidMaskBit` for a name not present in the table. This is a caller
/// configuration error and is surfaced immediately.
pub fn build_mask(enabled_bits: &[&str], table: BitTable) -> Result<u32> {
    if enabled_bits.is_empty() || enabled_bits == ["none"] {
        return Ok(0);
    }

    if enabled_bits.contains(&"all") {
        return Ok(table.iter().fold(0, |mask, (_, shift)| mask | (1 << shift)));
    }

    let mut mask = 0;
    for bit in enabled_bits {
        let shift = table
            .iter()
            .find(|(name, _)| name == bit)
            .map(|(_, shift)| *shift)
            .ok_or_else(|| UbxError::InvalidMaskBit { bit: bit.to_string() })?;
        mask |= 1 << shift;
    }

    Ok(mask)
}

/// Resolve a CFG-RST reset mode by name
pub fn reset_mode(name: &str) -> Result<u8> {
    RESET_MODES
        .iter()
        .find(|(mode, _)| *mode == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| UbxError::InvalidMaskBit { bit: name.to_string() })
}
