//! Output-compare channel selection.

use serde::Deserialize;

/// Output-compare channel of the pulse-generator timer.
///
/// General-purpose timers expose four compare channels; the pulse train is
/// emitted on exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum PulseChannel {
    /// Channel 1 (default).
    #[default]
    Ch1,
    /// Channel 2.
    Ch2,
    /// Channel 3.
    Ch3,
    /// Channel 4.
    Ch4,
}

impl PulseChannel {
    /// Channel index, 1-based as in the peripheral documentation.
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            PulseChannel::Ch1 => 1,
            PulseChannel::Ch2 => 2,
            PulseChannel::Ch3 => 3,
            PulseChannel::Ch4 => 4,
        }
    }
}
