//! Application messages

use crate::features::progress::ProgressEvent;
use crate::features::settings::ScanPreset;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Scan ============
    /// Progress feed published an event, tagged with its run counter
    Progress(u32, ProgressEvent),
    /// Animation frame
    AnimationTick,
    /// Restart the scan from zero
    RestartScan,
    /// Dismiss the notification toast
    DismissToast,

    // ============ Settings ============
    /// Update the scan tint
    UpdateScanColor(ScanPreset),
    /// Update the animation loop period
    UpdateCycleMs(u32),
    /// Update display settings
    UpdateDarkMode(bool),
    /// Update power saving mode
    UpdatePowerSavingMode(bool),
}
