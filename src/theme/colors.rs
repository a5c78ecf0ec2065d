//! Colors - Hookkit Theme Colors

use gpui::{rgb, Rgba};

use crate::domain::notification::NotificationVariant;

/// Hookkit color palette - All colors are accessed via associated functions
pub struct HookColors;

impl HookColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Pane background
    pub fn pane_bg() -> Rgba { rgb(0xffffff) }
    /// Left demo pane tint
    pub fn pane_blue() -> Rgba { rgb(0xeff6ff) }
    /// Right demo pane tint
    pub fn pane_red() -> Rgba { rgb(0xfef2f2) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Separator colors
    /// Idle separator
    pub fn separator() -> Rgba { rgb(0xd1d5db) }
    /// Hovered or dragged separator
    pub fn separator_active() -> Rgba { rgb(0x3b82f6) }
    /// Disabled separator
    pub fn separator_disabled() -> Rgba { rgb(0xe5e7eb) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    pub fn button_primary_hover() -> Rgba { rgb(0x2563eb) }
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }
}

impl HookColors {
    /// Accent color for a notification variant
    pub fn for_variant(variant: NotificationVariant) -> Rgba {
        match variant {
            NotificationVariant::Info => Self::info(),
            NotificationVariant::Success => Self::success(),
            NotificationVariant::Warning => Self::warning(),
            NotificationVariant::Error => Self::danger(),
        }
    }
}
