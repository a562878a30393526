//! Display and LED colors

use crate::traits::{Color565, Rgb};

// Base panel colors (ST77xx)
pub const BLACK: Color565 = Color565(0x0000);
pub const WHITE: Color565 = Color565(0xFFFF);
pub const RED: Color565 = Color565::from_rgb(255, 0, 0);
pub const GREEN: Color565 = Color565::from_rgb(0, 255, 0);
pub const CYAN: Color565 = Color565::from_rgb(0, 255, 255);
pub const MAGENTA: Color565 = Color565::from_rgb(255, 0, 255);
pub const YELLOW: Color565 = Color565::from_rgb(255, 255, 0);
pub const DARK_GRAY: Color565 = Color565::from_rgb(64, 64, 64);

// Screen roles
pub const BACKGROUND: Color565 = BLACK;
/// Deep blue-purple title bar
pub const TITLE_BG: Color565 = Color565::from_rgb(0, 0, 192);
pub const TITLE_FG: Color565 = CYAN;
pub const ACCENT: Color565 = CYAN;
/// Orange-yellow labels
pub const WARN: Color565 = Color565::from_rgb(255, 125, 0);
pub const ALERT_BG: Color565 = RED;
pub const ALERT_FG: Color565 = WHITE;
pub const HEARTBEAT: Color565 = MAGENTA;

// Status LED
pub const LED_RED: Rgb = Rgb::new(255, 0, 0);
pub const LED_BLUE: Rgb = Rgb::new(0, 0, 255);
pub const LED_CYAN: Rgb = Rgb::new(0, 255, 255);
pub const LED_ORANGE: Rgb = Rgb::new(255, 100, 0);
pub const LED_DIM_ORANGE: Rgb = Rgb::new(255, 50, 0);

/// Boot sequence colors, shown in order
pub const LED_BOOT_SEQUENCE: [Rgb; 3] = [LED_RED, LED_BLUE, LED_CYAN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_colors_match_st77xx_values() {
        assert_eq!(RED.raw(), 0xF800);
        assert_eq!(GREEN.raw(), 0x07E0);
        assert_eq!(CYAN.raw(), 0x07FF);
        assert_eq!(MAGENTA.raw(), 0xF81F);
        assert_eq!(YELLOW.raw(), 0xFFE0);
        assert_eq!(DARK_GRAY.raw(), 0x4208);
        assert_eq!(TITLE_BG.raw(), 0x0018);
        assert_eq!(WARN.raw(), 0xFBE0);
    }
}
