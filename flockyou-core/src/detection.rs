//! Detection records supplied by the scanner

use heapless::String;

/// Maximum stored length of the detection type
pub const MAX_KIND_LEN: usize = 31;

/// Maximum stored length of the device name
pub const MAX_NAME_LEN: usize = 31;

/// Maximum stored length of the MAC address text
pub const MAX_MAC_LEN: usize = 23;

/// Characters of the device name that fit on one alert screen row
pub const NAME_VISIBLE_CHARS: usize = 20;

/// Highest threat score
pub const MAX_THREAT_SCORE: u8 = 100;

/// A single detected device, as shown on the alert screen
///
/// Text fields have fixed capacity. Oversized input is cut at the last
/// whole character that fits; this is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetectionRecord {
    /// Detection category, e.g. "Camera"
    pub kind: String<MAX_KIND_LEN>,
    /// Advertised device name or SSID
    pub name: String<MAX_NAME_LEN>,
    /// MAC address text ("AA:BB:CC:DD:EE:FF")
    pub mac: String<MAX_MAC_LEN>,
    /// Threat score, 0-100
    pub threat_score: u8,
}

impl DetectionRecord {
    /// Build a record, truncating text and clamping the score
    pub fn new(kind: &str, name: &str, mac: &str, threat_score: u8) -> Self {
        Self {
            kind: bounded(kind),
            name: bounded(name),
            mac: bounded(mac),
            threat_score: threat_score.min(MAX_THREAT_SCORE),
        }
    }

    /// Device name as rendered: at most [`NAME_VISIBLE_CHARS`] characters
    pub fn visible_name(&self) -> &str {
        truncate_chars(&self.name, NAME_VISIBLE_CHARS)
    }

    /// Reset every field to empty/zero
    pub fn clear(&mut self) {
        self.kind.clear();
        self.name.clear();
        self.mac.clear();
        self.threat_score = 0;
    }

    /// Check if all fields are empty/zero
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.name.is_empty() && self.mac.is_empty() && self.threat_score == 0
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = DetectionRecord::new("Camera", "FlockSafety-ABCD", "AA:BB:CC:DD:EE:FF", 85);
        assert_eq!(record.kind.as_str(), "Camera");
        assert_eq!(record.name.as_str(), "FlockSafety-ABCD");
        assert_eq!(record.mac.as_str(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(record.threat_score, 85);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_threat_score_clamped() {
        let record = DetectionRecord::new("Camera", "x", "y", 250);
        assert_eq!(record.threat_score, 100);
    }

    #[test]
    fn test_oversized_fields_truncated() {
        let long = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let record = DetectionRecord::new(long, long, long, 10);
        assert_eq!(record.kind.len(), MAX_KIND_LEN);
        assert_eq!(record.name.len(), MAX_NAME_LEN);
        assert_eq!(record.mac.as_str(), &long[..MAX_MAC_LEN]);
    }

    #[test]
    fn test_truncation_keeps_whole_characters() {
        // 'é' is two bytes; 16 of them need 32 bytes
        let name = "éééééééééééééééé";
        let record = DetectionRecord::new("Camera", name, "", 0);
        assert_eq!(record.name.chars().count(), 15);
    }

    #[test]
    fn test_visible_name_long() {
        let record = DetectionRecord::new("Camera", "Penguin-Surveillance-Unit-42", "", 0);
        assert_eq!(record.visible_name(), "Penguin-Surveillance");
        assert_eq!(record.visible_name().chars().count(), NAME_VISIBLE_CHARS);
    }

    #[test]
    fn test_visible_name_short_unchanged() {
        let exact = "ABCDEFGHIJKLMNOPQRST";
        let record = DetectionRecord::new("Camera", exact, "", 0);
        assert_eq!(record.visible_name(), exact);

        let short = DetectionRecord::new("Camera", "Flock", "", 0);
        assert_eq!(short.visible_name(), "Flock");
    }

    #[test]
    fn test_clear() {
        let mut record = DetectionRecord::new("Camera", "Flock", "AA:BB", 90);
        record.clear();
        assert!(record.is_empty());
        assert_eq!(record, DetectionRecord::default());
    }

    #[test]
    fn test_truncate_chars_empty() {
        assert_eq!(truncate_chars("", 20), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
