//! User preferences with JSON persistence
//!
//! Persisted separately from anything the simulation owns; losing the file
//! just means default settings.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TRAIL_CAPACITY;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Trail length multiplier (1.0 = full)
    pub fn trail_quality(&self) -> f64 {
        match self {
            QualityPreset::Low => 0.25,
            QualityPreset::Medium => 0.6,
            QualityPreset::High => 1.0,
        }
    }

    /// Additive glow passes per sprite (0 = no glow)
    pub fn glow_layers(&self) -> u32 {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 3,
            QualityPreset::High => 6,
        }
    }
}

/// Settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    /// Full trail capacity per bob, before the quality multiplier
    pub trail_capacity: usize,

    // === Visual Effects ===
    /// Draw motion trails
    pub trails: bool,
    /// Draw glow halos around bobs and trail points
    pub glow: bool,
    /// Draw the background axes cross
    pub show_axes: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            trails: true,
            glow: true,
            show_axes: true,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Settings file next to the working directory
    const STORAGE_FILE: &'static str = "neon-pendulum-settings.json";

    /// Trail capacity after applying the quality multiplier, never zero
    pub fn effective_trail_capacity(&self) -> usize {
        ((self.trail_capacity as f64 * self.quality.trail_quality()) as usize).max(1)
    }

    /// Effective glow passes (respects the glow toggle)
    pub fn glow_layers(&self) -> u32 {
        if self.glow { self.quality.glow_layers() } else { 0 }
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::STORAGE_FILE);
                    return settings;
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {err}", Self::STORAGE_FILE);
                }
            },
            Err(_) => {}
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::STORAGE_FILE, json) {
                    log::warn!("Failed to write {}: {err}", Self::STORAGE_FILE);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_trail_capacity_scales_with_quality() {
        let mut settings = Settings::default();
        settings.quality = QualityPreset::High;
        assert_eq!(settings.effective_trail_capacity(), 6000);
        settings.quality = QualityPreset::Medium;
        assert_eq!(settings.effective_trail_capacity(), 3600);
        settings.quality = QualityPreset::Low;
        assert_eq!(settings.effective_trail_capacity(), 1500);
    }

    #[test]
    fn test_effective_trail_capacity_never_zero() {
        let settings = Settings {
            trail_capacity: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_trail_capacity(), 1);
    }

    #[test]
    fn test_glow_toggle_overrides_preset() {
        let settings = Settings {
            glow: false,
            quality: QualityPreset::High,
            ..Default::default()
        };
        assert_eq!(settings.glow_layers(), 0);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings {
            quality: QualityPreset::Low,
            trail_capacity: 1234,
            trails: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.quality, QualityPreset::Low);
        assert_eq!(back.trail_capacity, 1234);
        assert!(!back.trails);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let back: Settings = serde_json::from_str(r#"{"quality":"High"}"#).unwrap();
        assert_eq!(back.quality, QualityPreset::High);
        assert_eq!(back.trail_capacity, DEFAULT_TRAIL_CAPACITY);
        assert!(back.trails);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(QualityPreset::from_str("high"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::from_str("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
    }
}
