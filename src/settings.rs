//! Persisted window settings and the divider view consumed by the layout.

/// Stored value meaning "no position saved yet".
pub const UNSET_DIVIDER_POSITION: f64 = -1.0;

/// Read-only source of saved divider positions.
///
/// `None` means no position was saved; callers pick their own default.
pub trait DividerSettings {
    fn main_divider_position(&self) -> Option<f64>;
    fn preview_live_divider_position(&self) -> Option<f64>;
    /// Live (and, when linked, preview) inner divider.
    fn canvas_divider_position(&self) -> Option<f64>;
    fn preview_divider_position(&self) -> Option<f64>;
    fn library_divider_position(&self) -> Option<f64>;
    fn link_preview_and_live_dividers(&self) -> bool;
}

/// Root settings persisted to `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default)]
    /// Main window divider state.
    pub layout: LayoutSettings,
}

/// Divider positions stored with the `-1` sentinel for "unset".
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LayoutSettings {
    #[serde(default = "default_unset_position")]
    pub main_divider_position: f64,
    #[serde(default = "default_unset_position")]
    pub preview_live_divider_position: f64,
    #[serde(default = "default_unset_position")]
    pub canvas_divider_position: f64,
    #[serde(default = "default_unset_position")]
    pub preview_divider_position: f64,
    #[serde(default = "default_unset_position")]
    pub library_divider_position: f64,
    #[serde(default = "default_true")]
    pub link_preview_and_live_dividers: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            main_divider_position: UNSET_DIVIDER_POSITION,
            preview_live_divider_position: UNSET_DIVIDER_POSITION,
            canvas_divider_position: UNSET_DIVIDER_POSITION,
            preview_divider_position: UNSET_DIVIDER_POSITION,
            library_divider_position: UNSET_DIVIDER_POSITION,
            link_preview_and_live_dividers: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_unset_position() -> f64 {
    UNSET_DIVIDER_POSITION
}

/// Converts a stored value to an optional position.
///
/// Negative and non-finite values read as unset; anything above 1.0 is
/// clamped.
pub fn position_from_stored(stored: f64) -> Option<f64> {
    if !stored.is_finite() || stored < 0.0 {
        return None;
    }
    Some(stored.min(1.0))
}

/// Converts an optional position back to its stored form.
pub fn position_to_stored(position: Option<f64>) -> f64 {
    position
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
        .unwrap_or(UNSET_DIVIDER_POSITION)
}

impl DividerSettings for LayoutSettings {
    fn main_divider_position(&self) -> Option<f64> {
        position_from_stored(self.main_divider_position)
    }

    fn preview_live_divider_position(&self) -> Option<f64> {
        position_from_stored(self.preview_live_divider_position)
    }

    fn canvas_divider_position(&self) -> Option<f64> {
        position_from_stored(self.canvas_divider_position)
    }

    fn preview_divider_position(&self) -> Option<f64> {
        position_from_stored(self.preview_divider_position)
    }

    fn library_divider_position(&self) -> Option<f64> {
        position_from_stored(self.library_divider_position)
    }

    fn link_preview_and_live_dividers(&self) -> bool {
        self.link_preview_and_live_dividers
    }
}

impl DividerSettings for Settings {
    fn main_divider_position(&self) -> Option<f64> {
        self.layout.main_divider_position()
    }

    fn preview_live_divider_position(&self) -> Option<f64> {
        self.layout.preview_live_divider_position()
    }

    fn canvas_divider_position(&self) -> Option<f64> {
        self.layout.canvas_divider_position()
    }

    fn preview_divider_position(&self) -> Option<f64> {
        self.layout.preview_divider_position()
    }

    fn library_divider_position(&self) -> Option<f64> {
        self.layout.library_divider_position()
    }

    fn link_preview_and_live_dividers(&self) -> bool {
        self.layout.link_preview_and_live_dividers()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        position_from_stored, position_to_stored, DividerSettings, LayoutSettings, Settings,
        UNSET_DIVIDER_POSITION,
    };

    #[test]
    fn test_default_settings_have_no_saved_positions_and_link_enabled() {
        let settings = Settings::default();
        assert_eq!(settings.main_divider_position(), None);
        assert_eq!(settings.preview_live_divider_position(), None);
        assert_eq!(settings.canvas_divider_position(), None);
        assert_eq!(settings.preview_divider_position(), None);
        assert_eq!(settings.library_divider_position(), None);
        assert!(settings.link_preview_and_live_dividers());
    }

    #[test]
    fn test_sentinel_and_malformed_values_read_as_unset() {
        assert_eq!(position_from_stored(UNSET_DIVIDER_POSITION), None);
        assert_eq!(position_from_stored(-0.25), None);
        assert_eq!(position_from_stored(f64::NAN), None);
        assert_eq!(position_from_stored(0.0), Some(0.0));
        assert_eq!(position_from_stored(0.4), Some(0.4));
        assert_eq!(position_from_stored(3.0), Some(1.0));
    }

    #[test]
    fn test_position_to_stored_uses_sentinel_for_none() {
        assert_eq!(position_to_stored(None), UNSET_DIVIDER_POSITION);
        assert_eq!(position_to_stored(Some(f64::NAN)), UNSET_DIVIDER_POSITION);
        assert_eq!(position_to_stored(Some(0.3)), 0.3);
        assert_eq!(position_to_stored(Some(1.2)), 1.0);
    }

    #[test]
    fn test_partial_layout_table_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[layout]
main_divider_position = 0.3
link_preview_and_live_dividers = false
"#,
        )
        .expect("partial settings should parse");
        assert_eq!(settings.main_divider_position(), Some(0.3));
        assert_eq!(settings.preview_live_divider_position(), None);
        assert!(!settings.link_preview_and_live_dividers());
        assert_eq!(
            settings.layout,
            LayoutSettings {
                main_divider_position: 0.3,
                link_preview_and_live_dividers: false,
                ..LayoutSettings::default()
            }
        );
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let settings: Settings = toml::from_str("").expect("empty settings should parse");
        assert_eq!(settings, Settings::default());
    }
}
