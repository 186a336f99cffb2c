//! Restores saved divider positions onto the main panel.

use log::debug;

use crate::{main_panel::MainPanel, settings::DividerSettings};

/// Main splitter positions used unless both are saved.
pub const DEFAULT_MAIN_DIVIDER_POSITIONS: [f64; 2] = [0.2717, 0.6384];
/// Schedule/library divider used when none is saved.
pub const DEFAULT_LIBRARY_DIVIDER_POSITION: f64 = 0.5;

/// Applies saved positions, falling back to defaults for missing values.
///
/// Inner dividers without a saved value keep their current position.
pub fn apply_configured_positions(panel: &MainPanel, settings: &dyn DividerSettings) {
    let linked = settings.link_preview_and_live_dividers();
    let canvas_position = settings.canvas_divider_position();
    let preview_position = settings.preview_divider_position();

    // A lone saved main position is discarded along with the missing one.
    match (
        settings.main_divider_position(),
        settings.preview_live_divider_position(),
    ) {
        (Some(main), Some(preview_live)) => {
            debug!(
                "Restoring main dividers main={} preview_live={}",
                main, preview_live
            );
            panel.main_split().set_divider_positions(&[main, preview_live]);
        }
        _ => {
            debug!("Main dividers not fully saved. Using defaults");
            panel
                .main_split()
                .set_divider_positions(&DEFAULT_MAIN_DIVIDER_POSITIONS);
        }
    }

    if let Some(canvas) = canvas_position {
        if linked || preview_position.is_none() {
            debug!("Restoring preview and live dividers to {}", canvas);
            panel.preview_divider().set(canvas);
            panel.live_divider().set(canvas);
        } else {
            debug!("Restoring live divider to {}", canvas);
            panel.live_divider().set(canvas);
        }
    }

    // Linked dividers already hold the live value.
    if let Some(preview) = preview_position.filter(|_| !linked) {
        debug!("Restoring preview divider to {}", preview);
        panel.preview_divider().set(preview);
    }

    let library = settings
        .library_divider_position()
        .unwrap_or(DEFAULT_LIBRARY_DIVIDER_POSITION);
    panel
        .schedule_and_library()
        .set_divider_positions(&[library]);
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LIBRARY_DIVIDER_POSITION, DEFAULT_MAIN_DIVIDER_POSITIONS};
    use crate::{
        main_panel::{MainPanel, DEFAULT_INNER_DIVIDER_POSITION},
        panels::DefaultPanelFactory,
        settings::DividerSettings,
    };

    #[derive(Debug, Clone, Copy, Default)]
    struct StaticSettings {
        main: Option<f64>,
        preview_live: Option<f64>,
        canvas: Option<f64>,
        preview: Option<f64>,
        library: Option<f64>,
        link: bool,
    }

    impl DividerSettings for StaticSettings {
        fn main_divider_position(&self) -> Option<f64> {
            self.main
        }

        fn preview_live_divider_position(&self) -> Option<f64> {
            self.preview_live
        }

        fn canvas_divider_position(&self) -> Option<f64> {
            self.canvas
        }

        fn preview_divider_position(&self) -> Option<f64> {
            self.preview
        }

        fn library_divider_position(&self) -> Option<f64> {
            self.library
        }

        fn link_preview_and_live_dividers(&self) -> bool {
            self.link
        }
    }

    fn restored(settings: StaticSettings) -> MainPanel {
        let panel =
            MainPanel::new(&DefaultPanelFactory, &settings).expect("main panel should build");
        panel.apply_configured_positions(&settings);
        panel
    }

    fn saved_main_and_canvas(link: bool) -> StaticSettings {
        StaticSettings {
            main: Some(0.30),
            preview_live: Some(0.65),
            canvas: Some(0.55),
            preview: None,
            library: Some(0.40),
            link,
        }
    }

    #[test]
    fn test_nothing_saved_uses_defaults_and_keeps_inner_dividers() {
        let panel = restored(StaticSettings::default());
        assert_eq!(
            panel.main_split().divider_positions(),
            DEFAULT_MAIN_DIVIDER_POSITIONS.to_vec()
        );
        assert_eq!(panel.preview_divider().get(), DEFAULT_INNER_DIVIDER_POSITION);
        assert_eq!(panel.live_divider().get(), DEFAULT_INNER_DIVIDER_POSITION);
        assert_eq!(panel.library_div_pos(), DEFAULT_LIBRARY_DIVIDER_POSITION);
    }

    #[test]
    fn test_linked_canvas_position_moves_both_inner_dividers() {
        let panel = restored(saved_main_and_canvas(true));
        assert_eq!(panel.main_div_pos(), 0.30);
        assert_eq!(panel.prev_live_div_pos(), 0.65);
        assert_eq!(panel.preview_divider().get(), 0.55);
        assert_eq!(panel.live_divider().get(), 0.55);
        assert_eq!(panel.library_div_pos(), 0.40);
    }

    #[test]
    fn test_unlinked_canvas_without_preview_moves_both_inner_dividers() {
        let panel = restored(saved_main_and_canvas(false));
        assert_eq!(panel.main_div_pos(), 0.30);
        assert_eq!(panel.prev_live_div_pos(), 0.65);
        assert_eq!(panel.live_divider().get(), 0.55);
        assert_eq!(panel.preview_divider().get(), 0.55);
        assert_eq!(panel.library_div_pos(), 0.40);
    }

    #[test]
    fn test_unlinked_preview_position_is_restored_separately() {
        let panel = restored(StaticSettings {
            preview: Some(0.70),
            ..saved_main_and_canvas(false)
        });
        assert_eq!(panel.live_divider().get(), 0.55);
        assert_eq!(panel.preview_divider().get(), 0.70);
    }

    #[test]
    fn test_linked_dividers_ignore_saved_preview_position() {
        let panel = restored(StaticSettings {
            preview: Some(0.70),
            ..saved_main_and_canvas(true)
        });
        assert_eq!(panel.live_divider().get(), 0.55);
        assert_eq!(panel.preview_divider().get(), 0.55);
    }

    #[test]
    fn test_partial_main_positions_fall_back_to_defaults() {
        for (main, preview_live) in [(None, Some(0.65)), (Some(0.30), None)] {
            let panel = restored(StaticSettings {
                main,
                preview_live,
                ..StaticSettings::default()
            });
            assert_eq!(
                panel.main_split().divider_positions(),
                DEFAULT_MAIN_DIVIDER_POSITIONS.to_vec()
            );
        }
    }

    #[test]
    fn test_preview_only_restores_preview_when_unlinked() {
        let panel = restored(StaticSettings {
            preview: Some(0.33),
            ..StaticSettings::default()
        });
        assert_eq!(panel.preview_divider().get(), 0.33);
        assert_eq!(panel.live_divider().get(), DEFAULT_INNER_DIVIDER_POSITION);
    }

    #[test]
    fn test_restore_from_sentinel_backed_settings() {
        let settings: crate::settings::Settings = toml::from_str(
            r#"
[layout]
main_divider_position = -1.0
preview_live_divider_position = 0.65
canvas_divider_position = 0.55
library_divider_position = -1.0
link_preview_and_live_dividers = true
"#,
        )
        .expect("settings should parse");
        let panel =
            MainPanel::new(&DefaultPanelFactory, &settings).expect("main panel should build");
        panel.apply_configured_positions(&settings);

        assert_eq!(
            panel.main_split().divider_positions(),
            DEFAULT_MAIN_DIVIDER_POSITIONS.to_vec()
        );
        assert_eq!(panel.preview_divider().get(), 0.55);
        assert_eq!(panel.live_divider().get(), 0.55);
        assert_eq!(panel.library_div_pos(), DEFAULT_LIBRARY_DIVIDER_POSITION);
    }
}
