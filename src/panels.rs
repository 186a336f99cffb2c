//! Child panels of the main window and the factory that builds them.
//!
//! Each panel is an opaque placeable region here. The preview and live
//! panels also expose the splitter between their lyrics list and display
//! canvas.

use std::rc::Rc;

use crate::{
    divider::DividerPosition,
    errors::LayoutError,
    splitter::{Pane, PaneKind, SplitAxis, SplitPane},
};

/// Order-of-service list.
#[derive(Debug, Default)]
pub struct SchedulePanel;

impl SchedulePanel {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> &'static str {
        "Order of Service"
    }
}

/// Media library browser.
#[derive(Debug, Default)]
pub struct LibraryPanel;

impl LibraryPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> &'static str {
        "Library"
    }
}

/// Status strip docked below the main splitter.
#[derive(Debug, Default)]
pub struct StatusPanelGroup;

impl StatusPanelGroup {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> &'static str {
        "Status"
    }
}

/// Lyrics list above a display canvas, separated by one divider.
#[derive(Debug)]
pub struct LyricsPanel {
    split_pane: Rc<SplitPane>,
    divider: Rc<DividerPosition>,
}

impl LyricsPanel {
    pub fn new() -> Result<Self, LayoutError> {
        let split_pane = Rc::new(SplitPane::new(
            SplitAxis::Vertical,
            vec![
                Pane::Leaf(PaneKind::LyricsList),
                Pane::Leaf(PaneKind::DisplayCanvas),
            ],
        ));
        let divider = split_pane
            .divider(0)
            .cloned()
            .ok_or(LayoutError::MissingDivider {
                splitter: "lyrics panel",
                index: 0,
            })?;
        Ok(Self {
            split_pane,
            divider,
        })
    }

    pub fn split_pane(&self) -> &Rc<SplitPane> {
        &self.split_pane
    }

    /// First divider of the inner splitter.
    pub fn divider(&self) -> &Rc<DividerPosition> {
        &self.divider
    }
}

/// Stage showing the item about to go live.
#[derive(Debug)]
pub struct PreviewPanel {
    lyrics_panel: LyricsPanel,
}

impl PreviewPanel {
    pub fn new() -> Result<Self, LayoutError> {
        Ok(Self {
            lyrics_panel: LyricsPanel::new()?,
        })
    }

    pub fn title(&self) -> &'static str {
        "Preview"
    }

    pub fn lyrics_panel(&self) -> &LyricsPanel {
        &self.lyrics_panel
    }
}

/// Stage mirroring what is on the projector.
#[derive(Debug)]
pub struct LivePanel {
    lyrics_panel: LyricsPanel,
}

impl LivePanel {
    pub fn new() -> Result<Self, LayoutError> {
        Ok(Self {
            lyrics_panel: LyricsPanel::new()?,
        })
    }

    pub fn title(&self) -> &'static str {
        "Live"
    }

    pub fn lyrics_panel(&self) -> &LyricsPanel {
        &self.lyrics_panel
    }
}

/// Builds the main window's child panels.
///
/// The main panel calls these in a fixed order and aborts on the first
/// error.
pub trait PanelFactory {
    fn schedule_panel(&self) -> Result<SchedulePanel, LayoutError>;
    fn library_panel(&self) -> Result<LibraryPanel, LayoutError>;
    fn preview_panel(&self) -> Result<PreviewPanel, LayoutError>;
    fn live_panel(&self) -> Result<LivePanel, LayoutError>;
    fn status_panel_group(&self) -> Result<StatusPanelGroup, LayoutError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPanelFactory;

impl PanelFactory for DefaultPanelFactory {
    fn schedule_panel(&self) -> Result<SchedulePanel, LayoutError> {
        Ok(SchedulePanel::new())
    }

    fn library_panel(&self) -> Result<LibraryPanel, LayoutError> {
        Ok(LibraryPanel::new())
    }

    fn preview_panel(&self) -> Result<PreviewPanel, LayoutError> {
        PreviewPanel::new()
    }

    fn live_panel(&self) -> Result<LivePanel, LayoutError> {
        LivePanel::new()
    }

    fn status_panel_group(&self) -> Result<StatusPanelGroup, LayoutError> {
        Ok(StatusPanelGroup::new())
    }
}
