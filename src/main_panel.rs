//! Main window body: schedule and library on the left, preview and live
//! stages to the right, status strip along the bottom.

use std::rc::Rc;

use log::info;

use crate::{
    divider::{DividerBinding, DividerPosition},
    errors::LayoutError,
    panels::{LibraryPanel, LivePanel, PanelFactory, PreviewPanel, SchedulePanel, StatusPanelGroup},
    settings::DividerSettings,
    splitter::{Pane, SplitAxis, SplitPane},
};

/// Minimum width of the schedule/library column.
pub const SIDE_COLUMN_MIN_WIDTH_PX: f64 = 160.0;
/// Initial position of the preview and live inner dividers.
pub const DEFAULT_INNER_DIVIDER_POSITION: f64 = 0.58;

/// Border-style root with a center and a bottom region.
#[derive(Debug)]
pub struct BorderRegions {
    center: Pane,
    bottom: Pane,
}

impl BorderRegions {
    pub fn center(&self) -> &Pane {
        &self.center
    }

    pub fn bottom(&self) -> &Pane {
        &self.bottom
    }
}

/// Divider positions sampled when the window closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerSnapshot {
    pub main: f64,
    pub preview_live: f64,
    pub library: f64,
    pub canvas: f64,
    pub preview: f64,
}

/// The main window layout. All regions are fixed after construction.
#[derive(Debug)]
pub struct MainPanel {
    regions: BorderRegions,
    schedule_panel: Rc<SchedulePanel>,
    library_panel: Rc<LibraryPanel>,
    preview_panel: Rc<PreviewPanel>,
    live_panel: Rc<LivePanel>,
    status_panel_group: Rc<StatusPanelGroup>,
    main_split: Rc<SplitPane>,
    schedule_and_library: Rc<SplitPane>,
    main_divider: Rc<DividerPosition>,
    preview_live_divider: Rc<DividerPosition>,
    library_divider: Rc<DividerPosition>,
    inner_divider_link: Option<DividerBinding>,
}

impl MainPanel {
    /// Builds the layout, linking the inner dividers when `settings` asks for it.
    pub fn new(
        factory: &dyn PanelFactory,
        settings: &dyn DividerSettings,
    ) -> Result<Self, LayoutError> {
        info!("Creating schedule panel");
        let schedule_panel = Rc::new(factory.schedule_panel()?);
        info!("Creating library panel");
        let library_panel = Rc::new(factory.library_panel()?);
        info!("Creating preview panel");
        let preview_panel = Rc::new(factory.preview_panel()?);
        info!("Creating live panel");
        let live_panel = Rc::new(factory.live_panel()?);

        info!("Creating split panels");
        let schedule_and_library = Rc::new(
            SplitPane::new(
                SplitAxis::Vertical,
                vec![
                    Pane::Schedule(Rc::clone(&schedule_panel)),
                    Pane::Library(Rc::clone(&library_panel)),
                ],
            )
            .with_min_width(SIDE_COLUMN_MIN_WIDTH_PX),
        );
        let library_divider = divider_at(&schedule_and_library, "schedule/library splitter", 0)?;

        let preview_divider = preview_panel.lyrics_panel().divider();
        let live_divider = live_panel.lyrics_panel().divider();
        let inner_divider_link = if settings.link_preview_and_live_dividers() {
            info!("Linking preview and live dividers");
            Some(DividerBinding::bind(preview_divider, live_divider))
        } else {
            None
        };
        preview_divider.set(DEFAULT_INNER_DIVIDER_POSITION);
        live_divider.set(DEFAULT_INNER_DIVIDER_POSITION);

        let main_split = Rc::new(SplitPane::new(
            SplitAxis::Horizontal,
            vec![
                Pane::Split(Rc::clone(&schedule_and_library)),
                Pane::Preview(Rc::clone(&preview_panel)),
                Pane::Live(Rc::clone(&live_panel)),
            ],
        ));
        let main_divider = divider_at(&main_split, "main splitter", 0)?;
        let preview_live_divider = divider_at(&main_split, "main splitter", 1)?;

        let status_panel_group = Rc::new(factory.status_panel_group()?);
        let regions = BorderRegions {
            center: Pane::Split(Rc::clone(&main_split)),
            bottom: Pane::Status(Rc::clone(&status_panel_group)),
        };
        info!("Created main panel");

        Ok(Self {
            regions,
            schedule_panel,
            library_panel,
            preview_panel,
            live_panel,
            status_panel_group,
            main_split,
            schedule_and_library,
            main_divider,
            preview_live_divider,
            library_divider,
            inner_divider_link,
        })
    }

    /// Restores divider positions saved in `settings`.
    pub fn apply_configured_positions(&self, settings: &dyn DividerSettings) {
        crate::divider_restore::apply_configured_positions(self, settings);
    }

    pub fn regions(&self) -> &BorderRegions {
        &self.regions
    }

    pub fn main_split(&self) -> &Rc<SplitPane> {
        &self.main_split
    }

    pub fn schedule_and_library(&self) -> &Rc<SplitPane> {
        &self.schedule_and_library
    }

    /// Leftmost divider of the main splitter.
    pub fn main_div_pos(&self) -> f64 {
        self.main_divider.get()
    }

    /// Divider between the preview and live stages.
    pub fn prev_live_div_pos(&self) -> f64 {
        self.preview_live_divider.get()
    }

    /// Divider between the schedule and the library.
    pub fn library_div_pos(&self) -> f64 {
        self.library_divider.get()
    }

    pub fn preview_divider(&self) -> &Rc<DividerPosition> {
        self.preview_panel.lyrics_panel().divider()
    }

    pub fn live_divider(&self) -> &Rc<DividerPosition> {
        self.live_panel.lyrics_panel().divider()
    }

    pub fn preview_and_live_linked(&self) -> bool {
        self.inner_divider_link
            .as_ref()
            .is_some_and(DividerBinding::is_active)
    }

    pub fn schedule_panel(&self) -> &Rc<SchedulePanel> {
        &self.schedule_panel
    }

    pub fn library_panel(&self) -> &Rc<LibraryPanel> {
        &self.library_panel
    }

    pub fn preview_panel(&self) -> &Rc<PreviewPanel> {
        &self.preview_panel
    }

    pub fn live_panel(&self) -> &Rc<LivePanel> {
        &self.live_panel
    }

    pub fn status_panel_group(&self) -> &Rc<StatusPanelGroup> {
        &self.status_panel_group
    }

    /// Samples every persisted divider, typically when the window closes.
    pub fn divider_snapshot(&self) -> DividerSnapshot {
        DividerSnapshot {
            main: self.main_div_pos(),
            preview_live: self.prev_live_div_pos(),
            library: self.library_div_pos(),
            canvas: self.live_divider().get(),
            preview: self.preview_divider().get(),
        }
    }
}

fn divider_at(
    split: &SplitPane,
    splitter: &'static str,
    index: usize,
) -> Result<Rc<DividerPosition>, LayoutError> {
    split
        .divider(index)
        .cloned()
        .ok_or(LayoutError::MissingDivider { splitter, index })
}
