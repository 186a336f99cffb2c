//! Fixed-content split panes and the identities of the regions they hold.

use std::{fmt, rc::Rc};

use log::debug;

use crate::{
    divider::DividerPosition,
    panels::{LibraryPanel, LivePanel, PreviewPanel, SchedulePanel, StatusPanelGroup},
};

/// Split orientation. Horizontal panes sit left to right, vertical top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

/// Stable identity of anything placeable in a layout region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneKind {
    Schedule,
    Library,
    Preview,
    Live,
    StatusBar,
    LyricsList,
    DisplayCanvas,
    Splitter(SplitAxis),
}

impl PaneKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Library => "library",
            Self::Preview => "preview",
            Self::Live => "live",
            Self::StatusBar => "status",
            Self::LyricsList => "lyrics list",
            Self::DisplayCanvas => "display canvas",
            Self::Splitter(SplitAxis::Horizontal) => "horizontal split",
            Self::Splitter(SplitAxis::Vertical) => "vertical split",
        }
    }
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One placed region. Panels are shared with their owner for accessors.
#[derive(Debug, Clone)]
pub enum Pane {
    Schedule(Rc<SchedulePanel>),
    Library(Rc<LibraryPanel>),
    Preview(Rc<PreviewPanel>),
    Live(Rc<LivePanel>),
    Status(Rc<StatusPanelGroup>),
    Split(Rc<SplitPane>),
    /// Opaque leaf owned by a panel's internals.
    Leaf(PaneKind),
}

impl Pane {
    pub fn kind(&self) -> PaneKind {
        match self {
            Self::Schedule(_) => PaneKind::Schedule,
            Self::Library(_) => PaneKind::Library,
            Self::Preview(_) => PaneKind::Preview,
            Self::Live(_) => PaneKind::Live,
            Self::Status(_) => PaneKind::StatusBar,
            Self::Split(split) => PaneKind::Splitter(split.axis()),
            Self::Leaf(kind) => *kind,
        }
    }

    /// Header title for panels, kind label for everything else.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Schedule(panel) => panel.title(),
            Self::Library(panel) => panel.title(),
            Self::Preview(panel) => panel.title(),
            Self::Live(panel) => panel.title(),
            Self::Status(panel) => panel.title(),
            Self::Split(_) | Self::Leaf(_) => self.kind().label(),
        }
    }

    /// One-line outline of this pane and, for splitters, its children.
    pub fn describe(&self) -> String {
        match self.as_split() {
            Some(split) => {
                let children: Vec<String> = split.items().iter().map(Pane::describe).collect();
                format!("{} [{}]", self.title(), children.join(", "))
            }
            None => self.title().to_string(),
        }
    }

    pub fn as_split(&self) -> Option<&Rc<SplitPane>> {
        match self {
            Self::Split(split) => Some(split),
            _ => None,
        }
    }
}

/// A splitter whose panes are fixed at construction.
///
/// A splitter with `n` panes exposes `n - 1` dividers, initially spaced
/// evenly. Pane identity and order never change afterwards.
#[derive(Debug)]
pub struct SplitPane {
    axis: SplitAxis,
    min_width_px: Option<f64>,
    items: Vec<Pane>,
    dividers: Vec<Rc<DividerPosition>>,
}

impl SplitPane {
    pub fn new(axis: SplitAxis, items: Vec<Pane>) -> Self {
        let pane_count = items.len();
        let dividers = (1..pane_count)
            .map(|index| DividerPosition::new(index as f64 / pane_count as f64))
            .collect();
        Self {
            axis,
            min_width_px: None,
            items,
            dividers,
        }
    }

    pub fn with_min_width(mut self, min_width_px: f64) -> Self {
        self.min_width_px = Some(min_width_px.max(0.0));
        self
    }

    pub fn axis(&self) -> SplitAxis {
        self.axis
    }

    pub fn min_width(&self) -> Option<f64> {
        self.min_width_px
    }

    pub fn items(&self) -> &[Pane] {
        &self.items
    }

    pub fn item_kinds(&self) -> Vec<PaneKind> {
        self.items.iter().map(Pane::kind).collect()
    }

    pub fn dividers(&self) -> &[Rc<DividerPosition>] {
        &self.dividers
    }

    pub fn divider(&self, index: usize) -> Option<&Rc<DividerPosition>> {
        self.dividers.get(index)
    }

    pub fn divider_positions(&self) -> Vec<f64> {
        self.dividers.iter().map(|divider| divider.get()).collect()
    }

    /// Assigns the leading dividers in order. Extra positions are ignored.
    pub fn set_divider_positions(&self, positions: &[f64]) {
        if positions.len() > self.dividers.len() {
            debug!(
                "Ignoring {} extra divider position(s) for {} splitter",
                positions.len() - self.dividers.len(),
                PaneKind::Splitter(self.axis)
            );
        }
        for (divider, position) in self.dividers.iter().zip(positions) {
            divider.set(*position);
        }
    }
}
