//! Settings file loading and comment-preserving divider write-back.

use std::path::{Path, PathBuf};

use log::{info, warn};
use toml_edit::{value, DocumentMut, Item, Table, Value};

use crate::{
    errors::SettingsError,
    main_panel::DividerSnapshot,
    settings::{position_to_stored, LayoutSettings, Settings},
};

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

fn set_table_value_preserving_decor(table: &mut Table, key: &str, item: Item) {
    let existing_value_decor = table
        .get(key)
        .and_then(|current| current.as_value().map(|value| value.decor().clone()));
    table[key] = item;
    if let Some(existing_value_decor) = existing_value_decor {
        if let Some(next_value) = table[key].as_value_mut() {
            *next_value.decor_mut() = existing_value_decor;
        }
    }
}

fn set_position_if_changed(table: &mut Table, key: &str, previous: f64, next: f64) {
    if table.contains_key(key) && previous == next {
        return;
    }
    set_table_value_preserving_decor(table, key, value(next));
}

fn ensure_section_table(document: &mut DocumentMut, key: &str) {
    let root = document.as_table_mut();
    if let Some(item) = root.get_mut(key) {
        if item.is_table() {
            return;
        }
        // `key = { ... }` keeps its entries as a regular table.
        if let Item::Value(Value::InlineTable(inline)) = std::mem::take(item) {
            *item = Item::Table(inline.into_table());
            return;
        }
    }
    root.insert(key, Item::Table(Table::new()));
}

fn write_layout_to_document(
    document: &mut DocumentMut,
    previous: &LayoutSettings,
    layout: &LayoutSettings,
) {
    ensure_section_table(document, "layout");
    let table = document["layout"]
        .as_table_mut()
        .expect("layout should be a table");
    set_position_if_changed(
        table,
        "main_divider_position",
        previous.main_divider_position,
        layout.main_divider_position,
    );
    set_position_if_changed(
        table,
        "preview_live_divider_position",
        previous.preview_live_divider_position,
        layout.preview_live_divider_position,
    );
    set_position_if_changed(
        table,
        "canvas_divider_position",
        previous.canvas_divider_position,
        layout.canvas_divider_position,
    );
    set_position_if_changed(
        table,
        "preview_divider_position",
        previous.preview_divider_position,
        layout.preview_divider_position,
    );
    set_position_if_changed(
        table,
        "library_divider_position",
        previous.library_divider_position,
        layout.library_divider_position,
    );
}

impl Settings {
    /// Returns a copy holding the sampled divider positions.
    ///
    /// The link preference is left as configured.
    pub fn with_divider_snapshot(&self, snapshot: &DividerSnapshot) -> Settings {
        Settings {
            layout: LayoutSettings {
                main_divider_position: position_to_stored(Some(snapshot.main)),
                preview_live_divider_position: position_to_stored(Some(snapshot.preview_live)),
                canvas_divider_position: position_to_stored(Some(snapshot.canvas)),
                preview_divider_position: position_to_stored(Some(snapshot.preview)),
                library_divider_position: position_to_stored(Some(snapshot.library)),
                link_preview_and_live_dividers: self.layout.link_preview_and_live_dividers,
            },
        }
    }
}

pub fn serialize_settings_with_preserved_comments(
    existing_text: &str,
    settings: &Settings,
) -> Result<String, SettingsError> {
    let previous = toml::from_str::<Settings>(existing_text)?;
    let mut document = existing_text.parse::<DocumentMut>()?;
    write_layout_to_document(&mut document, &previous.layout, &settings.layout);
    Ok(document.to_string())
}

pub fn write_settings_file(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let settings_text = match std::fs::read_to_string(path) {
        Ok(existing_text) => {
            match serialize_settings_with_preserved_comments(&existing_text, settings) {
                Ok(updated_text) => updated_text,
                Err(err) => {
                    warn!(
                        "Failed to preserve settings comments for {} ({}). Falling back to plain serialization.",
                        path.display(),
                        err
                    );
                    toml::to_string(settings)?
                }
            }
        }
        Err(_) => toml::to_string(settings)?,
    };

    std::fs::write(path, settings_text).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn system_settings_template_text() -> &'static str {
    include_str!("../config/settings.system.toml")
}

pub fn load_system_settings_template() -> Settings {
    match toml::from_str(system_settings_template_text()) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Bundled settings template is invalid. Using defaults. error={}", err);
            Settings::default()
        }
    }
}

pub fn read_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str::<Settings>(&content)?)
}

pub fn load_settings_file(path: &Path) -> Settings {
    match read_settings_file(path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("{}. Using settings system template.", err);
            load_system_settings_template()
        }
    }
}

/// Writes the bundled template when no settings file exists yet.
pub fn ensure_settings_file(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        return Ok(());
    }
    info!(
        "Settings file not found. Creating default settings. path={}",
        path.display()
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, system_settings_template_text()).map_err(|source| {
        SettingsError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chancel")
        .join(SETTINGS_FILE_NAME)
}
