mod divider;
mod divider_restore;
mod errors;
mod main_panel;
mod panels;
mod settings;
mod settings_persistence;
mod splitter;

use std::path::PathBuf;

use log::{debug, error, info};
use main_panel::MainPanel;
use panels::DefaultPanelFactory;
use settings_persistence::{
    default_settings_path, ensure_settings_file, load_settings_file, write_settings_file,
};

fn log_layout(main_panel: &MainPanel) {
    debug!("Center region: {}", main_panel.regions().center().describe());
    debug!("Bottom region: {}", main_panel.regions().bottom().describe());
    debug!(
        "Panels: {}, {}, {}, {}, {}",
        main_panel.schedule_panel().title(),
        main_panel.library_panel().title(),
        main_panel.preview_panel().title(),
        main_panel.live_panel().title(),
        main_panel.status_panel_group().title()
    );
    debug!(
        "Stage splitters: preview {:?}, live {:?}",
        main_panel.preview_panel().lyrics_panel().split_pane().item_kinds(),
        main_panel.live_panel().lyrics_panel().split_pane().item_kinds()
    );
    debug!(
        "Main splitter positions {:?}",
        main_panel.main_split().divider_positions()
    );
    if let Some(min_width) = main_panel.schedule_and_library().min_width() {
        debug!("Schedule/library column min width {}px", min_width);
    }
    info!(
        "Dividers main={:.4} preview_live={:.4} library={:.4} preview={:.4} live={:.4} linked={}",
        main_panel.main_div_pos(),
        main_panel.prev_live_div_pos(),
        main_panel.library_div_pos(),
        main_panel.preview_divider().get(),
        main_panel.live_divider().get(),
        main_panel.preview_and_live_linked()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Debug);
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let settings_file = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_settings_path);
    ensure_settings_file(&settings_file)?;
    let settings = load_settings_file(&settings_file);

    let main_panel = MainPanel::new(&DefaultPanelFactory, &settings)?;
    main_panel.apply_configured_positions(&settings);
    log_layout(&main_panel);

    // Window closing: sample the dividers and save them for next session.
    let snapshot = main_panel.divider_snapshot();
    match write_settings_file(&settings.with_divider_snapshot(&snapshot), &settings_file) {
        Ok(()) => info!("Saved divider positions. path={}", settings_file.display()),
        Err(err) => error!("Failed to persist settings: {}", err),
    }
    Ok(())
}
