use std::path::Path;

use scanform::config::{CONFIG_FILE_NAME, ScannerConfig};

#[cfg(feature = "gui")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use slint::ComponentHandle;
    use std::cell::RefCell;
    use std::rc::Rc;

    let config = ScannerConfig::load(Path::new(CONFIG_FILE_NAME))?;
    scanform::init_logging(&config.log_filter);
    tracing::info!(export_dir = %config.export_dir.display(), "configuration loaded");

    let session = Rc::new(RefCell::new(scanform::session::ScanSession::new()));
    let config = Rc::new(config);

    let ui = scanform::ui::MainWindow::new()?;

    let ui_handle = ui.as_weak();
    scanform::ui_setup::initialize_ui_and_data(&ui, &session, &config, &ui_handle);

    scanform::event_handlers::setup_event_handlers(session, config, &ui);

    ui.run()?;
    Ok(())
}

/// Headless mode: every stdin line is one scan followed by Enter.
#[cfg(not(feature = "gui"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::BufRead;

    use scanform::export::{self, XlsxWorkbookWriter};
    use scanform::session::{KeyOutcome, ScanSession};

    let config = ScannerConfig::load(Path::new(CONFIG_FILE_NAME))?;
    scanform::init_logging(&config.log_filter);

    let mut session = ScanSession::new();
    for line in std::io::stdin().lock().lines() {
        match session.submit_line(&line?) {
            KeyOutcome::Appended(entry) => println!("{}", serde_json::to_string(&entry)?),
            KeyOutcome::Rejected(_) | KeyOutcome::Typed => {}
        }
    }

    let path = export::export_to_dir(&config, session.entries(), &XlsxWorkbookWriter)?;
    println!("{}", path.display());
    Ok(())
}
