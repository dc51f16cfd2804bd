use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ScannerConfig;
use crate::entry_display::refresh_entries;
use crate::session::ScanSession;

pub fn initialize_ui_and_data(
    ui: &crate::ui::MainWindow,
    session: &Rc<RefCell<ScanSession>>,
    config: &ScannerConfig,
    ui_handle: &slint::Weak<crate::ui::MainWindow>,
) {
    ui.set_status_message(
        format!("Файл будет сохранён в {}", config.export_dir.display()).into(),
    );

    // Empty table and field
    refresh_entries(session, ui_handle);
}
