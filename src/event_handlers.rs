use std::cell::RefCell;
use std::rc::Rc;

use slint::ComponentHandle;

use crate::config::ScannerConfig;
use crate::entry_display::refresh_entries;
use crate::export::{self, XlsxWorkbookWriter};
use crate::session::{KeyOutcome, ScanSession};
use crate::types::Keystroke;
use crate::utils::open_external;

pub fn setup_event_handlers(
    session: Rc<RefCell<ScanSession>>,
    config: Rc<ScannerConfig>,
    ui: &crate::ui::MainWindow,
) {
    let ui_handle = ui.as_weak();

    let session_edit = session.clone();
    let ui_handle_edit = ui_handle.clone();
    ui.on_scan_edited(move |text| {
        let outcome = session_edit.borrow_mut().edited(&text);
        apply_outcome(outcome, &session_edit, &ui_handle_edit);
    });

    let session_key = session.clone();
    let ui_handle_key = ui_handle.clone();
    ui.on_scan_key(move |text| {
        let key = Keystroke::from_key_text(&text);
        if key == Keystroke::Other {
            return false;
        }
        let outcome = session_key.borrow_mut().key_pressed(key);
        apply_outcome(outcome, &session_key, &ui_handle_key);
        true
    });

    let session_export = session.clone();
    let ui_handle_export = ui_handle.clone();
    ui.on_export_requested(move || {
        let Some(ui) = ui_handle_export.upgrade() else {
            return;
        };
        let result = {
            let session = session_export.borrow();
            export::export_to_dir(&config, session.entries(), &XlsxWorkbookWriter)
        };
        match result {
            Ok(path) => {
                ui.set_status_message(format!("Файл сохранён: {}", path.display()).into());
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                ui.set_status_message(format!("Ошибка экспорта: {}", e).into());
            }
        }
    });

    let ui_handle_link = ui_handle.clone();
    ui.on_open_link(move |link| {
        if link.is_empty() {
            return;
        }
        if let Err(e) = open_external(link.as_str()) {
            tracing::error!(error = %e, link = %link, "cannot open link");
            if let Some(ui) = ui_handle_link.upgrade() {
                ui.set_status_message(format!("Не удалось открыть ссылку: {}", e).into());
            }
        }
    });
}

fn apply_outcome(
    outcome: KeyOutcome,
    session: &Rc<RefCell<ScanSession>>,
    ui_handle: &slint::Weak<crate::ui::MainWindow>,
) {
    match outcome {
        KeyOutcome::Appended(_) => refresh_entries(session, ui_handle),
        KeyOutcome::Typed | KeyOutcome::Rejected(_) => {
            // Field always shows the canonical text.
            if let Some(ui) = ui_handle.upgrade() {
                ui.set_scan_text(session.borrow().text().into());
            }
        }
    }
}
