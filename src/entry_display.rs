use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

use crate::session::ScanSession;
use crate::ui::EntryRow;
use crate::utils::link_label;

pub fn refresh_entries(session: &Rc<RefCell<ScanSession>>, ui_handle: &slint::Weak<crate::ui::MainWindow>) {
    if let Some(ui) = ui_handle.upgrade() {
        let session = session.borrow();
        let rows: Vec<EntryRow> = session
            .entries()
            .iter()
            .map(|entry| EntryRow {
                id: i32::try_from(entry.id).unwrap_or(i32::MAX),
                serial_number: SharedString::from(entry.serial_number.as_str()),
                link: SharedString::from(entry.link.as_deref().unwrap_or("")),
                has_link: entry.link.is_some(),
                link_label: SharedString::from(link_label(entry.link.as_deref())),
            })
            .collect();
        ui.set_entries(Rc::new(slint::VecModel::from(rows)).into());
        ui.set_scan_text(SharedString::from(session.text()));
    }
}
