use crate::barcode;
use crate::errors::ScanError;
use crate::store::EntryStore;
use crate::types::{Entry, InputState, Keystroke};

/// What a keystroke or edit did to the session.
#[derive(Debug)]
pub enum KeyOutcome {
    /// Text changed (or nothing happened); no submission was attempted.
    Typed,
    /// Submission succeeded; the input is back to `Idle`.
    Appended(Entry),
    /// Submission failed; the input text is kept for correction.
    Rejected(ScanError),
}

/// Owns the entry store and the scan input for one form instance.
#[derive(Debug, Default)]
pub struct ScanSession {
    store: EntryStore,
    input: InputState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn state(&self) -> &InputState {
        &self.input
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Replaces the input with the normalized form of `raw`.
    pub fn input_changed(&mut self, raw: &str) -> &str {
        let normalized = barcode::normalize(raw);
        if normalized != raw {
            tracing::debug!(raw, normalized = %normalized, "normalized scan input");
        }
        self.input = InputState::from_text(normalized);
        self.input.text()
    }

    pub fn key_pressed(&mut self, key: Keystroke) -> KeyOutcome {
        match key {
            Keystroke::Enter | Keystroke::Space => match self.submit() {
                Ok(entry) => KeyOutcome::Appended(entry),
                Err(err) => KeyOutcome::Rejected(err),
            },
            Keystroke::Other => {
                tracing::debug!(?key, "keystroke ignored");
                KeyOutcome::Typed
            }
        }
    }

    /// Handles a full-text edit from a line widget. Enter and Space never
    /// reach here; the window captures them and calls [`Self::key_pressed`].
    pub fn edited(&mut self, raw: &str) -> KeyOutcome {
        self.input_changed(raw);
        KeyOutcome::Typed
    }

    /// One scanned line followed by Enter. A trailing `\r` from CRLF input is dropped.
    pub fn submit_line(&mut self, line: &str) -> KeyOutcome {
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.input_changed(line);
        self.key_pressed(Keystroke::Enter)
    }

    /// Parses the current text and appends it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Unparseable`] when the text does not match; the
    /// input is left untouched and no entry is created.
    pub fn submit(&mut self) -> Result<Entry, ScanError> {
        let parsed = match barcode::parse(self.input.text()) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(text = self.input.text(), "invalid scan data format");
                return Err(err);
            }
        };
        let entry = self.store.append(parsed).clone();
        tracing::info!(
            id = entry.id,
            serial_number = %entry.serial_number,
            has_link = entry.link.is_some(),
            "scan recorded"
        );
        self.input = InputState::Idle;
        Ok(entry)
    }
}
