use crate::types::{Entry, ParsedScan};

/// Append-only list of scanned entries. Ids are `1..=len` in insertion order.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, parsed: ParsedScan) -> &Entry {
        let id = self.next_id();
        self.entries.push(Entry {
            id,
            serial_number: parsed.serial_number,
            link: parsed.link,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_id(&self) -> u32 {
        u32::try_from(self.entries.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }
}
