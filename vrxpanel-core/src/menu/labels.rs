//! Read-only label lookup for menu values

/// Borrowed list of value labels
///
/// Lookups never fail on an out-of-range index: they saturate to the last
/// entry. An absent or empty table yields `None` and the menu shows a
/// placeholder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelTable<'a> {
    entries: Option<&'a [&'a str]>,
}

impl<'a> LabelTable<'a> {
    pub const fn new(entries: &'a [&'a str]) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    /// Table with no labels
    pub const fn absent() -> Self {
        Self { entries: None }
    }

    pub fn len(&self) -> usize {
        self.entries.map_or(0, <[&str]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of selectable values, capped at `u8::MAX`
    pub fn count(&self) -> u8 {
        u8::try_from(self.len()).unwrap_or(u8::MAX)
    }

    /// Index clamped to the last valid entry, or `None` for an empty table
    pub fn saturate(&self, index: u8) -> Option<u8> {
        match self.count() {
            0 => None,
            count => Some(index.min(count - 1)),
        }
    }

    /// Label for `index`, saturating past the end
    pub fn get(&self, index: u8) -> Option<&'a str> {
        let index = self.saturate(index)?;
        self.entries
            .and_then(|entries| entries.get(usize::from(index)))
            .copied()
    }
}

/// The four value tables the menu resolves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelTables<'a> {
    pub bands: LabelTable<'a>,
    pub chans: LabelTable<'a>,
    pub rec: LabelTable<'a>,
    pub bypass: LabelTable<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANS: [&str; 8] = ["CH1", "CH2", "CH3", "CH4", "CH5", "CH6", "CH7", "CH8"];

    #[test]
    fn test_get_in_range() {
        let table = LabelTable::new(&CHANS);
        assert_eq!(table.count(), 8);
        assert_eq!(table.get(0), Some("CH1"));
        assert_eq!(table.get(7), Some("CH8"));
    }

    #[test]
    fn test_get_saturates() {
        let table = LabelTable::new(&CHANS);
        assert_eq!(table.get(8), Some("CH8"));
        assert_eq!(table.get(u8::MAX), Some("CH8"));
        assert_eq!(table.saturate(200), Some(7));
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(LabelTable::absent().get(0), None);
        assert!(LabelTable::absent().is_empty());
        let empty: [&str; 0] = [];
        let table = LabelTable::new(&empty);
        assert_eq!(table.get(3), None);
        assert_eq!(table.saturate(3), None);
    }
}
