//! Domain models for the CD inventory. `Cd` is the record persisted to disk and
//! `Inventory` is the ordered, in-memory table the session works against. The
//! types stay light-weight so the console and persistence layers can focus on
//! presentation and I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single inventory entry.
pub struct Cd {
    /// User-assigned identifier. Uniqueness is a convention only; the entry
    /// form bounds new ids, but records loaded from disk are trusted as-is.
    pub id: i64,
    /// Album title shown in the inventory listing.
    pub title: String,
    /// Performing artist.
    pub artist: String,
}

impl Cd {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Cd {
    /// Render the row format used by the inventory listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

/// Ordered collection of CDs held for the session. Insertion order is display
/// order and is preserved across deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Cd>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a CD to the end of the table. Duplicate ids are allowed.
    pub fn add(&mut self, cd: Cd) {
        self.records.push(cd);
    }

    /// Remove the first CD whose id matches, returning it. Later duplicates
    /// are left in place and `None` means nothing was touched.
    pub fn delete(&mut self, id: i64) -> Option<Cd> {
        let index = self.records.iter().position(|cd| cd.id == id)?;
        Some(self.records.remove(index))
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Swap the whole table for a freshly loaded one.
    pub fn replace(&mut self, records: Vec<Cd>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Cd] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cd> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Cd>> for Inventory {
    fn from(records: Vec<Cd>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        Inventory::from(vec![Cd::new(1, "A", "X"), Cd::new(2, "B", "Y")])
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(Cd::new(7, "Kind of Blue", "Miles Davis"));
        inventory.add(Cd::new(3, "Blue Train", "John Coltrane"));
        inventory.add(Cd::new(7, "Sketches of Spain", "Miles Davis"));

        assert_eq!(inventory.len(), 3);
        let ids: Vec<i64> = inventory.iter().map(|cd| cd.id).collect();
        assert_eq!(ids, vec![7, 3, 7]);
    }

    #[test]
    fn delete_removes_first_match_then_reports_missing() {
        let mut inventory = sample();

        let removed = inventory.delete(1);
        assert_eq!(removed, Some(Cd::new(1, "A", "X")));
        assert_eq!(inventory.records(), &[Cd::new(2, "B", "Y")]);

        assert_eq!(inventory.delete(1), None);
        assert_eq!(inventory.records(), &[Cd::new(2, "B", "Y")]);
    }

    #[test]
    fn delete_only_touches_first_duplicate() {
        let mut inventory = Inventory::from(vec![
            Cd::new(4, "First", "One"),
            Cd::new(5, "Middle", "Two"),
            Cd::new(4, "Second", "Three"),
        ]);

        inventory.delete(4);

        assert_eq!(
            inventory.records(),
            &[Cd::new(5, "Middle", "Two"), Cd::new(4, "Second", "Three")]
        );
    }

    #[test]
    fn display_uses_tab_separated_row() {
        let cd = Cd::new(5, "Thriller", "Michael Jackson");
        assert_eq!(cd.to_string(), "5\tThriller (by:Michael Jackson)");
    }
}
