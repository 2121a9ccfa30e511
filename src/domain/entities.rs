//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One invited guest and the number of people in their party.
///
/// Entries carry no identifier; they are distinguished only by their
/// position in the list, and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestEntry {
    pub name: String,
    pub party_size: i64,
}

impl GuestEntry {
    /// Create an entry, stripping surrounding whitespace from the name.
    pub fn new(name: &str, party_size: i64) -> Self {
        Self {
            name: name.trim().to_string(),
            party_size,
        }
    }
}

/// Ordered list of guest entries.
///
/// Insertion order is preserved; the list is only ever mutated by
/// appending during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestList {
    entries: Vec<GuestEntry>,
}

impl GuestList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from previously persisted entries, order preserved.
    pub fn from_entries(entries: Vec<GuestEntry>) -> Self {
        Self { entries }
    }

    /// Append a guest. The name is trimmed before storage; no uniqueness
    /// check, no sign check on the party size.
    pub fn add(&mut self, name: &str, party_size: i64) {
        self.entries.push(GuestEntry::new(name, party_size));
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[GuestEntry] {
        &self.entries
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GuestEntry> {
        self.entries.iter()
    }

    /// Total number of guests across all entries, 0 for an empty list.
    pub fn total_guests(&self) -> i64 {
        self.entries.iter().map(|e| e.party_size).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A validated main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGuest,
    ViewList,
    SaveAndExit,
}

impl MenuChoice {
    /// Parse user input after trimming. Anything that is not exactly
    /// `"1"`, `"2"`, or `"3"` is `None` (plain validation, no error type).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddGuest),
            "2" => Some(Self::ViewList),
            "3" => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// Parse a group size entered by the user.
///
/// Negative values pass; only integer-ness is validated.
pub fn parse_party_size(input: &str) -> Result<i64, DomainError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::PartySizeNotInteger {
            input: input.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_padded_name_when_new_then_name_is_trimmed() {
        let entry = GuestEntry::new("  Alice  ", 3);
        assert_eq!(entry.name, "Alice");
        assert_eq!(entry.party_size, 3);
    }

    #[test]
    fn given_empty_list_when_total_then_zero() {
        assert_eq!(GuestList::new().total_guests(), 0);
    }

    #[test]
    fn given_adds_when_total_then_sum_of_party_sizes() {
        let mut list = GuestList::new();
        list.add("Alice", 3);
        list.add("Bob", 2);
        list.add("Alice", 3); // duplicates permitted
        assert_eq!(list.total_guests(), 8);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn given_adds_when_iterated_then_insertion_order_preserved() {
        let mut list = GuestList::new();
        list.add("Carol", 5);
        list.add("Dan", 2);
        let names: Vec<&str> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Dan"]);
    }

    #[rstest]
    #[case("1", Some(MenuChoice::AddGuest))]
    #[case("2", Some(MenuChoice::ViewList))]
    #[case("3", Some(MenuChoice::SaveAndExit))]
    #[case("  3  ", Some(MenuChoice::SaveAndExit))]
    #[case("9", None)]
    #[case("0", None)]
    #[case("12", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn menu_choice_parse(#[case] input: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[rstest]
    #[case("4", Ok(4))]
    #[case(" 7 ", Ok(7))]
    #[case("-2", Ok(-2))] // negativity is unchecked by design
    #[case("two", Err(()))]
    #[case("2.5", Err(()))]
    #[case("", Err(()))]
    fn party_size_parse(#[case] input: &str, #[case] expected: Result<i64, ()>) {
        assert_eq!(parse_party_size(input).map_err(|_| ()), expected);
    }
}
