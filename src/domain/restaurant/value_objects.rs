use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Restaurant Value Objects
// ============================================================================

/// A single menu entry: dish name and price in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Daily operating window, half-open: the restaurant is open at `opens`
/// and closed again at `closes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl OperatingHours {
    pub fn new(opens: NaiveTime, closes: NaiveTime) -> Self {
        Self { opens, closes }
    }

    /// True iff `at` falls inside `[opens, closes)`. A window where
    /// `opens >= closes` contains nothing; overnight wrap is not modeled.
    pub fn contains(&self, at: NaiveTime) -> bool {
        self.opens <= at && at < self.closes
    }
}

/// The menu: menu items kept in insertion order. Names are not
/// deduplicated; when two entries share a name, the most recently added
/// one wins lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. No uniqueness check on the name.
    pub fn add(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Remove and return the most recently added entry named `name`.
    pub fn remove(&mut self, name: &str) -> Option<MenuItem> {
        let idx = self.items.iter().rposition(|item| item.name == name)?;
        Some(self.items.remove(idx))
    }

    /// Price of the most recently added entry named `name`.
    pub fn price_of(&self, name: &str) -> Option<u32> {
        self.items
            .iter()
            .rev()
            .find(|item| item.name == name)
            .map(|item| item.price)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new("Sweet corn soup", 119);

        assert_eq!(item.name, "Sweet corn soup");
        assert_eq!(item.price, 119);
    }

    #[test]
    fn test_menu_item_serialization() {
        let item = MenuItem::new("Vegetable lasagne", 269);

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: MenuItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }

    #[test]
    fn test_operating_hours_contains_time_inside_window() {
        let hours = OperatingHours::new(time("10:30:00"), time("22:00:00"));

        assert!(hours.contains(time("12:00:00")));
        assert!(!hours.contains(time("23:00:00")));
        assert!(!hours.contains(time("09:00:00")));
    }

    #[test]
    fn test_operating_hours_window_is_half_open() {
        let hours = OperatingHours::new(time("10:30:00"), time("22:00:00"));

        assert!(hours.contains(time("10:30:00")));
        assert!(!hours.contains(time("22:00:00")));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let hours = OperatingHours::new(time("22:00:00"), time("10:30:00"));

        assert!(!hours.contains(time("23:00:00")));
        assert!(!hours.contains(time("12:00:00")));
    }

    #[test]
    fn test_menu_add_grows_by_one() {
        let mut menu = Menu::new();
        assert!(menu.is_empty());

        menu.add(MenuItem::new("Sizzling brownie", 319));

        assert_eq!(menu.len(), 1);
        assert_eq!(menu.price_of("Sizzling brownie"), Some(319));
    }

    #[test]
    fn test_menu_remove_missing_returns_none() {
        let mut menu = Menu::new();
        menu.add(MenuItem::new("Sweet corn soup", 119));

        assert!(menu.remove("French fries").is_none());
        assert_eq!(menu.len(), 1);
    }

    #[test]
    fn test_duplicate_names_last_added_wins() {
        let mut menu = Menu::new();
        menu.add(MenuItem::new("Masala dosa", 90));
        menu.add(MenuItem::new("Masala dosa", 110));

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.price_of("Masala dosa"), Some(110));

        let removed = menu.remove("Masala dosa").unwrap();
        assert_eq!(removed.price, 110);
        assert_eq!(menu.price_of("Masala dosa"), Some(90));
    }
}
