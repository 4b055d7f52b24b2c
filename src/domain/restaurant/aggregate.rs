use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::RestaurantError;
use super::value_objects::{Menu, MenuItem, OperatingHours};

// ============================================================================
// Restaurant Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    // Fixed at construction
    name: String,
    location: String,
    hours: OperatingHours,

    // Mutated via add_to_menu / remove_from_menu over the lifetime
    menu: Menu,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        hours: OperatingHours,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            hours,
            menu: Menu::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn hours(&self) -> OperatingHours {
        self.hours
    }

    /// True iff the restaurant is open at `at`. The current time is an
    /// explicit input so callers control the clock.
    pub fn is_open(&self, at: NaiveTime) -> bool {
        self.hours.contains(at)
    }

    /// Put a new item on the menu. Duplicate names are allowed; the most
    /// recently added entry wins lookups.
    pub fn add_to_menu(&mut self, name: impl Into<String>, price: u32) {
        let item = MenuItem::new(name, price);
        debug!(item = %item.name, price = item.price, "adding item to menu");
        self.menu.add(item);
    }

    /// Take an item off the menu.
    pub fn remove_from_menu(&mut self, name: &str) -> Result<MenuItem, RestaurantError> {
        let removed = self
            .menu
            .remove(name)
            .ok_or_else(|| RestaurantError::ItemNotFound(name.to_string()))?;
        debug!(item = %removed.name, "removed item from menu");
        Ok(removed)
    }

    /// Total price of the named items. Zero names sum to 0; a name that is
    /// not on the menu fails with `ItemNotFound` rather than pricing the
    /// order short.
    pub fn order_value<I, S>(&self, names: I) -> Result<u32, RestaurantError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0;
        for name in names {
            let name = name.as_ref();
            let price = self
                .menu
                .price_of(name)
                .ok_or_else(|| RestaurantError::ItemNotFound(name.to_string()))?;
            total += price;
        }
        Ok(total)
    }

    /// Read-only view of the current menu.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
