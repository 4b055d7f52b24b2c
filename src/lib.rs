//! Domain model for a restaurant's menu and operating hours.

pub mod domain;

pub use domain::restaurant::{Menu, MenuItem, OperatingHours, Restaurant, RestaurantError};
