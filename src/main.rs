use chrono::Local;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bistro::{OperatingHours, Restaurant};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bistro=debug")),
        )
        .init();

    let hours = OperatingHours::new("10:30:00".parse()?, "22:00:00".parse()?);
    let mut restaurant = Restaurant::new("Amelie's cafe", "Chennai", hours);

    restaurant.add_to_menu("Sweet corn soup", 119);
    restaurant.add_to_menu("Vegetable lasagne", 269);
    restaurant.add_to_menu("Apple Pie", 149);
    restaurant.add_to_menu("Cheese chilly toast", 99);

    // The domain takes the clock as a parameter; the wall clock lives here,
    // at the boundary.
    let now = Local::now().time();
    tracing::info!(
        name = restaurant.name(),
        location = restaurant.location(),
        open = restaurant.is_open(now),
        %now,
        "restaurant status"
    );

    for item in restaurant.menu().items() {
        tracing::info!(name = %item.name, price = item.price, "on the menu");
    }

    let order = ["Sweet corn soup", "Apple Pie"];
    let total = restaurant.order_value(order)?;
    tracing::info!(?order, total, "priced an order");

    let removed = restaurant.remove_from_menu("Vegetable lasagne")?;
    tracing::info!(item = %removed.name, "took an item off the menu");

    Ok(())
}
