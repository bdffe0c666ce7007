//! Hardcoded cars standing in for a real backing store. Every operation is a
//! plain function over its arguments; nothing here blocks or fails.

use async_graphql::SimpleObject;

pub const GREETING: &str = "pong - car service is running!";

/// Number of cars returned by [`cars`] when no limit is given.
pub const DEFAULT_LIMIT: i32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
pub struct Car {
    pub vin: Option<String>,
    pub model: String,
    pub color: String,
    pub year: i32,
    pub is_electric: bool,
}

impl Car {
    fn new(vin: Option<&str>, model: &str, color: &str, year: i32, is_electric: bool) -> Self {
        Self {
            vin: vin.map(ToOwned::to_owned),
            model: model.to_owned(),
            color: color.to_owned(),
            year,
            is_electric,
        }
    }
}

pub fn ping() -> &'static str {
    GREETING
}

/// There is no lookup: every vin, including none, gets the same car back
/// with the vin echoed.
pub fn car(vin: Option<&str>) -> Car {
    Car::new(vin, "Tesla Model S", "Red", 2024, true)
}

/// The first `limit` mock cars in their fixed order. Zero and negative
/// limits give an empty list.
pub fn cars(limit: Option<i32>) -> Vec<Car> {
    let limit = usize::try_from(limit.unwrap_or(DEFAULT_LIMIT)).unwrap_or(0);

    mock_cars().into_iter().take(limit).collect()
}

fn mock_cars() -> [Car; 3] {
    [
        Car::new(Some("VIN001"), "Tesla Model S", "Red", 2024, true),
        Car::new(Some("VIN002"), "BMW i8", "Blue", 2023, true),
        Car::new(Some("VIN003"), "Ford Mustang", "Black", 2022, false),
    ]
}
