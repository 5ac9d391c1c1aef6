//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod measurement;
mod theme;
mod unit_mode;

pub use city_name::CityName;
pub use measurement::{Measurement, Quantity};
pub use theme::Theme;
pub use unit_mode::UnitMode;
