pub mod odometer;
pub mod settings;
pub mod trip;
pub mod user_info;
pub mod vehicle;

pub use odometer::OdometerReading;
pub use settings::{AppSettings, DistanceUnit};
pub use trip::{Expenses, Trip};
pub use user_info::UserInfo;
pub use vehicle::Vehicle;
