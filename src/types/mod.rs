mod fee;

pub use fee::Fee;

pub type UserId = u64;

/// The reference currency every rate is quoted against.
pub const EUR: &str = "EUR";
