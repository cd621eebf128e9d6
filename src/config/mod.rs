mod settings;
#[cfg(test)]
mod tests;

pub use settings::{Settings, SettingsError};
