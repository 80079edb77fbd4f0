//! FenceIntent- und FenceCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::FenceCommand;
pub use intent::FenceIntent;
