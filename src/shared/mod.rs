pub mod config;
pub mod theme;

pub use config::{Config, ThemeMode};
pub use theme::{ModernIcons, ModernTheme};
