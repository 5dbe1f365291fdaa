pub mod traits;
pub mod theme;
pub mod density;
pub mod preview;
pub mod manager;

pub use manager::{ConfigManager, DashboardConfig, DEFAULT_CONFIG_FILE};
pub use theme::{ChartTheme, ThemeStyle};
pub use density::{BandwidthMode, DensityConfig};
pub use preview::PreviewConfig;
pub use traits::ConfigSection;
