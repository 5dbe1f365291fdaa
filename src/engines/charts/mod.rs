pub mod density;
pub mod histogram;
pub mod pie;
pub mod weekly;

pub use density::{age_density, DensityChart};
pub use histogram::{purchase_histogram, sturges_bin_count, HistogramBin, HistogramChart};
pub use pie::{category_pie, gender_pie, PieChart, PieSlice};
pub use weekly::{purchases_over_time, week_ending, WeeklyBar, WeeklyBarChart};
