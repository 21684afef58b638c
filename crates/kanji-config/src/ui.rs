use serde::{Deserialize, Serialize};

fn default_grid_columns() -> u32 {
    4
}

fn default_chart_width() -> u32 {
    40
}

fn default_show_native_labels() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Cards per row in grid mode
    #[serde(default = "default_grid_columns")]
    pub grid_columns: u32,
    /// Width of the longest bar in the statistics chart
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    /// Show the Japanese category name next to the English one
    #[serde(default = "default_show_native_labels")]
    pub show_native_labels: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            chart_width: default_chart_width(),
            show_native_labels: default_show_native_labels(),
        }
    }
}
