//! Dashboard listing configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_rows_per_page() -> usize {
    10
}

fn default_rows_per_page_options() -> Vec<usize> {
    vec![5, 10, 25, 50]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Page size the dashboard starts with.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,

    /// Page sizes offered by the pagination control.
    #[serde(default = "default_rows_per_page_options")]
    pub rows_per_page_options: Vec<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            rows_per_page_options: default_rows_per_page_options(),
        }
    }
}

impl DashboardConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a page size is zero, no options
    /// are configured, or the default page size is not one of the options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_page_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.rows_per_page_options".into(),
                reason: "at least one option is required".into(),
            });
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.rows_per_page_options".into(),
                reason: "page sizes must be positive".into(),
            });
        }
        if self.rows_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.rows_per_page".into(),
                reason: "must be positive".into(),
            });
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.rows_per_page".into(),
                reason: format!(
                    "{} is not one of {:?}",
                    self.rows_per_page, self.rows_per_page_options
                ),
            });
        }
        Ok(())
    }
}
