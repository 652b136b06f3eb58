/// コアシステムモジュール
pub mod app_controller;
pub mod bands;
pub mod config;
pub mod config_validation;
pub mod metric;
pub mod report;
pub mod sensor_readout;

pub use app_controller::AppController;
pub use bands::{TargetBand, TargetBands};
pub use config::{AppConfig, ConfigError};
pub use metric::Metric;
pub use report::{status_line, write_report, MetricStatus, StatusReport};
pub use sensor_readout::SensorReadout;
