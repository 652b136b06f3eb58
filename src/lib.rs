/*!
 * # Greenhouse Monitor Library
 *
 * 温室の環境センサー（温度・湿度・土壌水分・照度）を目標範囲と比較し、
 * 4色×3個のインジケーターLEDをGPIO経由で制御するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: 判定ロジックと上位処理（目標範囲、センサー判定、レポート出力、設定）
 * - `hardware`: ハードウェア制御（GPIO出力、LEDバンク、センサー入力、ピン設定）
 */

// 公開モジュール
pub mod core;
pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use crate::core::{
    AppConfig, AppController, ConfigError, Metric, MetricStatus, SensorReadout, StatusReport,
    TargetBand, TargetBands,
};
pub use hardware::gpio::{GpioError, OutputPins};
pub use hardware::led::{LedBank, LedError};
pub use hardware::pins::{LedColor, LEDS_PER_COLOR, LED_PINS};
pub use hardware::sensors::{SensorError, SensorSource, StubSensors};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
