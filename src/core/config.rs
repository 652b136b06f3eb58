use log::info;

use super::bands::TargetBands;
use super::config_validation::{parse_floor, parse_range, ValidationError};

/// ビルド時設定
///
/// この構造体は`toml_cfg`によって`cfg.toml`の`[greenhouse-monitor]`から
/// 読み込まれます。ファイルがない場合はデフォルト値が使われます。
/// 値はすべて f32 のため、`cfg.toml` でも `5.0` のように小数で記述すること。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(5.0)]
    target_temperature_lower: f32,

    #[default(30.0)]
    target_temperature_upper: f32,

    #[default(0.3)]
    target_humidity_lower: f32,

    #[default(0.6)]
    target_humidity_upper: f32,

    #[default(0.6)]
    target_soil: f32,

    #[default(0.6)]
    target_light: f32,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid target band: {0}")]
    InvalidTargetBand(#[from] ValidationError),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// 項目ごとの目標範囲
    pub bands: TargetBands,
}

impl AppConfig {
    /// ビルド時設定から設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        let app_config = Self::from_values(
            config.target_temperature_lower,
            config.target_temperature_upper,
            config.target_humidity_lower,
            config.target_humidity_upper,
            config.target_soil,
            config.target_light,
        )?;
        info!("Target bands loaded: {:?}", app_config.bands);
        Ok(app_config)
    }

    /// 個別の値から検証済みの設定を作成します
    pub fn from_values(
        temperature_lower: f32,
        temperature_upper: f32,
        humidity_lower: f32,
        humidity_upper: f32,
        soil: f32,
        light: f32,
    ) -> Result<Self, ConfigError> {
        let bands = TargetBands {
            temperature: parse_range("temperature", temperature_lower, temperature_upper)?,
            humidity: parse_range("humidity", humidity_lower, humidity_upper)?,
            soil: parse_floor("soil", soil)?,
            light: parse_floor("light", light)?,
        };
        Ok(Self { bands })
    }
}
