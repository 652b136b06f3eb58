use log::debug;

use super::{SensorError, SensorSource};
use crate::core::metric::Metric;

/// 固定値を返すセンサースタブ
///
/// 実センサーを接続していない環境で使用します。
/// `unavailable` で指定した項目は読み取りエラーになります。
#[derive(Debug, Clone)]
pub struct StubSensors {
    temperature: f32,
    humidity: f32,
    soil: f32,
    light: f32,
    unavailable: Option<Metric>,
}

impl StubSensors {
    pub const DEFAULT_TEMPERATURE: f32 = 30.0;
    pub const DEFAULT_HUMIDITY: f32 = 0.4;
    pub const DEFAULT_SOIL: f32 = 0.6;
    pub const DEFAULT_LIGHT: f32 = 0.8;

    /// 任意の固定値でスタブを作成します
    pub fn new(temperature: f32, humidity: f32, soil: f32, light: f32) -> Self {
        Self {
            temperature,
            humidity,
            soil,
            light,
            unavailable: None,
        }
    }

    /// 指定項目の読み取りを失敗させる
    pub fn unavailable(mut self, metric: Metric) -> Self {
        self.unavailable = Some(metric);
        self
    }

    fn sample(&self, metric: Metric, value: f32) -> Result<f32, SensorError> {
        if self.unavailable == Some(metric) {
            return Err(SensorError::Unavailable {
                metric,
                reason: "stub sensor disconnected".to_string(),
            });
        }
        debug!("stub {} reading: {}", metric, value);
        Ok(value)
    }
}

impl Default for StubSensors {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_TEMPERATURE,
            Self::DEFAULT_HUMIDITY,
            Self::DEFAULT_SOIL,
            Self::DEFAULT_LIGHT,
        )
    }
}

impl SensorSource for StubSensors {
    fn temperature(&mut self) -> Result<f32, SensorError> {
        self.sample(Metric::Temperature, self.temperature)
    }

    fn humidity(&mut self) -> Result<f32, SensorError> {
        self.sample(Metric::Humidity, self.humidity)
    }

    fn soil(&mut self) -> Result<f32, SensorError> {
        self.sample(Metric::Soil, self.soil)
    }

    fn light(&mut self) -> Result<f32, SensorError> {
        self.sample(Metric::Light, self.light)
    }
}
