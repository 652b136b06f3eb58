//! センサー入力インターフェース
//!
//! 4種類の環境値を都度読み取るトレイトと、固定値を返すスタブ実装。
//! 実機のセンサードライバー（ADC/I2C）はこのトレイトを実装して差し替える。

pub mod stub;

pub use stub::StubSensors;

use crate::core::metric::Metric;

/// センサー読み取りのエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SensorError {
    #[error("{metric} sensor unavailable: {reason}")]
    Unavailable { metric: Metric, reason: String },
}

impl SensorError {
    /// エラーが発生した測定項目
    pub fn metric(&self) -> Metric {
        match self {
            SensorError::Unavailable { metric, .. } => *metric,
        }
    }
}

/// 環境センサーの読み取りトレイト
///
/// 各メソッドは呼び出しのたびに最新の値を返します（キャッシュしない）。
/// 物理的にあり得ない値でもエラーにはせず、そのまま返します。
pub trait SensorSource {
    /// 温度（℃）
    fn temperature(&mut self) -> Result<f32, SensorError>;

    /// 相対湿度（0.0-1.0）
    fn humidity(&mut self) -> Result<f32, SensorError>;

    /// 土壌水分（0.0-1.0）
    fn soil(&mut self) -> Result<f32, SensorError>;

    /// 照度（0.0-1.0）
    fn light(&mut self) -> Result<f32, SensorError>;

    /// 測定項目を指定して読み取る
    fn read(&mut self, metric: Metric) -> Result<f32, SensorError> {
        match metric {
            Metric::Temperature => self.temperature(),
            Metric::Humidity => self.humidity(),
            Metric::Soil => self.soil(),
            Metric::Light => self.light(),
        }
    }
}
