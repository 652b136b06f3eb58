use log::debug;

use super::bands::TargetBands;
use super::metric::Metric;
use super::report::{MetricStatus, StatusReport};
use crate::hardware::sensors::{SensorError, SensorSource};

/// センサー値と目標範囲の判定
///
/// 読み取り値も判定結果も保持せず、呼び出しのたびにセンサーから読み直します。
/// 境界値は範囲内として扱い、ヒステリシスはありません。
pub struct SensorReadout<S: SensorSource> {
    source: S,
    bands: TargetBands,
}

impl<S: SensorSource> SensorReadout<S> {
    pub fn new(source: S, bands: TargetBands) -> Self {
        Self { source, bands }
    }

    /// デフォルトの目標範囲で作成します
    pub fn with_default_bands(source: S) -> Self {
        Self::new(source, TargetBands::default())
    }

    pub fn bands(&self) -> &TargetBands {
        &self.bands
    }

    pub fn temperature(&mut self) -> Result<f32, SensorError> {
        self.source.temperature()
    }

    pub fn humidity(&mut self) -> Result<f32, SensorError> {
        self.source.humidity()
    }

    pub fn soil(&mut self) -> Result<f32, SensorError> {
        self.source.soil()
    }

    pub fn light(&mut self) -> Result<f32, SensorError> {
        self.source.light()
    }

    /// `lower <= temperature <= upper`
    pub fn temperature_ok(&mut self) -> Result<bool, SensorError> {
        self.is_ok(Metric::Temperature)
    }

    /// `lower <= humidity <= upper`
    pub fn humidity_ok(&mut self) -> Result<bool, SensorError> {
        self.is_ok(Metric::Humidity)
    }

    /// `soil >= target_soil`
    pub fn soil_ok(&mut self) -> Result<bool, SensorError> {
        self.is_ok(Metric::Soil)
    }

    /// `light >= target_light`
    pub fn light_ok(&mut self) -> Result<bool, SensorError> {
        self.is_ok(Metric::Light)
    }

    /// 測定項目を指定して読み取る
    pub fn reading(&mut self, metric: Metric) -> Result<f32, SensorError> {
        self.source.read(metric)
    }

    /// 測定項目を指定して判定する
    pub fn is_ok(&mut self, metric: Metric) -> Result<bool, SensorError> {
        Ok(self.status(metric)?.ok)
    }

    /// 全項目を固定順で読み取り、判定結果をまとめます
    ///
    /// 読み取れない項目があった時点でそのエラーを返します。
    pub fn evaluate(&mut self) -> Result<StatusReport, SensorError> {
        let mut statuses = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            statuses.push(self.status(metric)?);
        }
        Ok(StatusReport::new(statuses))
    }

    fn status(&mut self, metric: Metric) -> Result<MetricStatus, SensorError> {
        let reading = self.source.read(metric)?;
        let band = self.bands.for_metric(metric);
        let ok = band.contains(reading);
        if band.is_floor() {
            debug!("{}: reading={} floor={} ok={}", metric, reading, band.lower, ok);
        } else {
            debug!(
                "{}: reading={} band=[{}, {}] ok={}",
                metric, reading, band.lower, band.upper, ok
            );
        }
        Ok(MetricStatus {
            metric,
            reading,
            ok,
        })
    }

    /// センサー実装を取り出します
    pub fn into_inner(self) -> S {
        self.source
    }
}
