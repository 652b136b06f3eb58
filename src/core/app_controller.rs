use std::io::Write;

use anyhow::Context;
use log::{error, info, warn};

use super::config::AppConfig;
use super::report::{write_report, StatusReport};
use super::sensor_readout::SensorReadout;
use crate::hardware::gpio::OutputPins;
use crate::hardware::led::LedBank;
use crate::hardware::sensors::SensorSource;

/// アプリケーションの主要な制御フローを管理するモジュール
pub struct AppController;

impl AppController {
    /// LEDバンクを初期化し、全項目を判定して結果を1項目1行で出力します
    ///
    /// LEDの点灯状態は判定結果と連動させません（初期化のみ）。
    /// センサーが読み取れない場合は何も出力せずにエラーを返します。
    ///
    /// # 引数
    /// * `config` - 目標範囲を含む設定
    /// * `pins` - プロセス内で一度だけ作成したGPIO出力
    /// * `sensors` - センサー入力
    /// * `out` - レポートの出力先（通常は標準出力）
    pub fn run<P, S, W>(
        config: &AppConfig,
        pins: P,
        sensors: S,
        out: &mut W,
    ) -> anyhow::Result<StatusReport>
    where
        P: OutputPins,
        S: SensorSource,
        W: Write,
    {
        let mut leds = LedBank::new(pins);
        leds.initialize().context("failed to initialize LED bank")?;

        let mut readout = SensorReadout::new(sensors, config.bands);
        let report = readout
            .evaluate()
            .map_err(|e| {
                error!("{} reading unavailable, no report written", e.metric());
                e
            })
            .context("failed to read greenhouse sensors")?;

        for status in report.statuses() {
            if status.ok {
                info!("{}: {} within target", status.metric, status.reading);
            } else {
                warn!("{}: {} outside target", status.metric, status.reading);
            }
        }

        write_report(&report, out).context("failed to write status report")?;
        Ok(report)
    }
}
