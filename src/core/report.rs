use std::io::{self, Write};

use super::metric::Metric;

/// 1項目の判定結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStatus {
    pub metric: Metric,
    pub reading: f32,
    pub ok: bool,
}

/// 全項目の判定結果（Temperature, Humidity, Soil, Light の順）
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    statuses: Vec<MetricStatus>,
}

impl StatusReport {
    pub fn new(statuses: Vec<MetricStatus>) -> Self {
        Self { statuses }
    }

    pub fn statuses(&self) -> &[MetricStatus] {
        &self.statuses
    }

    pub fn get(&self, metric: Metric) -> Option<&MetricStatus> {
        self.statuses.iter().find(|status| status.metric == metric)
    }

    /// 指定項目が範囲内か（項目がなければNone）
    pub fn is_ok(&self, metric: Metric) -> Option<bool> {
        self.get(metric).map(|status| status.ok)
    }

    pub fn all_ok(&self) -> bool {
        self.statuses.iter().all(|status| status.ok)
    }

    /// 出力する行（改行なし）
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.statuses
            .iter()
            .map(|status| status_line(status.metric, status.ok))
    }
}

/// `"<Label> ok"` または `"<Label> not ok"`
pub fn status_line(metric: Metric, ok: bool) -> String {
    if ok {
        format!("{} ok", metric.label())
    } else {
        format!("{} not ok", metric.label())
    }
}

/// 判定結果を1項目1行で書き出します
pub fn write_report<W: Write>(report: &StatusReport, out: &mut W) -> io::Result<()> {
    for line in report.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
