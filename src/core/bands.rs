use super::metric::Metric;

/// 目標範囲（両端を含む）
///
/// 下限のみの項目（土壌水分・照度）は上限を `f32::INFINITY` とする。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBand {
    pub lower: f32,
    pub upper: f32,
}

impl TargetBand {
    /// 上下限のある範囲
    pub const fn range(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// 下限のみの範囲
    pub const fn floor(lower: f32) -> Self {
        Self {
            lower,
            upper: f32::INFINITY,
        }
    }

    /// 上限を持たないか
    pub fn is_floor(&self) -> bool {
        self.upper == f32::INFINITY
    }

    /// 値が範囲内か（境界値は範囲内、NaNは常に範囲外）
    pub fn contains(&self, reading: f32) -> bool {
        self.lower <= reading && reading <= self.upper
    }
}

/// 項目ごとの目標範囲
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBands {
    pub temperature: TargetBand,
    pub humidity: TargetBand,
    pub soil: TargetBand,
    pub light: TargetBand,
}

impl TargetBands {
    pub fn for_metric(&self, metric: Metric) -> TargetBand {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::Soil => self.soil,
            Metric::Light => self.light,
        }
    }
}

impl Default for TargetBands {
    fn default() -> Self {
        Self {
            temperature: TargetBand::range(5.0, 30.0),
            humidity: TargetBand::range(0.3, 0.6),
            soil: TargetBand::floor(0.6),
            light: TargetBand::floor(0.6),
        }
    }
}
