use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::trace;

use super::{GpioError, OutputPins};

#[derive(Debug, Default)]
struct MockState {
    configured: BTreeSet<u8>,
    levels: BTreeMap<u8, bool>,
    writes: Vec<(u8, bool)>,
    simulate_write_error: bool,
    simulate_configure_error: bool,
}

/// テスト用のGPIO出力モック実装
///
/// 実際のハードウェアを使わずにピン出力をシミュレートします。
/// 設定済みピン・現在のレベル・書き込み履歴を記録し、テストで検証できます。
/// クローンは同じ状態を共有します。
#[derive(Debug, Clone, Default)]
pub struct MockOutputPins {
    state: Arc<Mutex<MockState>>,
}

impl MockOutputPins {
    /// 新しいMockOutputPinsインスタンスを作成します
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 出力として設定済みか
    pub fn is_configured(&self, pin: u8) -> bool {
        self.lock().configured.contains(&pin)
    }

    /// 設定済みピンの一覧（昇順）
    pub fn configured_pins(&self) -> Vec<u8> {
        self.lock().configured.iter().copied().collect()
    }

    /// 現在のレベル（一度も書き込まれていなければNone）
    pub fn level(&self, pin: u8) -> Option<bool> {
        self.lock().levels.get(&pin).copied()
    }

    /// 書き込み履歴を取得
    pub fn writes(&self) -> Vec<(u8, bool)> {
        self.lock().writes.clone()
    }

    /// 書き込み履歴をクリア
    pub fn clear_writes(&self) {
        self.lock().writes.clear();
    }

    /// テスト用: 書き込みエラーをシミュレート
    pub fn set_write_error(&self, enable: bool) {
        self.lock().simulate_write_error = enable;
    }

    /// テスト用: 出力設定エラーをシミュレート
    pub fn set_configure_error(&self, enable: bool) {
        self.lock().simulate_configure_error = enable;
    }
}

impl OutputPins for MockOutputPins {
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError> {
        let mut state = self.lock();
        if state.simulate_configure_error {
            return Err(GpioError::ConfigureFailed {
                pin,
                reason: "Simulated configure error".to_string(),
            });
        }
        state.configured.insert(pin);
        trace!("mock GPIO{} configured as output", pin);
        Ok(())
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        let mut state = self.lock();
        if state.simulate_write_error {
            return Err(GpioError::WriteFailed {
                pin,
                reason: "Simulated write error".to_string(),
            });
        }
        if !state.configured.contains(&pin) {
            return Err(GpioError::NotConfigured(pin));
        }
        state.levels.insert(pin, high);
        state.writes.push((pin, high));
        trace!("mock GPIO{} <- {}", pin, if high { "HIGH" } else { "LOW" });
        Ok(())
    }
}
