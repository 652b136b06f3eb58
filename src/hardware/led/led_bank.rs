use log::{debug, info};

use crate::hardware::gpio::{GpioError, OutputPins};
use crate::hardware::pins::{all_led_pins, LedColor, LEDS_PER_COLOR, LED_PINS};

/// LEDの制御に関するエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedError {
    #[error("unknown LED color: '{0}'")]
    InvalidColor(String),

    #[error("LED index {0} out of range (0-2)")]
    InvalidIndex(usize),

    #[error("LED bank is not initialized")]
    NotInitialized,

    #[error("LED bank is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Gpio(#[from] GpioError),
}

/// 4色×3個のインジケーターLEDバンク
///
/// 色→ピンの対応表は固定で、バンク自体は初期化済みかどうか以外の状態を
/// 持ちません。各LEDの点灯状態はそのままGPIOの出力レベルです。
pub struct LedBank<P: OutputPins> {
    pins: P,
    initialized: bool,
}

impl<P: OutputPins> LedBank<P> {
    /// 新しいLEDバンクを作成します（未初期化）
    ///
    /// # 引数
    ///
    /// * `pins` - 出力ピンの実装（プロセス内で一度だけ作成したもの）
    pub fn new(pins: P) -> Self {
        Self {
            pins,
            initialized: false,
        }
    }

    /// 全LEDピンを出力に設定し、消灯状態にします
    ///
    /// 他の操作の前に一度だけ呼び出してください。
    ///
    /// # エラー
    ///
    /// 二度目の呼び出しは `AlreadyInitialized`、GPIOの設定に失敗した場合は `Gpio`
    pub fn initialize(&mut self) -> Result<(), LedError> {
        if self.initialized {
            return Err(LedError::AlreadyInitialized);
        }

        let mut configured = 0;
        for pin in all_led_pins() {
            self.pins.configure_output(pin)?;
            self.pins.write(pin, false)?;
            configured += 1;
        }
        debug!("LED pins configured: {:?}", LED_PINS);

        self.initialized = true;
        info!("LED bank initialized ({} outputs)", configured);
        Ok(())
    }

    /// 初期化済みか
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// 色とインデックスで指定した1個のLEDを点灯/消灯します
    ///
    /// 検査に失敗した場合、GPIOへの書き込みは行われません。
    pub fn set_led(&mut self, color: LedColor, index: usize, on: bool) -> Result<(), LedError> {
        if !self.initialized {
            return Err(LedError::NotInitialized);
        }
        let pin = *color
            .pins()
            .get(index)
            .ok_or(LedError::InvalidIndex(index))?;

        self.pins.write(pin, on)?;
        debug!("{} LED {} (GPIO{}) {}", color, index, pin, on_off(on));
        Ok(())
    }

    /// 色名で指定した1個のLEDを点灯/消灯します
    ///
    /// e.g. `bank.set_led_named("red", 0, true)`
    pub fn set_led_named(&mut self, color: &str, index: usize, on: bool) -> Result<(), LedError> {
        let color = color.parse::<LedColor>()?;
        self.set_led(color, index, on)
    }

    /// 指定色の3個のLEDをインデックス順に点灯/消灯します
    pub fn set_color(&mut self, color: LedColor, on: bool) -> Result<(), LedError> {
        for index in 0..LEDS_PER_COLOR {
            self.set_led(color, index, on)?;
        }
        Ok(())
    }

    /// 色名で指定した3個のLEDを点灯/消灯します
    pub fn set_color_named(&mut self, color: &str, on: bool) -> Result<(), LedError> {
        let color = color.parse::<LedColor>()?;
        self.set_color(color, on)
    }

    /// 全LEDを点灯/消灯します
    pub fn set_all(&mut self, on: bool) -> Result<(), LedError> {
        for color in LedColor::ALL {
            self.set_color(color, on)?;
        }
        Ok(())
    }

    /// 1個のLEDを点灯させます
    ///
    /// e.g. `bank.turn_led_on(LedColor::Red, 0)`
    ///
    /// # エラー
    ///
    /// 未初期化、インデックス範囲外、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_led_on(&mut self, color: LedColor, index: usize) -> Result<(), LedError> {
        self.set_led(color, index, true)
    }

    /// 1個のLEDを消灯させます
    ///
    /// e.g. `bank.turn_led_off(LedColor::Red, 0)`
    ///
    /// # エラー
    ///
    /// 未初期化、インデックス範囲外、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_led_off(&mut self, color: LedColor, index: usize) -> Result<(), LedError> {
        self.set_led(color, index, false)
    }

    /// 指定色のLEDをすべて点灯させます
    ///
    /// # エラー
    ///
    /// 未初期化、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_color_leds_on(&mut self, color: LedColor) -> Result<(), LedError> {
        self.set_color(color, true)
    }

    /// 指定色のLEDをすべて消灯させます
    ///
    /// # エラー
    ///
    /// 未初期化、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_color_leds_off(&mut self, color: LedColor) -> Result<(), LedError> {
        self.set_color(color, false)
    }

    /// 全LEDを点灯させます
    ///
    /// # エラー
    ///
    /// 未初期化、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_all_leds_on(&mut self) -> Result<(), LedError> {
        self.set_all(true)
    }

    /// 全LEDを消灯させます
    ///
    /// # エラー
    ///
    /// 未初期化、GPIO書き込み失敗の場合にエラーを返します
    pub fn turn_all_leds_off(&mut self) -> Result<(), LedError> {
        self.set_all(false)
    }

    /// 出力ピンの実装を取り出します
    pub fn into_inner(self) -> P {
        self.pins
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(all(test, not(feature = "esp")))]
mod tests {
    use super::*;
    use crate::hardware::gpio::mock::MockOutputPins;

    fn initialized_bank() -> (LedBank<MockOutputPins>, MockOutputPins) {
        let mock = MockOutputPins::new();
        let mut bank = LedBank::new(mock.clone());
        bank.initialize().unwrap();
        mock.clear_writes();
        (bank, mock)
    }

    #[test]
    fn test_initialize_configures_all_pins_low() {
        let mock = MockOutputPins::new();
        let mut bank = LedBank::new(mock.clone());
        bank.initialize().unwrap();

        assert!(bank.is_initialized());
        assert_eq!(mock.configured_pins().len(), 12);
        for (_, pins) in LED_PINS {
            for pin in pins {
                assert!(mock.is_configured(pin));
                assert_eq!(mock.level(pin), Some(false));
            }
        }
    }

    #[test]
    fn test_initialize_drives_every_table_pin_low_once() {
        let mock = MockOutputPins::new();
        let mut bank = LedBank::new(mock.clone());
        bank.initialize().unwrap();

        let expected: Vec<(u8, bool)> = all_led_pins().map(|pin| (pin, false)).collect();
        assert_eq!(mock.writes(), expected);

        let mut pins: Vec<u8> = all_led_pins().collect();
        pins.sort_unstable();
        assert_eq!(mock.configured_pins(), pins);
    }

    #[test]
    fn test_initialize_twice_fails_without_writes() {
        let (mut bank, mock) = initialized_bank();
        assert_eq!(bank.initialize(), Err(LedError::AlreadyInitialized));
        assert!(mock.writes().is_empty());
    }

    #[test]
    fn test_set_led_before_initialize() {
        let mock = MockOutputPins::new();
        let mut bank = LedBank::new(mock.clone());

        let result = bank.set_led(LedColor::Red, 0, true);
        assert_eq!(result, Err(LedError::NotInitialized));
        assert!(mock.writes().is_empty());
    }

    #[test]
    fn test_set_led_drives_mapped_pin() {
        let (mut bank, mock) = initialized_bank();
        bank.set_led(LedColor::White, 2, true).unwrap();
        assert_eq!(mock.writes(), vec![(27, true)]);
    }

    #[test]
    fn test_set_color_writes_in_index_order() {
        let (mut bank, mock) = initialized_bank();
        bank.set_color(LedColor::Blue, true).unwrap();
        assert_eq!(mock.writes(), vec![(20, true), (6, true), (22, true)]);
    }

    #[test]
    fn test_gpio_failure_is_propagated() {
        let (mut bank, mock) = initialized_bank();
        mock.set_write_error(true);

        let result = bank.set_led(LedColor::Green, 0, true);
        assert!(matches!(result, Err(LedError::Gpio(GpioError::WriteFailed { pin: 21, .. }))));
    }

    #[test]
    fn test_initialize_failure_leaves_bank_uninitialized() {
        let mock = MockOutputPins::new();
        mock.set_configure_error(true);
        let mut bank = LedBank::new(mock.clone());

        assert!(matches!(bank.initialize(), Err(LedError::Gpio(_))));
        assert!(!bank.is_initialized());
    }
}
