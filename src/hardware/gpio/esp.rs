use std::collections::HashMap;

use esp_idf_svc::hal::gpio::{AnyOutputPin, Level, Output, PinDriver};
use log::{debug, info};

use super::{GpioError, OutputPins};

/// ESP-IDF GPIOドライバーによる出力ピン実装
///
/// ピン番号ごとに `PinDriver` を保持します。インスタンスはプロセス内で
/// 一度だけ作成し、LEDバンクへ渡してください。
pub struct EspOutputPins {
    drivers: HashMap<u8, PinDriver<'static, AnyOutputPin, Output>>,
}

impl EspOutputPins {
    /// 空のドライバー表を作成します
    pub fn new() -> Self {
        info!("ESP-IDF GPIO output backend created");
        Self {
            drivers: HashMap::new(),
        }
    }
}

impl Default for EspOutputPins {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPins for EspOutputPins {
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError> {
        if self.drivers.contains_key(&pin) {
            debug!("GPIO{} already configured as output", pin);
            return Ok(());
        }

        // SAFETY: ピン番号はESP32-S3用のLEDピン表からのみ渡され、同じ番号のドライバーは一つだけ作成する
        let any_pin = unsafe { AnyOutputPin::new(i32::from(pin)) };
        let driver = PinDriver::output(any_pin).map_err(|e| GpioError::ConfigureFailed {
            pin,
            reason: format!("{:?}", e),
        })?;
        self.drivers.insert(pin, driver);
        debug!("GPIO{} configured as output", pin);
        Ok(())
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        let driver = self
            .drivers
            .get_mut(&pin)
            .ok_or(GpioError::NotConfigured(pin))?;
        let level = if high { Level::High } else { Level::Low };
        driver.set_level(level).map_err(|e| GpioError::WriteFailed {
            pin,
            reason: format!("{:?}", e),
        })
    }
}
