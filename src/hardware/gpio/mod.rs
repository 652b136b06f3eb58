//! GPIO出力インターフェース
//!
//! LEDバンクが依存するハードウェア出力の境界。実機用（ESP-IDF）と
//! ホスト用（Mock）の実装をこのトレイトで切り替える。

#[cfg(feature = "esp")]
pub mod esp;

// Mock実装（テストとnon-espビルドで使用可能）
#[cfg(not(feature = "esp"))]
pub mod mock;

/// GPIO出力のエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GpioError {
    #[error("GPIO{pin} could not be configured as output: {reason}")]
    ConfigureFailed { pin: u8, reason: String },

    #[error("GPIO{pin} write failed: {reason}")]
    WriteFailed { pin: u8, reason: String },

    #[error("GPIO{0} is not configured as output")]
    NotConfigured(u8),
}

/// 番号指定のデジタル出力ピンを扱うトレイト
///
/// このトレイトを実装することで、実機用とテスト用(Mock)の
/// 実装を切り替えることができます。
pub trait OutputPins {
    /// 指定ピンをデジタル出力として設定する
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError>;

    /// 指定ピンの論理レベルを設定する（true: High）
    fn write(&mut self, pin: u8, high: bool) -> Result<(), GpioError>;
}

impl<T: OutputPins + ?Sized> OutputPins for &mut T {
    fn configure_output(&mut self, pin: u8) -> Result<(), GpioError> {
        (**self).configure_output(pin)
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        (**self).write(pin, high)
    }
}
