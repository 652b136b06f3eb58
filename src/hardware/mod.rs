/// ハードウェア制御モジュール
pub mod gpio;
pub mod led;
pub mod pins;
pub mod sensors;

pub use led::LedBank;
pub use pins::LedColor;
