use std::fmt;
use std::str::FromStr;

use crate::hardware::led::LedError;

/// 1色あたりのLED数
pub const LEDS_PER_COLOR: usize = 3;

/// インジケーターLEDの色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedColor {
    Red,
    White,
    Green,
    Blue,
}

/// 色ごとのLED出力ピン（Raspberry Pi, BCM番号）
///
/// 配線例:
/// ```text
/// red   -> GPIO16, GPIO11, GPIO23
/// white -> GPIO13, GPIO9,  GPIO27
/// green -> GPIO21, GPIO12, GPIO25
/// blue  -> GPIO20, GPIO6,  GPIO22
/// ```
pub const BCM_LED_PINS: [(LedColor, [u8; LEDS_PER_COLOR]); 4] = [
    (LedColor::Red, [16, 11, 23]),
    (LedColor::White, [13, 9, 27]),
    (LedColor::Green, [21, 12, 25]),
    (LedColor::Blue, [20, 6, 22]),
];

/// 色ごとのLED出力ピン（ESP32-S3 DevKit, GPIO番号）
///
/// フラッシュ/PSRAM (GPIO26-37)、USB (GPIO19, 20)、UART0 (GPIO43, 44)、
/// ストラッピングピン (GPIO0, 3, 45, 46) は使用しない。
pub const ESP32S3_LED_PINS: [(LedColor, [u8; LEDS_PER_COLOR]); 4] = [
    (LedColor::Red, [1, 2, 4]),
    (LedColor::White, [5, 6, 7]),
    (LedColor::Green, [8, 9, 10]),
    (LedColor::Blue, [11, 12, 13]),
];

/// ビルド対象で使用するピン表
#[cfg(not(feature = "esp"))]
pub const LED_PINS: [(LedColor, [u8; LEDS_PER_COLOR]); 4] = BCM_LED_PINS;

/// ビルド対象で使用するピン表
#[cfg(feature = "esp")]
pub const LED_PINS: [(LedColor, [u8; LEDS_PER_COLOR]); 4] = ESP32S3_LED_PINS;

impl LedColor {
    /// 全色（ピン表と同じ順序）
    pub const ALL: [LedColor; 4] = [
        LedColor::Red,
        LedColor::White,
        LedColor::Green,
        LedColor::Blue,
    ];

    /// この色に割り当てられた3本の出力ピン
    pub fn pins(self) -> [u8; LEDS_PER_COLOR] {
        match self {
            LedColor::Red => LED_PINS[0].1,
            LedColor::White => LED_PINS[1].1,
            LedColor::Green => LED_PINS[2].1,
            LedColor::Blue => LED_PINS[3].1,
        }
    }

    /// 小文字の色名
    pub fn name(self) -> &'static str {
        match self {
            LedColor::Red => "red",
            LedColor::White => "white",
            LedColor::Green => "green",
            LedColor::Blue => "blue",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LedColor {
    type Err = LedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LedColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LedError::InvalidColor(trimmed.to_string()))
    }
}

/// 全12本のLED出力ピンを色・インデックス順に返す
pub fn all_led_pins() -> impl Iterator<Item = u8> {
    LED_PINS.into_iter().flat_map(|(_, pins)| pins)
}
