// AppController Integration Tests
// センサー判定からレポート出力までの流れをホストで確認します
#![cfg(not(feature = "esp"))]

use greenhouse_monitor::core::metric::Metric;
use greenhouse_monitor::hardware::gpio::mock::MockOutputPins;
use greenhouse_monitor::{AppConfig, AppController, StubSensors};

fn run(sensors: StubSensors) -> (anyhow::Result<String>, MockOutputPins) {
    let mock = MockOutputPins::new();
    let mut out = Vec::new();
    let result = AppController::run(&AppConfig::default(), mock.clone(), sensors, &mut out)
        .map(|_| String::from_utf8(out).unwrap());
    (result, mock)
}

#[test]
fn test_default_stub_prints_all_ok() {
    let (output, _) = run(StubSensors::default());
    assert_eq!(
        output.unwrap(),
        "Temperature ok\nHumidity ok\nSoil ok\nLight ok\n"
    );
}

#[test]
fn test_hot_greenhouse_prints_temperature_not_ok() {
    let (output, _) = run(StubSensors::new(31.0, 0.4, 0.6, 0.8));
    assert_eq!(
        output.unwrap(),
        "Temperature not ok\nHumidity ok\nSoil ok\nLight ok\n"
    );
}

#[test]
fn test_every_metric_not_ok() {
    let (output, _) = run(StubSensors::new(40.0, 0.9, 0.1, 0.2));
    assert_eq!(
        output.unwrap(),
        "Temperature not ok\nHumidity not ok\nSoil not ok\nLight not ok\n"
    );
}

#[test]
fn test_leds_are_initialized_off() {
    let (output, mock) = run(StubSensors::default());
    assert!(output.is_ok());

    assert_eq!(mock.configured_pins().len(), 12);
    for pin in mock.configured_pins() {
        assert_eq!(mock.level(pin), Some(false));
    }
}

#[test]
fn test_unavailable_sensor_is_an_error_not_a_failure_line() {
    let (output, _) = run(StubSensors::default().unavailable(Metric::Soil));

    let err = output.unwrap_err();
    assert!(format!("{:#}", err).contains("Soil sensor unavailable"));
}

#[test]
fn test_gpio_failure_aborts_before_reporting() {
    let mock = MockOutputPins::new();
    mock.set_configure_error(true);
    let mut out = Vec::new();

    let result = AppController::run(&AppConfig::default(), mock, StubSensors::default(), &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}
