use embassy_rp::{Peripherals, gpio};
use embassy_time::Duration;

use crate::leds::LedBar;

pub const LED_COUNT: usize = 5;

// GPIO numbers, for logging. Must match `Board::new`.
pub const INPUT_PIN: u8 = 16;
pub const LED_PINS: [u8; LED_COUNT] = [18, 19, 20, 21, 22];

// Floating: an unconnected input reads whatever it picks up.
pub const INPUT_PULL: gpio::Pull = gpio::Pull::None;

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

pub struct Board<'d> {
    /// Counter keeps running while high, cleared while low.
    pub enable: gpio::Input<'d>,
    pub leds: LedBar<'d, LED_COUNT>,
}

impl Board<'static> {
    pub fn new(p: Peripherals) -> Self {
        Self {
            enable: gpio::Input::new(p.PIN_16, INPUT_PULL),
            leds: LedBar::new([
                gpio::Output::new(p.PIN_18, gpio::Level::Low),
                gpio::Output::new(p.PIN_19, gpio::Level::Low),
                gpio::Output::new(p.PIN_20, gpio::Level::Low),
                gpio::Output::new(p.PIN_21, gpio::Level::Low),
                gpio::Output::new(p.PIN_22, gpio::Level::Low),
            ]),
        }
    }
}
