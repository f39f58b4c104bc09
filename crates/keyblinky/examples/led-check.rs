#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio;
use embassy_time::Timer;

use counter::pattern::LedPattern;

use keyblinky::board::{self, Board};

use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let Board { enable, mut leds } = Board::new(embassy_rp::init(Default::default()));

    loop {
        for (i, pin) in board::LED_PINS.iter().enumerate() {
            leds.show(LedPattern::from_value(1 << i));
            defmt::info!(
                "LED {} (GPIO{}) on, input: {}",
                i,
                pin,
                defmt::Debug2Format(&enable.get_level())
            );
            Timer::after_millis(500).await;
        }

        leds.set_all(gpio::Level::High);
        defmt::info!("all LEDs on, input: {}", defmt::Debug2Format(&enable.get_level()));
        Timer::after_millis(1000).await;

        leds.set_all(gpio::Level::Low);
        Timer::after_millis(500).await;
    }
}
