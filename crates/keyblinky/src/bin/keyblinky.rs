#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Timer;

use counter::binary::BinaryCounter;

use keyblinky::board::{self, Board};

use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let Board { enable, mut leds } = Board::new(embassy_rp::init(Default::default()));

    defmt::info!(
        "Hello World! input: GPIO{}, leds: GPIO{}",
        board::INPUT_PIN,
        board::LED_PINS
    );

    let mut counter = BinaryCounter::new();

    loop {
        Timer::after(board::TICK_PERIOD).await;

        let tick = counter.step::<{ board::LED_COUNT }>(
            |pattern| leds.show(pattern),
            || enable.is_high(),
        );
        defmt::debug!("counter: {=u8}, leds: {=u8:b}", counter.value(), tick.shown.bits());

        if let Some(value) = tick.reset_from {
            defmt::info!("input low, counter reset from {=u8}", value);
        }
    }
}
