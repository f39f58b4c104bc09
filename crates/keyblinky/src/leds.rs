use embassy_rp::gpio;

use counter::pattern::LedPattern;

/// LEDs in bit order: `leds[i]` shows bit `i` of a [`LedPattern`].
pub struct LedBar<'d, const N: usize> {
    leds: [gpio::Output<'d>; N],
}

impl<'d, const N: usize> LedBar<'d, N> {
    pub fn new(leds: [gpio::Output<'d>; N]) -> Self {
        const { assert!(N <= u8::BITS as usize, "LED bar is wider than the counter") };
        Self { leds }
    }

    pub fn show(&mut self, pattern: LedPattern<N>) {
        for (led, on) in self.leds.iter_mut().zip(pattern.levels()) {
            led.set_level(if on {
                gpio::Level::High
            } else {
                gpio::Level::Low
            });
        }
    }

    pub fn set_all(&mut self, level: gpio::Level) {
        for led in self.leds.iter_mut() {
            led.set_level(level);
        }
    }
}
