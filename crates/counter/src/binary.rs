use crate::pattern::LedPattern;

/// 8-bit counter shown on an LED bar, cleared while the enable input is low.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryCounter(u8);

/// Outcome of one [`BinaryCounter::step`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick<const N: usize> {
    /// Pattern written to the LEDs.
    pub shown: LedPattern<N>,
    /// Counter value discarded because the input was low.
    pub reset_from: Option<u8>,
}

impl BinaryCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub fn increment(&mut self) -> u8 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Applies a sampled input level. Returns the dropped value when `level` is low.
    pub fn sample(&mut self, level: bool) -> Option<u8> {
        if level {
            return None;
        }
        let prev = self.0;
        self.reset();
        Some(prev)
    }

    pub const fn pattern<const N: usize>(&self) -> LedPattern<N> {
        LedPattern::from_value(self.0)
    }

    /// Runs one loop iteration after the delay: increment, `show` the low `N`
    /// bits, then `read` the input and reset on low.
    pub fn step<const N: usize>(
        &mut self,
        show: impl FnOnce(LedPattern<N>),
        read: impl FnOnce() -> bool,
    ) -> Tick<N> {
        self.increment();
        let shown = self.pattern();
        show(shown);
        let reset_from = self.sample(read());
        Tick { shown, reset_from }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use core::cell::Cell;

    use crate::binary::*;

    fn counter_at(value: u8) -> BinaryCounter {
        let mut c = BinaryCounter::new();
        for _ in 0..value {
            c.increment();
        }
        assert_eq!(c.value(), value);
        c
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(BinaryCounter::new().value(), 0);
        assert_eq!(BinaryCounter::default(), BinaryCounter::new());
    }

    #[test]
    fn increment_wraps() {
        let mut c = counter_at(254);
        assert_eq!(c.increment(), 255);
        assert_eq!(c.increment(), 0);
        assert_eq!(c.increment(), 1);
    }

    #[test]
    fn sample() {
        let mut c = counter_at(42);
        assert_eq!(c.sample(true), None);
        assert_eq!(c.value(), 42);
        assert_eq!(c.sample(false), Some(42));
        assert_eq!(c.value(), 0);
        assert_eq!(c.sample(false), Some(0));
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn pattern_is_low_bits() {
        for v in 0..=u8::MAX {
            assert_eq!(counter_at(v).pattern::<5>().bits(), v & 0b11111);
        }
    }

    #[test]
    fn step_from_zero() {
        let mut c = BinaryCounter::new();
        let tick = c.step::<5>(|p| assert_eq!(p.bits(), 0b00001), || true);
        assert_eq!(c.value(), 1);
        assert_eq!(
            tick,
            Tick {
                shown: LedPattern::from_value(1),
                reset_from: None,
            }
        );
        assert!(tick.shown.is_set(0));
        assert!((1..5).all(|i| !tick.shown.is_set(i)));
    }

    #[test]
    fn step_past_five_bits() {
        let mut c = counter_at(31);
        let tick = c.step::<5>(|_| (), || true);
        assert_eq!(c.value(), 32);
        assert_eq!(tick.shown.bits(), 0b00000);
    }

    #[test]
    fn step_with_input_low() {
        let mut c = counter_at(200);
        let tick = c.step::<5>(|p| assert_eq!(p.bits(), 201 & 0b11111), || false);
        assert_eq!(tick.reset_from, Some(201));
        assert_eq!(c.value(), 0);

        // next iteration starts over
        let tick = c.step::<5>(|_| (), || true);
        assert_eq!(c.value(), 1);
        assert_eq!(tick.shown.bits(), 1);
    }

    #[test]
    fn step_shows_before_reading() {
        let order = Cell::new(0);
        let mut c = BinaryCounter::new();
        c.step::<5>(
            |_| {
                assert_eq!(order.get(), 0);
                order.set(1);
            },
            || {
                assert_eq!(order.get(), 1);
                order.set(2);
                true
            },
        );
        assert_eq!(order.get(), 2);
    }

    #[test]
    fn step_counts_and_wraps_while_input_high() {
        let mut c = BinaryCounter::new();
        for i in 1..=300_u32 {
            let tick = c.step::<5>(|_| (), || true);
            assert_eq!(c.value(), (i % 256) as u8);
            assert_eq!(tick.shown.bits(), (i % 32) as u8);
            assert_eq!(tick.reset_from, None);
        }
    }

    #[test]
    fn step_shown_matches_counter_for_all_values() {
        for v in 0..=u8::MAX {
            let mut c = counter_at(v);
            let mut shown = None;
            c.step::<5>(|p| shown = Some(p), || true);
            assert_eq!(shown.map(|p| p.bits()), Some(c.value() & 0b11111));
        }
    }
}
