/// On/off state of `N` LEDs, bit `i` driving the LED at position `i` of the bar.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LedPattern<const N: usize>(u8);

impl<const N: usize> LedPattern<N> {
    const MASK: u8 = {
        assert!(N <= u8::BITS as usize, "LED pattern is wider than the counter");
        ((1_u16 << N) - 1) as u8
    };

    /// Takes the low `N` bits of `value`; higher bits have no LED and are dropped.
    pub const fn from_value(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_set(&self, i: usize) -> bool {
        i < N && self.0 & (1 << i) != 0
    }

    pub fn levels(&self) -> impl Iterator<Item = bool> + '_ {
        (0..N).map(move |i| self.is_set(i))
    }
}
