//! Half-bit clock built on a hardware timer compare channel.

use embassy_nrf::pac;
use embassy_nrf::peripherals::TIMER1;
use embassy_nrf::Peri;
use manchester_tx::BitClock;

/// Timer tick rate: 16 MHz base clock through a 2^4 prescaler.
pub const TIMER_HZ: u32 = 1_000_000;
const PRESCALER: u8 = 4;

/// Paces the Manchester line off TIMER1 compare channel 0.
///
/// Each wait clears the compare event and the counter, then spins until
/// the counter reaches the programmed compare value again, so one call
/// blocks for exactly one half-bit slot and consecutive slots cannot
/// overlap. The spin occupies the executor for the duration of the slot.
pub struct TimerClock<'d> {
    _timer: Peri<'d, TIMER1>,
}

impl<'d> TimerClock<'d> {
    /// Take ownership of the timer and start it free-running with the
    /// compare register set to one half-bit slot.
    pub fn new(timer: Peri<'d, TIMER1>, half_bit_ticks: u32) -> Self {
        let r = pac::TIMER1;
        r.tasks_stop().write_value(1);
        r.prescaler().write(|w| w.set_prescaler(PRESCALER));
        r.cc(0).write_value(half_bit_ticks);
        r.events_compare(0).write_value(0);
        r.tasks_clear().write_value(1);
        r.tasks_start().write_value(1);

        Self { _timer: timer }
    }
}

impl BitClock for TimerClock<'_> {
    fn wait_half_bit(&mut self) {
        let r = pac::TIMER1;
        r.events_compare(0).write_value(0);
        r.tasks_clear().write_value(1);
        while r.events_compare(0).read() == 0 {}
    }
}

impl Drop for TimerClock<'_> {
    fn drop(&mut self) {
        pac::TIMER1.tasks_stop().write_value(1);
    }
}
