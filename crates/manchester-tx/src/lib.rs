#![no_std]

//! Manchester line-code transmitter paced by a hardware half-bit clock.
//!
//! Each bit occupies two half-bit slots on the output pin: a 1 is sent as
//! high-then-low, a 0 as low-then-high, so every bit carries a mid-bit
//! transition and the signal is self-clocking with no DC bias. Bytes go
//! out least-significant bit first.
//!
//! The transmitter is fully synchronous: it drives the pin, then blocks on
//! [`BitClock::wait_half_bit`] for every slot, so a `send_byte` call
//! occupies the caller for exactly [`HALF_BITS_PER_BYTE`] slots. Timing
//! accuracy is the clock implementation's concern; the hardware one gates
//! each slot on a timer compare event.

use embedded_hal::digital::OutputPin;

/// Number of half-bit slots in one encoded byte (8 bits, 2 slots each).
pub const HALF_BITS_PER_BYTE: usize = 16;

/// Gate to the hardware timer pacing the line code.
///
/// One call blocks for exactly one half-bit slot. Implementations must
/// clear their ready flag before spinning so that consecutive slots can
/// never overlap or release early.
pub trait BitClock {
    /// Block until the current half-bit slot has elapsed.
    fn wait_half_bit(&mut self);
}

/// Half-bit period in timer ticks for a desired line bit rate.
///
/// One bit is `timer_hz / bit_rate` ticks; each of its two half-bit slots
/// is half of that, so `timer_hz / (2 * bit_rate)`. Computing the half
/// period directly keeps both slots of a bit equal even where the full
/// bit period would round to an odd tick count.
pub const fn half_bit_ticks(timer_hz: u32, bit_rate: u32) -> u32 {
    timer_hz / (2 * bit_rate)
}

/// Manchester transmitter over one output pin and a half-bit clock.
pub struct ManchesterTx<P, C> {
    pin: P,
    clock: C,
}

impl<P, C> ManchesterTx<P, C>
where
    P: OutputPin,
    C: BitClock,
{
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Send one bit: high-then-low for 1, low-then-high for 0.
    pub fn send_bit(&mut self, bit: bool) -> Result<(), P::Error> {
        if bit {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.clock.wait_half_bit();

        if bit {
            self.pin.set_low()?;
        } else {
            self.pin.set_high()?;
        }
        self.clock.wait_half_bit();
        Ok(())
    }

    /// Send all 8 bits of `byte`, least-significant bit first.
    pub fn send_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        for i in 0..8 {
            self.send_bit(byte & (1 << i) != 0)?;
        }
        Ok(())
    }

    /// Send every byte in order, back to back: the first slot of each
    /// frame starts exactly one half-bit after the last slot of the
    /// previous one.
    pub fn send(&mut self, bytes: &[u8]) -> Result<(), P::Error> {
        for &byte in bytes {
            self.send_byte(byte)?;
        }
        Ok(())
    }

    /// Give the pin and clock back, e.g. to reconfigure the timer.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}
