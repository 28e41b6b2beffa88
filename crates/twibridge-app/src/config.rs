//! Compile-time configuration for the bridge demo. No runtime surface:
//! address, transfer length and line rate are fixed at build time.

use twibridge_bsp::TIMER_HZ;

/// Seven-bit address the on-chip peripheral answers on.
pub const PERIPHERAL_ADDRESS: u8 = 0x28;

/// Capacity of the master's receive buffer.
pub const READ_BUFFER_SIZE: usize = 4;

/// Bytes read per bus transaction. Must not exceed the buffer capacity.
pub const READ_LEN: usize = READ_BUFFER_SIZE;

/// Payload the on-chip peripheral serves to every master read.
pub const RESPONSE_PATTERN: [u8; READ_BUFFER_SIZE] =
    [0xCA, 0xFE, 0xBA, 0xBE];

/// Manchester line rate in bits per second.
pub const BIT_RATE: u32 = 2_400;

/// Half-bit slot in timer ticks, derived from the timer tick rate and the
/// line rate.
pub const HALF_BIT_TICKS: u32 =
    manchester_tx::half_bit_ticks(TIMER_HZ, BIT_RATE);
