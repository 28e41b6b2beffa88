use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::interrupt::{self, InterruptExt};
use embassy_nrf::{bind_interrupts, peripherals, twim, twis, Peri};
use manchester_tx::ManchesterTx;

use crate::bitclock::TimerClock;

/// TWIM peripheral and pins for the master side of the loopback.
pub struct BusMasterResources {
    pub twim: Peri<'static, peripherals::TWISPI0>,
    pub sda: Peri<'static, peripherals::P0_26>,
    pub scl: Peri<'static, peripherals::P0_27>,
}

/// TWIS peripheral and pins for the slave side of the loopback.
pub struct BusSlaveResources {
    pub twis: Peri<'static, peripherals::TWISPI1>,
    pub sda: Peri<'static, peripherals::P1_05>,
    pub scl: Peri<'static, peripherals::P1_06>,
}

/// Timer and output pin for the Manchester line.
pub struct ManchesterResources {
    pub timer: Peri<'static, peripherals::TIMER1>,
    pub pin: Peri<'static, peripherals::P1_07>,
}

bind_interrupts!(struct TwimIrqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

bind_interrupts!(struct TwisIrqs {
    TWISPI1 => twis::InterruptHandler<peripherals::TWISPI1>;
});

impl BusMasterResources {
    /// Configure the bus controller for the master role: 100 kHz with the
    /// internal pull-ups on both lines, matching the demo's wiring.
    pub fn configure<'a>(&'a mut self) -> twim::Twim<'a> {
        let mut config = twim::Config::default();
        config.frequency = twim::Frequency::K100;
        config.sda_pullup = true;
        config.scl_pullup = true;
        interrupt::TWISPI0.set_priority(interrupt::Priority::P3);
        static RAM_BUFFER: static_cell::ConstStaticCell<[u8; 16]> =
            static_cell::ConstStaticCell::new([0; 16]);

        twim::Twim::new(
            self.twim.reborrow(),
            TwimIrqs,
            self.sda.reborrow(),
            self.scl.reborrow(),
            config,
            RAM_BUFFER.take(),
        )
    }
}

impl BusSlaveResources {
    /// Configure the on-chip peripheral to answer on `address`.
    pub fn configure<'a>(&'a mut self, address: u8) -> twis::Twis<'a> {
        let mut config = twis::Config::default();
        config.address0 = address;
        interrupt::TWISPI1.set_priority(interrupt::Priority::P3);

        twis::Twis::new(
            self.twis.reborrow(),
            TwisIrqs,
            self.sda.reborrow(),
            self.scl.reborrow(),
            config,
        )
    }
}

impl ManchesterResources {
    /// Build the transmitter: output pin idling low, timer compare channel
    /// programmed for one half-bit slot of `half_bit_ticks` ticks.
    pub fn configure<'a>(
        &'a mut self,
        half_bit_ticks: u32,
    ) -> ManchesterTx<Output<'a>, TimerClock<'a>> {
        let pin = Output::new(
            self.pin.reborrow(),
            Level::Low,
            OutputDrive::Standard,
        );
        let clock = TimerClock::new(self.timer.reborrow(), half_bit_ticks);
        ManchesterTx::new(pin, clock)
    }
}
