use embassy_nrf::interrupt::Priority;
use embassy_nrf::peripherals::WDT;
use embassy_nrf::Peri;

use crate::resources::{
    BusMasterResources, BusSlaveResources, ManchesterResources,
};

/// Peripherals and pins used by the bridge demo board.
pub struct TwiBridge {
    /// TWIM peripheral and pins for the master side of the loopback.
    pub bus_master: BusMasterResources,
    /// TWIS peripheral and pins for the slave side of the loopback.
    pub bus_slave: BusSlaveResources,
    /// Timer and output pin for the Manchester line.
    pub manchester: ManchesterResources,
    /// Watchdog Timer.
    pub wdt: Peri<'static, WDT>,
}

impl Default for TwiBridge {
    fn default() -> Self {
        let mut config = embassy_nrf::config::Config::default();
        config.gpiote_interrupt_priority = Priority::P2;
        config.time_interrupt_priority = Priority::P2;
        Self::new(config)
    }
}

impl TwiBridge {
    /// Create a new instance based on HAL configuration
    pub fn new(config: embassy_nrf::config::Config) -> Self {
        let p = embassy_nrf::init(config);

        Self {
            bus_master: BusMasterResources {
                twim: p.TWISPI0,
                sda: p.P0_26,
                scl: p.P0_27,
            },
            bus_slave: BusSlaveResources {
                twis: p.TWISPI1,
                sda: p.P1_05,
                scl: p.P1_06,
            },
            manchester: ManchesterResources {
                timer: p.TIMER1,
                pin: p.P1_07,
            },
            wdt: p.WDT,
        }
    }
}
