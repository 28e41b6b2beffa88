use crate::prelude::*;
use embassy_nrf::peripherals::WDT;
use embassy_nrf::wdt::{self, Watchdog};
use embassy_nrf::Peri;

pub mod bridge;
pub mod slave;

// Re-exports
pub use bridge::*;
pub use slave::*;

// Keeps our system alive
#[embassy_executor::task]
pub async fn watchdog_task(wdt: Peri<'static, WDT>) {
    let wdt_config = wdt::Config::try_new(&wdt).unwrap();
    let (_wdt, [mut handle]) = match Watchdog::try_new(wdt, wdt_config) {
        Ok(x) => x,
        Err(_) => {
            // Watchdog already active with the wrong number of handles, waiting for it to timeout...
            loop {
                cortex_m::asm::wfe();
            }
        }
    };
    loop {
        handle.pet();
        Timer::after(Duration::from_secs(2)).await;
    }
}
