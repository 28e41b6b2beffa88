#![no_std]

pub mod config;
pub mod tasks;
pub mod util;

pub const FW_VERSION: &str = env!("FW_VERSION");

pub mod prelude {
    pub use crate::config::*;
    pub use crate::tasks::*;
    pub use crate::{debug, error, info, trace, unwrap, warn, FW_VERSION};

    pub use embassy_executor::Spawner;
    pub use embassy_time::{Duration, Timer};

    pub use twibridge_bsp::{
        BusMasterResources, BusSlaveResources, ManchesterResources,
        TimerClock, TwiBridge, TIMER_HZ,
    };
}
