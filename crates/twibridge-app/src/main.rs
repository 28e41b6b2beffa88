#![no_std]
#![no_main]

use embassy_executor::Spawner;
use static_cell::StaticCell;

#[cfg(feature = "defmt")]
use defmt_rtt as _;
#[cfg(feature = "defmt")]
use panic_probe as _;
#[cfg(not(feature = "defmt"))]
use panic_reset as _;

use bus_engine::BusMaster;
use twibridge_app::prelude::*;

static BUS_MASTER_RESOURCES: StaticCell<BusMasterResources> =
    StaticCell::new();
static BUS_SLAVE_RESOURCES: StaticCell<BusSlaveResources> = StaticCell::new();
static MANCHESTER_RESOURCES: StaticCell<ManchesterResources> =
    StaticCell::new();

// Application main entry point. The spawner can be used to start async tasks.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("twibridge {} starting", FW_VERSION);
    // First we initialize our board.
    let board = TwiBridge::default();

    spawner.must_spawn(watchdog_task(board.wdt));

    // The slave side must be listening before the first master read.
    let slave_resources = BUS_SLAVE_RESOURCES.init(board.bus_slave);
    let twis = slave_resources.configure(PERIPHERAL_ADDRESS);
    spawner.must_spawn(peripheral_task(twis));

    let master_resources = BUS_MASTER_RESOURCES.init(board.bus_master);
    let twim = master_resources.configure();
    let master = BusMaster::new(twim, PERIPHERAL_ADDRESS);

    let manchester_resources = MANCHESTER_RESOURCES.init(board.manchester);
    let tx = manchester_resources.configure(HALF_BIT_TICKS);

    spawner.must_spawn(bridge_task(master, tx));
}
