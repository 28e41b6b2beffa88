//! Supervisory loop: read from the bus, retransmit on the Manchester line.

use bus_engine::BusMaster;
use embassy_nrf::gpio::Output;
use embassy_nrf::twim::Twim;
use manchester_tx::ManchesterTx;
use twibridge_bsp::TimerClock;

use crate::prelude::*;

pub type BridgeMaster = BusMaster<Twim<'static>, READ_BUFFER_SIZE>;
pub type BridgeTx = ManchesterTx<Output<'static>, TimerClock<'static>>;

/// Read `READ_LEN` bytes from the on-chip peripheral and retransmit
/// exactly those bytes Manchester-encoded, forever.
///
/// A failed transaction is dropped whole: nothing reaches the line unless
/// the read completed cleanly. There is no retry beyond the next loop
/// iteration, and no bus timeout; a hung transaction parks this task.
#[embassy_executor::task]
pub async fn bridge_task(mut master: BridgeMaster, mut tx: BridgeTx) {
    info!("bridge: reading from address {}", master.address());
    loop {
        match master.read(READ_LEN).await {
            Ok(data) => {
                unwrap!(tx.send(data));
                trace!("bridge: {} bytes retransmitted", READ_LEN);
            }
            Err(fault) => {
                warn!("bridge: transaction failed: {:?}", fault);
                // Hold off so a dead bus does not spin the log.
                Timer::after_millis(10).await;
            }
        }
    }
}
