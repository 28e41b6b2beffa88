//! The slave half of the loopback: the chip answering its own reads.

use embassy_nrf::twis::{self, Command};

use crate::prelude::*;

/// Serve the fixed response payload to every master read, forever.
/// Incoming writes are accepted and discarded; the peripheral has no
/// registers to configure.
#[embassy_executor::task]
pub async fn peripheral_task(mut twis: twis::Twis<'static>) {
    let mut buf = [0u8; READ_BUFFER_SIZE];
    loop {
        match twis.listen(&mut buf).await {
            Ok(Command::Read) => {
                match twis.respond_to_read(&RESPONSE_PATTERN).await {
                    Ok(_) => trace!("peripheral: read served"),
                    Err(e) => warn!("peripheral: respond failed: {:?}", e),
                }
            }
            Ok(Command::Write(n)) => {
                trace!("peripheral: discarded {} written bytes", n);
            }
            Ok(Command::WriteRead(_)) => {
                match twis.respond_to_read(&RESPONSE_PATTERN).await {
                    Ok(_) => trace!("peripheral: write+read served"),
                    Err(e) => warn!("peripheral: respond failed: {:?}", e),
                }
            }
            Err(e) => warn!("peripheral: listen error: {:?}", e),
        }
    }
}
