use embedded_hal::i2c::Error as _;
use embedded_hal_async::i2c::I2c;
use portable_atomic::{AtomicU8, Ordering};

use crate::status::{Fault, Status};

/// One master-role endpoint on the two-wire bus.
///
/// Owns the bus controller, the fixed peripheral address and a fixed
/// receive buffer of capacity `N`. The transaction status is an atomic
/// byte so it can be read from any context without locking. At most one
/// transaction is in flight at a time: [`read`](Self::read) takes
/// `&mut self`, so the invariant holds by construction, and the status
/// field additionally reports `Busy` for the duration of the transfer.
pub struct BusMaster<B, const N: usize> {
    bus: B,
    address: u8,
    status: AtomicU8,
    buf: [u8; N],
}

impl<B, const N: usize> BusMaster<B, N>
where
    B: I2c,
{
    /// Bind the endpoint to a controller and a peripheral address.
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            status: AtomicU8::new(Status::Ready as u8),
            buf: [0; N],
        }
    }

    pub fn status(&self) -> Status {
        Status::from_raw(self.status.load(Ordering::Acquire))
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Run one master-mode read of `len` bytes from the peripheral.
    ///
    /// Resolves once the controller's interrupt path has completed the
    /// transfer. On success the status is `Ready` and the filled prefix of
    /// the receive buffer is returned; on failure the fault is recorded in
    /// the status field and returned, and no data is exposed. `len` must
    /// not exceed the buffer capacity.
    ///
    /// No timeout is applied: if the bus hangs, this future stays pending.
    pub async fn read(&mut self, len: usize) -> Result<&[u8], Fault> {
        debug_assert!(len <= N);
        self.status.store(Status::Busy as u8, Ordering::Release);
        match self.bus.read(self.address, &mut self.buf[..len]).await {
            Ok(()) => {
                self.status.store(Status::Ready as u8, Ordering::Release);
                Ok(&self.buf[..len])
            }
            Err(e) => {
                let fault = Fault::from_i2c(e.kind());
                self.status
                    .store(Status::from(fault) as u8, Ordering::Release);
                Err(fault)
            }
        }
    }
}
