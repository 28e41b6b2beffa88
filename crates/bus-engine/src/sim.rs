//! In-memory loopback bus for host testing.
//!
//! `SimBus` stands in for the bus controller plus the on-chip peripheral:
//! master reads are driven byte by byte through [`ReadTransaction`], so the
//! ACK-all-but-last/NACK-the-last discipline is observable from the action
//! log, and faults can be injected at the address or data phase.

use embedded_hal::i2c::{
    self, ErrorKind, ErrorType, NoAcknowledgeSource, Operation,
};
use embedded_hal_async::i2c::I2c;

use crate::status::Fault;
use crate::transaction::{BusAction, BusEvent, ReadTransaction};

/// Transfer error reported by the simulated bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError(pub Fault);

impl i2c::Error for SimError {
    fn kind(&self) -> ErrorKind {
        match self.0 {
            Fault::AddressNack => {
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
            }
            Fault::DataNack => {
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
            }
            Fault::ArbitrationLost => ErrorKind::ArbitrationLoss,
            Fault::Overrun => ErrorKind::Overrun,
            Fault::Bus => ErrorKind::Bus,
        }
    }
}

/// Simulated two-wire loopback: one peripheral at a fixed address serving
/// a response pattern, repeated cyclically for longer reads.
pub struct SimBus<const N: usize> {
    address: u8,
    response: heapless::Vec<u8, N>,
    nack_address: bool,
    lose_arbitration_after: Option<usize>,
    actions: heapless::Vec<BusAction, 64>,
}

impl<const N: usize> SimBus<N> {
    pub fn new(address: u8, pattern: &[u8]) -> Self {
        let mut response = heapless::Vec::new();
        for &byte in pattern.iter().take(N) {
            let _ = response.push(byte);
        }
        Self {
            address,
            response,
            nack_address: false,
            lose_arbitration_after: None,
            actions: heapless::Vec::new(),
        }
    }

    /// Make the peripheral refuse its address on every transaction.
    pub fn nack_address(mut self) -> Self {
        self.nack_address = true;
        self
    }

    /// Drop off the bus after `bytes` data bytes have been served.
    /// One-shot: the next transaction finds the bus free again.
    pub fn lose_arbitration_after(mut self, bytes: usize) -> Self {
        self.lose_arbitration_after = Some(bytes);
        self
    }

    /// Wire actions issued during the most recent read, in order.
    /// The log is bounded; actions beyond its capacity are dropped.
    pub fn actions(&self) -> &[BusAction] {
        &self.actions
    }

    fn master_read(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), SimError> {
        self.actions.clear();
        let mut txn = ReadTransaction::<N>::new(buf.len());
        if txn.is_done() {
            return Ok(());
        }

        if address != self.address || self.nack_address {
            let action = txn.on_event(BusEvent::AddressNack);
            let _ = self.actions.push(action);
            return Err(SimError(Fault::AddressNack));
        }
        if self.response.is_empty() {
            let action = txn.on_event(BusEvent::BusFault);
            let _ = self.actions.push(action);
            return Err(SimError(Fault::Bus));
        }

        let mut served = 0usize;
        loop {
            if self.lose_arbitration_after == Some(served) {
                self.lose_arbitration_after = None;
                let action = txn.on_event(BusEvent::ArbitrationLost);
                let _ = self.actions.push(action);
                return Err(SimError(Fault::ArbitrationLost));
            }
            let byte = self.response[served % self.response.len()];
            let action = txn.on_event(BusEvent::ByteReceived(byte));
            let _ = self.actions.push(action);
            served += 1;
            match action {
                BusAction::AckNext => {}
                BusAction::NackStop => break,
                BusAction::Halt => return Err(SimError(Fault::Overrun)),
            }
        }

        // The caller's buffer is only written once the transaction has
        // completed cleanly; a failed transfer leaves it untouched.
        buf.copy_from_slice(txn.data());
        Ok(())
    }
}

impl<const N: usize> ErrorType for SimBus<N> {
    type Error = SimError;
}

impl<const N: usize> I2c for SimBus<N> {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Read(buf) => self.master_read(address, buf)?,
                // The peripheral accepts and discards writes.
                Operation::Write(_) => {}
            }
        }
        Ok(())
    }
}
