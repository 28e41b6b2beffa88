use crate::status::Status;

/// One bus event, as a controller would deliver it per interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusEvent {
    /// A data byte was clocked in from the peripheral.
    ByteReceived(u8),
    /// The peripheral did not acknowledge its address.
    AddressNack,
    /// Arbitration was lost to another master.
    ArbitrationLost,
    /// Illegal bus condition.
    BusFault,
}

/// What the controller must put on the wire after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusAction {
    /// Acknowledge the received byte and clock in the next one.
    AckNext,
    /// Not-acknowledge the final byte and issue a STOP condition.
    NackStop,
    /// Release the bus; the transaction is over (completed or failed).
    Halt,
}

/// Per-byte state machine for one master-mode read.
///
/// Consumes [`BusEvent`]s and yields the [`BusAction`] the controller must
/// perform next: ACK for every byte but the last, NACK+STOP for the last.
/// Errors set a distinct status and halt the transaction; there is no
/// retry. `len` must not exceed the buffer capacity `N`.
pub struct ReadTransaction<const N: usize> {
    buf: [u8; N],
    len: usize,
    received: usize,
    status: Status,
}

impl<const N: usize> ReadTransaction<N> {
    pub fn new(len: usize) -> Self {
        debug_assert!(len <= N);
        Self {
            buf: [0; N],
            len,
            received: 0,
            // A zero-length read has nothing to clock; it is complete the
            // moment the address phase would end.
            status: if len == 0 { Status::Ready } else { Status::Busy },
        }
    }

    pub fn on_event(&mut self, event: BusEvent) -> BusAction {
        if self.status != Status::Busy {
            // A byte after completion means the controller kept clocking
            // past the NACK+STOP point. An earlier failure stands.
            if self.status == Status::Ready
                && matches!(event, BusEvent::ByteReceived(_))
            {
                self.status = Status::Overrun;
            }
            return BusAction::Halt;
        }

        match event {
            BusEvent::ByteReceived(byte) => {
                self.buf[self.received] = byte;
                self.received += 1;
                if self.received == self.len {
                    self.status = Status::Ready;
                    BusAction::NackStop
                } else {
                    BusAction::AckNext
                }
            }
            BusEvent::AddressNack => {
                self.status = Status::AddressNack;
                BusAction::Halt
            }
            BusEvent::ArbitrationLost => {
                self.status = Status::ArbitrationLost;
                BusAction::Halt
            }
            BusEvent::BusFault => {
                self.status = Status::BusFault;
                BusAction::Halt
            }
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the transaction reached a terminal state.
    pub fn is_done(&self) -> bool {
        self.status != Status::Busy
    }

    /// Bytes received so far, in arrival order.
    pub fn data(&self) -> &[u8] {
        &self.buf[..self.received]
    }
}
