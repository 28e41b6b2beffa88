use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

/// State of a [`BusMaster`](crate::BusMaster) as seen by observers.
///
/// Anything other than `Ready` or `Busy` marks the most recent transaction
/// as failed; the supervising loop discards the transfer and starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    /// No transaction in flight; the last one (if any) completed cleanly.
    Ready = 0,
    /// A transaction is in progress.
    Busy = 1,
    /// The peripheral did not acknowledge its address.
    AddressNack = 2,
    /// The peripheral rejected a data byte.
    DataNack = 3,
    /// Arbitration was lost to another master mid-transaction.
    ArbitrationLost = 4,
    /// More bytes arrived than the transaction asked for.
    Overrun = 5,
    /// Illegal bus condition (misplaced START/STOP or similar).
    BusFault = 6,
}

impl Status {
    /// True for every failure value, false for `Ready` and `Busy`.
    pub fn is_error(self) -> bool {
        !matches!(self, Status::Ready | Status::Busy)
    }

    pub(crate) fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Status::Ready,
            1 => Status::Busy,
            2 => Status::AddressNack,
            3 => Status::DataNack,
            4 => Status::ArbitrationLost,
            5 => Status::Overrun,
            _ => Status::BusFault,
        }
    }
}

/// Error classification of a failed transfer.
///
/// The error subset of [`Status`], used as the `Err` payload of
/// [`BusMaster::read`](crate::BusMaster::read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    AddressNack,
    DataNack,
    ArbitrationLost,
    Overrun,
    Bus,
}

impl Fault {
    /// Map a controller error into the engine's taxonomy.
    pub fn from_i2c(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => {
                Fault::DataNack
            }
            ErrorKind::NoAcknowledge(_) => Fault::AddressNack,
            ErrorKind::ArbitrationLoss => Fault::ArbitrationLost,
            ErrorKind::Overrun => Fault::Overrun,
            _ => Fault::Bus,
        }
    }
}

impl From<Fault> for Status {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::AddressNack => Status::AddressNack,
            Fault::DataNack => Status::DataNack,
            Fault::ArbitrationLost => Status::ArbitrationLost,
            Fault::Overrun => Status::Overrun,
            Fault::Bus => Status::BusFault,
        }
    }
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::AddressNack => write!(f, "address not acknowledged"),
            Fault::DataNack => write!(f, "data byte not acknowledged"),
            Fault::ArbitrationLost => write!(f, "bus arbitration lost"),
            Fault::Overrun => write!(f, "receive overrun"),
            Fault::Bus => write!(f, "bus fault"),
        }
    }
}
