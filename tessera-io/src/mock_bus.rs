//! Recording bus transport for engine tests.
//!
//! Pattern: scriptable mock that logs every transaction for assertion
//! and serves reads from a pre-loaded byte supply.

use std::collections::VecDeque;

use tessera_hal::BusTransport;

/// One closed bus transaction: target device, every byte written into
/// it (address header included), and whether the close released the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub address: u8,
    pub data: Vec<u8>,
    pub released: bool,
}

/// One read priming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub address: u8,
    pub count: u16,
}

/// Scriptable in-memory transport.
///
/// Close results follow a script (exhausted script entries succeed), and
/// read requests are served from a byte supply that can run dry to
/// simulate an under-delivering device. Errors are raw status codes, the
/// way a bus controller would report them.
pub struct MockBus {
    max_chunk: usize,
    open: Option<(u8, Vec<u8>)>,
    pub transactions: Vec<Transaction>,
    pub requests: Vec<Request>,
    close_script: VecDeque<Result<(), u8>>,
    supply: VecDeque<u8>,
    rx: VecDeque<u8>,
}

impl MockBus {
    pub fn new(max_chunk: usize) -> Self {
        Self {
            max_chunk,
            open: None,
            transactions: Vec::new(),
            requests: Vec::new(),
            close_script: VecDeque::new(),
            supply: VecDeque::new(),
            rx: VecDeque::new(),
        }
    }

    /// Load the bytes the device will serve to read requests.
    pub fn supply(&mut self, data: &[u8]) {
        self.supply.extend(data.iter().copied());
    }

    /// Queue close results, consumed in order; closes beyond the script
    /// succeed.
    pub fn script_closes(&mut self, results: &[Result<(), u8>]) {
        self.close_script.extend(results.iter().copied());
    }

    /// Concatenated data bytes across all transactions, address headers
    /// stripped.
    pub fn data_written(&self) -> Vec<u8> {
        self.transactions
            .iter()
            .flat_map(|t| t.data.get(2..).unwrap_or(&[]).iter().copied())
            .collect()
    }
}

impl BusTransport for MockBus {
    type Error = u8;

    fn begin_transaction(&mut self, address: u8) {
        self.open = Some((address, Vec::new()));
    }

    fn write_byte(&mut self, byte: u8) {
        if let Some((_, data)) = self.open.as_mut() {
            data.push(byte);
        }
    }

    fn end_transaction(&mut self, release: bool) -> Result<(), Self::Error> {
        if let Some((address, data)) = self.open.take() {
            self.transactions.push(Transaction {
                address,
                data,
                released: release,
            });
        }
        self.close_script.pop_front().unwrap_or(Ok(()))
    }

    fn request_bytes(&mut self, address: u8, count: u16) {
        self.requests.push(Request { address, count });
        for _ in 0..count {
            match self.supply.pop_front() {
                Some(byte) => self.rx.push_back(byte),
                None => break,
            }
        }
    }

    fn bytes_available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0xFF)
    }

    fn max_chunk_size(&self) -> usize {
        self.max_chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_transactions() {
        let mut bus = MockBus::new(32);
        bus.begin_transaction(0x50);
        bus.write_byte(0x01);
        bus.write_byte(0x02);
        bus.end_transaction(true).unwrap();

        assert_eq!(bus.transactions.len(), 1);
        assert_eq!(
            bus.transactions[0],
            Transaction {
                address: 0x50,
                data: vec![0x01, 0x02],
                released: true,
            }
        );
    }

    #[test]
    fn test_mock_close_script_then_default() {
        let mut bus = MockBus::new(32);
        bus.script_closes(&[Err(5)]);

        bus.begin_transaction(0x50);
        assert_eq!(bus.end_transaction(false), Err(5));

        bus.begin_transaction(0x50);
        assert_eq!(bus.end_transaction(true), Ok(()));
    }

    #[test]
    fn test_mock_serves_supply_until_dry() {
        let mut bus = MockBus::new(32);
        bus.supply(&[0xAA, 0xBB]);

        bus.request_bytes(0x50, 4);
        assert_eq!(bus.bytes_available(), 2);
        assert_eq!(bus.read_byte(), 0xAA);
        assert_eq!(bus.read_byte(), 0xBB);
        // Dry queue reads as idle bus.
        assert_eq!(bus.read_byte(), 0xFF);
    }
}
