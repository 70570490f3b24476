use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_READ_TIMEOUT_MS, DEFAULT_SETTLE_DELAY_MS, LINE_TERMINATOR,
};
use crate::error::SweepError;
use crate::numeric::to_string;
use serialport::SerialPort;
use std::io::{self, BufRead, BufReader};
use std::time::Duration;

/// Where and how to open the serial link.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkConfig {
    /// Serial port name such as `/dev/ttyUSB0` or `COM8`.
    pub port: String,
    pub baud_rate: u32,
    /// Longest wait for a single line.
    pub timeout: Duration,
    /// Pause after opening, before the first read.
    pub settle_delay: Duration,
}

impl LinkConfig {
    pub fn new(port: &str) -> LinkConfig {
        LinkConfig {
            port: port.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

/// Anything the acquisition loop can pull text lines from.
pub trait LineSource {
    fn read_line(&mut self) -> Result<String, SweepError>;

    /// Releases whatever the source holds. Must be safe to call more than once.
    fn close(&mut self) {}
}

/// Open serial connection to the rangefinder.
///
/// The port is released exactly once, either by [`Link::close`] or when the
/// link is dropped.
pub struct Link {
    port_name: String,
    reader: Option<BufReader<Box<dyn SerialPort>>>,
}

impl Link {
    /// Opens the port and blocks for the configured settling delay.
    pub fn open(config: &LinkConfig) -> Result<Link, SweepError> {
        let port = serialport::new(&config.port, config.baud_rate)
            .timeout(config.timeout)
            .open()
            .map_err(|e| SweepError::ConnectionError(config.port.clone(), e))?;
        log::info!(
            "Opened \"{}\" at {} baud, read timeout {:?}",
            config.port,
            config.baud_rate,
            config.timeout
        );

        if !config.settle_delay.is_zero() {
            log::debug!("Waiting {:?} for the device to settle", config.settle_delay);
            std::thread::sleep(config.settle_delay);
        }

        let mut link = Link::from_port(port);
        link.port_name = config.port.clone();
        Ok(link)
    }

    /// Wraps a port that is already open. No settling delay is applied.
    pub fn from_port(port: Box<dyn SerialPort>) -> Link {
        let port_name = port.name().unwrap_or_default();
        Link {
            port_name,
            reader: Some(BufReader::new(port)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// Releases the port. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(reader) = self.reader.take() {
            drop(reader);
            log::info!("Serial connection to \"{}\" closed.", self.port_name);
        }
    }
}

impl LineSource for Link {
    fn read_line(&mut self) -> Result<String, SweepError> {
        match self.reader.as_mut() {
            Some(reader) => read_line_from(reader),
            None => Err(SweepError::LinkClosed()),
        }
    }

    fn close(&mut self) {
        Link::close(self);
    }
}

impl Drop for Link {
    fn drop(&mut self) {
        self.close();
    }
}

/// Reads up to and including the next `\n`.
///
/// A timeout with no terminator yet is a `TimeoutError`, end of stream is an
/// `IoError` and bytes that are not UTF-8 are `MalformedData`.
pub(crate) fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, SweepError> {
    let mut line: Vec<u8> = Vec::new();
    let n_read = reader.read_until(LINE_TERMINATOR, &mut line)?;
    if n_read == 0 {
        return Err(SweepError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "serial stream ended",
        )));
    }
    String::from_utf8(line).map_err(|e| SweepError::MalformedData(to_string(e.as_bytes())))
}
