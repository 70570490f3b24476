use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum SweepError {
    ConnectionError(String, serialport::Error),
    MalformedData(String),
    TimeoutError(),
    LinkClosed(),
    SerialError(serialport::Error),
    IoError(io::Error),
    DisplayError(String),
}

impl SweepError {
    /// A malformed line only costs that line; every other error ends the acquisition.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SweepError::MalformedData(_))
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SweepError::ConnectionError(port, err) => write!(f, "Unable to connect to serial port {}. {}", port, err),
            SweepError::MalformedData(line) => write!(f, "Malformed data received: {:?}", line),
            SweepError::TimeoutError() => write!(f, "Operation timed out"),
            SweepError::LinkClosed() => write!(f, "Serial connection is closed"),
            SweepError::SerialError(err) => Display::fmt(&err, f),
            SweepError::IoError(err) => Display::fmt(&err, f),
            SweepError::DisplayError(msg) => write!(f, "Failed to display plots: {}", msg),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::ConnectionError(_, err) | SweepError::SerialError(err) => Some(err),
            SweepError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SweepError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => SweepError::TimeoutError(),
            _ => SweepError::IoError(err),
        }
    }
}

impl From<serialport::Error> for SweepError {
    fn from(err: serialport::Error) -> Self {
        SweepError::SerialError(err)
    }
}
