pub(crate) const DEFAULT_BAUD_RATE: u32 = 115200;
pub(crate) const DEFAULT_READ_TIMEOUT_MS: u64 = 2000;
// Firmware resets when the port opens and needs time before it streams.
pub(crate) const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;
// Discrete angular steps rarely land on exactly 360.
pub(crate) const DEFAULT_COMPLETION_ANGLE: i64 = 355;
pub(crate) const FIELD_SEPARATOR: char = ',';
pub(crate) const LINE_TERMINATOR: u8 = b'\n';
