mod acquisition;
mod cancel;
#[cfg(feature = "plot")]
pub mod chart;
mod constants;
mod error;
mod numeric;
mod parser;
mod render;
mod serial;
#[cfg(test)]
mod time;
#[cfg(feature = "plot")]
mod window;

pub use crate::acquisition::{acquire, Acquisition, AcquisitionConfig, Completion, LogSink, SweepSink};
pub use crate::cancel::{cancellation, CancelToken, Canceller};
pub use crate::error::SweepError;
pub use crate::parser::parse;
pub use crate::render::{project, render, DisplaySurface, Projection};
pub use crate::serial::{LineSource, Link, LinkConfig};
#[cfg(feature = "plot")]
pub use crate::window::PistonDisplay;
pub use sweep_data::{Sample, Sweep};

/// Reads one sweep and renders it.
///
/// # Arguments
///
/// * `link_config` - Serial port name such as `/dev/ttyUSB0`, baud rate and timeouts.
/// * `config` - Completion angle and optional deadline.
/// * `cancel` - Lets a host abort a stuck scan.
/// * `surface` - Where the plots are shown.
///
/// Only a failure to open the port is returned as an error before plotting.
/// Read failures end the acquisition and the partial sweep is still rendered.
pub fn run<D: DisplaySurface>(
    link_config: &LinkConfig,
    config: &AcquisitionConfig,
    cancel: &mut CancelToken,
    surface: &mut D,
) -> Result<(Sweep, Acquisition), SweepError> {
    let mut link = Link::open(link_config)?;

    log::info!("Waiting for data...");
    let (sweep, acquisition) = capture(&mut link, config, cancel, &mut LogSink);

    if acquisition.is_complete() {
        log::info!("Data capture complete. Plotting...");
    } else {
        log::warn!(
            "Sweep ended early ({:?}) with {} samples. Plotting what was captured...",
            acquisition.completion,
            sweep.len()
        );
    }

    let (angles, distances) = sweep.snapshot();
    render(angles, distances, surface)?;
    Ok((sweep, acquisition))
}

/// Collects one sweep from `source` and closes it, however the acquisition ended.
pub fn capture<S: LineSource, K: SweepSink>(
    source: &mut S,
    config: &AcquisitionConfig,
    cancel: &mut CancelToken,
    sink: &mut K,
) -> (Sweep, Acquisition) {
    let mut sweep = Sweep::new();
    let acquisition = acquire(source, &mut sweep, config, cancel, sink);
    source.close();
    (sweep, acquisition)
}
