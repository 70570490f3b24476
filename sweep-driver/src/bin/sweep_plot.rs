use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use sweep_driver::{run, AcquisitionConfig, CancelToken, LinkConfig, PistonDisplay};

/// Reads one 360° sweep from a serial rangefinder and plots it.
#[derive(Parser, Debug)]
#[command(name = "sweep_plot", version)]
struct Args {
    /// The device path to a serial port, such as /dev/ttyUSB0 or COM8
    port: String,

    /// Bit rate of the serial link
    #[arg(long, default_value_t = 115200)]
    baud_rate: u32,

    /// Longest wait for one line, in seconds
    #[arg(long, default_value = "2", value_parser = parse_seconds)]
    timeout: Duration,

    /// Pause after opening the port while the device resets, in milliseconds
    #[arg(long, default_value_t = 2000)]
    settle_ms: u64,

    /// Angle in degrees at or above which the sweep is complete
    #[arg(long, default_value_t = 355)]
    completion_angle: i64,

    /// Give up on the sweep after this many seconds
    #[arg(long, value_parser = parse_seconds)]
    deadline: Option<Duration>,
}

fn parse_seconds(arg: &str) -> Result<Duration, String> {
    let seconds: f64 = arg
        .parse()
        .map_err(|e| format!("\"{arg}\" is not a number of seconds: {e}"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("\"{arg}\": {e}"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let link_config = LinkConfig {
        port: args.port,
        baud_rate: args.baud_rate,
        timeout: args.timeout,
        settle_delay: Duration::from_millis(args.settle_ms),
    };
    let config = AcquisitionConfig {
        completion_angle: args.completion_angle,
        deadline: args.deadline,
    };

    match run(
        &link_config,
        &config,
        &mut CancelToken::never(),
        &mut PistonDisplay::default(),
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
