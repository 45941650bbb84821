//! Projectile Motion - native entry point
//!
//! Usage: `projectile-motion [settings.json]`
//!
//! Runs the intro scenario and prints the trajectory trace as JSON on stdout.
//! Set `RUST_LOG=info` (or `debug`) for the height/range summary.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use projectile_motion::{Scenario, Settings, trace};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Projectile Motion starting...");

    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Simulation failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
    let mut clock = settings.clock.build()?;
    let report = Scenario::from_settings(settings)?.run(&mut clock)?;

    if let (Some(main), Some(analytic)) = (report.main_flight(), report.analytic) {
        log::info!(
            "height(H) = {:.3} m (analytic {:.3}), range(R) = {:.3} m (analytic {:.3})",
            main.max_height,
            analytic.max_height,
            main.range,
            analytic.range
        );
        if report.truncated {
            log::warn!("Run hit the frame cap before the wait elapsed");
        }
        if !main.landed {
            log::warn!("Projectile still airborne after {}s wait", settings.wait_secs);
        }
    }

    trace::write_report(io::stdout().lock(), &report, true)?;
    println!();
    Ok(())
}
