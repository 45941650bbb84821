//! Intro scenario runner
//!
//! Launches the projectile (and optionally its axis-restricted copies), feeds
//! frame deltas until the scene's wait elapses, and collects what the annotation
//! layer needs: trajectory samples, the height record and the landing point.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::clock::FrameClock;
use crate::consts::MAX_FRAMES;
use crate::error::{SimError, ensure_finite};
use crate::settings::Settings;
use crate::sim::{AnalyticSolution, AxisMask, Flight, FlightEvent, FlightPhase};

/// One recorded frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Real time since launch (seconds)
    pub t: f64,
    pub position: DVec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightReport {
    pub label: String,
    pub mask: AxisMask,
    pub landed: bool,
    pub frames: u64,
    /// Real time from launch to landing
    pub landing_time: Option<f64>,
    /// Simulated time covered (real time times the time scale)
    pub flight_time: f64,
    pub max_height: f64,
    /// Landing point, or the last position when the flight never landed
    pub final_position: DVec3,
    /// Horizontal distance covered; the range annotation ends here
    pub range: f64,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub settings: Settings,
    /// Flat-ground reference values; absent when gravity is not downward
    /// or the launch point is off the ground
    pub analytic: Option<AnalyticSolution>,
    /// The frame cap stopped the run before the wait elapsed
    pub truncated: bool,
    pub flights: Vec<FlightReport>,
}

impl ScenarioReport {
    /// The unrestricted flight
    pub fn main_flight(&self) -> Option<&FlightReport> {
        self.flights.iter().find(|f| f.mask.is_full())
    }
}

struct Tracked {
    label: &'static str,
    flight: Flight,
    landing_time: Option<f64>,
    samples: Vec<Sample>,
}

pub struct Scenario {
    settings: Settings,
    tracked: Vec<Tracked>,
}

impl Scenario {
    pub fn from_settings(settings: &Settings) -> Result<Self, SimError> {
        let wait = ensure_finite("wait_secs", settings.wait_secs)?;
        if wait < 0.0 {
            return Err(SimError::invalid(format!("wait_secs must be >= 0, got {wait}")));
        }

        let mut masks = vec![("projectile", AxisMask::full())];
        if settings.variants {
            masks.push(("horizontal", AxisMask::horizontal_only()));
            masks.push(("vertical", AxisMask::vertical_only()));
        }

        let tracked = masks
            .into_iter()
            .map(|(label, mask)| {
                let state = settings.launch.params(mask).build()?;
                Ok::<_, SimError>(Tracked {
                    label,
                    samples: vec![Sample {
                        t: 0.0,
                        position: state.position(),
                    }],
                    flight: Flight::new(state),
                    landing_time: None,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            settings: settings.clone(),
            tracked,
        })
    }

    /// Drive every flight with `clock` until the wait elapses or all have landed
    pub fn run(mut self, clock: &mut FrameClock) -> Result<ScenarioReport, SimError> {
        for t in &mut self.tracked {
            t.flight.launch();
        }

        let sample_every = u64::from(self.settings.sample_every);
        let start = clock.now();
        let mut frames = 0u64;
        let mut truncated = false;
        while clock.now() - start < self.settings.wait_secs {
            if self
                .tracked
                .iter()
                .all(|t| t.flight.phase() == FlightPhase::Landed)
            {
                break;
            }
            if frames >= MAX_FRAMES {
                log::warn!(
                    "Stopped after {MAX_FRAMES} frames at t={:.6}s of a {}s wait",
                    clock.now() - start,
                    self.settings.wait_secs
                );
                truncated = true;
                break;
            }

            let dt = clock.next_dt();
            let now = clock.now() - start;
            frames += 1;
            for t in &mut self.tracked {
                let (pos, landed) = match t.flight.advance(dt)? {
                    FlightEvent::Moved(p) => (p, false),
                    FlightEvent::Landed(p) => (p, true),
                    FlightEvent::Waiting | FlightEvent::Suppressed => continue,
                };
                if landed {
                    t.landing_time = Some(now);
                }
                if landed || (sample_every > 0 && t.flight.frames() % sample_every == 0) {
                    t.samples.push(Sample { t: now, position: pos });
                }
            }
        }

        let launch = &self.settings.launch;
        let analytic = if launch.origin[1] == 0.0 {
            match AnalyticSolution::for_launch(launch.speed, launch.angle_deg, launch.gravity) {
                Ok(solution) => Some(solution),
                Err(e) => {
                    log::debug!("No analytic reference: {e}");
                    None
                }
            }
        } else {
            log::debug!(
                "No analytic reference: launch height {} is off the ground",
                launch.origin[1]
            );
            None
        };

        let flights: Vec<FlightReport> = self
            .tracked
            .into_iter()
            .map(|t| {
                let projectile = t.flight.projectile();
                FlightReport {
                    label: t.label.to_string(),
                    mask: projectile.mask(),
                    landed: t.flight.phase() == FlightPhase::Landed,
                    frames: t.flight.frames(),
                    landing_time: t.landing_time,
                    flight_time: t.flight.elapsed() * projectile.time_scale(),
                    max_height: projectile.max_height(),
                    final_position: projectile.position(),
                    range: projectile.position().x,
                    samples: t.samples,
                }
            })
            .collect();

        for f in &flights {
            log::info!(
                "{}: landed={} frames={} H={:.3} R={:.3}",
                f.label,
                f.landed,
                f.frames,
                f.max_height,
                f.range
            );
        }

        Ok(ScenarioReport {
            settings: self.settings,
            analytic,
            truncated,
            flights,
        })
    }
}
