use std::path::Path;

use aimrig::input::{InputEvent, InputProcessor};
use aimrig::rig::{Cadence, MouseAimRig, Pose, TickInput};
use aimrig::util::TickClock;
use aimrig::{RigError, RigOptions};
use glam::Quat;

/// Fixed simulation step for the scripted aircraft, seconds.
const FIXED_DT: f32 = 0.02;
/// Simulated display frame delta, seconds.
const FRAME_DT: f32 = 1.0 / 60.0;
/// Total scripted frames (~5 s of flight).
const FRAMES: u32 = 300;
/// Optional options file picked up from the working directory.
const OPTIONS_PATH: &str = "aimrig.toml";

/// Scripted aircraft: constant speed, gentle climbing turn.
struct Aircraft {
    pose: Pose,
    time: f32,
}

impl Aircraft {
    fn new() -> Self {
        Self {
            pose: Pose::IDENTITY,
            time: 0.0,
        }
    }

    /// Advance one fixed step: 120 m/s forward through a 9 deg/s turn
    /// with the nose held slightly above the horizon.
    fn step(&mut self, dt: f32) {
        self.time += dt;
        let yaw = 9.0f32.to_radians() * self.time;
        let pitch = (-4.0f32).to_radians();
        self.pose.orientation = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
        self.pose.position += self.pose.forward() * (120.0 * dt);
    }
}

/// Canned player input: a horizontal sweep, a free-look glance upward,
/// then an aim recenter.
fn scripted_input(frame: u32, processor: &mut InputProcessor) {
    match frame {
        30..=90 => processor.handle_event(InputEvent::MouseDelta { dx: 1.5, dy: 0.0 }),
        120..=150 => {
            processor.handle_event(InputEvent::FreeLook { held: true });
            processor.handle_event(InputEvent::MouseDelta { dx: 0.0, dy: 2.0 });
        }
        151 => processor.handle_event(InputEvent::FreeLook { held: false }),
        240 => processor.handle_event(InputEvent::Recenter),
        _ => {}
    }
}

fn run() -> Result<(), RigError> {
    let options = if Path::new(OPTIONS_PATH).exists() {
        log::info!("loading options from {OPTIONS_PATH}");
        RigOptions::load(Path::new(OPTIONS_PATH))?
    } else {
        // The scripted aircraft advances on the fixed cadence, so the
        // follower must too.
        RigOptions {
            follower_cadence: Cadence::Fixed,
            ..RigOptions::default()
        }
    };

    let mut aircraft = Aircraft::new();
    let mut rig = MouseAimRig::new(options, &aircraft.pose)?;
    let mut processor = InputProcessor::new();
    let mut clock = TickClock::new(FIXED_DT);

    for frame in 0..FRAMES {
        scripted_input(frame, &mut processor);
        let ticks = clock.advance(FRAME_DT);

        let sample = processor.sample();
        if sample.recenter {
            rig.recenter(&aircraft.pose);
        }

        for _ in 0..ticks.fixed_steps {
            aircraft.step(FIXED_DT);
            let input = TickInput::steady(aircraft.pose, rig.camera_frame());
            rig.tick(&input, FIXED_DT, Cadence::Fixed);
        }

        let input = TickInput {
            mouse_delta: sample.mouse_delta,
            free_look: sample.free_look,
            ..TickInput::steady(aircraft.pose, rig.camera_frame())
        };
        rig.tick(&input, ticks.dt, Cadence::Variable);

        if frame % 30 == 0 {
            let boresight = rig.boresight_pos(&aircraft.pose);
            let aim = rig.mouse_aim_pos(aircraft.pose.position);
            log::info!(
                "t={:5.2}s boresight=({:7.1}, {:6.1}, {:7.1}) aim=({:7.1}, {:6.1}, {:7.1}) fps={:.0}",
                aircraft.time,
                boresight.x,
                boresight.y,
                boresight.z,
                aim.x,
                aim.y,
                aim.z,
                clock.fps(),
            );
        }
    }

    log::info!(
        "scripted flight complete: {FRAMES} frames, final anchor {}",
        rig.anchor()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("demo failed: {e}");
        std::process::exit(1);
    }
}
