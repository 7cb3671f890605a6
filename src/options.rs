//! Rig configuration with TOML persistence.
//!
//! All tweakable rig settings are consolidated in [`RigOptions`]. The
//! struct uses `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `mouse_sensitivity`) work correctly, and is validated
//! before a rig will accept it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::rig::Cadence;

/// How the held free-look modifier decouples aim accumulation from
/// steering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FreeLookPolicy {
    /// Mouse motion is ignored while the modifier is held; the aim (and
    /// with it the camera target) stays frozen.
    #[default]
    Suspend,
    /// Motion accumulates while held, so the camera chases it and the
    /// player looks around; the pre-hold aim orientation is restored on
    /// release.
    SnapBack,
    /// The modifier has no effect.
    Disabled,
}

/// Immutable rig configuration, set once at rig construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigOptions {
    /// Degrees of aim rotation per mouse device unit.
    pub mouse_sensitivity: f32,
    /// Exponential convergence rate of the camera toward the aim
    /// direction, per second. Higher converges faster.
    pub camera_smoothing_rate: f32,
    /// Distance at which boresight and aim points project, in world
    /// units. Strictly positive; zero would collapse both points onto
    /// the aircraft.
    pub aim_distance: f32,
    /// Which tick cadence runs the position follower. Must match the
    /// cadence the external aircraft simulation moves the aircraft on.
    pub follower_cadence: Cadence,
    /// Free-look modifier policy.
    pub free_look: FreeLookPolicy,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 3.0,
            camera_smoothing_rate: 5.0,
            aim_distance: 500.0,
            follower_cadence: Cadence::Variable,
            free_look: FreeLookPolicy::default(),
        }
    }
}

impl RigOptions {
    /// Check the option invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::Options`] naming the offending field when a
    /// numeric field is non-finite, or when `camera_smoothing_rate` or
    /// `aim_distance` is not strictly positive.
    pub fn validate(&self) -> Result<(), RigError> {
        if !self.mouse_sensitivity.is_finite() {
            return Err(RigError::Options(format!(
                "mouse_sensitivity must be finite, got {}",
                self.mouse_sensitivity
            )));
        }
        if !self.camera_smoothing_rate.is_finite() || self.camera_smoothing_rate <= 0.0 {
            return Err(RigError::Options(format!(
                "camera_smoothing_rate must be positive, got {}",
                self.camera_smoothing_rate
            )));
        }
        if !self.aim_distance.is_finite() || self.aim_distance <= 0.0 {
            return Err(RigError::Options(format!(
                "aim_distance must be positive, got {}",
                self.aim_distance
            )));
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults; the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// [`RigError::Io`] if the file cannot be read, [`RigError::Parse`]
    /// if it is not valid TOML, [`RigError::Options`] if the parsed
    /// values fail validation.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path)?;
        let options: Self =
            toml::from_str(&content).map_err(|e| RigError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`RigError::Parse`] on serialization failure, [`RigError::Io`] on
    /// file access failure.
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RigError::Parse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = RigOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: RigOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
mouse_sensitivity = 1.5
follower_cadence = "fixed"
"#;
        let opts: RigOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.mouse_sensitivity, 1.5);
        assert_eq!(opts.follower_cadence, Cadence::Fixed);
        // Everything else should be default
        assert_eq!(opts.aim_distance, 500.0);
        assert_eq!(opts.free_look, FreeLookPolicy::Suspend);
    }

    #[test]
    fn free_look_policy_parses_snake_case() {
        let opts: RigOptions = toml::from_str(r#"free_look = "snap_back""#).unwrap();
        assert_eq!(opts.free_look, FreeLookPolicy::SnapBack);
    }

    #[test]
    fn validate_accepts_defaults_and_zero_sensitivity() {
        assert!(RigOptions::default().validate().is_ok());
        let zero_sens = RigOptions {
            mouse_sensitivity: 0.0,
            ..RigOptions::default()
        };
        assert!(zero_sens.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        let zero_distance = RigOptions {
            aim_distance: 0.0,
            ..RigOptions::default()
        };
        assert!(zero_distance.validate().is_err());

        let negative_rate = RigOptions {
            camera_smoothing_rate: -2.0,
            ..RigOptions::default()
        };
        assert!(negative_rate.validate().is_err());

        let nan_sensitivity = RigOptions {
            mouse_sensitivity: f32::NAN,
            ..RigOptions::default()
        };
        assert!(nan_sensitivity.validate().is_err());
    }
}
