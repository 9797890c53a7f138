//! Tunable spring parameters, supplied to every vertex each frame.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};
use thiserror::Error;

/// Per-frame tuning for the whole strand.
///
/// Nothing in the frame path checks these values; out of range numbers just
/// produce odd motion. Hosts exposing them in a settings panel can call
/// [`SpringSettings::validate`] first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct SpringSettings {
    /// Inverse stiffness of the restoring pull. Larger is a slower return.
    pub viscosity: f64,
    /// Fraction of velocity lost per frame, 0 to 1.
    pub damping: f64,
    /// Thickness of every vertex's hit region.
    pub hitbox_width: f64,
}

impl Default for SpringSettings {
    fn default() -> Self {
        SpringSettings {
            viscosity: 20.0,
            damping: 0.1,
            hitbox_width: 20.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("viscosity must be finite and positive, got {0}")]
    Viscosity(f64),
    #[error("damping must be within [0, 1], got {0}")]
    Damping(f64),
    #[error("hitbox width must be finite and non-negative, got {0}")]
    HitboxWidth(f64),
}

impl SpringSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.viscosity.is_finite() && self.viscosity > 0.0) {
            return Err(SettingsError::Viscosity(self.viscosity));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SettingsError::Damping(self.damping));
        }
        if !(self.hitbox_width.is_finite() && self.hitbox_width >= 0.0) {
            return Err(SettingsError::HitboxWidth(self.hitbox_width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SpringSettings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = SpringSettings::default();
        let s = SpringSettings {
            viscosity: 0.0,
            ..base
        };
        assert_eq!(s.validate(), Err(SettingsError::Viscosity(0.0)));
        let s = SpringSettings {
            damping: 1.5,
            ..base
        };
        assert_eq!(s.validate(), Err(SettingsError::Damping(1.5)));
        let s = SpringSettings {
            hitbox_width: -1.0,
            ..base
        };
        assert_eq!(s.validate(), Err(SettingsError::HitboxWidth(-1.0)));
    }

    #[test]
    fn nan_damping_is_rejected() {
        let s = SpringSettings {
            damping: f64::NAN,
            ..SpringSettings::default()
        };
        assert!(matches!(s.validate(), Err(SettingsError::Damping(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let s: SpringSettings = serde_json::from_str(r#"{"damping": 0.25}"#).unwrap();
        assert_eq!(s.damping, 0.25);
        assert_eq!(s.viscosity, SpringSettings::default().viscosity);
    }
}
