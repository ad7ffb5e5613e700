use serde::{Deserialize, Serialize};

use super::texts::default_texts;

/// Default downward acceleration (pixels per second, per tick)
pub const DEFAULT_GRAVITY: f32 = 10.0;
/// Minimum seconds between two spawns
pub const DEFAULT_SPAWN_INTERVAL: f64 = 0.09;
/// Spawn velocity is clamped to +/- this per axis
pub const DEFAULT_MAX_SPEED: f32 = 14.0;
pub const DEFAULT_MAX_ANGULAR_VELOCITY: f32 = 0.06;
/// Touch samples are lifted this far up-left so the letters clear the finger
pub const DEFAULT_TOUCH_OFFSET: f32 = 48.0;
/// Particles are culled once `y >= canvas_height * cull_factor`
pub const DEFAULT_CULL_FACTOR: f32 = 1.5;
pub const DEFAULT_FONT: &str = "32px Georgia, serif";
pub const DEFAULT_FILL_STYLE: &str = "#222";

/// How horizontal pointer movement becomes spin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AngularProfile {
    /// `clamp(mx / 100, +/-max)`
    #[default]
    Scaled,
    /// `clamp(mx, +/-max)`, saturates almost immediately
    Raw,
}

/// How velocity/spin are applied each tick.
///
/// Gravity always accumulates scaled by `delta`. `PerFrame` then adds the
/// velocity and spin unscaled, which is what the toy has always done;
/// `TimeScaled` multiplies both by `delta` as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntegrationMode {
    #[default]
    PerFrame,
    TimeScaled,
}

/// Simulation tunables, loadable from JSON (camelCase keys, all optional)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub gravity: f32,
    pub spawn_interval: f64,
    pub max_speed: f32,
    pub max_angular_velocity: f32,
    pub angular_profile: AngularProfile,
    pub integration: IntegrationMode,
    pub touch_offset: f32,
    pub cull_factor: f32,
    pub font: String,
    pub fill_style: String,
    pub texts: Vec<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            max_speed: DEFAULT_MAX_SPEED,
            max_angular_velocity: DEFAULT_MAX_ANGULAR_VELOCITY,
            angular_profile: AngularProfile::default(),
            integration: IntegrationMode::default(),
            touch_offset: DEFAULT_TOUCH_OFFSET,
            cull_factor: DEFAULT_CULL_FACTOR,
            font: DEFAULT_FONT.to_string(),
            fill_style: DEFAULT_FILL_STYLE.to_string(),
            texts: default_texts(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.texts.is_empty() {
            return Err("texts must contain at least one entry".to_string());
        }
        if let Some(idx) = self.texts.iter().position(|t| t.is_empty()) {
            return Err(format!("texts[{}] is empty", idx));
        }

        let finite = [
            ("gravity", self.gravity),
            ("maxSpeed", self.max_speed),
            ("maxAngularVelocity", self.max_angular_velocity),
            ("touchOffset", self.touch_offset),
            ("cullFactor", self.cull_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        if !self.spawn_interval.is_finite() || self.spawn_interval < 0.0 {
            return Err(format!("spawnInterval must be >= 0, got {}", self.spawn_interval));
        }
        if self.max_speed <= 0.0 {
            return Err(format!("maxSpeed must be > 0, got {}", self.max_speed));
        }
        if self.max_angular_velocity < 0.0 {
            return Err(format!(
                "maxAngularVelocity must be >= 0, got {}",
                self.max_angular_velocity
            ));
        }
        if self.cull_factor <= 0.0 {
            return Err(format!("cullFactor must be > 0, got {}", self.cull_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = SimulationConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SimulationConfig::default());
    }

    #[test]
    fn camel_case_fields_override() {
        let cfg = SimulationConfig::from_json(
            r#"{"gravity": 50, "angularProfile": "raw", "integration": "timeScaled", "texts": ["ab"]}"#,
        )
        .unwrap();
        assert_eq!(cfg.gravity, 50.0);
        assert_eq!(cfg.angular_profile, AngularProfile::Raw);
        assert_eq!(cfg.integration, IntegrationMode::TimeScaled);
        assert_eq!(cfg.texts, vec!["ab".to_string()]);
        assert_eq!(cfg.max_speed, DEFAULT_MAX_SPEED);
    }

    #[test]
    fn rejects_empty_texts() {
        assert!(SimulationConfig::from_json(r#"{"texts": []}"#).is_err());
        let err = SimulationConfig::from_json(r#"{"texts": ["a", ""]}"#).unwrap_err();
        assert!(err.contains("texts[1]"));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(SimulationConfig::from_json(r#"{"maxSpeed": 0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"spawnInterval": -1}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"cullFactor": -2}"#).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SimulationConfig::from_json("{not json").is_err());
    }

    #[test]
    fn json_round_trips_through_to_json() {
        let cfg = SimulationConfig::default();
        let back = SimulationConfig::from_json(&cfg.to_json()).unwrap();
        assert_eq!(back, cfg);
    }
}
