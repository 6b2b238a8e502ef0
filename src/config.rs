// config.rs - Simulation tunables
//
// Defaults reproduce the stock page: 20px particle grid, 10px charges,
// one unit of drift per recompute. A page can override any subset through
// JSON in the canvas `data-config` attribute.

use serde::Deserialize;

use crate::error::FieldError;

pub const PARTICLE_SPACING: f64 = 20.0;
pub const CHARGE_RADIUS: f64 = 10.0;
pub const PARTICLE_RADIUS: f64 = 1.0;
pub const DRIFT_STRENGTH: f64 = 1.0;
pub const DEFAULT_CHARGE: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_spacing: f64,
    pub charge_radius: f64,
    pub particle_radius: f64,
    pub strength: f64,
    pub default_charge: f64,

    // CSS colors, only read by the canvas surface
    pub positive_color: String,
    pub negative_color: String,
    pub particle_color: String,
    pub outline_color: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_spacing: PARTICLE_SPACING,
            charge_radius: CHARGE_RADIUS,
            particle_radius: PARTICLE_RADIUS,
            strength: DRIFT_STRENGTH,
            default_charge: DEFAULT_CHARGE,
            positive_color: "red".into(),
            negative_color: "blue".into(),
            particle_color: "black".into(),
            outline_color: "black".into(),
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) JSON object and validate the result.
    pub fn from_json(text: &str) -> Result<Self, FieldError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        positive("particle_spacing", self.particle_spacing)?;
        positive("charge_radius", self.charge_radius)?;
        positive("particle_radius", self.particle_radius)?;
        if !self.strength.is_finite() {
            return Err(FieldError::InvalidConfig(format!(
                "strength must be finite, got {}",
                self.strength
            )));
        }
        if !self.default_charge.is_finite() {
            return Err(FieldError::InvalidConfig(format!(
                "default_charge must be finite, got {}",
                self.default_charge
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> Result<(), FieldError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidConfig(format!("{name} must be positive, got {v}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let c = FieldConfig::default();
        assert_eq!(c.particle_spacing, 20.0);
        assert_eq!(c.charge_radius, 10.0);
        assert_eq!(c.particle_radius, 1.0);
        assert_eq!(c.strength, 1.0);
        assert_eq!(c.default_charge, 1.0);
        assert_eq!(c.positive_color, "red");
        assert_eq!(c.negative_color, "blue");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = FieldConfig::from_json(r#"{ "particle_spacing": 40, "positive_color": "orange" }"#)
            .expect("valid config");
        assert_eq!(c.particle_spacing, 40.0);
        assert_eq!(c.positive_color, "orange");
        assert_eq!(c.charge_radius, 10.0);
        assert_eq!(c.negative_color, "blue");
    }

    #[test]
    fn empty_object_is_default() {
        let c = FieldConfig::from_json("{}").expect("valid config");
        assert_eq!(c, FieldConfig::default());
    }

    #[test]
    fn rejects_zero_spacing() {
        let err = FieldConfig::from_json(r#"{ "particle_spacing": 0 }"#).unwrap_err();
        assert!(matches!(err, FieldError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_negative_radius() {
        let c = FieldConfig { charge_radius: -1.0, ..FieldConfig::default() };
        assert!(matches!(c.validate(), Err(FieldError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = FieldConfig::from_json("{ spacing: ").unwrap_err();
        assert!(matches!(err, FieldError::ConfigParse(_)));
    }
}
