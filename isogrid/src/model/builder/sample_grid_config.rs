use crate::model::TimeSurfaceError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CELL_SIZE_METERS: f64 = 300.0;

/// meters per second
pub const DEFAULT_OFF_ROAD_WALK_SPEED: f64 = 1.0;

/// off-road radius as a fraction of the cell size when sampling a full shortest
/// path tree. the radius must stay close to the cell size: smaller leaves ring
/// artifacts between samples, larger smears travel times into distant cells.
/// the value is empirically tuned, change it with caution.
pub const SPT_OFF_ROAD_RADIUS_FACTOR: f64 = 0.7;

/// off-road radius as a fraction of the cell size when sampling only the
/// vertex/time pairs of a time surface. the looser radius compensates for
/// having intersections only and no points along street geometries.
/// the value is empirically tuned, change it with caution.
pub const MAP_OFF_ROAD_RADIUS_FACTOR: f64 = 0.8;

/// parameters of a sample grid. the cell size must match the one expected by
/// the isoline builder consuming the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleGridConfig {
    pub cell_size_meters: f64,
    pub off_road_walk_speed: f64,
    pub spt_radius_factor: f64,
    pub map_radius_factor: f64,
}

impl Default for SampleGridConfig {
    fn default() -> Self {
        Self {
            cell_size_meters: DEFAULT_CELL_SIZE_METERS,
            off_road_walk_speed: DEFAULT_OFF_ROAD_WALK_SPEED,
            spt_radius_factor: SPT_OFF_ROAD_RADIUS_FACTOR,
            map_radius_factor: MAP_OFF_ROAD_RADIUS_FACTOR,
        }
    }
}

impl SampleGridConfig {
    /// off-road radius in meters used when sampling a shortest path tree
    pub fn spt_off_road_radius(&self) -> f64 {
        self.spt_radius_factor * self.cell_size_meters
    }

    /// off-road radius in meters used when sampling vertex/time pairs
    pub fn map_off_road_radius(&self) -> f64 {
        self.map_radius_factor * self.cell_size_meters
    }

    pub fn validate(&self) -> Result<(), TimeSurfaceError> {
        let fields = [
            ("cell_size_meters", self.cell_size_meters),
            ("off_road_walk_speed", self.off_road_walk_speed),
            ("spt_radius_factor", self.spt_radius_factor),
            ("map_radius_factor", self.map_radius_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimeSurfaceError::ConfigurationError(format!(
                    "{name} must be strictly positive, found {value}"
                )));
            }
        }
        Ok(())
    }
}

/// reads a sample grid configuration from a .toml or .json file. any value
/// may be overridden by an `ISOGRID_`-prefixed environment variable, such as
/// `ISOGRID_CELL_SIZE_METERS=250`.
impl TryFrom<&String> for SampleGridConfig {
    type Error = TimeSurfaceError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let format = if f.ends_with(".toml") {
            FileFormat::Toml
        } else if f.ends_with(".json") {
            FileFormat::Json
        } else {
            return Err(TimeSurfaceError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        let config = Config::builder()
            .add_source(File::new(f, format))
            .add_source(Environment::with_prefix("ISOGRID").try_parsing(true))
            .build()
            .map_err(|e| TimeSurfaceError::ConfigReadError {
                msg: format!("failed reading '{f}'"),
                source: e,
            })?;
        let conf: SampleGridConfig =
            config
                .try_deserialize()
                .map_err(|e| TimeSurfaceError::ConfigReadError {
                    msg: format!("failed decoding '{f}'"),
                    source: e,
                })?;
        conf.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::SampleGridConfig;
    use crate::model::TimeSurfaceError;

    #[test]
    fn test_default_radii() {
        let conf = SampleGridConfig::default();
        assert!((conf.spt_off_road_radius() - 210.0).abs() < 1e-9);
        assert!((conf.map_off_road_radius() - 240.0).abs() < 1e-9);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: SampleGridConfig = toml::from_str("cell_size_meters = 150.0").unwrap();
        assert_eq!(conf.cell_size_meters, 150.0);
        assert_eq!(conf.off_road_walk_speed, 1.0);
        assert!((conf.spt_off_road_radius() - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_roundtrip() {
        let conf = SampleGridConfig {
            cell_size_meters: 200.0,
            ..Default::default()
        };
        let json = serde_json::to_value(&conf).unwrap();
        let decoded: SampleGridConfig = serde_json::from_value(json).unwrap();
        assert_eq!(conf, decoded);
    }

    #[test]
    fn test_validate_rejects_zero_cell_size() {
        let conf = SampleGridConfig {
            cell_size_meters: 0.0,
            ..Default::default()
        };
        match conf.validate() {
            Err(TimeSurfaceError::ConfigurationError(msg)) => {
                assert!(msg.contains("cell_size_meters"))
            }
            other => panic!("expected configuration error, found {other:?}"),
        }
    }

    #[test]
    fn test_read_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "isogrid-sample-grid-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "cell_size_meters = 250.0\noff_road_walk_speed = 1.2\n").unwrap();
        let filename = path.to_string_lossy().to_string();
        let result = SampleGridConfig::try_from(&filename);
        std::fs::remove_file(&path).unwrap();
        match result {
            Ok(conf) => {
                assert_eq!(conf.cell_size_meters, 250.0);
                assert_eq!(conf.off_road_walk_speed, 1.2);
                assert_eq!(conf.map_radius_factor, super::MAP_OFF_ROAD_RADIUS_FACTOR);
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SampleGridConfig::try_from(&String::from("grid.yaml"));
        assert!(matches!(result, Err(TimeSurfaceError::ConfigurationError(_))));
    }
}
