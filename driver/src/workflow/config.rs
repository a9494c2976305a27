use anyhow::Context;
use labcore::model::{Material, Terrain};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One terrain row of raw material readings, kept exactly as a user would
/// have typed them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainRow {
    pub material1: String,
    pub material2: String,
    pub material3: String,
}

impl TerrainRow {
    pub fn material(&self, material: Material) -> &str {
        match material {
            Material::One => &self.material1,
            Material::Two => &self.material2,
            Material::Three => &self.material3,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingRows {
    pub terrain1: TerrainRow,
    pub terrain2: TerrainRow,
    pub terrain3: TerrainRow,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicSection {
    pub theta: String,
    pub time: String,
    pub radius: String,
}

impl KinematicSection {
    /// True when no incline-run input was entered at all.
    pub fn is_empty(&self) -> bool {
        self.theta.trim().is_empty()
            && self.time.trim().is_empty()
            && self.radius.trim().is_empty()
    }
}

/// A full session description: everything a user would have entered into
/// the bench, ready to be replayed through the reducer. Missing fields
/// default to empty readings, matching a freshly loaded page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub readings: ReadingRows,
    pub kinematics: KinematicSection,
    pub trials: Vec<String>,
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading session config {}", path_ref.display()))?;
        let config: SessionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing session config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn terrain_row(&self, terrain: Terrain) -> &TerrainRow {
        match terrain {
            Terrain::One => &self.readings.terrain1,
            Terrain::Two => &self.readings.terrain2,
            Terrain::Three => &self.readings.terrain3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"readings:\n  terrain1:\n    material1: \"0.5\"\nkinematics:\n  theta: \"30\"\ntrials: [\"1\", \"2\"]\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let config = SessionConfig::load(&path).unwrap();
        assert_eq!(config.readings.terrain1.material1, "0.5");
        assert_eq!(config.kinematics.theta, "30");
        assert_eq!(config.trials.len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty_readings() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"trials: []\n").unwrap();
        let path = temp.into_temp_path();
        let config = SessionConfig::load(&path).unwrap();
        assert!(config.readings.terrain2.material3.is_empty());
        assert!(config.kinematics.radius.is_empty());
    }

    #[test]
    fn terrain_rows_are_addressable_by_axis() {
        let mut config = SessionConfig::default();
        config.readings.terrain3.material2 = "0.8".into();
        assert_eq!(
            config.terrain_row(Terrain::Three).material(Material::Two),
            "0.8"
        );
    }
}
