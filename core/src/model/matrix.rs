use serde::{Deserialize, Serialize};

use crate::model::reading::Reading;

/// Terrain axis of the input grid. Purely a label; the serde names match
/// the keys used by session files and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    #[serde(rename = "terrain1")]
    One,
    #[serde(rename = "terrain2")]
    Two,
    #[serde(rename = "terrain3")]
    Three,
}

impl Terrain {
    pub const ALL: [Terrain; 3] = [Terrain::One, Terrain::Two, Terrain::Three];

    pub fn index(self) -> usize {
        match self {
            Terrain::One => 0,
            Terrain::Two => 1,
            Terrain::Three => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Terrain::One => "Terrain Type 1",
            Terrain::Two => "Terrain Type 2",
            Terrain::Three => "Terrain Type 3",
        }
    }
}

/// Material axis of the input grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "material1")]
    One,
    #[serde(rename = "material2")]
    Two,
    #[serde(rename = "material3")]
    Three,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::One, Material::Two, Material::Three];

    pub fn index(self) -> usize {
        match self {
            Material::One => 0,
            Material::Two => 1,
            Material::Three => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Material::One => "Material Type 1",
            Material::Two => "Material Type 2",
            Material::Three => "Material Type 3",
        }
    }
}

/// Fixed 3x3 grid of readings keyed by terrain and material. Every cell is
/// always present: "no data" is an empty reading, never a missing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingMatrix {
    cells: [[Reading; 3]; 3],
}

impl ReadingMatrix {
    pub fn get(&self, terrain: Terrain, material: Material) -> &Reading {
        &self.cells[terrain.index()][material.index()]
    }

    /// Replaces exactly one cell, leaving the other eight untouched.
    pub fn set(&mut self, terrain: Terrain, material: Material, raw: impl Into<String>) {
        self.cells[terrain.index()][material.index()].set(raw);
    }

    /// Restores all nine cells to empty.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.clear();
            }
        }
    }
}

/// Per-cell averages derived from a [`ReadingMatrix`]; all zero by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageMatrix {
    cells: [[f64; 3]; 3],
}

impl AverageMatrix {
    /// Derives the averages from the stored readings. One reading exists
    /// per cell, so the "average" is the lenient-parsed value itself. This
    /// is total: malformed text reads as zero and nothing can fail.
    pub fn from_readings(readings: &ReadingMatrix) -> Self {
        let mut cells = [[0.0; 3]; 3];
        for terrain in Terrain::ALL {
            for material in Material::ALL {
                cells[terrain.index()][material.index()] =
                    readings.get(terrain, material).value();
            }
        }
        Self { cells }
    }

    pub fn get(&self, terrain: Terrain, material: Material) -> f64 {
        self.cells[terrain.index()][material.index()]
    }

    /// Table row for one terrain, one entry per material.
    pub fn row(&self, terrain: Terrain) -> [f64; 3] {
        self.cells[terrain.index()]
    }

    /// Chart series for one material, one point per terrain.
    pub fn series(&self, material: Material) -> [f64; 3] {
        let mut points = [0.0; 3];
        for terrain in Terrain::ALL {
            points[terrain.index()] = self.cells[terrain.index()][material.index()];
        }
        points
    }

    pub fn reset(&mut self) {
        self.cells = [[0.0; 3]; 3];
    }
}
