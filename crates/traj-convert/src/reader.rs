//! The engine-reader interface and the two readers that ship in-tree.
//!
//! Each simulation engine gets one [`TrajectoryReader`] that turns its
//! native output into a [`TrajectoryData`].  Only re-reading `.simularium`
//! files and plain CSV tables are implemented here.

use std::fmt;
use std::str::FromStr;

use traj_agent::{TrajectoryData, load_agents_reader};
use traj_core::{DisplayData, MetaData, TrajError, UnitData};
use traj_output::{from_document, read_simularium};

use crate::{ConvertResult, ProgressObserver};

/// Turns one engine's output into a [`TrajectoryData`].
pub trait TrajectoryReader {
    type Input;

    /// Parse `input`, reporting progress to `progress`.  An error from the
    /// observer aborts the read and is returned as is.
    fn read(&self, input: Self::Input, progress: &mut dyn ProgressObserver) -> ConvertResult<TrajectoryData>;
}

// ── Engines ───────────────────────────────────────────────────────────────────

/// Simulation engines by the names used to select a reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceEngine {
    Cellpack,
    Cytosim,
    Mcell,
    Md,
    Medyan,
    Mem3dg,
    Nerdss,
    Physicell,
    Readdy,
    Smoldyn,
    Springsalad,
    Vmd,
    /// An existing `.simularium` file.
    Simularium,
    /// A CSV table of point agents.
    Table,
}

impl SourceEngine {
    pub const ALL: [SourceEngine; 14] = [
        SourceEngine::Cellpack,
        SourceEngine::Cytosim,
        SourceEngine::Mcell,
        SourceEngine::Md,
        SourceEngine::Medyan,
        SourceEngine::Mem3dg,
        SourceEngine::Nerdss,
        SourceEngine::Physicell,
        SourceEngine::Readdy,
        SourceEngine::Smoldyn,
        SourceEngine::Springsalad,
        SourceEngine::Vmd,
        SourceEngine::Simularium,
        SourceEngine::Table,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceEngine::Cellpack => "cellpack",
            SourceEngine::Cytosim => "cytosim",
            SourceEngine::Mcell => "mcell",
            SourceEngine::Md => "md",
            SourceEngine::Medyan => "medyan",
            SourceEngine::Mem3dg => "mem3dg",
            SourceEngine::Nerdss => "nerdss",
            SourceEngine::Physicell => "physicell",
            SourceEngine::Readdy => "readdy",
            SourceEngine::Smoldyn => "smoldyn",
            SourceEngine::Springsalad => "springsalad",
            SourceEngine::Vmd => "vmd",
            SourceEngine::Simularium => "simularium",
            SourceEngine::Table => "table",
        }
    }

    /// `true` for engines with a reader in this crate.
    pub fn has_reader(self) -> bool {
        matches!(self, SourceEngine::Simularium | SourceEngine::Table)
    }
}

impl fmt::Display for SourceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceEngine {
    type Err = TrajError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, TrajError> {
        let lower = s.trim().to_ascii_lowercase();
        SourceEngine::ALL
            .into_iter()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| TrajError::unsupported("source engine", s))
    }
}

// ── .simularium ───────────────────────────────────────────────────────────────

/// Reads JSON or binary `.simularium` bytes, choosing by the binary
/// identifier.
#[derive(Copy, Clone, Debug, Default)]
pub struct SimulariumFileReader;

impl TrajectoryReader for SimulariumFileReader {
    type Input = Vec<u8>;

    fn read(&self, input: Vec<u8>, progress: &mut dyn ProgressObserver) -> ConvertResult<TrajectoryData> {
        let doc = read_simularium(&input)?;
        progress.on_progress(0.5)?;
        let data = from_document(&doc)?;
        progress.on_progress(1.0)?;
        Ok(data)
    }
}

// ── CSV tables ────────────────────────────────────────────────────────────────

/// A CSV agent table plus what the table cannot carry.
#[derive(Clone, Debug)]
pub struct TableInput {
    pub csv:           String,
    pub display_data:  Vec<DisplayData>,
    pub meta_data:     MetaData,
    pub time_units:    UnitData,
    pub spatial_units: UnitData,
}

impl TableInput {
    pub fn new(csv: impl Into<String>) -> Self {
        Self {
            csv:           csv.into(),
            display_data:  Vec::new(),
            meta_data:     MetaData::default(),
            time_units:    UnitData::default_time(),
            spatial_units: UnitData::default_spatial(),
        }
    }

    pub fn with_display_data(mut self, display: DisplayData) -> Self {
        self.display_data.push(display);
        self
    }
}

/// Reads point agents from a CSV table.  See
/// [`traj_agent::table`] for the columns.
#[derive(Copy, Clone, Debug, Default)]
pub struct TableReader;

impl TrajectoryReader for TableReader {
    type Input = TableInput;

    fn read(&self, input: TableInput, progress: &mut dyn ProgressObserver) -> ConvertResult<TrajectoryData> {
        let mut agents = load_agents_reader(input.csv.as_bytes())?;
        progress.on_progress(0.9)?;

        for display in input.display_data {
            if let Some(radius) = display.radius {
                let slots: Vec<_> = agents.occupied().filter(|&(t, a)| agents.type_name(t, a) == display.name).collect();
                for (t, a) in slots {
                    agents.set_radius(t, a, radius);
                }
            }
            agents.display_data.insert(display.name.clone(), display);
        }
        let data = TrajectoryData::new(agents)
            .with_meta_data(input.meta_data)
            .with_time_units(input.time_units)
            .with_spatial_units(input.spatial_units);
        progress.on_progress(1.0)?;
        Ok(data)
    }
}
