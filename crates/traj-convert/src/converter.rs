//! The [`TrajectoryConverter`]: holds one normalized trajectory and writes
//! it out.

use std::path::{Path, PathBuf};

use traj_agent::TrajectoryData;
use traj_core::PlotData;
use traj_output::{BinaryWriter, JsonWriter, TrajectoryWriter};

use crate::filters::Filter;
use crate::plots::{NUMBER_OF_AGENTS_TITLE, NUMBER_OF_AGENTS_YAXIS, number_of_agents_plot};
use crate::{ConvertResult, ConverterBuilder, ConverterConfig, ProgressObserver, SaveOptions, TrajectoryReader};

/// A trajectory ready to save, with the options it was normalized under.
///
/// Create via [`ConverterBuilder`] (or [`TrajectoryConverter::new`] for the
/// defaults).  The data is only mutated by adding plots; filtering works on
/// a copy.
#[derive(Debug)]
pub struct TrajectoryConverter {
    data:   TrajectoryData,
    config: ConverterConfig,
}

impl TrajectoryConverter {
    pub(crate) fn from_parts(data: TrajectoryData, config: ConverterConfig) -> Self {
        Self { data, config }
    }

    /// Normalize `data` with the default [`ConverterConfig`].
    pub fn new(data: TrajectoryData) -> ConvertResult<Self> {
        ConverterBuilder::new(data).build()
    }

    pub fn builder(data: TrajectoryData) -> ConverterBuilder {
        ConverterBuilder::new(data)
    }

    /// Read `input` with `reader`, then normalize under `config`.
    ///
    /// An error from `progress` stops the read and is returned unchanged.
    pub fn from_reader<R: TrajectoryReader>(
        reader: &R,
        input: R::Input,
        config: ConverterConfig,
        progress: &mut dyn ProgressObserver,
    ) -> ConvertResult<Self> {
        let data = reader.read(input, progress)?;
        ConverterBuilder::new(data).config(config).build()
    }

    pub fn data(&self) -> &TrajectoryData {
        &self.data
    }

    pub fn into_data(self) -> TrajectoryData {
        self.data
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ── Plots ─────────────────────────────────────────────────────────────────

    /// Format `plot` and append it.  Scatter traces of unequal length are
    /// rejected and nothing is added.
    pub fn add_plot(&mut self, plot: &PlotData) -> ConvertResult<()> {
        let formatted = plot.format()?;
        self.data.plots.push(formatted);
        Ok(())
    }

    /// Append a per-type agent count plot.
    pub fn add_number_of_agents_plot(&mut self) -> ConvertResult<()> {
        let plot = number_of_agents_plot(&self.data, NUMBER_OF_AGENTS_TITLE, NUMBER_OF_AGENTS_YAXIS);
        self.add_plot(&PlotData::Scatter(plot))
    }

    // ── Filters ───────────────────────────────────────────────────────────────

    /// Run `filters` in order over a copy of the data and return the result.
    pub fn filter_data(&self, filters: &[&dyn Filter]) -> ConvertResult<TrajectoryData> {
        let mut data = self.data.clone();
        for filter in filters {
            log::info!("Filtering: {}", filter.name());
            data = filter.apply(data)?;
        }
        Ok(data)
    }

    // ── Output ────────────────────────────────────────────────────────────────

    /// Write `{output_path}.simularium` (or numbered binary chunks) and
    /// return the files created.
    pub fn save(&self, output_path: &Path, options: &SaveOptions) -> ConvertResult<Vec<PathBuf>> {
        let paths = if options.binary {
            let writer = BinaryWriter::new().with_max_bytes(options.max_binary_bytes);
            writer.save(&self.data, output_path, options.validate_ids)?
        } else {
            JsonWriter::new().save(&self.data, output_path, options.validate_ids)?
        };
        log::info!("saved {} file(s) under {}", paths.len(), output_path.display());
        Ok(paths)
    }

    /// The whole JSON document as a string.
    pub fn to_json(&self) -> ConvertResult<String> {
        Ok(JsonWriter::new().to_json_string(&self.data)?)
    }

    /// Write only the plots to `{output_path}_plot-data.json`.
    pub fn save_plot_data(&self, output_path: &Path) -> ConvertResult<PathBuf> {
        Ok(JsonWriter::new().save_plot_data(&self.data.plots, output_path)?)
    }
}
