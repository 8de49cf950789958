//! Fluent builder for a [`TrajectoryConverter`].
//!
//! # Example
//!
//! ```rust,ignore
//! let converter = ConverterBuilder::new(data)
//!     .scale(ScaleMode::Auto)
//!     .center(true)
//!     .draw_fiber_points(true)
//!     .build()?;
//! converter.save(Path::new("out/run"), &SaveOptions::binary())?;
//! ```
//!
//! `build` runs, in order: fiber display correction, the fiber-point
//! override, centering and scaling, then plot formatting.

use std::collections::BTreeSet;

use traj_agent::{TrajectoryData, scale_agent_data};
use traj_core::{DisplayType, PlotData};

use crate::{ConvertResult, ConverterConfig, ScaleMode, TrajectoryConverter};

pub struct ConverterBuilder {
    data:   TrajectoryData,
    config: ConverterConfig,
    plots:  Vec<PlotData>,
}

impl ConverterBuilder {
    pub fn new(data: TrajectoryData) -> Self {
        Self { data, config: ConverterConfig::default(), plots: Vec::new() }
    }

    /// Replace every option at once.
    pub fn config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scale(mut self, scale: ScaleMode) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn center(mut self, on: bool) -> Self {
        self.config.center = on;
        self
    }

    pub fn draw_fiber_points(mut self, on: bool) -> Self {
        self.config.draw_fiber_points = Some(on);
        self
    }

    /// Queue a plot, formatted (and checked) by `build`.
    pub fn plot(mut self, plot: PlotData) -> Self {
        self.plots.push(plot);
        self
    }

    pub fn build(self) -> ConvertResult<TrajectoryConverter> {
        let Self { mut data, config, plots } = self;
        config.validate()?;

        correct_fiber_display_types(&mut data);
        if let Some(on) = config.draw_fiber_points {
            data.agent_data.draw_fiber_points = on;
        }
        apply_scale(&mut data, config.scale, config.center);
        for plot in &plots {
            data.plots.push(plot.format()?);
        }
        Ok(TrajectoryConverter::from_parts(data, config))
    }
}

/// Types used by FIBER-viz agents must display as FIBER.
fn correct_fiber_display_types(data: &mut TrajectoryData) {
    let agents = &mut data.agent_data;
    let fiber_names: BTreeSet<String> = agents
        .occupied()
        .filter(|&(t, a)| agents.viz_type(t, a).is_fiber())
        .map(|(t, a)| agents.type_name(t, a).to_owned())
        .collect();
    for name in fiber_names {
        let Some(display) = agents.display_data.get_mut(&name) else { continue };
        match display.display_type {
            Some(DisplayType::Fiber) | None => {}
            Some(other) => {
                log::warn!("{name} is a fiber but was given display type {other}, using FIBER");
                display.display_type = Some(DisplayType::Fiber);
            }
        }
    }
}

/// Center and scale, then carry the factor into the units, metadata and
/// box.
fn apply_scale(data: &mut TrajectoryData, mode: ScaleMode, center: bool) {
    let fixed = match mode {
        ScaleMode::None if !center => return,
        ScaleMode::None => Some(1.0),
        ScaleMode::Auto => None,
        ScaleMode::Fixed(f) => Some(f),
    };
    let outcome = scale_agent_data(&mut data.agent_data, fixed, center);
    let factor = outcome.scale_factor;
    if let Some(offset) = outcome.translation {
        log::debug!("centered scene by {offset}");
    }
    if factor != 1.0 {
        log::info!("scaling spatial data by {factor}");
        data.spatial_units.multiply(1.0 / f64::from(factor));
    }
    data.meta_data.scale_factor = factor;
    data.meta_data.set_box_size(None);
}
