//! Chart payloads shown alongside a trajectory.
//!
//! Input side: [`ScatterPlotData`] and [`HistogramPlotData`], wrapped in
//! [`PlotData`].  Output side: the formatted [`Plot`], whose traces are a
//! tagged union keyed by `"type"`.

use serde::{Deserialize, Serialize};

use crate::{TrajError, TrajResult};

// ── Input data ────────────────────────────────────────────────────────────────

/// One or more y-traces plotted against a shared x-trace.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlotData {
    pub title: String,
    pub xaxis_title: String,
    pub yaxis_title: String,
    pub xtrace: Vec<f64>,
    /// `(trace name, values)` in legend order.
    pub ytraces: Vec<(String, Vec<f64>)>,
    /// Plotly mode string, `"markers"` or `"lines"`.
    pub render_mode: String,
}

impl ScatterPlotData {
    pub fn new(
        title: impl Into<String>,
        xaxis_title: impl Into<String>,
        yaxis_title: impl Into<String>,
        xtrace: Vec<f64>,
        ytraces: Vec<(String, Vec<f64>)>,
    ) -> Self {
        Self {
            title: title.into(),
            xaxis_title: xaxis_title.into(),
            yaxis_title: yaxis_title.into(),
            xtrace,
            ytraces,
            render_mode: "markers".to_owned(),
        }
    }

    pub fn with_render_mode(mut self, mode: impl Into<String>) -> Self {
        self.render_mode = mode.into();
        self
    }

    /// Shape for output.  Every y-trace must match the x-trace length.
    pub fn format(&self) -> TrajResult<Plot> {
        let mut data = Vec::with_capacity(self.ytraces.len());
        for (name, y) in &self.ytraces {
            if y.len() != self.xtrace.len() {
                return Err(TrajError::data(format!(
                    "plot {} y-trace {name} has length {} but the x-trace has {}",
                    self.title,
                    y.len(),
                    self.xtrace.len()
                )));
            }
            data.push(PlotTrace::Scatter {
                name: name.clone(),
                x: self.xtrace.clone(),
                y: y.clone(),
                mode: self.render_mode.clone(),
            });
        }
        Ok(Plot {
            layout: PlotLayout::new(&self.title, &self.xaxis_title, &self.yaxis_title),
            data,
        })
    }
}

/// Value distributions binned by the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramPlotData {
    pub title: String,
    pub xaxis_title: String,
    pub traces: Vec<(String, Vec<f64>)>,
}

impl HistogramPlotData {
    pub fn new(
        title: impl Into<String>,
        xaxis_title: impl Into<String>,
        traces: Vec<(String, Vec<f64>)>,
    ) -> Self {
        Self { title: title.into(), xaxis_title: xaxis_title.into(), traces }
    }

    pub fn format(&self) -> Plot {
        Plot {
            layout: PlotLayout::new(&self.title, &self.xaxis_title, "frequency"),
            data: self
                .traces
                .iter()
                .map(|(name, x)| PlotTrace::Histogram { name: name.clone(), x: x.clone() })
                .collect(),
        }
    }
}

/// Plot kinds accepted by the converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlotKind {
    Scatter,
    Histogram,
}

impl std::str::FromStr for PlotKind {
    type Err = TrajError;
    fn from_str(s: &str) -> TrajResult<Self> {
        match s {
            "scatter" => Ok(PlotKind::Scatter),
            "histogram" => Ok(PlotKind::Histogram),
            other => Err(TrajError::unsupported("plot type", other)),
        }
    }
}

/// Plot input of any supported kind.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotData {
    Scatter(ScatterPlotData),
    Histogram(HistogramPlotData),
}

impl PlotData {
    pub fn kind(&self) -> PlotKind {
        match self {
            PlotData::Scatter(_) => PlotKind::Scatter,
            PlotData::Histogram(_) => PlotKind::Histogram,
        }
    }

    pub fn format(&self) -> TrajResult<Plot> {
        match self {
            PlotData::Scatter(s) => s.format(),
            PlotData::Histogram(h) => Ok(h.format()),
        }
    }
}

// ── Formatted payload ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub title: String,
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
}

impl PlotLayout {
    fn new(title: &str, x: &str, y: &str) -> Self {
        Self {
            title: title.to_owned(),
            xaxis: AxisTitle { title: x.to_owned() },
            yaxis: AxisTitle { title: y.to_owned() },
        }
    }
}

/// One trace of a formatted plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlotTrace {
    Scatter { name: String, x: Vec<f64>, y: Vec<f64>, mode: String },
    Histogram { name: String, x: Vec<f64> },
}

/// A chart as stored in `plotData.data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub layout: PlotLayout,
    pub data: Vec<PlotTrace>,
}
