//! Plots derived from the trajectory itself.

use indexmap::IndexMap;

use traj_agent::TrajectoryData;
use traj_core::ScatterPlotData;

pub const NUMBER_OF_AGENTS_TITLE: &str = "Number of agents over time";
pub const NUMBER_OF_AGENTS_YAXIS: &str = "Number of agents";

/// Per-type agent counts against time, one trace per type.
///
/// Everything from the first `#` of a type name on is ignored, so
/// `"actin#barbed"` and `"actin#pointed"` count as one `"actin"` trace.
/// Traces appear in first-seen order.
pub fn number_of_agents_plot(data: &TrajectoryData, title: &str, yaxis_title: &str) -> ScatterPlotData {
    let agents = &data.agent_data;
    let steps = agents.total_steps();
    let mut counts: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for (t, a) in agents.occupied() {
        let name = agents.type_name(t, a);
        let base = name.split_once('#').map_or(name, |(base, _)| base);
        counts.entry(base).or_insert_with(|| vec![0.0; steps])[t] += 1.0;
    }

    ScatterPlotData::new(
        title,
        format!("Time ({})", data.time_units),
        yaxis_title,
        agents.times().iter().map(|&t| f64::from(t)).collect(),
        counts.into_iter().map(|(name, y)| (name.to_owned(), y)).collect(),
    )
    .with_render_mode("lines")
}
