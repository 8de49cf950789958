//! Immutable configuration shared by the store, the codec and the writers.
//!
//! Everything here is a `const`; nothing is mutated at runtime.

use crate::DimensionData;

// ── Frame record layout ───────────────────────────────────────────────────────

/// Slot indices of one agent record inside a flat frame buffer.
pub mod buffer_index {
    pub const VIZ_TYPE:    usize = 0;
    pub const UID:         usize = 1;
    pub const TID:         usize = 2;
    pub const POSX:        usize = 3;
    pub const POSY:        usize = 4;
    pub const POSZ:        usize = 5;
    pub const ROTX:        usize = 6;
    pub const ROTY:        usize = 7;
    pub const ROTZ:        usize = 8;
    pub const R:           usize = 9;
    pub const NSP:         usize = 10;
    /// First subpoint value.  Only present when `NSP > 0`.
    pub const SP:          usize = 11;
}

/// Slots reserved per agent when the record has at least one subpoint value.
pub const VALUES_PER_AGENT: usize = 12;

/// Fixed leading fields of every record (everything before the subpoint tail).
pub const MIN_VALUES_PER_AGENT: usize = 11;

// ── Viz type tags ─────────────────────────────────────────────────────────────

/// Float tag written in slot 0 for point-like agents.
pub const VIZ_TYPE_DEFAULT: f64 = 1000.0;

/// Float tag written in slot 0 for polyline agents.
pub const VIZ_TYPE_FIBER: f64 = 1001.0;

// ── Buffer growth ─────────────────────────────────────────────────────────────

/// Capacity added per grow step along each axis.
///
/// `max_subpoints` counts floats, so ten XYZ triples is 30 values.
pub const BUFFER_SIZE_INC: DimensionData = DimensionData {
    total_steps:   1000,
    max_agents:    1000,
    max_subpoints: 30,
};

// ── Viewer ────────────────────────────────────────────────────────────────────

/// Target span, in viewer units, that auto-scaling brings the scene into.
pub mod viewer_dimension_range {
    pub const MIN: f32 = 250.0;
    pub const MAX: f32 = 750.0;
}

/// Spans below this are treated as a single point and left unscaled.
pub const DEGENERATE_RANGE_EPSILON: f32 = 1e-6;

/// Edge length of the default scene box on every axis.
pub const DEFAULT_BOX_SIZE: f32 = 100.0;

/// Default camera placement.
pub mod default_camera {
    pub const POSITION:      [f32; 3] = [0.0, 0.0, 120.0];
    pub const LOOK_AT:       [f32; 3] = [0.0, 0.0, 0.0];
    pub const UP_VECTOR:     [f32; 3] = [0.0, 1.0, 0.0];
    pub const FOV_DEGREES:   f32      = 75.0;
}

/// Radius of the marker spheres drawn along fibers.
pub const FIBER_POINT_RADIUS: f32 = 0.5;

/// Stride between synthesized fiber-marker IDs.
pub const FIBER_POINT_ID_STRIDE: i64 = 100;

/// Largest unique ID the viewer can represent.
pub const MAX_AGENT_ID: i64 = i32::MAX as i64;

// ── Document versions ─────────────────────────────────────────────────────────

pub mod current_version {
    pub const TRAJECTORY_INFO: u32 = 3;
    pub const SPATIAL_DATA:    u32 = 1;
    pub const PLOT_DATA:       u32 = 1;
}

/// `msgType` of a spatial data bundle.
pub const SPATIAL_DATA_MSG_TYPE: u32 = 1;

// ── Binary container ──────────────────────────────────────────────────────────

pub mod binary {
    /// Magic bytes at offset 0.
    pub const FILE_IDENTIFIER: &[u8; 16] = b"SIMULARIUMBINARY";
    pub const VERSION:         u32 = 2;
    pub const N_BLOCKS:        u32 = 3;
    pub const BYTES_PER_VALUE: usize = 4;
    /// `header_length`, `version`, `n_blocks`.
    pub const HEADER_CONSTANT_N_VALUES: usize = 3;
    /// `block_offset`, `block_type`, `block_length`.
    pub const HEADER_N_VALUES_PER_BLOCK: usize = 3;
    /// `block_type`, `block_length`.
    pub const BLOCK_HEADER_N_VALUES: usize = 2;
    /// `frame_index`, `time`, `n_agents`.
    pub const FRAME_HEADER_N_VALUES: usize = 3;
    /// Default upper bound on one output file.
    pub const MAX_BYTES: u64 = 2_000_000_000;

    pub mod block_type {
        pub const SPATIAL_DATA_JSON:   u32 = 0;
        pub const TRAJ_INFO_JSON:      u32 = 1;
        pub const PLOT_DATA_JSON:      u32 = 2;
        pub const SPATIAL_DATA_BINARY: u32 = 3;
    }
}
