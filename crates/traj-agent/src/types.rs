//! Per-timestep display-type names.
//!
//! Unlike the numeric arrays in [`AgentData`](crate::AgentData), a frame's
//! type list is exactly as long as the number of agents present: it is never
//! padded out to capacity.  Names are interned once and frames hold indices.

use indexmap::IndexSet;

/// Interned type-name lists, one per timestep.
#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    names:  IndexSet<String>,
    frames: Vec<Vec<u32>>,
}

impl TypeTable {
    /// A table with `total_steps` empty frames.
    pub fn with_frames(total_steps: usize) -> Self {
        Self { names: IndexSet::new(), frames: vec![Vec::new(); total_steps] }
    }

    fn intern(&mut self, name: &str) -> u32 {
        if let Some(i) = self.names.get_index_of(name) {
            return i as u32;
        }
        self.names.insert_full(name.to_owned()).0 as u32
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Make room for `total_steps` frames.  Existing frames are untouched.
    pub fn resize_frames(&mut self, total_steps: usize) {
        self.frames.resize(total_steps, Vec::new());
    }

    /// Number of names recorded for frame `t`.
    #[inline]
    pub fn frame_len(&self, t: usize) -> usize {
        self.frames.get(t).map_or(0, Vec::len)
    }

    /// Name of agent `a` in frame `t`.
    pub fn get(&self, t: usize, a: usize) -> Option<&str> {
        let i = *self.frames.get(t)?.get(a)?;
        self.names.get_index(i as usize).map(String::as_str)
    }

    /// Names of frame `t` in agent order.
    pub fn frame(&self, t: usize) -> impl Iterator<Item = &str> + '_ {
        self.frames
            .get(t)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.names.get_index(i as usize).map(String::as_str))
    }

    /// Append a name to frame `t`, adding frames if needed.
    pub fn push(&mut self, t: usize, name: &str) {
        if t >= self.frames.len() {
            self.resize_frames(t + 1);
        }
        let i = self.intern(name);
        self.frames[t].push(i);
    }

    /// Replace the name at `(t, a)`.  Pads the frame with empty names if `a`
    /// lies past its end.
    pub fn set(&mut self, t: usize, a: usize, name: &str) {
        if t >= self.frames.len() {
            self.resize_frames(t + 1);
        }
        let i = self.intern(name);
        let frame_len = self.frames[t].len();
        if a >= frame_len {
            let empty = self.intern("");
            self.frames[t].resize(a, empty);
            self.frames[t].push(i);
        } else {
            self.frames[t][a] = i;
        }
    }

    /// Drop names past `len` in frame `t`.
    pub fn truncate_frame(&mut self, t: usize, len: usize) {
        if let Some(f) = self.frames.get_mut(t) {
            f.truncate(len);
        }
    }

    /// Keep only the frames whose index satisfies `keep`.
    pub fn retain_frames(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let mut t = 0;
        self.frames.retain(|_| {
            let k = keep(t);
            t += 1;
            k
        });
    }

    /// Keep only the agents of frame `t` whose index satisfies `keep`.
    pub fn retain_in_frame(&mut self, t: usize, mut keep: impl FnMut(usize) -> bool) {
        if let Some(f) = self.frames.get_mut(t) {
            let mut a = 0;
            f.retain(|_| {
                let k = keep(a);
                a += 1;
                k
            });
        }
    }

    /// Owned nested lists, mainly for tests and debugging.
    pub fn to_nested(&self) -> Vec<Vec<String>> {
        (0..self.frames.len())
            .map(|t| self.frame(t).map(str::to_owned).collect())
            .collect()
    }
}

impl PartialEq for TypeTable {
    /// Frames compare by name, not by interned index.
    fn eq(&self, other: &Self) -> bool {
        self.frames.len() == other.frames.len()
            && (0..self.frames.len()).all(|t| self.frame(t).eq(other.frame(t)))
    }
}
