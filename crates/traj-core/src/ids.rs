//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys without
//! ceremony.  Zero is a valid value for both; capacity slots that were never
//! written read back as zero, the same as every other numeric buffer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// The value as written into a frame buffer.  Exact for
            /// magnitudes up to 2^53.
            #[inline(always)]
            pub fn as_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(v: $inner) -> $name {
                $name(v)
            }
        }
    };
}

typed_id! {
    /// Identity of one agent.  Unique within a frame and stable across frames
    /// for the same physical entity.  Stored wide so out-of-range values can
    /// be detected before writing.
    pub struct UniqueId(i64);
}

typed_id! {
    /// Small integer assigned to a display-type name by the type mapping.
    pub struct TypeId(u32);
}

impl TypeId {
    /// Cast to `usize` for indexing into the mapping table.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for TypeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<TypeId, Self::Error> {
        u32::try_from(n).map(TypeId)
    }
}
