use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wall::NormalizedPos;

/// Unique identifier for an icon, stable for the icon's lifetime
///
/// Ids are handed out by the registry from a monotonically increasing
/// counter, so an id is never reused for a different icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IconId(u64);

impl IconId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "icon#{}", self.0)
    }
}

/// A decorative marker placed on the wall
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    id: IconId,
    /// Name of the visual asset to render
    pub asset: String,
    /// Position in normalized wall space
    pub position: NormalizedPos,
}

impl Icon {
    pub(crate) fn new(id: IconId, asset: impl Into<String>, position: NormalizedPos) -> Self {
        Self {
            id,
            asset: asset.into(),
            position,
        }
    }

    pub fn id(&self) -> IconId {
        self.id
    }
}
