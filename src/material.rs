//! Opaque material handles.

use std::fmt;

/// Identity of a material, as resolved by the level loader's material cache.
///
/// Faces are grouped into render batches by handle equality only; the tree
/// never looks at what a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MaterialId(pub u32);

impl MaterialId {
    pub const fn new(id: u32) -> Self {
        MaterialId(id)
    }

    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for MaterialId {
    fn from(id: u32) -> Self {
        MaterialId(id)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "material#{}", self.0)
    }
}
