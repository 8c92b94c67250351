//! Selection payloads - which records of a dataset a subset describes

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The geometry of a subset
///
/// Two families of datasets are supported: hierarchical data selected by
/// node id, and gridded data selected by a boolean pixel mask. The variant
/// carries the concrete description; the broadcast contract is defined
/// once on [`crate::Subset`] and does not depend on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// Ids of selected nodes in a hierarchical dataset
    Tree(TreeSelection),
    /// Boolean mask over a gridded dataset
    Pixel(PixelMask),
}

impl Selection {
    /// Short name of the selection family ("tree" or "pixel")
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Tree(_) => "tree",
            Selection::Pixel(_) => "pixel",
        }
    }

    /// Check if nothing is selected
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Tree(tree) => tree.is_empty(),
            Selection::Pixel(mask) => mask.selected_count() == 0,
        }
    }

    /// Try to get this selection as a tree selection
    pub fn as_tree(&self) -> Option<&TreeSelection> {
        match self {
            Selection::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Try to get this selection as a mutable tree selection
    pub fn as_tree_mut(&mut self) -> Option<&mut TreeSelection> {
        match self {
            Selection::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Try to get this selection as a pixel mask
    pub fn as_pixel(&self) -> Option<&PixelMask> {
        match self {
            Selection::Pixel(mask) => Some(mask),
            _ => None,
        }
    }

    /// Try to get this selection as a mutable pixel mask
    pub fn as_pixel_mut(&mut self) -> Option<&mut PixelMask> {
        match self {
            Selection::Pixel(mask) => Some(mask),
            _ => None,
        }
    }
}

impl From<TreeSelection> for Selection {
    fn from(tree: TreeSelection) -> Self {
        Selection::Tree(tree)
    }
}

impl From<PixelMask> for Selection {
    fn from(mask: PixelMask) -> Self {
        Selection::Pixel(mask)
    }
}

/// An ordered set of selected node ids
///
/// Uses IndexSet to preserve insertion order (useful for deterministic
/// serialization and stable iteration in viewers)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeSelection {
    nodes: IndexSet<u32>,
}

impl TreeSelection {
    /// Create an empty tree selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from an iterator of node ids
    pub fn from_nodes(nodes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    /// Add a node id; returns false if it was already selected
    pub fn insert(&mut self, id: u32) -> bool {
        self.nodes.insert(id)
    }

    /// Remove a node id; returns false if it was not selected
    pub fn remove(&mut self, id: u32) -> bool {
        self.nodes.shift_remove(&id)
    }

    /// Check if a node id is selected
    pub fn contains(&self, id: u32) -> bool {
        self.nodes.contains(&id)
    }

    /// Number of selected nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no nodes are selected
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate the selected node ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().copied()
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// A dense boolean mask over a width x height sample grid
///
/// The bit store always matches the grid size; deserialization rejects
/// payloads where it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPixelMask")]
pub struct PixelMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Create an all-deselected mask of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Mask width in samples
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height in samples
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if the sample at (x, y) is selected; out of bounds reads false
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y * self.width + x]
    }

    /// Set the sample at (x, y); returns false (and does nothing) out of bounds
    pub fn set(&mut self, x: usize, y: usize, selected: bool) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y * self.width + x] = selected;
        true
    }

    /// Number of selected samples
    pub fn selected_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}

/// Wire form of [`PixelMask`] before the dimension check
#[derive(Deserialize)]
struct RawPixelMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl TryFrom<RawPixelMask> for PixelMask {
    type Error = String;

    fn try_from(raw: RawPixelMask) -> Result<Self, Self::Error> {
        match raw.width.checked_mul(raw.height) {
            Some(expected) if raw.bits.len() == expected => Ok(Self {
                width: raw.width,
                height: raw.height,
                bits: raw.bits,
            }),
            _ => Err(format!(
                "pixel mask carries {} bits for a {}x{} grid",
                raw.bits.len(),
                raw.width,
                raw.height
            )),
        }
    }
}
