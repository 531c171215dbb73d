//! Neighbor-code identifiers for the 16-tile blob autotile set

use std::fmt;

/// Corner bit flag for the north-west diagonal neighbor
pub const CORNER_NW: u8 = 8;
/// Corner bit flag for the north-east diagonal neighbor
pub const CORNER_NE: u8 = 4;
/// Corner bit flag for the south-east diagonal neighbor
pub const CORNER_SE: u8 = 2;
/// Corner bit flag for the south-west diagonal neighbor
pub const CORNER_SW: u8 = 1;

/// One of the 16 tile identities in the blob autotile set
///
/// The value is a 4-bit mask (NW=8, NE=4, SE=2, SW=1) naming which
/// diagonal neighbors share the center tile's material. The domain is
/// exactly `0..=15` and is exhaustively enumerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeighborCode(u8);

impl NeighborCode {
    /// Number of codes in the complete set
    pub const COUNT: usize = 16;

    /// Create a code from its 4-bit value
    ///
    /// Returns `None` for values outside `0..=15`.
    pub const fn new(value: u8) -> Option<Self> {
        if value < 16 { Some(Self(value)) } else { None }
    }

    /// Iterate all 16 codes in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..16).map(Self)
    }

    /// The 4-bit mask value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The code as a zero-based index into the 16-entry set
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether a given corner bit is set in the mask
    pub const fn has_corner(self, corner_bit: u8) -> bool {
        self.0 & corner_bit != 0
    }

    /// Sheet position of this tile as `(row, col)` in the 4x4 layout
    ///
    /// Tiles are placed row-major by ascending code.
    pub const fn sheet_position(self) -> (u32, u32) {
        ((self.0 / 4) as u32, (self.0 % 4) as u32)
    }

    /// The mask rendered as a 4-bit binary string, e.g. `"0110"`
    pub fn binary_label(self) -> String {
        format!("{:04b}", self.0)
    }

    /// File stem for this tile's raster, e.g. `"06_mask_0110_32"`
    pub fn file_stem(self, tile_size: u32) -> String {
        format!("{:02}_mask_{:04b}_{tile_size}", self.0, self.0)
    }
}

impl fmt::Display for NeighborCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_domain_is_exactly_sixteen() {
        assert_eq!(NeighborCode::all().count(), NeighborCode::COUNT);
        assert!(NeighborCode::new(15).is_some());
        assert!(NeighborCode::new(16).is_none());
    }

    #[test]
    fn test_file_stem_includes_decimal_and_binary_forms() {
        let code = NeighborCode::new(6).unwrap();
        assert_eq!(code.file_stem(32), "06_mask_0110_32");
        assert_eq!(code.binary_label(), "0110");
    }

    #[test]
    fn test_sheet_position_is_row_major() {
        let code = NeighborCode::new(7).unwrap();
        assert_eq!(code.sheet_position(), (1, 3));
    }
}
