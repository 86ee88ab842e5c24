//! Axial hex coordinates.

use std::ops::{Add, Sub};

use bevy::prelude::*;
use hexx::Hex;

/// A hex cell in axial `(q, r)` coordinates. The cube coordinate `s` is
/// implicit: `q + r + s == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub struct AxialCoord {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl AxialCoord {
    /// The origin hex.
    pub const ZERO: Self = Self::new(0, 0);

    /// Unit offsets to the six adjacent hexes, indexed by direction.
    pub const DIRECTIONS: [Self; 6] = [
        Self::new(1, 0),
        Self::new(-1, 0),
        Self::new(0, 1),
        Self::new(0, -1),
        Self::new(1, -1),
        Self::new(-1, 1),
    ];

    /// Creates a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube component.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// The adjacent hex in direction `index` (see [`Self::DIRECTIONS`]).
    ///
    /// Returns `None` for an index outside `0..6`.
    pub fn neighbor(self, index: usize) -> Option<Self> {
        Self::DIRECTIONS.get(index).map(|&dir| self + dir)
    }

    /// All six adjacent hexes, in direction order.
    pub fn neighbors(self) -> [Self; 6] {
        Self::DIRECTIONS.map(|dir| self + dir)
    }

    /// Number of hex steps between `self` and `other`.
    pub fn distance(self, other: Self) -> u32 {
        let d = self - other;
        d.q.unsigned_abs()
            .max(d.r.unsigned_abs())
            .max(d.s().unsigned_abs())
    }
}

impl Add for AxialCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for AxialCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl From<Hex> for AxialCoord {
    fn from(hex: Hex) -> Self {
        Self::new(hex.x, hex.y)
    }
}

impl From<AxialCoord> for Hex {
    fn from(coord: AxialCoord) -> Self {
        Hex::new(coord.q, coord.r)
    }
}
