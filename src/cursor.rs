use crate::enums::{Axis, Direction};

/// Current slice position, one index per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Cursor at the geometric center of a volume with the given shape.
    ///
    /// Each index is `floor(d / 2) - 1`, saturating at 0 for single-slice
    /// axes.
    pub fn centered(dim: (usize, usize, usize)) -> Self {
        let center = |d: usize| (d / 2).saturating_sub(1);
        Self {
            x: center(dim.0),
            y: center(dim.1),
            z: center(dim.2),
        }
    }

    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut usize {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Move one slice along `axis`, clamped to `[0, dim - 1]` of that axis.
    /// Returns the new index.
    pub fn step(&mut self, axis: Axis, direction: Direction, dim: (usize, usize, usize)) -> usize {
        let last = dim_of(dim, axis).saturating_sub(1);
        let index = self.get_mut(axis);
        *index = match direction {
            Direction::Increment => index.saturating_add(1).min(last),
            Direction::Decrement => index.saturating_sub(1).min(last),
        };
        *index
    }

    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }
}

pub(crate) fn dim_of(dim: (usize, usize, usize), axis: Axis) -> usize {
    match axis {
        Axis::X => dim.0,
        Axis::Y => dim.1,
        Axis::Z => dim.2,
    }
}
