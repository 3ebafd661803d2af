/// Volume axis in voxel index space (`[x, y, z]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in the volume's shape tuple
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// The three MPR views. Each view fixes one axis and shows the plane
/// spanned by the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Sagittal,
    Axial,
    Coronal,
}

impl Orientation {
    /// Display order: top-left, bottom-left, right
    pub const ALL: [Orientation; 3] = [
        Orientation::Sagittal,
        Orientation::Axial,
        Orientation::Coronal,
    ];

    pub fn fixed_axis(self) -> Axis {
        match self {
            Orientation::Sagittal => Axis::X,
            Orientation::Axial => Axis::Z,
            Orientation::Coronal => Axis::Y,
        }
    }

    /// Axis running left to right in the rendered image
    pub fn horizontal_axis(self) -> Axis {
        match self {
            Orientation::Sagittal => Axis::Y,
            Orientation::Axial | Orientation::Coronal => Axis::X,
        }
    }

    /// Axis running bottom to top in the rendered image
    pub fn vertical_axis(self) -> Axis {
        match self {
            Orientation::Sagittal | Orientation::Coronal => Axis::Z,
            Orientation::Axial => Axis::Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increment,
    Decrement,
}

/// Raw pointer signal received over a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    WheelUp,
    WheelDown,
    PrimaryButton,
    SecondaryButton,
    MiddleButton,
}

impl PointerInput {
    /// Wheel up and the left button move one slice up, wheel down and the
    /// right button one slice down. Anything else is ignored.
    pub fn direction(self) -> Option<Direction> {
        match self {
            PointerInput::WheelUp | PointerInput::PrimaryButton => Some(Direction::Increment),
            PointerInput::WheelDown | PointerInput::SecondaryButton => Some(Direction::Decrement),
            PointerInput::MiddleButton => None,
        }
    }
}
