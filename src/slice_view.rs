use crate::cursor::Cursor;
use crate::enums::{Axis, Orientation};
use crate::volume::Volume;

use image::GrayImage;

/// Crosshair line marking another view's slice position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideLine {
    pub axis: Axis,
    pub position: usize,
}

/// One rendered MPR view.
#[derive(Debug, Clone)]
pub struct SliceView {
    pub orientation: Orientation,
    /// Index of the displayed slice along the fixed axis
    pub index: usize,
    /// Number of slices along the fixed axis
    pub total: usize,
    pub image: GrayImage,
    /// Vertical line at a position on the horizontal axis
    pub vertical_guide: GuideLine,
    /// Horizontal line at a position on the vertical axis
    pub horizontal_guide: GuideLine,
}

impl SliceView {
    pub fn render(volume: &Volume, cursor: &Cursor, orientation: Orientation) -> Option<Self> {
        let fixed = orientation.fixed_axis();
        let index = cursor.get(fixed);
        let image = volume.get_image_from_axis(index, orientation)?;

        let horizontal_axis = orientation.horizontal_axis();
        let vertical_axis = orientation.vertical_axis();

        Some(Self {
            orientation,
            index,
            total: volume.len_of(fixed),
            image,
            vertical_guide: GuideLine {
                axis: horizontal_axis,
                position: cursor.get(horizontal_axis),
            },
            horizontal_guide: GuideLine {
                axis: vertical_axis,
                position: cursor.get(vertical_axis),
            },
        })
    }

    pub fn label(&self) -> String {
        format!("Slice: {}/{}", self.index + 1, self.total)
    }

    /// Horizontal position of the vertical guide as a fraction of the image
    /// width, measured from the left edge through the pixel center.
    pub fn vertical_guide_fraction(&self) -> f32 {
        (self.vertical_guide.position as f32 + 0.5) / self.image.width().max(1) as f32
    }

    /// Vertical position of the horizontal guide as a fraction of the image
    /// height, measured from the top edge. The image origin is at the
    /// bottom, so higher positions land closer to the top.
    pub fn horizontal_guide_fraction(&self) -> f32 {
        let height = self.image.height().max(1) as f32;
        (height - (self.horizontal_guide.position as f32 + 0.5)) / height
    }
}
