use crate::enums::Axis;
use crate::enums::Orientation;

use image::GrayImage;
use image::ImageBuffer;
use ndarray::Array3;
use ndarray::ArrayView2;
use ndarray::s;
use rayon::prelude::*;

/// Scalar intensity volume indexed `[x, y, z]`.
#[derive(Debug, Clone, Default)]
pub struct Volume {
    data: Array3<f32>,
}

impl Volume {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Get the dimensions of the volume (x, y, z)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    pub fn len_of(&self, axis: Axis) -> usize {
        self.data.len_of(ndarray::Axis(axis.index()))
    }

    /// Slice of the volume with `axis` fixed at `index`. The remaining two
    /// axes keep their order, e.g. fixing Y yields a `[x, z]` view.
    pub fn get_slice_from_axis(&self, index: usize, axis: Axis) -> Option<ArrayView2<'_, f32>> {
        if index >= self.len_of(axis) {
            return None;
        }
        let slice = match axis {
            Axis::X => self.data.slice(s![index, .., ..]),
            Axis::Y => self.data.slice(s![.., index, ..]),
            Axis::Z => self.data.slice(s![.., .., index]),
        };
        Some(slice)
    }

    /// Render the slice shown by `orientation` at `index` as a grayscale
    /// image.
    ///
    /// The image's columns follow the view's horizontal axis and its rows the
    /// vertical axis with the origin at the bottom-left corner. Intensities
    /// are windowed between the slice's own minimum and maximum.
    pub fn get_image_from_axis(&self, index: usize, orientation: Orientation) -> Option<GrayImage> {
        let slice = self.get_slice_from_axis(index, orientation.fixed_axis())?;
        Self::slice_to_image(&slice)
    }

    // Slice axes are (horizontal, vertical) for every orientation
    fn slice_to_image(slice: &ArrayView2<'_, f32>) -> Option<GrayImage> {
        let (width, height) = slice.dim();
        let window = IntensityWindow::of(slice);

        let pixel_data: Vec<u8> = (0..height)
            .into_par_iter()
            .flat_map(|row| {
                let v = height - 1 - row;
                (0..width)
                    .map(|col| window.normalize_to_u8(slice[[col, v]]))
                    .collect::<Vec<u8>>()
            })
            .collect();

        ImageBuffer::from_raw(width as u32, height as u32, pixel_data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct IntensityWindow {
    min: f32,
    max: f32,
}

impl IntensityWindow {
    fn of(slice: &ArrayView2<'_, f32>) -> Self {
        let (min, max) = slice
            .iter()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self { min, max }
    }

    #[inline]
    fn normalize_to_u8(&self, value: f32) -> u8 {
        // f64 so that spans wider than f32::MAX stay finite
        let min = f64::from(self.min);
        let range = f64::from(self.max) - min;
        if !value.is_finite() || !(range > 0.0) {
            return 0;
        }
        (((f64::from(value) - min) / range) * 255.0).round().clamp(0.0, 255.0) as u8
    }
}
