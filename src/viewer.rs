use crate::cursor::{Cursor, dim_of};
use crate::enums::{Axis, Direction, Orientation, PointerInput};
use crate::slice_view::SliceView;
use crate::volume::Volume;
use crate::volume_loader::{VolumeLoader, VolumeLoaderError};

use std::path::Path;

/// MPR window state: the loaded volume, the shared cursor and the views
/// rendered from them.
///
/// Every operation runs synchronously. Navigation before a volume has been
/// loaded is a no-op.
#[derive(Debug, Default)]
pub struct MprViewer {
    volume: Option<Volume>,
    cursor: Cursor,
    views: Vec<SliceView>,
    redraws: u64,
}

impl MprViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.volume.is_some()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Views produced by the last redraw, in [`Orientation::ALL`] order
    pub fn views(&self) -> &[SliceView] {
        &self.views
    }

    pub fn view(&self, orientation: Orientation) -> Option<&SliceView> {
        self.views.iter().find(|view| view.orientation == orientation)
    }

    /// Incremented on every redraw
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// Load a volume file. On failure the current volume and cursor are kept.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), VolumeLoaderError> {
        let volume = VolumeLoader::load_from_file(path)?;
        self.set_volume(volume);
        Ok(())
    }

    /// Replace the volume, move the cursor to its center and redraw.
    pub fn set_volume(&mut self, volume: Volume) {
        self.cursor = Cursor::centered(volume.dim());
        tracing::debug!(cursor = ?self.cursor.as_tuple(), "cursor reset to volume center");
        self.volume = Some(volume);
        self.render();
    }

    /// Move the cursor one slice along `axis` and redraw. Returns `false`
    /// when no volume is loaded.
    pub fn step(&mut self, axis: Axis, direction: Direction) -> bool {
        let Some(volume) = &self.volume else {
            return false;
        };
        let dim = volume.dim();
        let index = self.cursor.step(axis, direction, dim);
        tracing::debug!(?axis, ?direction, index, len = dim_of(dim, axis), "slice changed");
        self.render();
        true
    }

    /// Dispatch a pointer event received over one of the views. The view
    /// decides the axis, the input decides the direction.
    pub fn handle_input(&mut self, orientation: Orientation, input: PointerInput) -> bool {
        match input.direction() {
            Some(direction) => self.step(orientation.fixed_axis(), direction),
            None => false,
        }
    }

    /// Re-extract all three views at the current cursor
    pub fn render(&mut self) -> &[SliceView] {
        self.views = match &self.volume {
            Some(volume) => Orientation::ALL
                .iter()
                .filter_map(|&orientation| SliceView::render(volume, &self.cursor, orientation))
                .collect(),
            None => Vec::new(),
        };
        self.redraws += 1;
        &self.views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn volume(dim: (usize, usize, usize)) -> Volume {
        Volume::new(Array3::from_shape_fn(dim, |(x, y, z)| {
            (x * 10_000 + y * 100 + z) as f32
        }))
    }

    #[test]
    fn loading_centers_the_cursor() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((10, 20, 30)));
        assert_eq!(viewer.cursor(), Cursor::new(4, 9, 14));
        assert_eq!(viewer.views().len(), 3);
    }

    #[test]
    fn reloading_resets_the_cursor() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((10, 20, 30)));
        viewer.step(Axis::X, Direction::Increment);
        viewer.set_volume(volume((4, 4, 4)));
        assert_eq!(viewer.cursor(), Cursor::new(1, 1, 1));
    }

    #[test]
    fn navigation_without_volume_is_a_noop() {
        let mut viewer = MprViewer::new();
        for orientation in Orientation::ALL {
            assert!(!viewer.handle_input(orientation, PointerInput::WheelUp));
            assert!(!viewer.handle_input(orientation, PointerInput::SecondaryButton));
        }
        assert!(!viewer.step(Axis::Z, Direction::Decrement));
        assert_eq!(viewer.cursor(), Cursor::default());
        assert!(viewer.views().is_empty());
        assert_eq!(viewer.redraws(), 0);
    }

    #[test]
    fn each_view_steps_its_own_axis() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((10, 20, 30)));

        viewer.handle_input(Orientation::Sagittal, PointerInput::PrimaryButton);
        assert_eq!(viewer.cursor(), Cursor::new(5, 9, 14));
        viewer.handle_input(Orientation::Axial, PointerInput::WheelDown);
        assert_eq!(viewer.cursor(), Cursor::new(5, 9, 13));
        viewer.handle_input(Orientation::Coronal, PointerInput::WheelUp);
        assert_eq!(viewer.cursor(), Cursor::new(5, 10, 13));
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((4, 4, 4)));
        let redraws = viewer.redraws();
        assert!(!viewer.handle_input(Orientation::Axial, PointerInput::MiddleButton));
        assert_eq!(viewer.cursor(), Cursor::new(1, 1, 1));
        assert_eq!(viewer.redraws(), redraws);
    }

    #[test]
    fn clamped_steps_still_redraw() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((2, 2, 2)));
        for _ in 0..5 {
            viewer.handle_input(Orientation::Sagittal, PointerInput::WheelUp);
        }
        assert_eq!(viewer.cursor().x, 1);
        let redraws = viewer.redraws();
        assert!(viewer.handle_input(Orientation::Sagittal, PointerInput::WheelUp));
        assert_eq!(viewer.cursor().x, 1);
        assert_eq!(viewer.redraws(), redraws + 1);

        for _ in 0..5 {
            viewer.handle_input(Orientation::Sagittal, PointerInput::SecondaryButton);
        }
        assert_eq!(viewer.cursor().x, 0);
    }

    #[test]
    fn views_follow_the_cursor() {
        let mut viewer = MprViewer::new();
        viewer.set_volume(volume((5, 6, 7)));
        viewer.handle_input(Orientation::Coronal, PointerInput::WheelUp);
        let cursor = viewer.cursor();

        for view in viewer.views() {
            let axis = view.orientation.fixed_axis();
            assert_eq!(view.index, cursor.get(axis));
            let expected = viewer
                .volume()
                .unwrap()
                .get_image_from_axis(cursor.get(axis), view.orientation)
                .unwrap();
            assert_eq!(view.image, expected);
        }

        let axial = viewer.view(Orientation::Axial).unwrap();
        assert_eq!(axial.vertical_guide.position, cursor.x);
        assert_eq!(axial.horizontal_guide.position, cursor.y);
    }

    #[test]
    fn failed_load_keeps_state() {
        let mut viewer = MprViewer::new();
        assert!(viewer.load_from_file("/nonexistent/volume.nii.gz").is_err());
        assert!(!viewer.is_loaded());

        viewer.set_volume(volume((6, 6, 6)));
        viewer.step(Axis::Y, Direction::Increment);
        let cursor = viewer.cursor();

        assert!(viewer.load_from_file("/nonexistent/volume.nii.gz").is_err());
        assert_eq!(viewer.cursor(), cursor);
        assert_eq!(viewer.volume().unwrap().dim(), (6, 6, 6));
    }
}
