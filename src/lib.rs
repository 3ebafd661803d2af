//! # NIfTI MPR viewer
//!
//! This crate displays a NIfTI volume as a multiplanar reconstruction: three
//! orthogonal slices sharing a single 3D cursor.
//!
//! Volumes are loaded from `.nii` or `.nii.gz` files with
//! [`VolumeLoader`](volume_loader::VolumeLoader). The
//! [`MprViewer`](viewer::MprViewer) holds the volume and the cursor and
//! renders one [`SliceView`](slice_view::SliceView) per orientation:
//!  - Sagittal (x fixed)
//!  - Axial (z fixed)
//!  - Coronal (y fixed)
//!
//! Each view carries a grayscale image, a `Slice: i/N` label and two guide
//! lines marking the slices shown by the other two views. Scrolling or
//! clicking on a view moves its slice; indices clamp at the volume bounds.
//! The [`app`] module wires the viewer into an eframe window.
//!
//! # Examples
//!
//! ```no_run
//! # use nifti_mpr::{enums::{Orientation, PointerInput}, viewer::MprViewer};
//! let mut viewer = MprViewer::new();
//! viewer
//!     .load_from_file("brain.nii.gz")
//!     .expect("should have loaded the volume");
//! viewer.handle_input(Orientation::Axial, PointerInput::WheelUp);
//! for view in viewer.views() {
//!     println!("{:?}: {}", view.orientation, view.label());
//! }
//! ```

pub mod app;
pub mod config;
pub mod cursor;
pub mod enums;
pub mod slice_view;
pub mod viewer;
pub mod volume;
pub mod volume_loader;
