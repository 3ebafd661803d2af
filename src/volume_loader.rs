use crate::volume::Volume;

use ndarray::{Array3, ArrayD, Axis, Ix3};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use std::path::Path;
use thiserror::Error;

/// File name suffixes accepted by [`VolumeLoader::load_from_file`]
pub const SUPPORTED_EXTENSIONS: [&str; 2] = [".nii.gz", ".nii"];

#[derive(Debug, Error)]
pub enum VolumeLoaderError {
    /// Carries the file's extension, empty when it has none
    #[error("Unsupported file type {0:?}, expected .nii or .nii.gz")]
    UnsupportedExtension(String),

    #[error("Expected at least 3 dimensions, found {0}")]
    UnsupportedShape(usize),

    #[error("Volume has an empty axis: {0:?}")]
    EmptyVolume(Vec<usize>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("NIfTI error: {0}")]
    Nifti(#[from] nifti::NiftiError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub struct VolumeLoader;

impl VolumeLoader {
    /// Load a volume from a `.nii` or `.nii.gz` file
    ///
    /// Voxel values are read as `f32` with the header's intensity scaling
    /// applied. Files with more than three dimensions keep only their first
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not a NIfTI volume or
    /// does not describe a non-empty 3D grid
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Volume, VolumeLoaderError> {
        let path = path.as_ref();
        if !Self::is_supported_path(path) {
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(VolumeLoaderError::UnsupportedExtension(extension));
        }

        let object = ReaderOptions::new().read_file(path)?;
        tracing::debug!(
            path = %path.display(),
            dim = ?object.header().dim,
            datatype = object.header().datatype,
            "read NIfTI header"
        );

        let data = object.into_volume().into_ndarray::<f32>()?;
        let volume = Volume::new(Self::first_frame(data)?);
        tracing::info!(path = %path.display(), dim = ?volume.dim(), "loaded volume");
        Ok(volume)
    }

    pub fn is_supported_path(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.to_ascii_lowercase())
            .is_some_and(|name| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|ext| name.len() > ext.len() && name.ends_with(ext))
            })
    }

    /// Reduce an N-dimensional array to its first 3D frame
    pub fn first_frame(mut data: ArrayD<f32>) -> Result<Array3<f32>, VolumeLoaderError> {
        if data.ndim() < 3 {
            return Err(VolumeLoaderError::UnsupportedShape(data.ndim()));
        }
        if data.shape().contains(&0) {
            return Err(VolumeLoaderError::EmptyVolume(data.shape().to_vec()));
        }
        while data.ndim() > 3 {
            data = data.index_axis_move(Axis(3), 0);
        }
        Ok(data.into_dimensionality::<Ix3>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn supported_paths() {
        assert!(VolumeLoader::is_supported_path(Path::new("brain.nii.gz")));
        assert!(VolumeLoader::is_supported_path(Path::new("/data/BRAIN.NII.GZ")));
        assert!(VolumeLoader::is_supported_path(Path::new("brain.nii")));
        assert!(!VolumeLoader::is_supported_path(Path::new("brain.dcm")));
        assert!(!VolumeLoader::is_supported_path(Path::new(".nii.gz")));
        assert!(!VolumeLoader::is_supported_path(Path::new("brain.nii.gz.bak")));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = VolumeLoader::load_from_file("/data/missing.png").unwrap_err();
        assert!(matches!(&err, VolumeLoaderError::UnsupportedExtension(ext) if ext == "png"));
        assert!(!err.to_string().contains("/data"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(VolumeLoader::load_from_file("/nonexistent/brain.nii.gz").is_err());
    }

    #[test]
    fn first_frame_keeps_3d_data() {
        let data = ArrayD::from_shape_fn(IxDyn(&[2, 3, 4]), |ix| (ix[0] + ix[1] + ix[2]) as f32);
        let frame = VolumeLoader::first_frame(data).unwrap();
        assert_eq!(frame.dim(), (2, 3, 4));
        assert_eq!(frame[[1, 2, 3]], 6.0);
    }

    #[test]
    fn first_frame_drops_trailing_dimensions() {
        let data = ArrayD::from_shape_fn(IxDyn(&[2, 3, 4, 5, 2]), |ix| {
            (ix[3] * 100 + ix[4] * 1000) as f32 + ix[0] as f32
        });
        let frame = VolumeLoader::first_frame(data).unwrap();
        assert_eq!(frame.dim(), (2, 3, 4));
        assert_eq!(frame[[1, 0, 0]], 1.0);
        assert!(frame.iter().all(|&v| v < 2.0));
    }

    #[test]
    fn first_frame_rejects_flat_and_empty_data() {
        let flat = ArrayD::<f32>::zeros(IxDyn(&[4, 4]));
        assert!(matches!(
            VolumeLoader::first_frame(flat),
            Err(VolumeLoaderError::UnsupportedShape(2))
        ));

        let empty = ArrayD::<f32>::zeros(IxDyn(&[4, 0, 4]));
        assert!(matches!(
            VolumeLoader::first_frame(empty),
            Err(VolumeLoaderError::EmptyVolume(_))
        ));
    }
}
