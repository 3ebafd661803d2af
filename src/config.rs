use crate::enums::Axis;

/// Static settings of the viewer window.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub window_title: String,
    pub start_maximized: bool,
    /// Label and extensions of the file-open dialog filter
    pub dialog_filter_name: String,
    pub dialog_extensions: Vec<String>,
    pub open_button_text: String,
    pub open_hint_text: String,
    pub navigation_help_text: String,
    pub guide_colors: GuideColors,
    pub guide_width: f32,
    pub guide_dash_length: f32,
    pub guide_gap_length: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "MPR".to_owned(),
            start_maximized: true,
            dialog_filter_name: "Nifti files".to_owned(),
            dialog_extensions: vec!["nii.gz".to_owned()],
            open_button_text: "Open image".to_owned(),
            open_hint_text: "<--- Load your image here".to_owned(),
            navigation_help_text: "To change the slice use mouse wheel or mouse buttons \
                (left - go one slice up, right - go one slice down)"
                .to_owned(),
            guide_colors: GuideColors::default(),
            guide_width: 1.5,
            guide_dash_length: 6.0,
            guide_gap_length: 4.0,
        }
    }
}

/// RGB colour of the guide line for each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideColors {
    pub x: [u8; 3],
    pub y: [u8; 3],
    pub z: [u8; 3],
}

impl Default for GuideColors {
    fn default() -> Self {
        Self {
            x: [0xff, 0xf7, 0x00],
            y: [0xff, 0x00, 0xf7],
            z: [0x00, 0x1a, 0xff],
        }
    }
}

impl GuideColors {
    pub fn for_axis(&self, axis: Axis) -> [u8; 3] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}
