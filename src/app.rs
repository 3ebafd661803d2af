use crate::config::ViewerConfig;
use crate::enums::{Orientation, PointerInput};
use crate::slice_view::SliceView;
use crate::viewer::MprViewer;
use crate::volume_loader::VolumeLoaderError;

use egui::{Color32, ColorImage, Pos2, Rect, Sense, Shape, Stroke, TextureHandle, TextureOptions};

use std::path::{Path, PathBuf};

/// eframe front end: translates pointer events into [`MprViewer`] calls and
/// paints its views.
pub struct MprApp {
    config: ViewerConfig,
    viewer: MprViewer,
    textures: [Option<TextureHandle>; 3],
    uploaded_redraw: Option<u64>,
}

impl MprApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        Self {
            config,
            viewer: MprViewer::new(),
            textures: [None, None, None],
            uploaded_redraw: None,
        }
    }

    fn pick_file(&self) -> Option<PathBuf> {
        let extensions: Vec<&str> = self.config.dialog_extensions.iter().map(String::as_str).collect();
        rfd::FileDialog::new()
            .set_title("Select file")
            .add_filter(&self.config.dialog_filter_name, &extensions)
            .pick_file()
    }

    fn open_volume(&mut self) {
        let Some(path) = self.pick_file() else {
            tracing::debug!("file dialog cancelled");
            return;
        };

        if let Err(err) = self.viewer.load_from_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "cannot open volume");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Warning")
                .set_description(warning_message(&path, &err))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }

    // Upload the viewer's images after each redraw
    fn sync_textures(&mut self, ctx: &egui::Context) {
        if self.uploaded_redraw == Some(self.viewer.redraws()) {
            return;
        }

        for (slot, orientation) in self.textures.iter_mut().zip(Orientation::ALL) {
            let Some(view) = self.viewer.view(orientation) else {
                *slot = None;
                continue;
            };
            let size = [view.image.width() as usize, view.image.height() as usize];
            let image = ColorImage::from_gray(size, view.image.as_raw());
            match slot {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    *slot = Some(ctx.load_texture(
                        format!("{orientation:?}"),
                        image,
                        TextureOptions::NEAREST,
                    ))
                }
            }
        }

        self.uploaded_redraw = Some(self.viewer.redraws());
    }

    fn view_ui(&self, ui: &mut egui::Ui, slot: usize, size: egui::Vec2) -> Vec<PointerInput> {
        let orientation = Orientation::ALL[slot];
        let view = self.viewer.view(orientation);

        ui.vertical_centered(|ui| {
            ui.label(view.map(SliceView::label).unwrap_or_default());
        });

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::BLACK);

        if let (Some(view), Some(texture)) = (view, &self.textures[slot]) {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
            painter.extend(self.guide_shapes(view, rect));
        }

        let wheel_deltas: Vec<f32> = if response.hovered() {
            ui.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::MouseWheel { delta, .. } => Some(delta.y),
                        _ => None,
                    })
                    .collect()
            })
        } else {
            Vec::new()
        };

        pointer_inputs(
            &wheel_deltas,
            response.clicked(),
            response.secondary_clicked(),
            response.middle_clicked(),
        )
    }

    fn guide_shapes(&self, view: &SliceView, rect: Rect) -> Vec<Shape> {
        let colors = &self.config.guide_colors;
        let stroke = |axis| {
            let [r, g, b] = colors.for_axis(axis);
            Stroke::new(self.config.guide_width, Color32::from_rgb(r, g, b))
        };

        let x = rect.left() + view.vertical_guide_fraction() * rect.width();
        let y = rect.top() + view.horizontal_guide_fraction() * rect.height();

        let mut shapes = Shape::dashed_line(
            &[Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke(view.vertical_guide.axis),
            self.config.guide_dash_length,
            self.config.guide_gap_length,
        );
        shapes.extend(Shape::dashed_line(
            &[Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke(view.horizontal_guide.axis),
            self.config.guide_dash_length,
            self.config.guide_gap_length,
        ));
        shapes
    }
}

impl eframe::App for MprApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(&self.config.open_button_text).clicked() {
                    self.open_volume();
                }
                ui.label(&self.config.open_hint_text);
            });
            ui.label(&self.config.navigation_help_text);
        });

        self.sync_textures(ctx);

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            // Room for the slice label above each view
            let label_height = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;
            let column_width = (available.x - ui.spacing().item_spacing.x) / 2.0;
            let view_size = egui::vec2(
                column_width.max(1.0),
                (available.y / 2.0 - 2.0 * label_height).max(1.0),
            );

            ui.columns(2, |columns| {
                let inputs = self.view_ui(&mut columns[0], 0, view_size);
                events.extend(inputs.into_iter().map(|input| (Orientation::ALL[0], input)));
                let inputs = self.view_ui(&mut columns[0], 1, view_size);
                events.extend(inputs.into_iter().map(|input| (Orientation::ALL[1], input)));

                let right = &mut columns[1];
                right.add_space(((available.y - view_size.y) / 2.0 - label_height).max(0.0));
                let inputs = self.view_ui(right, 2, view_size);
                events.extend(inputs.into_iter().map(|input| (Orientation::ALL[2], input)));
            });
        });

        let mut redraw = false;
        for (orientation, input) in events {
            redraw |= self.viewer.handle_input(orientation, input);
        }
        if redraw {
            ctx.request_repaint();
        }
    }
}

/// One input per wheel event with a vertical component, then the clicks.
fn pointer_inputs(
    wheel_deltas: &[f32],
    clicked: bool,
    secondary_clicked: bool,
    middle_clicked: bool,
) -> Vec<PointerInput> {
    let mut inputs: Vec<PointerInput> = wheel_deltas
        .iter()
        .filter_map(|&delta| {
            if delta > 0.0 {
                Some(PointerInput::WheelUp)
            } else if delta < 0.0 {
                Some(PointerInput::WheelDown)
            } else {
                None
            }
        })
        .collect();
    if clicked {
        inputs.push(PointerInput::PrimaryButton);
    }
    if secondary_clicked {
        inputs.push(PointerInput::SecondaryButton);
    }
    if middle_clicked {
        inputs.push(PointerInput::MiddleButton);
    }
    inputs
}

fn warning_message(path: &Path, err: &VolumeLoaderError) -> String {
    format!("Cannot open file {}: {err}", path.display())
}
