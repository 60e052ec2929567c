use super::stamp::*;

use lp_animation::*;

use image::{Rgba, RgbaImage};
use image::imageops::{self, FilterType};
use log::*;

/// The opacity of the previous frame when it is shown beneath the current one
pub const ONION_SKIN_ALPHA: f32 = 0.3;

///
/// Converts an animation colour to an image pixel
///
#[inline]
fn pixel(color: Color) -> Rgba<u8> {
    Rgba(color.to_array())
}

///
/// Multiplies the alpha of every pixel in a layer by a factor
///
fn fade_layer(layer: &mut RgbaImage, factor: f32) {
    let factor = factor.clamp(0.0, 1.0);

    for pixel in layer.pixels_mut() {
        pixel[3] = ((pixel[3] as f32) * factor).round() as u8;
    }
}

///
/// Renders the frames of an animation as bitmaps
///
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    canvas:     CanvasSize,
    background: Color,
}

impl FrameRenderer {
    ///
    /// Creates a renderer for frames on a canvas of the specified size
    ///
    pub fn new(canvas: CanvasSize, background: Color) -> FrameRenderer {
        FrameRenderer {
            canvas:     canvas,
            background: background
        }
    }

    ///
    /// Creates a renderer with the canvas and background used by an editor
    ///
    pub fn for_editor(state: &EditorState) -> FrameRenderer {
        FrameRenderer::new(state.canvas_size(), state.config().background)
    }

    #[inline] pub fn canvas_size(&self) -> CanvasSize { self.canvas }
    #[inline] pub fn background(&self) -> Color { self.background }

    fn empty_layer(&self) -> RgbaImage {
        RgbaImage::new(self.canvas.width, self.canvas.height)
    }

    ///
    /// Draws a line that adds paint to a layer
    ///
    /// Partially transparent paint is drawn on its own layer first, so overlapping dabs from the same line
    /// don't build up.
    ///
    fn paint<DrawFn: Fn(&mut RgbaImage, Rgba<u8>)>(&self, layer: &mut RgbaImage, color: Color, opacity: f32, draw: DrawFn) {
        if opacity >= 1.0 && color.a == 255 {
            draw(layer, pixel(color));
        } else {
            let mut paint_layer = self.empty_layer();

            draw(&mut paint_layer, pixel(color));
            fade_layer(&mut paint_layer, opacity);
            imageops::overlay(layer, &paint_layer, 0, 0);
        }
    }

    fn draw_stroke(&self, layer: &mut RgbaImage, stroke: &Stroke) {
        let style = &stroke.style;

        let draw = |target: &mut RgbaImage, color: Rgba<u8>| {
            if stroke.is_dot() {
                stamp_dab(target, stroke.points[0], style.width, color);
            } else {
                stamp_path(target, &stroke.path(), style.width, color);
            }
        };

        match style.drawing_style {
            DrawingStyle::Draw  => self.paint(layer, style.color, style.opacity, draw),
            DrawingStyle::Erase => draw(layer, pixel(Color::TRANSPARENT)),
        }
    }

    fn draw_shape(&self, layer: &mut RgbaImage, shape: &PlacedShape) {
        let geometry    = shape.geometry();
        let paths       = geometry.to_paths();

        self.paint(layer, geometry.color, 1.0, |target, color| {
            paths.iter().for_each(|path| stamp_path(target, path, shape.width, color));
        });
    }

    ///
    /// Renders the visible drawing in a frame on a transparent layer
    ///
    pub fn render_layer(&self, frame: &Frame) -> RgbaImage {
        let mut layer = self.empty_layer();

        for action in frame.visible_actions() {
            match action {
                DrawAction::Stroke(stroke)  => self.draw_stroke(&mut layer, stroke),
                DrawAction::Shape(shape)    => self.draw_shape(&mut layer, shape),
            }
        }

        layer
    }

    ///
    /// Renders a frame over the background, optionally with an onion skin frame faded beneath it
    ///
    pub fn render_frame(&self, frame: &Frame, onion_skin: Option<&Frame>) -> RgbaImage {
        trace!("Rendering frame {}", frame.id());

        let mut image = RgbaImage::from_pixel(self.canvas.width, self.canvas.height, pixel(self.background));

        if let Some(onion_skin) = onion_skin {
            let mut skin = self.render_layer(onion_skin);
            fade_layer(&mut skin, ONION_SKIN_ALPHA);
            imageops::overlay(&mut image, &skin, 0, 0);
        }

        let layer = self.render_layer(frame);
        imageops::overlay(&mut image, &layer, 0, 0);

        image
    }

    ///
    /// Renders the frame that the editor is currently showing, including the onion skin if it's turned on
    ///
    pub fn render_current_frame(&self, state: &EditorState) -> RgbaImage {
        self.render_frame(state.current_frame(), state.onion_skin_frame())
    }

    ///
    /// Renders a small version of a frame, whose longest edge is no more than `max_edge` pixels
    ///
    pub fn render_thumbnail(&self, frame: &Frame, max_edge: u32) -> RgbaImage {
        let image   = self.render_frame(frame, None);
        let longest = self.canvas.width.max(self.canvas.height);

        if longest <= max_edge {
            return image;
        }

        let scale   = (max_edge.max(1) as f32) / (longest as f32);
        let width   = ((self.canvas.width as f32) * scale).round().max(1.0) as u32;
        let height  = ((self.canvas.height as f32) * scale).round().max(1.0) as u32;

        imageops::resize(&image, width, height, FilterType::Triangle)
    }
}
