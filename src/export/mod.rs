use std::io::Cursor;

use egui::epaint::ClippedShape;
use egui::{Color32, Context, Pos2, Vec2};
use image::{ImageFormat, RgbaImage};

use crate::command::{Command, DisplayCommand};
use crate::config::SketchpadConfig;
use crate::error::ExportError;
use crate::surface::Surface;

mod raster;
mod save;

pub use raster::Rasterizer;
pub use save::{save_png, EXPORT_FILE_NAME};

/// Upper bound on exported pixels; the raster buffer takes 16 bytes per pixel
pub const MAX_EXPORT_PIXELS: u64 = 4096 * 4096;

/// Renders committed commands into a high resolution raster image
#[derive(Debug, Clone)]
pub struct Exporter {
    canvas_size: Vec2,
    scale: f32,
    background: Color32,
}

impl Exporter {
    pub fn new(canvas_size: Vec2, scale: f32, background: Color32) -> Self {
        Self {
            canvas_size,
            scale,
            background,
        }
    }

    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self::new(
            config.canvas_size(),
            config.export_scale,
            config.export_background(),
        )
    }

    /// Output size in pixels
    pub fn output_size(&self) -> [u32; 2] {
        let size = self.canvas_size * self.scale;
        [size.x.round() as u32, size.y.round() as u32]
    }

    /// Paint `strokes` over the background, scaled up.
    ///
    /// Only what is passed in is drawn; previews and undone commands never reach here.
    /// Needs a context that has run at least one frame so fonts are available.
    pub fn render(&self, ctx: &Context, strokes: &[Command]) -> Result<RgbaImage, ExportError> {
        let [width, height] = self.output_size();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptySurface { width, height });
        }
        if u64::from(width) * u64::from(height) > MAX_EXPORT_PIXELS {
            return Err(ExportError::TooLarge {
                width,
                height,
                limit: MAX_EXPORT_PIXELS,
            });
        }

        let mut surface = Surface::new(ctx, Pos2::ZERO, self.canvas_size, self.scale);
        for command in strokes {
            command.display(&mut surface);
        }
        let clip_rect = surface.rect();
        let shapes: Vec<ClippedShape> = surface
            .into_shapes()
            .into_iter()
            .map(|shape| ClippedShape { clip_rect, shape })
            .collect();
        log::debug!("Exporting {} shapes at {width}x{height}", shapes.len());

        // Tessellate after text layout so the atlas already holds every glyph.
        let primitives = ctx.tessellate(shapes, ctx.pixels_per_point());
        let font_image = ctx.fonts(|fonts| fonts.image());

        // The visible canvas has no real background, so paint the strokes over a solid one.
        let mut raster = Rasterizer::filled(width, height, self.background);
        raster.draw_primitives(&primitives, &font_image);
        Ok(raster.into_image())
    }

    /// Render and encode as PNG
    pub fn export_png(&self, ctx: &Context, strokes: &[Command]) -> Result<Vec<u8>, ExportError> {
        let image = self.render(ctx, strokes)?;
        encode_png(&image)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
