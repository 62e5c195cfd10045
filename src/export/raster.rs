use egui::epaint::{ClippedPrimitive, FontImage, Mesh, Primitive, Vertex};
use egui::{Color32, Pos2, Rect, TextureId};
use image::RgbaImage;

/// Software rasterizer for tessellated egui meshes.
///
/// Vertex positions are taken as pixel coordinates. Colors are premultiplied
/// and blended with "source over". Triangles textured with the font atlas
/// sample its coverage with nearest filtering; other textures are treated as
/// solid white.
pub struct Rasterizer {
    width: u32,
    height: u32,
    /// Premultiplied RGBA, row major
    pixels: Vec<[f32; 4]>,
}

impl Rasterizer {
    /// A new target, fully transparent
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// A new target cleared to a solid color
    pub fn filled(width: u32, height: u32, background: Color32) -> Self {
        let color = background.to_array().map(|channel| channel as f32 / 255.0);
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn draw_primitives(&mut self, primitives: &[ClippedPrimitive], font_image: &FontImage) {
        for primitive in primitives {
            match &primitive.primitive {
                Primitive::Mesh(mesh) => self.draw_mesh(mesh, primitive.clip_rect, font_image),
                Primitive::Callback(_) => {
                    log::warn!("Paint callbacks are not supported when exporting");
                }
            }
        }
    }

    pub fn draw_mesh(&mut self, mesh: &Mesh, clip_rect: Rect, font_image: &FontImage) {
        let texture = match mesh.texture_id {
            TextureId::Managed(0) => Some(font_image),
            _ => None,
        };
        for triangle in mesh.indices.chunks_exact(3) {
            let [a, b, c] =
                [triangle[0], triangle[1], triangle[2]].map(|i| &mesh.vertices[i as usize]);
            self.draw_triangle(a, b, c, clip_rect, texture);
        }
    }

    fn draw_triangle(
        &mut self,
        a: &Vertex,
        b: &Vertex,
        c: &Vertex,
        clip_rect: Rect,
        texture: Option<&FontImage>,
    ) {
        let area = edge(a.pos, b.pos, c.pos);
        if area == 0.0 {
            return;
        }

        let bounds = Rect::from_points(&[a.pos, b.pos, c.pos]).intersect(clip_rect);
        if !bounds.is_positive() {
            return;
        }
        let x0 = bounds.min.x.floor().max(0.0) as u32;
        let y0 = bounds.min.y.floor().max(0.0) as u32;
        let x1 = (bounds.max.x.ceil() as u32).min(self.width);
        let y1 = (bounds.max.y.ceil() as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let wa = edge(b.pos, c.pos, p) / area;
                let wb = edge(c.pos, a.pos, p) / area;
                let wc = edge(a.pos, b.pos, p) / area;
                if wa < 0.0 || wb < 0.0 || wc < 0.0 {
                    continue;
                }

                let coverage = match texture {
                    Some(font) => {
                        let u = a.uv.x * wa + b.uv.x * wb + c.uv.x * wc;
                        let v = a.uv.y * wa + b.uv.y * wb + c.uv.y * wc;
                        sample(font, u, v)
                    }
                    None => 1.0,
                };
                if coverage <= 0.0 {
                    continue;
                }

                let color = interpolate(a.color, b.color, c.color, wa, wb, wc);
                self.blend(x, y, color.map(|channel| channel * coverage));
            }
        }
    }

    fn blend(&mut self, x: u32, y: u32, src: [f32; 4]) {
        let dst = &mut self.pixels[(y * self.width + x) as usize];
        let keep = 1.0 - src[3];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s + *d * keep;
        }
    }

    /// Un-premultiply into an 8-bit RGBA image
    pub fn into_image(self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width, self.height);
        for (out, [r, g, b, a]) in image.pixels_mut().zip(self.pixels) {
            let color = if a > 0.0 {
                [r / a, g / a, b / a, a]
            } else {
                [0.0; 4]
            };
            out.0 = color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        }
        image
    }
}

/// Twice the signed area of the triangle (a, b, p)
fn edge(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn sample(font: &FontImage, u: f32, v: f32) -> f32 {
    let [width, height] = font.size;
    if width == 0 || height == 0 {
        return 1.0;
    }
    let x = ((u * width as f32) as usize).min(width - 1);
    let y = ((v * height as f32) as usize).min(height - 1);
    font.pixels[y * width + x]
}

fn interpolate(a: Color32, b: Color32, c: Color32, wa: f32, wb: f32, wc: f32) -> [f32; 4] {
    let channel = |i: usize| {
        (a.to_array()[i] as f32 * wa + b.to_array()[i] as f32 * wb + c.to_array()[i] as f32 * wc)
            / 255.0
    };
    [channel(0), channel(1), channel(2), channel(3)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_font() -> FontImage {
        FontImage {
            size: [1, 1],
            pixels: vec![1.0],
        }
    }

    #[test]
    fn test_filled_starts_opaque() {
        let image = Rasterizer::filled(3, 2, Color32::WHITE).into_image();
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_filled_rect_covers_pixels() {
        let mut mesh = Mesh::default();
        mesh.add_colored_rect(
            Rect::from_min_max(Pos2::new(2.0, 2.0), Pos2::new(6.0, 6.0)),
            Color32::RED,
        );
        let mut raster = Rasterizer::new(8, 8);
        raster.draw_mesh(&mesh, Rect::EVERYTHING, &white_font());
        let image = raster.into_image();

        assert_eq!(image.get_pixel(3, 3).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(7, 7).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_source_over_blending() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(4.0, 4.0));
        let mut background = Mesh::default();
        background.add_colored_rect(rect, Color32::WHITE);
        let mut overlay = Mesh::default();
        overlay.add_colored_rect(rect, Color32::from_black_alpha(128));

        let mut raster = Rasterizer::new(4, 4);
        raster.draw_mesh(&background, Rect::EVERYTHING, &white_font());
        raster.draw_mesh(&overlay, Rect::EVERYTHING, &white_font());
        let [r, g, b, a] = raster.into_image().get_pixel(1, 1).0;

        assert_eq!(a, 255);
        assert!(r == g && g == b);
        assert!((120..=135).contains(&r), "expected mid gray, got {r}");
    }

    #[test]
    fn test_clip_rect_limits_output() {
        let mut mesh = Mesh::default();
        mesh.add_colored_rect(Rect::from_min_max(Pos2::ZERO, Pos2::new(8.0, 8.0)), Color32::BLUE);
        let mut raster = Rasterizer::new(8, 8);
        let clip = Rect::from_min_max(Pos2::ZERO, Pos2::new(4.0, 8.0));
        raster.draw_mesh(&mesh, clip, &white_font());
        let image = raster.into_image();

        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(6, 1).0[3], 0);
    }
}
