// ============================================================================
// SOFTWARE RASTERIZER
// ============================================================================
//
// Draws a flattened scene into an RGBA8 frame buffer. Pure pixel pushing: all
// geometry decisions are made before a shape reaches this module.

use std::path::Path;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::color::Color;
use crate::error::InstrumentError;
use crate::shape::{Point, Scene, Shape, Stroke, TextAnchor};

const PLACEHOLDER: Color = Color::rgba(0x80, 0x80, 0x80, 0xc0);

pub fn load_font(path: &Path) -> Result<Font<'static>, InstrumentError> {
    let data = std::fs::read(path).map_err(|source| InstrumentError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| InstrumentError::InvalidFont(path.to_path_buf()))
}

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        if idx + 4 > self.frame.len() {
            return;
        }
        let a = (coverage * color.alpha()).clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let out = [
            (src[0] * a + self.frame[idx] as f32 * (1.0 - a)).round() as u8,
            (src[1] * a + self.frame[idx + 1] as f32 * (1.0 - a)).round() as u8,
            (src[2] * a + self.frame[idx + 2] as f32 * (1.0 - a)).round() as u8,
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }
}

/// Clear the frame and draw every shape of `scene`, back to front. Text is
/// skipped when no font is available.
pub fn render_scene(canvas: &mut Canvas, scene: &Scene, font: Option<&Font>, background: Color) {
    canvas.clear(background);
    for shape in scene.flatten() {
        match shape {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                color,
            } => draw_thick_line_aa(canvas, Point::new(x1, y1), Point::new(x2, y2), stroke_width, color),
            Shape::Polygon {
                points,
                fill,
                stroke,
            } => {
                fill_polygon(canvas, &points, fill);
                if let Some(stroke) = stroke {
                    stroke_outline(canvas, &points, stroke);
                }
            }
            Shape::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => draw_circle(canvas, Point::new(cx, cy), r, fill, stroke),
            Shape::Text {
                x,
                y,
                content,
                anchor,
                font_size,
                color,
            } => {
                if let Some(font) = font {
                    draw_text(canvas, x, y, &content, font, font_size, anchor, color);
                }
            }
            Shape::Image {
                x,
                y,
                w,
                h,
                rotation,
                ..
            } => draw_placeholder(canvas, x, y, w, h, rotation),
        }
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn draw_thick_line_aa(canvas: &mut Canvas, a: Point, b: Point, thickness: f64, color: Color) {
    if !(thickness > 0.0) {
        return;
    }
    let pad = thickness.ceil() + 1.0;
    let (min_x, max_x) = ((a.x.min(b.x) - pad) as i32, (a.x.max(b.x) + pad) as i32);
    let (min_y, max_y) = ((a.y.min(b.y) - pad) as i32, (a.y.max(b.y) + pad) as i32);
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f64 - a.x, y as f64 - a.y);
            let t = if len_sq > 0.0 {
                ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (lx, ly) = (a.x + t * dx, a.y + t * dy);
            let dist = ((lx - x as f64).powi(2) + (ly - y as f64).powi(2)).sqrt();
            let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                canvas.set_pixel(x, y, color, aa as f32);
            }
        }
    }
}

fn stroke_outline(canvas: &mut Canvas, points: &[Point], stroke: Stroke) {
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_thick_line_aa(canvas, *a, b, stroke.width, stroke.color);
    }
}

/// Even-odd fill with 2×2 supersampling per pixel.
fn fill_polygon(canvas: &mut Canvas, points: &[Point], fill: Color) {
    if points.len() < 3 || fill.a == 0 {
        return;
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
        return;
    }
    const OFFSETS: [f64; 2] = [0.25, 0.75];
    for y in (min_y.floor() as i32)..=(max_y.ceil() as i32) {
        for x in (min_x.floor() as i32)..=(max_x.ceil() as i32) {
            let hits = OFFSETS
                .iter()
                .flat_map(|oy| OFFSETS.iter().map(move |ox| (*ox, *oy)))
                .filter(|(ox, oy)| contains(points, x as f64 - 0.5 + ox, y as f64 - 0.5 + oy))
                .count();
            if hits > 0 {
                canvas.set_pixel(x, y, fill, hits as f32 / 4.0);
            }
        }
    }
}

fn contains(points: &[Point], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > y) != (b.y > y) && x < (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn draw_circle(canvas: &mut Canvas, c: Point, radius: f64, fill: Color, stroke: Option<Stroke>) {
    if !(radius > 0.0) {
        return;
    }
    let half = stroke.map_or(0.0, |s| s.width / 2.0);
    let reach = (radius + half + 1.0).ceil() as i32;
    let (cx, cy) = (c.x.round() as i32, c.y.round() as i32);
    for y in -reach..=reach {
        for x in -reach..=reach {
            let (px, py) = (cx + x, cy + y);
            let dist = ((px as f64 - c.x).powi(2) + (py as f64 - c.y).powi(2)).sqrt();
            let inner = (radius - dist + 0.5).clamp(0.0, 1.0);
            if inner > 0.0 && fill.a > 0 {
                canvas.set_pixel(px, py, fill, inner as f32);
            }
            if let Some(stroke) = stroke {
                let ring = (half - (dist - radius).abs() + 0.5).clamp(0.0, 1.0);
                if ring > 0.0 {
                    canvas.set_pixel(px, py, stroke.color, ring as f32);
                }
            }
        }
    }
}

/// Outline of the picture's rotated bounds with a diagonal; pictures are
/// not decoded.
fn draw_placeholder(canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64, rotation: f64) {
    let center = Point::new(x + w / 2.0, y + h / 2.0);
    let corners: Vec<Point> = [(-w, -h), (w, -h), (w, h), (-w, h)]
        .iter()
        .map(|(dx, dy)| {
            let p = Point::new(dx / 2.0, dy / 2.0).rotated(rotation);
            Point::new(center.x + p.x, center.y + p.y)
        })
        .collect();
    let stroke = Stroke {
        color: PLACEHOLDER,
        width: 1.0,
    };
    stroke_outline(canvas, &corners, stroke);
    draw_thick_line_aa(canvas, corners[0], corners[2], 1.0, PLACEHOLDER);
}

fn text_width(glyphs: &[PositionedGlyph]) -> f64 {
    match (glyphs.first(), glyphs.last()) {
        (Some(first), Some(last)) => (last.position().x - first.position().x
            + last.unpositioned().h_metrics().advance_width) as f64,
        _ => 0.0,
    }
}

/// Text laid out on the baseline at `y`, aligned horizontally by `anchor`.
fn draw_text(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    text: &str,
    font: &Font,
    font_size: f64,
    anchor: TextAnchor,
    color: Color,
) {
    if !(font_size > 0.0) || text.is_empty() {
        return;
    }
    let scale = Scale::uniform(font_size as f32);
    let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
    let width = text_width(&glyphs);
    let left = match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    };
    let (ox, oy) = (left.round() as i32, y.round() as i32);
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = ox + bb.min.x + gx as i32;
                let py = oy + bb.min.y + gy as i32;
                canvas.set_pixel(px, py, color, v);
            });
        }
    }
}
