// File: crates/chart-render-skia/src/lib.rs
// Summary: Rasterises a chart `Scene` with Skia CPU raster surfaces (PNG / RGBA8 output).

use anyhow::{Context, Result};
use skia_safe as skia;

use chart_core::axis::{Axis, Orient};
use chart_core::scene::Scene;
use chart_core::series::PathCmd;
use chart_core::theme::Rgba;
use chart_core::types::TICK_PADDING;

pub struct RasterOptions {
    /// Device pixel ratio applied to the whole scene.
    pub scale: f32,
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true, font_size: 10.0 }
    }
}

pub struct SkiaRenderer {
    opts: RasterOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RasterOptions) -> Self {
        Self { opts }
    }

    /// Render the scene and encode it as PNG bytes.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.draw(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG file, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote PNG");
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn draw(&self, scene: &Scene) -> Result<skia::Surface> {
        let (ow, oh) = scene.outer_size();
        let s = self.opts.scale.max(0.1);
        let w = (ow * s).ceil().max(1.0) as i32;
        let h = (oh * s).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

        let canvas = surface.canvas();
        canvas.clear(color(scene.theme.background));
        canvas.save();
        canvas.scale((s, s));
        canvas.translate((scene.insets.left as f32, scene.insets.top as f32));

        if let Some(bg) = scene.background() {
            let mut fill = skia::Paint::default();
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(color(scene.theme.content));
            canvas.draw_rect(skia::Rect::from_xywh(bg.x, bg.y, bg.width, bg.height), &fill);
        }

        self.draw_axis(canvas, scene, scene.x_axis());
        self.draw_axis(canvas, scene, scene.y_axis());
        draw_line(canvas, scene);

        canvas.restore();
        Ok(surface)
    }

    fn draw_axis(&self, canvas: &skia::Canvas, scene: &Scene, axis: &Axis) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(color(scene.theme.axis_line));

        let mut text = skia::Paint::default();
        text.set_anti_alias(true);
        text.set_color(color(scene.theme.tick_label));
        let mut font = skia::Font::default();
        font.set_size(self.opts.font_size);

        let (r0, r1) = axis.range;
        let outer = axis.tick_size_outer;
        let inner = axis.tick_size_inner;
        let spacing = inner.max(0.0) + TICK_PADDING;

        match axis.orient {
            Orient::Bottom => {
                let y = scene.frame.height;
                canvas.draw_line((r0, y), (r1, y), &stroke);
                if outer > 0.0 {
                    canvas.draw_line((r0, y), (r0, y + outer), &stroke);
                    canvas.draw_line((r1, y), (r1, y + outer), &stroke);
                }
                for t in &axis.ticks {
                    canvas.draw_line((t.offset, y), (t.offset, y + inner), &stroke);
                    if self.opts.draw_labels {
                        let (tw, _) = font.measure_str(&t.label, Some(&text));
                        canvas.draw_str(&t.label, (t.offset - tw * 0.5, y + spacing + self.opts.font_size), &font, &text);
                    }
                }
            }
            Orient::Left => {
                canvas.draw_line((0.0, r0), (0.0, r1), &stroke);
                if outer > 0.0 {
                    canvas.draw_line((-outer, r0), (0.0, r0), &stroke);
                    canvas.draw_line((-outer, r1), (0.0, r1), &stroke);
                }
                for t in &axis.ticks {
                    canvas.draw_line((-inner, t.offset), (0.0, t.offset), &stroke);
                    if self.opts.draw_labels {
                        let (tw, _) = font.measure_str(&t.label, Some(&text));
                        canvas.draw_str(&t.label, (-spacing - tw, t.offset + self.opts.font_size * 0.32), &font, &text);
                    }
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

fn draw_line(canvas: &skia::Canvas, scene: &Scene) {
    let cmds = scene.line();
    if cmds.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    for c in cmds {
        match *c {
            PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathCmd::CubicTo(a, b, p) => { path.cubic_to((a.x, a.y), (b.x, b.y), (p.x, p.y)); }
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(scene.theme.line_width);
    stroke.set_color(color(scene.theme.line_stroke));
    canvas.draw_path(&path, &stroke);
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
