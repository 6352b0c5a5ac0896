//! SVG snapshot of a crop session.
//!
//! Draws the scaled content, the frame (clip region) on top of it, and the
//! corner handles, with a caption line. Meant for debugging and docs, not as
//! a production renderer.
//!
//! # Example
//!
//! ```
//! use zencrop::{FrameCropper, Size, svg::render_snapshot_svg};
//!
//! let mut cropper = FrameCropper::new();
//! cropper
//!     .initialize_frame(Size::new(1920.0, 1080.0), Size::new(1000.0, 800.0))
//!     .unwrap();
//!
//! let svg = render_snapshot_svg(&cropper);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::cropper::FrameCropper;
use crate::geometry::{Corner, Rect};

/// Maximum drawing width for the scene.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum drawing height for the scene.
const MAX_PANEL_H: f64 = 300.0;
/// Margin around the scene.
const MARGIN: f64 = 30.0;
/// Height of each caption line.
const LABEL_H: f64 = 18.0;
/// Side of a drawn handle square.
const HANDLE: f64 = 8.0;

/// Render the session as a complete SVG document.
pub fn render_snapshot_svg(cropper: &FrameCropper) -> String {
    let fc = cropper.config();
    let interaction = cropper.interaction();
    let frame = fc.frame_rect();
    let content = fc.content_rect();

    let scene = union(frame, content);
    let scale = scale_to_fit(scene);
    let to_view = |r: Rect| {
        Rect::new(
            MARGIN + (r.x - scene.x) * scale,
            MARGIN + (r.y - scene.y) * scale,
            r.width * scale,
            r.height * scale,
        )
    };

    let total_w = scene.width * scale + 2.0 * MARGIN;
    let panel_bottom = MARGIN + scene.height * scale;
    let total_h = panel_bottom + 2.0 * LABEL_H + MARGIN;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .content { fill: #b8d4ee; stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  .frame { fill: #6ba3d6; fill-opacity: 0.6; stroke: #2c6faa; stroke-width: 2; }
  .handle { fill: #fff; stroke: #2c6faa; stroke-width: 1.5; }
  .handle.active { fill: #2c6faa; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .content { fill: #2a4a65; stroke: #4a7a9e; }
    .frame { fill: #3a72a4; stroke: #5a9fd4; }
    .handle { fill: #222; stroke: #5a9fd4; }
    .handle.active { fill: #5a9fd4; }
  }
</style>
"##);

    push_rect(&mut svg, to_view(content), "content");
    push_rect(&mut svg, to_view(frame), "frame");

    if !interaction.is_edit_mode {
        let view = to_view(frame);
        for corner in Corner::ALL {
            let p = view.corner(corner);
            let class = if interaction.active_handle == Some(corner) {
                "handle active"
            } else {
                "handle"
            };
            push_rect(
                &mut svg,
                Rect::new(p.x - HANDLE / 2.0, p.y - HANDLE / 2.0, HANDLE, HANDLE),
                class,
            );
        }
    }

    let center_x = total_w / 2.0;
    let label = format!(
        "{}  {:.1}×{:.1}  scale {:.3}",
        fc.aspect_ratio, fc.frame.width, fc.frame.height, fc.content_scale
    );
    let mut annotation = format!(
        "offset ({:.1}, {:.1})",
        fc.content_offset.x, fc.content_offset.y
    );
    if interaction.is_edit_mode {
        annotation.push_str(", edit mode");
    }
    if let Some(corner) = interaction.active_handle {
        annotation.push_str(&format!(", resizing {corner:?}"));
    }
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        panel_bottom + 16.0,
        escape_xml(&label)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_bottom + LABEL_H + 14.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

fn push_rect(svg: &mut String, r: Rect, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
        r.x, r.y, r.width, r.height, class
    ));
    svg.push('\n');
}

/// Bounding box of two rects.
fn union(a: Rect, b: Rect) -> Rect {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = (a.x + a.width).max(b.x + b.width);
    let bottom = (a.y + a.height).max(b.y + b.height);
    Rect::new(x, y, right - x, bottom - y)
}

/// Scale factor fitting the scene into MAX_PANEL_W × MAX_PANEL_H.
fn scale_to_fit(scene: Rect) -> f64 {
    if !(scene.width > 0.0) || !(scene.height > 0.0) {
        return 1.0;
    }
    (MAX_PANEL_W / scene.width).min(MAX_PANEL_H / scene.height)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
