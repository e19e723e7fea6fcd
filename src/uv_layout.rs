//! UV-layout visualization.
//!
//! Draws the mesh's UV triangles as a wireframe over a transparent
//! background, matching the unwrap reference image shipped next to the
//! dataset.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::assets::UvMesh;
use crate::errors::Result;

/// File name of the layout image inside the dataset root.
pub const UV_LAYOUT_FILE: &str = "uv_unwrap.png";

const EDGE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Renders the UV triangles into a square wireframe image.
///
/// UV `v` runs bottom-up while image rows run top-down, so `v` is flipped.
/// Coordinates outside the unit square are clipped pixel by pixel.
#[must_use]
pub fn render_uv_layout(mesh: &UvMesh, size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    for tri in &mesh.triangles {
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let from = uv_to_pixel(mesh.uvs[tri[a] as usize], size);
            let to = uv_to_pixel(mesh.uvs[tri[b] as usize], size);
            draw_line(&mut img, from, to);
        }
    }
    img
}

/// Renders and saves the layout image.
pub fn export_uv_layout(mesh: &UvMesh, path: &Path, size: u32) -> Result<()> {
    render_uv_layout(mesh, size).save(path)?;
    Ok(())
}

fn uv_to_pixel(uv: [f32; 2], size: u32) -> (f32, f32) {
    let extent = (size - 1) as f32;
    (uv[0] * extent, (1.0 - uv[1]) * extent)
}

fn draw_line(img: &mut RgbaImage, from: (f32, f32), to: (f32, f32)) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0);

    let mut i = 0.0;
    while i <= steps {
        let t = i / steps;
        let x = (from.0 + dx * t).round();
        let y = (from.1 + dy * t).round();
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, EDGE_COLOR);
        }
        i += 1.0;
    }
}
