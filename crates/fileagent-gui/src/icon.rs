//! FileAgent application icon generator.
//!
//! Produces a procedural icon: a sheet of paper with a folded corner and a
//! few coloured "text" bars across it. Rendered at any resolution as RGBA
//! pixel data for the window icon.

/// Generate the FileAgent icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let left = s * 0.18;
    let right = s * 0.82;
    let top = s * 0.08;
    let bottom = s * 0.92;
    let fold = s * 0.20;
    let corner = s * 0.05;

    // Bars: (vertical centre, right end as fraction of page width, colour).
    let bars: &[(f32, f32, [u8; 3])] = &[
        (0.38, 0.80, [0x89, 0xb4, 0xfa]),
        (0.52, 0.65, [0xa6, 0xe3, 0xa1]),
        (0.66, 0.75, [0xf9, 0xe2, 0xaf]),
        (0.80, 0.50, [0xf3, 0x8b, 0xa8]),
    ];
    let bar_half_h = s * 0.035;
    let bar_left = left + s * 0.10;
    let page_w = right - left;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Page body with the top-right corner cut off. ─────
            let body = page_coverage(px, py, left, top, right, bottom, corner);
            let cut = smooth_edge((px - (right - fold)) - (py - top), 0.0);
            let page_alpha = body * (1.0 - (1.0 - cut) * in_fold_box(px, py, right, top, fold));
            if page_alpha <= 0.0 {
                continue;
            }

            let mut rgb = [0xe4u8, 0xe4, 0xe8];

            // 2. Folded flap. ────────────────────────────────────
            let flap_x = px - (right - fold);
            let flap_y = py - top;
            if flap_x >= 0.0 && flap_y <= fold && flap_x <= flap_y {
                rgb = [0xb8, 0xb8, 0xc4];
            }

            // 3. Text bars. ──────────────────────────────────────
            for &(cy, end, col) in bars {
                let cy = top + (bottom - top) * cy;
                let bar_right = left + page_w * end;
                let vert = smooth_edge((py - cy).abs(), bar_half_h);
                let horiz = smooth_edge_inv(px, bar_left) * smooth_edge(px, bar_right);
                let a = vert * horiz;
                if a > 0.0 {
                    rgb = [
                        lerp_c(rgb[0], col[0], a),
                        lerp_c(rgb[1], col[1], a),
                        lerp_c(rgb[2], col[2], a),
                    ];
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = rgb[0];
            pixels[idx + 1] = rgb[1];
            pixels[idx + 2] = rgb[2];
            pixels[idx + 3] = (page_alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Coverage of a rounded rectangle at a pixel centre.
fn page_coverage(px: f32, py: f32, l: f32, t: f32, r: f32, b: f32, radius: f32) -> f32 {
    let qx = (l + radius - px).max(px - (r - radius)).max(0.0);
    let qy = (t + radius - py).max(py - (b - radius)).max(0.0);
    let outside = (qx * qx + qy * qy).sqrt();
    smooth_edge(outside, radius)
}

/// 1 inside the square that holds the folded corner, 0 elsewhere.
fn in_fold_box(px: f32, py: f32, right: f32, top: f32, fold: f32) -> f32 {
    if px >= right - fold && py <= top + fold {
        1.0
    } else {
        0.0
    }
}

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Inverted smooth edge (0 → 1 as `dist` crosses `edge` going up).
fn smooth_edge_inv(dist: f32, edge: f32) -> f32 {
    1.0 - smooth_edge(dist, edge)
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
