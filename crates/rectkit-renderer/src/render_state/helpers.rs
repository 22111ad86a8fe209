use rectkit_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    rects: usize,
    draws: usize,
) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?}, rects={}, draws={})",
            width,
            height,
            format,
            rects,
            draws,
        );
    }
}

/// Clear color for a surface. sRGB targets expect linear values.
pub(crate) fn clear_color(color: Color, srgb_target: bool) -> wgpu::Color {
    let [r, g, b, a] = if srgb_target {
        color.to_linear_f32_array()
    } else {
        color.to_f32_array()
    };
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}
