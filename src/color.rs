use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Win / loss colours
// ---------------------------------------------------------------------------

/// `#2ecc71`
pub const WIN_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
/// `#e74c3c`
pub const LOSS_COLOR: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);

fn to_srgb(c: Color32) -> Srgb {
    Srgb::new(c.r(), c.g(), c.b()).into_format()
}

fn from_hsl(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Darker variant of `c`, used for drop shadows and slice outlines.
pub fn shade(c: Color32, amount: f32) -> Color32 {
    let hsl: Hsl = to_srgb(c).into_color();
    from_hsl(hsl.darken(amount))
}

/// Lighter variant of `c`, used to highlight a hovered pie slice.
pub fn tint(c: Color32, amount: f32) -> Color32 {
    let hsl: Hsl = to_srgb(c).into_color();
    from_hsl(hsl.lighten(amount))
}
