use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Ui, Vec2};

use crate::color::{shade, tint, LOSS_COLOR, WIN_COLOR};
use crate::data::aggregate::AggregateResult;

/// Fraction of the radius each slice is pushed out along its bisector.
const EXPLODE: f32 = 0.05;
const SHADOW_OFFSET: Vec2 = Vec2::new(4.0, 5.0);

// ---------------------------------------------------------------------------
// Slice geometry
// ---------------------------------------------------------------------------

/// One wedge of the pie. Angles are radians, counter-clockwise from +x.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub sweep: f32,
    pub fraction: f32,
}

impl Slice {
    pub fn mid_angle(&self) -> f32 {
        self.start + self.sweep / 2.0
    }

    /// Whether `angle` (any winding) lies inside this wedge.
    pub fn contains(&self, angle: f32) -> bool {
        let offset = (angle - self.start).rem_euclid(TAU);
        self.sweep >= TAU || offset < self.sweep
    }
}

/// Lay out `values` counter-clockwise starting at 12 o'clock.
///
/// Zero values produce zero-width slices so indices stay aligned with the
/// input; an all-zero input produces no slices.
pub fn layout(values: &[u32]) -> Vec<Slice> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = FRAC_PI_2;
    values
        .iter()
        .map(|&v| {
            let fraction = v as f32 / total as f32;
            let slice = Slice {
                start,
                sweep: fraction * TAU,
                fraction,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// Screen point at `angle` on a circle; screen y grows downwards.
fn on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(angle.cos(), -angle.sin()) * radius
}

fn wedge_mesh(center: Pos2, radius: f32, slice: &Slice, color: Color32) -> Mesh {
    let steps = ((slice.sweep / TAU) * 128.0).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..=steps {
        let angle = slice.start + slice.sweep * i as f32 / steps as f32;
        mesh.colored_vertex(on_circle(center, radius, angle), color);
    }
    for i in 1..=steps {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Result distribution pie
// ---------------------------------------------------------------------------

/// Render the wins/losses pie chart. Callers handle the empty case.
pub fn result_pie(ui: &mut Ui, agg: &AggregateResult) {
    let size = ui.available_width().min(420.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
    let center = response.rect.center();
    let radius = size * 0.32;

    let entries = [
        ("Wins", agg.total_wins, WIN_COLOR),
        ("Losses", agg.total_losses, LOSS_COLOR),
    ];
    let slices = layout(&entries.map(|(_, n, _)| n));

    let hovered_angle = response.hover_pos().and_then(|pos| {
        let d = pos - center;
        (d.length() <= radius * (1.0 + EXPLODE)).then(|| (-d.y).atan2(d.x))
    });

    for (slice, &(label, count, color)) in slices.iter().zip(&entries) {
        if count == 0 {
            continue;
        }
        let offset = on_circle(Pos2::ZERO, radius * EXPLODE, slice.mid_angle()).to_vec2();
        let wedge_center = center + offset;
        let hovered = hovered_angle.is_some_and(|a| slice.contains(a));
        let fill = if hovered { tint(color, 0.15) } else { color };

        let shadow = shade(color, 0.7).gamma_multiply(0.4);
        painter.add(Shape::Mesh(
            wedge_mesh(wedge_center + SHADOW_OFFSET, radius, slice, shadow).into(),
        ));
        painter.add(Shape::Mesh(wedge_mesh(wedge_center, radius, slice, fill).into()));

        let font = FontId::proportional(14.0);
        painter.text(
            on_circle(wedge_center, radius * 0.6, slice.mid_angle()),
            Align2::CENTER_CENTER,
            format!("{:.1}%", slice.fraction * 100.0),
            font.clone(),
            Color32::WHITE,
        );
        painter.text(
            on_circle(wedge_center, radius * 1.25, slice.mid_angle()),
            Align2::CENTER_CENTER,
            format!("{label}\n({count})"),
            font,
            ui.visuals().text_color(),
        );
    }

    if let Some(slice_idx) = hovered_angle.and_then(|a| slices.iter().position(|s| s.contains(a))) {
        let (label, count, _) = entries[slice_idx];
        response.on_hover_text(format!("{label}: {count}"));
    }
}
