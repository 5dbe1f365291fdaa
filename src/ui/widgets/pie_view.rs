use crate::config::ChartTheme;
use crate::engines::charts::{PieChart, PieSlice};
use egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Vec2};
use super::{chart_frame, rgb};

/// Arc sampling step, degrees
const ARC_STEP_DEG: f64 = 4.0;
/// Largest wedge drawn as one polygon; keeps every piece convex
const MAX_WEDGE_DEG: f64 = 90.0;

pub struct PieView;

impl PieView {
    pub fn show(ui: &mut egui::Ui, chart: &PieChart, theme: &ChartTheme, size: f32) {
        chart_frame(theme).show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = size * 0.32;
            let (label_font, percent_font) = slice_fonts(theme);
            let text_color = ui.visuals().text_color();
            let outline = Stroke::new(1.0, rgb(theme.background_color()));

            for slice in &chart.slices {
                for wedge in wedges(slice) {
                    let mut points = vec![center];
                    points.extend(arc(center, radius, wedge.0, wedge.1));
                    painter.add(Shape::convex_polygon(points, rgb(slice.color), outline));
                }
            }

            // Labels after all wedges so none is painted over
            for slice in &chart.slices {
                let mid = slice.mid_angle_deg();
                painter.text(
                    on_circle(center, radius * 1.15, mid),
                    label_anchor(mid),
                    &slice.label,
                    label_font.clone(),
                    text_color,
                );
                painter.text(
                    on_circle(center, radius * 0.6, mid),
                    Align2::CENTER_CENTER,
                    slice.percent_label(),
                    percent_font.clone(),
                    egui::Color32::WHITE,
                );
            }
        });
    }
}

/// Category label and percentage fonts
fn slice_fonts(theme: &ChartTheme) -> (FontId, FontId) {
    (
        FontId::proportional(theme.label_font_size),
        FontId::proportional(theme.small_font_size),
    )
}

/// Split a slice into pieces no wider than `MAX_WEDGE_DEG`
fn wedges(slice: &PieSlice) -> Vec<(f64, f64)> {
    let pieces = (slice.sweep_deg / MAX_WEDGE_DEG).ceil().max(1.0) as usize;
    let width = slice.sweep_deg / pieces as f64;
    (0..pieces)
        .map(|i| {
            let start = slice.start_angle_deg + width * i as f64;
            (start, start + width)
        })
        .collect()
}

fn arc(center: Pos2, radius: f32, start_deg: f64, end_deg: f64) -> Vec<Pos2> {
    let steps = ((end_deg - start_deg) / ARC_STEP_DEG).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = start_deg + (end_deg - start_deg) * i as f64 / steps as f64;
            on_circle(center, radius, angle)
        })
        .collect()
}

/// Counter-clockwise angle on screen, where y grows downwards
fn on_circle(center: Pos2, radius: f32, angle_deg: f64) -> Pos2 {
    let rad = angle_deg.to_radians();
    center + Vec2::new(radius * rad.cos() as f32, -radius * rad.sin() as f32)
}

fn label_anchor(angle_deg: f64) -> Align2 {
    if angle_deg.to_radians().cos() >= 0.0 {
        Align2::LEFT_CENTER
    } else {
        Align2::RIGHT_CENTER
    }
}
