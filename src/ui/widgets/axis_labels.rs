use egui::epaint::TextShape;
use egui::{Align2, FontId, Pos2, Sense, Shape, Vec2};
use egui_plot::{PlotPoint, PlotTransform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAlign {
    /// Text centre sits on the tick
    Center,
    /// Text ends at the tick
    Right,
}

/// Rotated x tick labels painted in a band under a plot.
///
/// egui_plot lays out axis labels horizontally only, so charts that need
/// slanted ticks hide their x axis and draw these instead.
pub struct RotatedTickLabels<'a> {
    pub ticks: &'a [(f64, String)],
    pub angle_deg: f32,
    pub font_size: f32,
    pub title_font_size: f32,
    pub align: TickAlign,
    pub axis_title: &'a str,
}

impl RotatedTickLabels<'_> {
    pub fn show(&self, ui: &mut egui::Ui, transform: &PlotTransform) {
        let color = ui.visuals().text_color();
        let font = FontId::proportional(self.font_size);
        // Counter-clockwise on screen, y grows downwards
        let angle = -self.angle_deg.to_radians();
        let (sin, cos) = (angle.sin().abs(), angle.cos());

        let galleys: Vec<_> = self
            .ticks
            .iter()
            .map(|(x, text)| (*x, ui.painter().layout_no_wrap(text.clone(), font.clone(), color)))
            .collect();

        let label_height = galleys
            .iter()
            .map(|(_, g)| g.size().x * sin + g.size().y * cos)
            .fold(0.0, f32::max);
        let title_height = self.title_font_size + 8.0;

        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), label_height + title_height + 6.0),
            Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        for (x, galley) in galleys {
            let size = galley.size();
            // Align the rotated bounding box, not the text baseline
            let box_width = size.x * cos + size.y * sin;
            let x_offset = match self.align {
                TickAlign::Right => box_width,
                TickAlign::Center => box_width / 2.0,
            };
            let tick_x = transform.position_from_point(&PlotPoint::new(x, 0.0)).x;
            let pos = Pos2::new(tick_x - x_offset, rect.top() + 2.0 + size.x * sin);
            painter.add(Shape::Text(TextShape::new(pos, galley, color).with_angle(angle)));
        }

        painter.text(
            Pos2::new(transform.frame().center().x, rect.bottom() - title_height / 2.0),
            Align2::CENTER_CENTER,
            self.axis_title,
            FontId::proportional(self.title_font_size),
            color,
        );
    }
}
