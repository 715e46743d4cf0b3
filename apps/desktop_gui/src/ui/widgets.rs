//! Small reusable widgets shared by the panels.

use catalog::Category;

use crate::ui::theme;

/// Pill-shaped category badge.
pub fn category_badge(ui: &mut egui::Ui, category: Category) {
    let (fill, text) = theme::badge_colors(category);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(category.label())
                    .color(text)
                    .size(11.0),
            );
        });
}

/// Filter chip: filled with the category tint when active, outlined
/// otherwise. Returns `true` when clicked.
pub fn category_chip(
    ui: &mut egui::Ui,
    category: Category,
    count: usize,
    active: bool,
) -> bool {
    let label = format!("{} ({count})", category.label());
    let button = if active {
        let (fill, text) = theme::badge_colors(category);
        egui::Button::new(egui::RichText::new(label).color(text))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, theme::category_color(category)))
    } else {
        egui::Button::new(egui::RichText::new(label).weak())
    };
    ui.add(button).clicked()
}
