//! Place list: one card per visible place, kept in sync with the map.

use explorer_core::PlaceExplorer;

use crate::ui::widgets;

pub fn show(ui: &mut egui::Ui, explorer: &mut PlaceExplorer) {
    ui.heading(format!("Places in {}", explorer.active_city().name));
    ui.label(
        egui::RichText::new(format!(
            "{} of {} places",
            explorer.visible_count(),
            explorer.place_count()
        ))
        .weak(),
    );
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let visible = explorer.visible_places();
            if visible.is_empty() {
                // Empty filter is a valid state; offer the way back.
                show_empty_state(ui, explorer);
                return;
            }

            let mut clicked = None;
            for place in visible {
                let highlighted = explorer.is_highlighted(place.id);
                if place_card(ui, place, highlighted) {
                    clicked = Some(place.id);
                }
                ui.add_space(6.0);
            }
            if let Some(place_id) = clicked {
                explorer.select_place(place_id);
            }
        });
}

fn show_empty_state(ui: &mut egui::Ui, explorer: &mut PlaceExplorer) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No places match the selected categories.").weak());
                ui.add_space(6.0);
                if ui.button("Show All Categories").clicked() {
                    explorer.select_all_categories();
                }
            });
        });
}

/// Renders one clickable place card; returns `true` on click.
fn place_card(ui: &mut egui::Ui, place: &catalog::Place, highlighted: bool) -> bool {
    let stroke = if highlighted {
        egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    let inner = egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(place.name).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    widgets::category_badge(ui, place.category);
                });
            });
            ui.label(egui::RichText::new(place.description).weak().size(12.0));
        });

    let response = ui.interact(
        inner.response.rect,
        ui.id().with(place.id.as_str()),
        egui::Sense::click(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}
