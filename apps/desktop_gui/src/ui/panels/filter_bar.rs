//! Category filter bar: one chip per category plus select-all/clear-all.

use catalog::Category;
use explorer_core::PlaceExplorer;

use crate::ui::widgets;

pub fn show(ui: &mut egui::Ui, explorer: &mut PlaceExplorer) {
    ui.label(egui::RichText::new("Filter by Category").strong());
    ui.horizontal_wrapped(|ui| {
        let active = explorer.active_categories();
        for category in Category::ALL {
            let count = explorer.category_count(category);
            if widgets::category_chip(ui, category, count, active.contains(category)) {
                explorer.toggle_category(category);
            }
        }

        if ui.button("Select All").clicked() {
            explorer.select_all_categories();
        }
        if ui
            .button(egui::RichText::new("Clear All").color(egui::Color32::from_rgb(0xdc, 0x26, 0x26)))
            .clicked()
        {
            explorer.clear_categories();
        }
    });
}
