use chrono::{Datelike, NaiveDate};
use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Revenue by product (bar chart)
// ---------------------------------------------------------------------------

/// Render the per-product revenue bar chart.
pub fn revenue_by_product(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .summary
        .by_product
        .iter()
        .enumerate()
        .map(|(i, (product, &revenue))| {
            Bar::new(i as f64, revenue)
                .name(product)
                .fill(state.colors.color_for(product))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = state.summary.by_product.keys().cloned().collect();

    Plot::new("revenue_by_product")
        .y_axis_label("Revenue")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round() as i64;
            if (mark.value - i as f64).abs() > 1e-6 {
                return String::new();
            }
            labels
                .get(usize::try_from(i).unwrap_or(usize::MAX))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Revenue by Product"));
        });
}

// ---------------------------------------------------------------------------
// Daily revenue trend (line chart)
// ---------------------------------------------------------------------------

/// Days-since-epoch position of a date on the x axis.
fn day_x(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

fn x_day(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Render the daily revenue trend line.
pub fn daily_revenue(ui: &mut Ui, state: &AppState) {
    if state.summary.by_day.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No data in selected filters to plot.");
        });
        return;
    }

    let points: PlotPoints = state
        .summary
        .by_day
        .iter()
        .map(|(&d, &revenue)| [day_x(d), revenue])
        .collect();

    Plot::new("daily_revenue")
        .y_axis_label("Revenue")
        .x_axis_formatter(|mark, _range| {
            x_day(mark.value)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .label_formatter(|_name, point| {
            match x_day(point.x) {
                Some(d) => format!("{}\n{:.2}", d.format("%Y-%m-%d"), point.y),
                None => format!("{:.2}", point.y),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Daily Revenue").width(1.5));
        });
}
