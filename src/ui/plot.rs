use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};

use spectrum_broadener::pipeline::Series;

use crate::color::SeriesColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the latest [`TransformResult`](spectrum_broadener::TransformResult).
pub fn spectrum_plot(ui: &mut Ui, state: &AppState, colors: &SeriesColors) {
    let result = match &state.result {
        Some(r) if !r.is_empty() => r,
        Some(_) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No samples at or below the max energy");
            });
            return;
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Load a spectrum to begin  (File → Open…)");
            });
            return;
        }
    };

    let mut plot = Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label("Energy")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if let Some((lo, hi)) = x_bounds(state) {
        plot = plot.include_x(lo).include_x(hi);
    }

    plot.show(ui, |plot_ui| {
        for (series, values) in result.series() {
            let points: PlotPoints = result
                .shifted_energy
                .iter()
                .zip(values.iter())
                .map(|(&x, &y)| [x, y])
                .collect();

            let style = match series {
                Series::Original => LineStyle::Solid,
                Series::Convolved => LineStyle::dashed_loose(),
                Series::FranckCondon | Series::HerzbergTeller => LineStyle::dotted_dense(),
            };

            let line = Line::new(points)
                .name(series.label())
                .color(colors.color_for(series))
                .style(style)
                .width(1.5);

            plot_ui.line(line);
        }
    });
}

/// `[min(shifted_energy), max_energy]` of the displayed result, if any.
fn x_bounds(state: &AppState) -> Option<(f64, f64)> {
    state
        .result
        .as_ref()
        .and_then(|r| r.x_range(state.params.max_energy))
}
