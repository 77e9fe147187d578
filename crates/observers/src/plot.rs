//! Native window rendering for a [`Figure`].

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};
use radix_core::Function;

use crate::Figure;

impl<F: Function + ?Sized> Figure<'_, F> {
    /// Opens a blocking egui window showing the figure.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(&self) -> Result<(), eframe::Error> {
        let app = FigureApp {
            curve_label: self.curve_label().to_owned(),
            axis_label: self.axis_label().to_owned(),
            segments: segments(&self.curve()),
            marker_label: self.marker_label().to_owned(),
            markers: self.markers().to_vec(),
            guides: self.guides().to_vec(),
            solution: self.solution(),
        };

        eframe::run_native(
            self.title(),
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

/// Splits a sampled curve into runs of finite points.
///
/// Poles and out-of-domain samples would otherwise be joined by spurious
/// line segments.
fn segments(curve: &[[f64; 2]]) -> Vec<Vec<[f64; 2]>> {
    curve
        .split(|p| !p[1].is_finite())
        .filter(|run| !run.is_empty())
        .map(<[_]>::to_vec)
        .collect()
}

/// The egui [`eframe::App`] that renders a figure.
struct FigureApp {
    curve_label: String,
    axis_label: String,
    segments: Vec<Vec<[f64; 2]>>,
    marker_label: String,
    markers: Vec<[f64; 2]>,
    guides: Vec<[f64; 2]>,
    solution: Option<[f64; 2]>,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("figure")
                .legend(Legend::default())
                .x_axis_label("x")
                .y_axis_label(self.axis_label.clone())
                .show(ui, |plot_ui| {
                    plot_ui.hline(HLine::new(0.0).color(Color32::BLACK).width(0.5));

                    for (i, segment) in self.segments.iter().enumerate() {
                        let line = Line::new(PlotPoints::from(segment.clone()));
                        // One legend entry for the whole curve.
                        let line = if i == 0 {
                            line.name(&self.curve_label)
                        } else {
                            line
                        };
                        plot_ui.line(line.color(Color32::LIGHT_BLUE));
                    }

                    for (i, [a, b]) in self.guides.iter().copied().enumerate() {
                        for x in [a, b] {
                            let guide = VLine::new(x)
                                .color(Color32::BLUE)
                                .style(LineStyle::dashed_loose());
                            let guide = if i == 0 {
                                guide.name("Iteration 1 interval")
                            } else {
                                guide
                            };
                            plot_ui.vline(guide);
                        }
                    }

                    plot_ui.points(
                        Points::new(PlotPoints::from(self.markers.clone()))
                            .name(&self.marker_label)
                            .color(Color32::RED)
                            .radius(4.0),
                    );

                    if let Some(point) = self.solution {
                        plot_ui.points(
                            Points::new(PlotPoints::from(vec![point]))
                                .name(format!("Solution x = {:.5}", point[0]))
                                .color(Color32::GREEN)
                                .radius(6.0),
                        );
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_break_at_non_finite_values() {
        let curve = [
            [0.0, 1.0],
            [1.0, 2.0],
            [2.0, f64::NAN],
            [3.0, f64::INFINITY],
            [4.0, 5.0],
        ];
        assert_eq!(
            segments(&curve),
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[4.0, 5.0]]]
        );
    }

    #[test]
    fn all_undefined_curve_has_no_segments() {
        assert!(segments(&[[0.0, f64::NAN]]).is_empty());
    }
}
