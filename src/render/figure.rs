use super::LineStyle;
use super::Palette;
use super::Ramp;
use super::StyleTable;
use crate::analysis::Aggregate;
use crate::*;
use anyhow::Context;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Cooperation fraction per round for every (player, epsilon) group.
///
/// Color encodes epsilon, line style encodes the player. The legend lists
/// epsilons only.
pub struct Figure<'a> {
    aggregate: &'a Aggregate,
    palette: Palette,
    styles: StyleTable,
    size: (u32, u32),
}

impl<'a> From<&'a Aggregate> for Figure<'a> {
    fn from(aggregate: &'a Aggregate) -> Self {
        Self {
            aggregate,
            palette: Palette::new(&Ramp::default(), aggregate.epsilons()),
            styles: StyleTable::default(),
            size: FIGURE_SIZE,
        }
    }
}

impl<'a> Figure<'a> {
    pub fn styles(self, styles: StyleTable) -> Self {
        Self { styles, ..self }
    }
    pub fn ramp(self, ramp: &Ramp) -> Self {
        let palette = Palette::new(ramp, self.aggregate.epsilons());
        Self { palette, ..self }
    }
    pub fn size(self, size: (u32, u32)) -> Self {
        Self { size, ..self }
    }

    /// Renders to an SVG file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if !path.extension().is_some_and(|ext| ext == "svg") {
            anyhow::bail!("unsupported figure format: {}", path.display());
        }
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        self.draw(&root)
            .with_context(|| format!("render {}", path.display()))?;
        log::info!(
            "rendered {} series over {} epsilons to {}",
            self.aggregate.len(),
            self.aggregate.epsilons().len(),
            path.display()
        );
        Ok(())
    }

    /// Renders to an in-memory SVG document.
    pub fn svg(&self) -> anyhow::Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.size).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buffer)
    }

    /// Last x position: rounds are plotted at their 0-based index.
    fn x_max(&self) -> f64 {
        self.aggregate
            .groups()
            .map(|(_, _, series)| series.rounds())
            .max()
            .unwrap_or(0)
            .saturating_sub(1)
            .max(1) as f64
    }

    fn draw(&self, root: &DrawingArea<SVGBackend<'_>, Shift>) -> anyhow::Result<()> {
        let (y_lo, y_hi) = FIGURE_Y_RANGE;
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..self.x_max(), y_lo..y_hi)?;

        chart
            .configure_mesh()
            .x_desc("Rounds")
            .y_desc("Fraction C")
            .draw()?;

        for (player, epsilon, series) in self.aggregate.groups() {
            let color = self
                .palette
                .color(epsilon.value())
                .map(RGBColor::from)
                .unwrap_or(BLACK);
            let stroke = color.stroke_width(2);
            let points = series
                .cooperation()
                .iter()
                .enumerate()
                .map(|(i, c)| (i as f64, *c))
                .collect::<Vec<_>>();
            match self.styles.style(player) {
                LineStyle::Solid => {
                    chart.draw_series(LineSeries::new(points, stroke))?;
                }
                LineStyle::Dashed => {
                    chart.draw_series(DashedLineSeries::new(points, 8, 6, stroke))?;
                }
            }
        }

        for (epsilon, swatch) in self.palette.entries() {
            let color = RGBColor::from(swatch);
            chart
                .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
                .label(format!("ε = {}", epsilon))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(WHITE)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
