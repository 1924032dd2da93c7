use datana_stats::histogram::Histogram;
use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    text::Line,
    widgets::{Bar, BarChart, Block, Paragraph, Widget},
};

use crate::analysis::Analysis;

pub(super) struct StatisticsPane<'a> {
    pub source: &'a str,
    pub analysis: &'a Analysis,
}

impl Widget for StatisticsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let stats = &self.analysis.stats;
        let text = vec![
            Line::raw(format!("  Values:                        {:>10}", stats.count)),
            Line::raw(format!("  Mean:                          {:>10.3}", stats.mean)),
            Line::raw(format!(
                "  Population Standard Deviation: {:>10.3}",
                stats.population_std_dev
            )),
            Line::raw(format!(
                "  Sample Standard Deviation:     {:>10.3}",
                stats.sample_std_dev
            )),
            Line::raw(format!(
                "  Counted in histogram:          {:>10}",
                self.analysis.histogram.total()
            )),
        ];

        Paragraph::new(text)
            .block(Block::bordered().title(format!("Data Sample ({})", self.source)))
            .render(area, buf);
    }
}

pub(super) struct HistogramChart<'a> {
    pub histogram: &'a Histogram,
    pub direction: Direction,
}

impl Widget for HistogramChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let bars = self
            .histogram
            .buckets
            .iter()
            .map(|bucket| {
                Bar::with_label(bucket.label(), bucket.count).text_value(bucket.count.to_string())
            })
            .collect::<Vec<_>>();

        let mut chart = BarChart::new(bars)
            .block(Block::bordered().title("Histogram (Sample / Frequency)"))
            .direction(self.direction);
        chart = match self.direction {
            Direction::Horizontal => chart.bar_gap(0),
            Direction::Vertical => chart.bar_width(7).bar_gap(1),
        };

        chart.render(area, buf);
    }
}
