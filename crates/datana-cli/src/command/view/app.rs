use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::analysis::Analysis;

use super::widgets::{HistogramChart, StatisticsPane};

#[derive(Debug)]
pub struct App {
    source: String,
    analysis: Analysis,
    direction: Direction,
    should_exit: bool,
}

impl App {
    pub fn new(source: String, analysis: Analysis) -> Self {
        Self {
            source,
            analysis,
            direction: Direction::Horizontal,
            should_exit: false,
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.should_exit {
            terminal.draw(|f| self.draw(f))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let [stats_area, chart_area, help_area] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            StatisticsPane {
                source: &self.source,
                analysis: &self.analysis,
            },
            stats_area,
        );
        frame.render_widget(
            HistogramChart {
                histogram: &self.analysis.histogram,
                direction: self.direction,
            },
            chart_area,
        );

        let help_text = Text::from("o: Toggle Orientation | q/Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }

    fn handle_events(&mut self) -> anyhow::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('o') => {
                self.direction = match self.direction {
                    Direction::Horizontal => Direction::Vertical,
                    Direction::Vertical => Direction::Horizontal,
                };
            }
            _ => {}
        }
    }
}
