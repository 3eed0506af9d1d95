use ratatui::prelude::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

#[derive(Default)]
pub struct Loading {
    tick: usize,
}

impl Loading {
    pub fn tick(&mut self) {
        self.tick = (self.tick + 1) % FRAMES.len();
    }

    pub fn text(&self, label: &str) -> String {
        return format!("{} {label}", FRAMES[self.tick]);
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, label: &str) {
        frame.render_widget(
            Paragraph::new(self.text(label))
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center),
            rect,
        );
    }
}
