#[cfg(test)]
#[path = "screens_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use strum::IntoEnumIterator;

use super::AppState;
use crate::domain::models::Answer;
use crate::domain::models::NotificationLevel;
use crate::domain::models::Session;

const NOTIFICATION_WIDTH: u16 = 48;
const NOTIFICATION_HEIGHT: u16 = 4;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Enter / s - Start a game from the start screen.
- y / 1 - Answer "Yes".
- n / 2 - Answer "No".
- d / 3 - Answer "Don't Know".
- m / 4 - Answer "Maybe".
- r - Reset the current game.
- Enter / p - Play again once the game is over.
- q / CTRL+C - Quit.
        "#;

    return text.trim().to_string();
}

fn accent() -> Style {
    return Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
}

fn muted() -> Style {
    return Style::default().fg(Color::Gray);
}

fn render_header(frame: &mut Frame, rect: Rect) {
    let lines = vec![
        Line::from(Span::styled("Akinator", accent())),
        Line::from(Span::styled(
            "Think of a character and I'll guess who it is!",
            muted(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rect,
    );
}

fn render_start(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Think of any character, person, animal, or thing...",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "I'll try to guess what you're thinking by asking questions!",
            muted(),
        )),
        Line::from(""),
    ];

    if app_state.session.is_loading {
        lines.push(Line::from(app_state.loading.text("Starting...")));
    } else {
        lines.push(Line::from(Span::styled("[Enter] Start Game", accent())));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn stats_line(session: &Session) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" Question {} ", session.questions_asked),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    if session.is_guess {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " Final Guess ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    return Line::from(spans);
}

fn answers_line() -> Line<'static> {
    let mut spans = vec![];
    for answer in Answer::iter() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }

        let color = match answer {
            Answer::Yes => Color::Green,
            Answer::No => Color::Red,
            Answer::DontKnow => Color::Gray,
            Answer::Maybe => Color::Yellow,
        };
        spans.push(Span::styled(
            format!("[{}] {answer}", answer.hotkey()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    return Line::from(spans);
}

fn render_game(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let session = &app_state.session;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(stats_line(session));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(3), Constraint::Length(4)])
        .split(inner);

    let question_rect = layout[0];
    let question_top = question_rect.height.saturating_sub(2) / 2;
    let centered = Rect {
        y: question_rect.y + question_top,
        height: question_rect.height - question_top,
        ..question_rect
    };

    if session.is_loading {
        app_state.loading.render(frame, centered, "Thinking...");
    } else {
        let mut lines = vec![Line::from(Span::styled(
            session.current_question.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if session.is_guess {
            lines.push(Line::from(Span::styled(
                "Is this your character?",
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            centered,
        );
    }

    let mut footer = vec![];
    if session.game_over {
        let (headline, detail) = if session.is_guess {
            ("I Win!", "I guessed your character correctly!")
        } else {
            ("Game Over", "Thanks for playing!")
        };
        footer.push(Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        footer.push(Line::from(Span::styled(detail, muted())));
        footer.push(Line::from(Span::styled("[Enter] Play Again", accent())));
    } else if !session.is_loading {
        footer.push(Line::from(Span::styled("Choose your answer:", muted())));
        footer.push(answers_line());
    }

    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP)),
        layout[1],
    );
}

fn render_footer(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let mut text = "[q] Quit".to_string();
    if app_state.session.game_started {
        text = format!("[r] Reset   {text}");
    }

    frame.render_widget(
        Paragraph::new(Span::styled(text, muted())).alignment(Alignment::Center),
        rect,
    );
}

fn render_notifications(frame: &mut Frame, rect: Rect, app_state: &AppState) {
    let width = NOTIFICATION_WIDTH.min(rect.width);
    let mut y = rect.y;

    for notification in app_state.notifications.visible() {
        if y + NOTIFICATION_HEIGHT > rect.y + rect.height {
            break;
        }

        let color = match notification.level {
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Error => Color::Red,
        };

        let toast = Rect {
            x: rect.x + rect.width - width,
            y,
            width,
            height: NOTIFICATION_HEIGHT,
        };

        frame.render_widget(Clear, toast);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    notification.title.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(notification.description.to_string()),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color)),
            ),
            toast,
        );

        y += NOTIFICATION_HEIGHT;
    }
}

pub fn render(frame: &mut Frame, app_state: &AppState) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, layout[0]);

    if app_state.session.game_started {
        render_game(frame, layout[1], app_state);
    } else {
        render_start(frame, layout[1], app_state);
    }

    render_footer(frame, layout[2], app_state);
    render_notifications(frame, area, app_state);
}
