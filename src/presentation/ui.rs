use super::view::{
    error_text, submit_label, OutputRegion, ResultsView, DESCRIPTION_LABEL,
    DESCRIPTION_PLACEHOLDER, FORM_TITLE, IDLE_PLACEHOLDER, OUTPUT_TITLE, RESUME_LABEL, TAGLINE,
    TITLE,
};
use crate::application::{App, AppMode, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CURSOR: char = '▏';

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(13),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_form(f, app, chunks[1]);
    render_output(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(TAGLINE),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(header, area);
}

fn field_style(app: &App, focus: Focus, editing: AppMode) -> Style {
    if app.mode == editing {
        Style::default().fg(Color::Green)
    } else if app.focus == focus && app.mode == AppMode::Normal {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn with_cursor(text: &str, cursor: usize) -> String {
    let mut shown: String = text.chars().take(cursor).collect();
    shown.push(CURSOR);
    shown.extend(text.chars().skip(cursor));
    shown
}

/// Scroll offset (rows, columns) that keeps the cursor inside `area`.
fn scroll_to_cursor(text: &str, cursor: usize, area: Rect) -> (u16, u16) {
    let before: String = text.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let column = before.rsplit('\n').next().map_or(0, |line| line.chars().count());

    let row = row.saturating_sub(usize::from(area.height.saturating_sub(1)));
    let column = column.saturating_sub(usize::from(area.width.saturating_sub(1)));
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(FORM_TITLE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    let state = app.submission();

    let resume_text = if app.mode == AppMode::EditingResumePath {
        with_cursor(&app.resume_input, app.cursor_position)
    } else {
        match state.selected_file.as_ref() {
            Some(file) => format!("{} ({})", file.file_name, file.path.display()),
            None => "No file chosen".to_string(),
        }
    };
    let resume = Paragraph::new(resume_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(RESUME_LABEL)
            .border_style(field_style(app, Focus::Resume, AppMode::EditingResumePath)),
    );
    f.render_widget(resume, rows[0]);

    let description_block = Block::default()
        .borders(Borders::ALL)
        .title(DESCRIPTION_LABEL)
        .border_style(field_style(app, Focus::Description, AppMode::EditingDescription));
    let description = if app.mode == AppMode::EditingDescription {
        // Unwrapped while editing so the cursor's row and column are exact.
        let inner = description_block.inner(rows[1]);
        let scroll = scroll_to_cursor(&state.description, app.cursor_position, inner);
        Paragraph::new(with_cursor(&state.description, app.cursor_position)).scroll(scroll)
    } else if state.description.is_empty() {
        Paragraph::new(Span::styled(
            DESCRIPTION_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.description.as_str()).wrap(Wrap { trim: false })
    };
    let description = description.block(description_block);
    f.render_widget(description, rows[1]);

    let button_style = if state.in_flight {
        Style::default().fg(Color::DarkGray)
    } else if app.focus == Focus::Submit && app.mode == AppMode::Normal {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let button = Paragraph::new(submit_label(state.in_flight))
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    let button_area = centered_width(rows[2], 28);
    f.render_widget(button, button_area);
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_output(f: &mut Frame, app: &App, area: Rect) {
    let text = output_text(&OutputRegion::from_state(app.submission()));
    let output = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(OUTPUT_TITLE));
    f.render_widget(output, area);
}

fn output_text(region: &OutputRegion<'_>) -> Text<'static> {
    match region {
        OutputRegion::Idle => Text::from(Span::styled(
            IDLE_PLACEHOLDER,
            Style::default().fg(Color::Gray),
        )),
        OutputRegion::Error(message) => Text::from(Span::styled(
            error_text(message),
            Style::default().fg(Color::Red),
        )),
        OutputRegion::Results(view) => Text::from(results_lines(view)),
    }
}

fn results_lines(view: &ResultsView<'_>) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("ATS Score: ", heading),
            Span::styled(
                view.fit_score.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(view.explanation.to_string()),
        Line::default(),
        Line::from(Span::styled("Modifications Made", heading)),
    ];
    lines.extend(view.modifications.iter().map(|item| Line::from(format!("• {item}"))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Upskilling Suggestions", heading)));
    lines.extend(view.upskilling.iter().map(|item| Line::from(format!("• {item}"))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Optimized Resume", heading)));
    lines.extend(
        view.optimized_resume
            .split('\n')
            .map(|line| Line::from(line.to_string())),
    );
    lines
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab: move | Enter: edit/submit | F5: submit | Ctrl+S: save resume | c: copy resume | ↑↓/PgUp/PgDn: scroll | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::EditingResumePath => "Resume path (Enter to select, Esc to cancel)".to_string(),
        AppMode::EditingDescription => "Editing job description (Enter: new line, Esc: done)".to_string(),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::SaveAs => format!(
            "Save optimized resume as: {} (Enter to save, Esc to cancel)",
            with_cursor(&app.filename_input, app.cursor_position)
        ),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::EditingResumePath => Style::default().fg(Color::Green),
            AppMode::EditingDescription => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::SaveAs => Style::default().fg(Color::Yellow),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"RESUME TAILOR

Pick a resume, paste the job description, then submit. The analysis
service returns an ATS score, the changes it made, upskilling
suggestions and a rewritten resume.

=== FORM ===
Tab / Shift+Tab Move between resume, description and submit
Enter           Edit the focused field, or submit when on the button
r               Edit the resume path
d               Edit the job description
F5 / Ctrl+R     Submit (disabled while a request is running)

=== RESUME PATH ===
Enter           Select the typed file (.pdf or .docx)
Esc             Cancel

=== JOB DESCRIPTION ===
Enter           New line
Tab             Tab character
Esc             Stop editing

=== RESULTS ===
↑↓ or j/k       Scroll one line
Page Up/Down    Scroll ten lines
Home            Back to the top
Ctrl+S          Save the optimized resume to a file
c               Copy the optimized resume to the clipboard

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

q               Quit (Ctrl+C quits from any mode)"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::submission::tests::{sample_result, settle, FakeService};
    use crate::domain::SubmissionError;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(120, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_idle_screen() {
        let app = App::new(Arc::new(FakeService::new(Ok(sample_result()))));
        let screen = draw(&app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Analyze & Optimize"));
        assert!(screen.contains("No file chosen"));
        assert!(screen.contains("Hey there!"));
    }

    #[test]
    fn test_in_flight_label() {
        let (service, release) = FakeService::gated(Ok(sample_result()));
        let mut app = App::new(Arc::new(service));
        app.controller.select_file(crate::application::submission::tests::sample_resume());
        app.controller.set_description("Rust engineer");
        app.submit();

        let screen = draw(&app);
        assert!(screen.contains("Analyzing..."));
        assert!(!screen.contains("Analyze & Optimize"));

        release.send(()).unwrap();
        settle(&mut app.controller);
        assert!(draw(&app).contains("Analyze & Optimize"));
    }

    #[test]
    fn test_error_screen() {
        let mut app = App::new(Arc::new(FakeService::new(Ok(sample_result()))));
        app.controller
            .complete(Err(SubmissionError::Service("File too large".to_string())));

        let screen = draw(&app);
        assert!(screen.contains("An error occurred: File too large"));
        assert!(!screen.contains("Hey there!"));
    }

    #[test]
    fn test_results_screen() {
        let mut app = App::new(Arc::new(FakeService::new(Ok(sample_result()))));
        app.controller.complete(Ok(sample_result()));

        let screen = draw(&app);
        assert!(screen.contains("ATS Score: 82"));
        assert!(screen.contains("• Added keywords"));
        assert!(screen.contains("• Reworded summary"));
        assert!(screen.contains("• Learn SQL"));
        assert!(!screen.contains("- Learn SQL"));
    }

    #[test]
    fn test_scroll_to_cursor() {
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(scroll_to_cursor("short", 5, area), (0, 0));
        assert_eq!(scroll_to_cursor("a\nb\nc\nd\ne", 9, area), (2, 0));
        assert_eq!(scroll_to_cursor("a\nb\nc\nd\ne", 0, area), (0, 0));
        assert_eq!(scroll_to_cursor("0123456789abc", 13, area), (0, 4));
    }

    #[test]
    fn test_long_description_keeps_cursor_line_visible() {
        let mut app = App::new(Arc::new(FakeService::new(Ok(sample_result()))));
        let description: Vec<String> = (0..10).map(|i| format!("requirement {i}")).collect();
        app.controller.set_description(description.join("\n"));
        app.start_editing_description();

        let screen = draw(&app);
        assert!(screen.contains("requirement 9▏"));
        assert!(!screen.contains("requirement 0"));
    }

    #[test]
    fn test_with_cursor_marks_position() {
        assert_eq!(with_cursor("abc", 1), "a▏bc");
        assert_eq!(with_cursor("", 0), "▏");
    }
}
