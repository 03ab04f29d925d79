use crate::application::{App, AppMode, TextEdit};
use crossterm::event::{KeyCode, KeyModifiers};

const PAGE: u16 = 10;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::EditingResumePath => Self::handle_resume_path_mode(app, key),
            AppMode::EditingDescription => Self::handle_description_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::SaveAs => Self::handle_save_as_mode(app, key),
        }
    }

    /// Inserts pasted text into the input being edited. Pasted text is
    /// never interpreted as commands.
    pub fn handle_paste(app: &mut App, text: &str) {
        app.paste(text);
    }

    /// Whether this key press should end the program.
    pub fn is_quit(app: &App, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('q') => app.mode == AppMode::Normal,
            _ => false,
        }
    }

    fn text_edit(key: KeyCode) -> Option<TextEdit> {
        match key {
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Left => Some(TextEdit::Left),
            KeyCode::Right => Some(TextEdit::Right),
            KeyCode::Home => Some(TextEdit::Home),
            KeyCode::End => Some(TextEdit::End),
            KeyCode::Char(c) => Some(TextEdit::Insert(c)),
            _ => None,
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    app.start_save_as();
                    return;
                }
                KeyCode::Char('r') => {
                    app.submit();
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Tab => app.focus_next(),
            KeyCode::BackTab => app.focus_previous(),
            KeyCode::Enter => app.activate_focus(),
            KeyCode::F(5) => app.submit(),
            KeyCode::Char('r') => app.start_resume_path(),
            KeyCode::Char('d') => app.start_editing_description(),
            KeyCode::Char('c') => app.copy_optimized_resume(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(1),
            KeyCode::PageUp => app.scroll_results_up(PAGE),
            KeyCode::PageDown => app.scroll_results_down(PAGE),
            KeyCode::Home => app.results_scroll = 0,
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            KeyCode::Esc => app.status_message = None,
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_resume_path_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.confirm_resume_path(),
            KeyCode::Esc => app.cancel_resume_path(),
            _ => {
                if let Some(edit) = Self::text_edit(key) {
                    app.apply_edit(edit);
                }
            }
        }
    }

    fn handle_description_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => app.finish_editing_description(),
            KeyCode::Tab => app.apply_edit(TextEdit::Insert('\t')),
            KeyCode::Enter => app.apply_edit(TextEdit::Insert('\n')),
            _ => {
                if let Some(edit) = Self::text_edit(key) {
                    app.apply_edit(edit);
                }
            }
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_save_as_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.save_optimized_resume(),
            KeyCode::Esc => app.cancel_save_as(),
            _ => {
                if let Some(edit) = Self::text_edit(key) {
                    app.apply_edit(edit);
                }
            }
        }
    }
}
