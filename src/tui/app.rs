//! Interactive application state: focus, cursors and key dispatch.

use chrono::Locale;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;
use std::cell::Cell;
use std::rc::Rc;

use super::input::{InputOutcome, TextInput};
use crate::domain::{NoteFields, NoteId, TITLE_MAX_CHARS};
use crate::store::{KeyValueStore, NoteStore, StoreError};
use crate::view::ViewModel;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
    Title,
    Body,
}

/// The terminal application around a [`NoteStore`].
///
/// The store publishes every change; the app only raises a flag from its
/// subscription and re-derives the [`ViewModel`] before the next frame.
pub struct App<S: KeyValueStore> {
    store: NoteStore<S>,
    locale: Locale,
    view: ViewModel,
    stale: Rc<Cell<bool>>,
    focus: Focus,
    search_input: TextInput,
    title_input: TextInput,
    body_input: TextInput,
    editing: Option<NoteId>,
    status: Option<String>,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(mut store: NoteStore<S>, locale: Locale) -> Self {
        let stale = Rc::new(Cell::new(false));
        let flag = Rc::clone(&stale);
        store.subscribe(move |_, _| flag.set(true));

        let view = ViewModel::derive(store.collection(), store.search(), locale);
        let mut app = Self {
            store,
            locale,
            view,
            stale,
            focus: Focus::List,
            search_input: TextInput::single_line(None),
            title_input: TextInput::single_line(Some(TITLE_MAX_CHARS)),
            body_input: TextInput::multi_line(),
            editing: None,
            status: None,
            should_quit: false,
        };
        app.sync_editor();
        app
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn search_input(&self) -> &TextInput {
        &self.search_input
    }

    pub fn title_input(&self) -> &TextInput {
        &self.title_input
    }

    pub fn body_input(&self) -> &TextInput {
        &self.body_input
    }

    /// Re-derives the view if the store published a change since the last
    /// call. Returns true when the view was rebuilt.
    pub fn refresh(&mut self) -> bool {
        if !self.stale.replace(false) {
            return false;
        }
        self.view = ViewModel::derive(self.store.collection(), self.store.search(), self.locale);
        self.sync_editor();
        true
    }

    /// Dispatches one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            self.refresh();
            return;
        }

        match self.focus {
            Focus::List => self.handle_list_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Title => self.handle_title_key(key),
            Focus::Body => self.handle_body_key(key),
        }
        self.refresh();
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.create_note(),
            KeyCode::Char('d') if ctrl => self.delete_active(),
            KeyCode::Char('f') if ctrl => self.focus = Focus::Search,
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            _ => return false,
        }
        true
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Enter | KeyCode::Right if self.view.active.is_some() => {
                self.focus = Focus::Body;
            }
            KeyCode::Delete => self.delete_active(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.focus = Focus::List,
            _ => {
                let term = self.store.search().to_string();
                if let InputOutcome::Changed(next) = self.search_input.handle(&term, key) {
                    self.store.set_search(next);
                }
            }
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        let Some(active) = self.view.active.clone() else {
            self.focus = Focus::List;
            return;
        };
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Body,
            _ => {
                if let InputOutcome::Changed(next) = self.title_input.handle(&active.title, key) {
                    self.apply_update(&active.id, NoteFields::title(next));
                }
            }
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent) {
        let Some(active) = self.view.active.clone() else {
            self.focus = Focus::List;
            return;
        };
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Up if self.body_input.line_col(&active.body).0 == 0 => {
                self.focus = Focus::Title;
            }
            _ => {
                if let InputOutcome::Changed(next) = self.body_input.handle(&active.body, key) {
                    self.apply_update(&active.id, NoteFields::body(next));
                }
            }
        }
    }

    fn create_note(&mut self) {
        let result = self.store.create().map(|_| ());
        self.record(result);
        self.focus = Focus::Title;
    }

    fn delete_active(&mut self) {
        let Some(id) = self.view.active.as_ref().map(|a| a.id.clone()) else {
            return;
        };
        let result = self.store.delete(&id).map(|_| ());
        self.record(result);
        if matches!(self.focus, Focus::Title | Focus::Body) {
            self.focus = Focus::List;
        }
    }

    fn apply_update(&mut self, id: &NoteId, fields: NoteFields) {
        let result = self.store.update(id, fields).map(|_| ());
        self.record(result);
    }

    /// Moves the selection through the displayed (filtered) rows.
    fn move_selection(&mut self, forward: bool) {
        let rows = &self.view.rows;
        if rows.is_empty() {
            return;
        }
        let target = match (self.view.active_row(), forward) {
            (Some(i), true) => (i + 1).min(rows.len() - 1),
            (Some(i), false) => i.saturating_sub(1),
            (None, true) => 0,
            (None, false) => rows.len() - 1,
        };
        let id = rows[target].id.clone();
        self.store.select(Some(id));
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = if self.view.active.is_some() {
            &[Focus::List, Focus::Title, Focus::Body, Focus::Search][..]
        } else {
            &[Focus::List, Focus::Search][..]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    fn record(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!("event=ui_save_failed error={err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Puts the editor cursors at the end of the text when another note
    /// becomes active, and drops editor focus when no note is active.
    fn sync_editor(&mut self) {
        let active_id = self.view.active.as_ref().map(|a| a.id.clone());
        if active_id != self.editing {
            if let Some(active) = &self.view.active {
                self.title_input.move_to_end(&active.title);
                self.body_input.move_to_end(&active.body);
            }
            self.editing = active_id;
        }
        if self.view.active.is_none() && matches!(self.focus, Focus::Title | Focus::Body) {
            self.focus = Focus::List;
        }
    }
}
