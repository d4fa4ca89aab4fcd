//! Platform runners. Only the headless runner ships: it composes frames,
//! feeds line commands to the view callbacks, and performs the host's
//! save/restore handshake.

pub mod command;

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use aboutme_core::*;
use aboutme_ui::inspect;
use aboutme_ui::{Locale, TextFieldState};
use anyhow::Context;

pub use command::Command;

#[derive(Clone, Debug)]
pub struct RunnerOptions {
    /// Write the tree outline after every handled command.
    pub dump_each_frame: bool,

    /// Saved-state bundle loaded at start and written on exit, standing in
    /// for the host's instance-state storage.
    pub state_file: Option<PathBuf>,

    /// Locale tag provided to the root as the `Locale` composition local.
    pub locale: String,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            dump_each_frame: true,
            state_file: None,
            locale: Locale::default().0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct HeadlessApp {
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    sched: Scheduler,
    frame: Frame,
    textfield_states: HashMap<ViewId, TextFieldState>,
}

impl HeadlessApp {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self::with_saved_state(root, None)
    }

    /// Composes the first frame, restoring from `saved` when given.
    pub fn with_saved_state(
        root: impl FnMut(&mut Scheduler) -> View + 'static,
        saved: Option<SavedStateBundle>,
    ) -> Self {
        let mut root: Box<dyn FnMut(&mut Scheduler) -> View> = Box::new(root);
        let mut sched = Scheduler::new();
        if let Some(bundle) = saved {
            sched.restore_instance_state(bundle);
        }
        let frame = sched.compose(&mut root);
        Self {
            root,
            sched,
            frame,
            textfield_states: HashMap::new(),
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn recompose(&mut self) {
        let frame = self.sched.compose(&mut self.root);
        // Drop buffers of fields that left the tree; adopt external edits.
        self.textfield_states.retain(|id, _| {
            frame
                .view(*id)
                .is_some_and(|v| matches!(v.kind, ViewKind::TextField { .. }))
        });
        for (id, st) in self.textfield_states.iter_mut() {
            if let Some(ViewKind::TextField { value, .. }) = frame.view(*id).map(|v| &v.kind) {
                st.sync_from(value);
            }
        }
        self.frame = frame;
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.sched
    }

    pub fn save_instance_state(&self) -> SavedStateBundle {
        self.sched.save_instance_state()
    }

    /// Tears the screen down and rebuilds it from `bundle`, as the host does
    /// on a configuration change.
    pub fn recreate(&mut self, bundle: SavedStateBundle) {
        self.textfield_states.clear();
        self.sched.teardown();
        self.sched.restore_instance_state(bundle);
        self.recompose();
    }

    pub fn rotate(&mut self) {
        let bundle = self.save_instance_state();
        log::info!("configuration change: recreating with {} saved entries", bundle.len());
        self.recreate(bundle);
    }

    /// The focused text field, else the first one on screen.
    fn target_field(&self) -> Option<(ViewId, String)> {
        let is_field = |id: &ViewId| {
            matches!(
                self.frame.view(*id).map(|v| &v.kind),
                Some(ViewKind::TextField { .. })
            )
        };
        let id = self
            .sched
            .focused
            .filter(is_field)
            .or_else(|| inspect::find_text_field(&self.frame.root).map(|v| v.id))?;
        match self.frame.view(id).map(|v| &v.kind) {
            Some(ViewKind::TextField { value, .. }) => Some((id, value.clone())),
            _ => None,
        }
    }

    fn edit_field(&mut self, edit: impl FnOnce(&mut TextFieldState)) -> bool {
        let Some((id, value)) = self.target_field() else {
            return false;
        };
        self.sched.focused = Some(id);
        let st = self.textfield_states.entry(id).or_default();
        st.sync_from(&value);
        edit(st);
        let text = st.text.clone();
        let delivered = inspect::input(&self.frame.root, id, &text);
        self.recompose();
        delivered
    }

    pub fn handle(&mut self, cmd: Command, out: &mut dyn Write) -> anyhow::Result<Control> {
        log::debug!("command: {cmd:?}");
        match cmd {
            Command::Type(text) => {
                if !self.edit_field(|st| st.insert_text(&text)) {
                    writeln!(out, "no text field on screen")?;
                }
            }
            Command::Backspace => {
                if !self.edit_field(TextFieldState::delete_backward) {
                    writeln!(out, "no text field on screen")?;
                }
            }
            Command::Clear => {
                if !self.edit_field(TextFieldState::clear) {
                    writeln!(out, "no text field on screen")?;
                }
            }
            Command::Tap(label) => {
                let tapped = inspect::click(&self.frame.root, &label);
                if tapped {
                    self.recompose();
                } else {
                    writeln!(out, "no button labelled {label:?}")?;
                }
            }
            Command::Rotate => self.rotate(),
            Command::Dump => {
                out.write_all(inspect::outline(&self.frame.root).as_bytes())?;
                return Ok(Control::Continue);
            }
            Command::Quit => return Ok(Control::Exit),
        }
        Ok(Control::Continue)
    }
}

pub fn load_state_file(path: &Path) -> anyhow::Result<Option<SavedStateBundle>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading saved state from {}", path.display()))?;
    let bundle = SavedStateBundle::from_json(&text)
        .with_context(|| format!("parsing saved state in {}", path.display()))?;
    Ok(Some(bundle))
}

pub fn write_state_file(path: &Path, bundle: &SavedStateBundle) -> anyhow::Result<()> {
    let text = bundle.to_json()?;
    std::fs::write(path, text)
        .with_context(|| format!("writing saved state to {}", path.display()))
}

/// Runs `root` against line commands from `input` until `quit` or EOF.
pub fn run_headless_app(
    mut root: impl FnMut(&mut Scheduler) -> View + 'static,
    options: RunnerOptions,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let locale = Locale::new(options.locale.clone());
    let root = move |s: &mut Scheduler| with_local(locale.clone(), || root(s));
    let saved = match &options.state_file {
        Some(path) => load_state_file(path)?,
        None => None,
    };
    if let (Some(path), Some(bundle)) = (&options.state_file, &saved) {
        log::info!("restoring {} entries from {}", bundle.len(), path.display());
    }
    let mut app = HeadlessApp::with_saved_state(root, saved);

    out.write_all(inspect::outline(&app.frame().root).as_bytes())?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        let dump = options.dump_each_frame && !matches!(cmd, Command::Dump | Command::Quit);
        if app.handle(cmd, &mut out)? == Control::Exit {
            break;
        }
        if dump {
            out.write_all(inspect::outline(&app.frame().root).as_bytes())?;
        }
    }

    if let Some(path) = &options.state_file {
        write_state_file(path, &app.save_instance_state())?;
        log::info!("saved state to {}", path.display());
    }
    out.flush()?;
    Ok(())
}
