use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::saved_state::{JsonSaver, SavedStateBundle, SavedStateRegistry, Saver};
use crate::semantics::Role;
use crate::{Signal, View, ViewId, ViewKind, signal};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

#[derive(Default)]
pub struct Composer {
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    /// Keys read during the current pass; the rest leave the composition.
    touched: HashSet<String>,
    composing: bool,
    pub saved: SavedStateRegistry,
}

fn saveable_slot_key(key: &str) -> String {
    format!("saveable:{key}")
}

/// Marks one composition pass. Slots not remembered during the pass are
/// dropped when the guard ends, together with their saved-state providers.
pub struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.touched.clear();
            c.composing = true;
        });
        ComposeGuard { _private: () }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        // Dropped values may own signals or views; release them outside the borrow.
        let _left = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.composing = false;
            let touched = std::mem::take(&mut c.touched);
            let stale: Vec<String> = c
                .keyed_slots
                .keys()
                .filter(|k| !touched.contains(*k))
                .cloned()
                .collect();
            let mut left = Vec::with_capacity(stale.len());
            for k in &stale {
                log::debug!("slot '{}' left the composition", k);
                if let Some(v) = c.keyed_slots.remove(k) {
                    left.push(v);
                }
            }
            c.saved
                .retain(|key| touched.contains(&saveable_slot_key(key)));
            left
        });
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        if c.composing {
            c.touched.insert(key.clone());
        }
        match c.keyed_slots.get(&key) {
            Some(existing) => match existing.downcast_ref::<Rc<T>>() {
                Some(rc) => Some(rc.clone()),
                None => {
                    log::warn!(
                        "remember_with_key: key '{}' reused with a different type; replacing.",
                        key
                    );
                    None
                }
            },
            None => None,
        }
    });
    if let Some(rc) = existing {
        return rc;
    }

    // `init` may itself remember or register saved state.
    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone()));
    });
    rc
}

/// Remembered signal that survives `save_instance_state` / `restore_instance_state`.
///
/// On first composition the value is taken from the pending restored bundle
/// when one carries `key`; a value that no longer decodes is discarded in
/// favour of `init`.
pub fn remember_saveable<T>(key: impl Into<String>, init: impl FnOnce() -> T) -> Signal<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + 'static,
{
    remember_saveable_with(key, JsonSaver, init)
}

pub fn remember_saveable_with<T: 'static, S: Saver<T>>(
    key: impl Into<String>,
    saver: S,
    init: impl FnOnce() -> T,
) -> Signal<T> {
    let key = key.into();
    let slot = remember_with_key(saveable_slot_key(&key), || {
        let restored = COMPOSER.with(|c| c.borrow_mut().saved.consume_restored(&key));
        let value = match restored {
            Some(saved) => match saver.restore(&saved) {
                Ok(v) => {
                    log::debug!("restored saved state '{}'", key);
                    v
                }
                Err(e) => {
                    log::warn!("discarding saved state '{}': {}", key, e);
                    init()
                }
            },
            None => init(),
        };
        let sig = signal(value);
        let provider_sig = sig.clone();
        COMPOSER.with(|c| {
            c.borrow_mut()
                .saved
                .register(key.clone(), move || provider_sig.with(|v| saver.save(v)));
        });
        sig
    });
    (*slot).clone()
}

/// Frame — output of composition for a tick: the id-stamped tree plus semantics.
pub struct Frame {
    pub root: View,
    pub semantics_nodes: Vec<SemNode>,
    /// Focusable views in tree order.
    pub focus_chain: Vec<ViewId>,
}

impl Frame {
    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.root.find_by_id(id)
    }
}

/// Flattened semantics for one view.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    /// Same as the `ViewId` of the view it describes.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub focused: bool,
    pub enabled: bool,
}

pub struct Scheduler {
    pub focused: Option<ViewId>,
    pub size: (u32, u32),
    frames: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            focused: None,
            size: (412, 915),
            frames: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn compose<F>(&mut self, mut build_root: F) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let mut root = {
            let _guard = ComposeGuard::begin();
            build_root(self)
        };
        self.frames += 1;

        let mut next = 1;
        assign_ids(&mut root, &mut next);

        if let Some(id) = self.focused
            && root.find_by_id(id).is_none_or(|v| !is_focusable(v))
        {
            self.focused = None;
        }

        let mut semantics_nodes = Vec::new();
        let mut focus_chain = Vec::new();
        root.walk(&mut |v| {
            if let Some(s) = &v.semantics {
                semantics_nodes.push(SemNode {
                    id: v.id,
                    role: s.role,
                    label: s.label.clone(),
                    focused: self.focused == Some(v.id),
                    enabled: s.enabled,
                });
            }
            if is_focusable(v) {
                focus_chain.push(v.id);
            }
        });

        log::debug!(
            "frame {}: {} views, {} semantic nodes",
            self.frames,
            next - 1,
            semantics_nodes.len()
        );

        Frame {
            root,
            semantics_nodes,
            focus_chain,
        }
    }

    /// Snapshot of every saveable value currently in the composition.
    pub fn save_instance_state(&self) -> SavedStateBundle {
        let bundle = COMPOSER.with(|c| c.borrow().saved.save());
        log::debug!("saved {} state entries", bundle.len());
        bundle
    }

    /// Drops all remembered state, as when the host destroys the screen.
    pub fn teardown(&mut self) {
        let (slots, registry) = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.touched.clear();
            (
                std::mem::take(&mut c.keyed_slots),
                std::mem::take(&mut c.saved),
            )
        });
        log::debug!("teardown: released {} slots", slots.len());
        drop(slots);
        drop(registry);
        self.focused = None;
    }

    /// Makes `bundle` available to `remember_saveable` on the next composition.
    pub fn restore_instance_state(&mut self, bundle: SavedStateBundle) {
        log::debug!("restoring {} state entries", bundle.len());
        COMPOSER.with(|c| c.borrow_mut().saved.set_restored(bundle));
    }
}

fn is_focusable(v: &View) -> bool {
    matches!(v.kind, ViewKind::TextField { .. } | ViewKind::Button { .. })
}

fn assign_ids(view: &mut View, next: &mut ViewId) {
    view.id = *next;
    *next += 1;
    for child in &mut view.children {
        assign_ids(child, next);
    }
}
