#[cfg(test)]
mod tests {
    use crate::COMPOSER;
    use crate::Color;
    use crate::remember_with_key;
    use crate::runtime::*;
    use crate::saved_state::SavedStateBundle;
    use crate::semantics::{Role, Semantics};
    use crate::signal::*;
    use crate::view::{TextAlign, View, ViewKind};
    use serde_json::json;

    fn reset_composer() {
        Scheduler::new().teardown();
    }

    fn leaf() -> View {
        View::new(0, ViewKind::Box)
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
        assert_eq!(sig.with(|v| *v * 2), 202);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);
    }

    #[test]
    fn test_key_based_remember() {
        reset_composer();

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Same instance: the key already exists.
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42);
    }

    #[test]
    fn test_remember_replaces_on_type_change() {
        reset_composer();

        let _ = remember_with_key("typed", || 1u8);
        let s = remember_with_key("typed", || "text");
        assert_eq!(*s, "text");
    }

    #[test]
    fn test_slots_leave_composition_when_not_remembered() {
        reset_composer();
        let mut sched = Scheduler::new();

        let show = signal(true);
        let app = {
            let show = show.clone();
            move |_: &mut Scheduler| {
                if show.get() {
                    let _ = remember_saveable("conditional", || 7u32);
                }
                leaf()
            }
        };

        sched.compose(app.clone());
        assert_eq!(sched.save_instance_state().len(), 1);

        show.set(false);
        sched.compose(app);
        assert!(sched.save_instance_state().is_empty());
        COMPOSER.with(|c| assert!(c.borrow().keyed_slots.is_empty()));
    }

    #[test]
    fn test_saveable_survives_teardown() {
        reset_composer();
        let mut sched = Scheduler::new();

        let app = |_: &mut Scheduler| {
            let name = remember_saveable("name", String::new);
            if name.with(String::is_empty) {
                name.set("Robin".to_string());
            }
            leaf()
        };
        sched.compose(app);

        let bundle = sched.save_instance_state();
        assert_eq!(bundle.get("name"), Some(&json!("Robin")));

        sched.teardown();
        sched.restore_instance_state(bundle);
        let restored = std::rc::Rc::new(std::cell::RefCell::new(String::new()));
        sched.compose({
            let restored = restored.clone();
            move |_: &mut Scheduler| {
                *restored.borrow_mut() = remember_saveable("name", String::new).get();
                leaf()
            }
        });
        assert_eq!(*restored.borrow(), "Robin");
    }

    #[test]
    fn test_undecodable_saved_value_falls_back_to_init() {
        reset_composer();
        let mut sched = Scheduler::new();

        let mut bundle = SavedStateBundle::new();
        bundle.insert("count", json!({"not": "a number"}));
        sched.restore_instance_state(bundle);

        let got = std::rc::Rc::new(std::cell::Cell::new(0u32));
        sched.compose({
            let got = got.clone();
            move |_: &mut Scheduler| {
                got.set(remember_saveable("count", || 5u32).get());
                leaf()
            }
        });
        assert_eq!(got.get(), 5);
    }

    #[test]
    fn test_compose_assigns_ids_and_semantics() {
        reset_composer();
        let mut sched = Scheduler::new();

        let frame = sched.compose(|_| {
            View::new(0, ViewKind::Box).with_children(vec![
                View::new(
                    0,
                    ViewKind::Button {
                        text: "Done".into(),
                        font_size: 14.0,
                        align: TextAlign::Center,
                        on_click: None,
                    },
                )
                .semantics(Semantics::new(Role::Button).label("Done")),
                leaf(),
            ])
        });

        assert_eq!(frame.root.id, 1);
        assert_eq!(frame.root.children[0].id, 2);
        assert_eq!(frame.root.children[1].id, 3);
        assert_eq!(frame.focus_chain, vec![2]);
        assert_eq!(frame.semantics_nodes.len(), 1);
        assert_eq!(frame.semantics_nodes[0].label.as_deref(), Some("Done"));
        assert_eq!(sched.frame_count(), 1);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#12"), Color::BLACK);
        assert_eq!(Color::GREEN.to_hex(), "#00FF00");
    }
}
