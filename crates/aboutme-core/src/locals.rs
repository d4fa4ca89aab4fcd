//! # Theming and locals
//!
//! Composition locals are thread‑local values visible to every view built
//! inside a `with_*` call:
//!
//! - `Theme` — colors for surfaces, text and controls.
//! - `Typography` — font sizes for the text styles the widgets use.
//! - `Shapes` — corner radii.
//!
//! ```rust
//! use aboutme_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! ```
//!
//! Other crates add their own locals through `with_local` / `local`.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub primary: Color,
    pub on_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#FFFBFE"),
            surface: Color::from_hex("#FFFBFE"),
            on_surface: Color::from_hex("#1C1B1F"),
            primary: Color::from_hex("#6650A4"),
            on_primary: Color::WHITE,
        }
    }
}

/// Font sizes in sp for the text styles in use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub headline_large: f32,
    pub headline_medium: f32,
    pub body_medium: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline_large: 32.0,
            headline_medium: 28.0,
            body_medium: 14.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shapes {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            small: 8.0,
            medium: 12.0,
            large: 16.0,
        }
    }
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Pops the frame even if `f` unwinds.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

/// Provides `value` to everything composed inside `f`.
pub fn with_local<T: 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        LOCALS_STACK.with(|st| {
            if let Some(top) = st.borrow_mut().last_mut() {
                top.insert(TypeId::of::<T>(), Box::new(value));
            }
        });
        f()
    })
}

/// The innermost provided `T`, or `T::default()` outside any provider.
pub fn local<T: Clone + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return t.clone();
            }
        }
        T::default()
    })
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_local(theme, f)
}

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    with_local(typography, f)
}

pub fn typography() -> Typography {
    local::<Typography>()
}

pub fn with_shapes<R>(shapes: Shapes, f: impl FnOnce() -> R) -> R {
    with_local(shapes, f)
}

pub fn shapes() -> Shapes {
    local::<Shapes>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_providers_shadow_and_unwind() {
        let big = Typography {
            headline_large: 40.0,
            ..Typography::default()
        };
        assert_eq!(typography().headline_large, 32.0);
        with_typography(big, || {
            assert_eq!(typography().headline_large, 40.0);
            with_typography(Typography::default(), || {
                assert_eq!(typography().headline_large, 32.0);
            });
            assert_eq!(typography().headline_large, 40.0);
        });
        assert_eq!(typography().headline_large, 32.0);
    }

    #[test]
    fn unrelated_locals_do_not_interfere() {
        let dark = Theme {
            background: Color::BLACK,
            ..Theme::default()
        };
        with_theme(dark, || {
            with_shapes(Shapes::default(), || {
                assert_eq!(theme().background, Color::BLACK);
            });
        });
    }
}
