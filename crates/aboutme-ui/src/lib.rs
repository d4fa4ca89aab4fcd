#![allow(non_snake_case)]
//! Widgets, resources and tree inspection.

pub mod anim;
pub mod inspect;
pub mod lazy;
pub mod material3;
pub mod resources;
pub mod textfield;

use std::rc::Rc;

use aboutme_core::*;

pub use anim::AnimatedVisibility;
pub use lazy::LazyColumn;
pub use material3::{Scaffold, TopAppBar};
pub use resources::{
    DrawableRes, Locale, Resources, StringRes, current_locale, painter_resource, string_resource,
    with_resources,
};
pub use textfield::{TextField, TextFieldState};

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Column {
            arrangement: Arrangement::Top,
            alignment: Alignment::Start,
        },
    )
    .modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: typography().body_medium,
            align: TextAlign::Start,
        },
    )
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            font_size: typography().body_medium,
            align: TextAlign::Center,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Image from a resolved asset name (see `painter_resource`).
pub fn Image(asset: impl Into<String>, content_description: Option<&str>, modifier: Modifier) -> View {
    let mut sem = Semantics::new(Role::Image);
    sem.label = content_description.map(str::to_string);
    View::new(
        0,
        ViewKind::Image {
            asset: asset.into(),
            content_description: content_description.map(str::to_string),
        },
    )
    .modifier(modifier)
    .semantics(sem)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

/// `None` contributes no child, for views shown conditionally.
impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A);
impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Column placement, mirroring `verticalArrangement` / `horizontalAlignment`.
pub trait ColumnExt {
    fn arrangement(self, a: Arrangement) -> View;
    fn alignment(self, a: Alignment) -> View;
}

impl ColumnExt for View {
    fn arrangement(mut self, a: Arrangement) -> View {
        if let ViewKind::Column { arrangement, .. } | ViewKind::LazyColumn { arrangement, .. } =
            &mut self.kind
        {
            *arrangement = a;
        }
        self
    }
    fn alignment(mut self, a: Alignment) -> View {
        if let ViewKind::Column { alignment, .. } | ViewKind::LazyColumn { alignment, .. } =
            &mut self.kind
        {
            *alignment = a;
        }
        self
    }
}

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, sp: f32) -> View;
    fn align(self, a: TextAlign) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        match &mut self.kind {
            ViewKind::Text { color, .. } => *color = c,
            ViewKind::TextField { text_color, .. } => *text_color = c,
            _ => {}
        }
        self
    }
    fn size(mut self, sp: f32) -> View {
        match &mut self.kind {
            ViewKind::Text { font_size, .. } | ViewKind::Button { font_size, .. } => {
                *font_size = sp
            }
            _ => {}
        }
        self
    }
    fn align(mut self, a: TextAlign) -> View {
        match &mut self.kind {
            ViewKind::Text { align, .. } | ViewKind::Button { align, .. } => *align = a,
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_children_are_skipped() {
        let v = Column(Modifier::new()).child((Text("a"), None::<View>, Some(Text("b"))));
        assert_eq!(v.children.len(), 2);
    }

    #[test]
    fn text_style_reads_typography() {
        let big = Typography {
            body_medium: 20.0,
            ..Typography::default()
        };
        let v = with_typography(big, || Text("hi"));
        match v.kind {
            ViewKind::Text { font_size, .. } => assert_eq!(font_size, 20.0),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn text_style_ignores_other_kinds() {
        let v = Box(Modifier::new()).size(40.0).align(TextAlign::Center);
        assert!(matches!(v.kind, ViewKind::Box));
    }

    #[test]
    fn button_is_labelled_for_semantics() {
        let b = Button("Done", || {});
        let sem = b.semantics.unwrap();
        assert_eq!(sem.role, Role::Button);
        assert_eq!(sem.label.as_deref(), Some("Done"));
    }

    #[test]
    fn button_label_is_centered_body_text() {
        let small = Typography {
            body_medium: 12.0,
            ..Typography::default()
        };
        let b = with_typography(small, || Button("Done", || {})).size(18.0);
        match b.kind {
            ViewKind::Button {
                font_size, align, ..
            } => {
                assert_eq!(font_size, 18.0);
                assert_eq!(align, TextAlign::Center);
            }
            _ => panic!("expected button"),
        }
        let b = with_typography(small, || Button("Done", || {}));
        assert!(matches!(b.kind, ViewKind::Button { font_size, .. } if font_size == 12.0));
    }
}
