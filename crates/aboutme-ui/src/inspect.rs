//! Tree inspection: a text outline of a composed `View` and lookups used by
//! the headless runner and by tests to drive a screen without pixels.

use std::fmt::Write;

use aboutme_core::*;

/// One line per view, children indented by two spaces.
pub fn outline(root: &View) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, v: &View, depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = match &v.kind {
        ViewKind::Surface => writeln!(out, "{pad}Surface"),
        ViewKind::Box => writeln!(out, "{pad}Box"),
        ViewKind::Column { .. } => writeln!(out, "{pad}Column"),
        ViewKind::LazyColumn { .. } => writeln!(out, "{pad}LazyColumn"),
        ViewKind::TopAppBar => writeln!(out, "{pad}TopAppBar"),
        ViewKind::Text { text, .. } => writeln!(out, "{pad}Text {text:?}"),
        ViewKind::Button { text, .. } => writeln!(out, "{pad}Button {text:?}"),
        ViewKind::TextField { value, label, .. } => {
            writeln!(out, "{pad}TextField {label:?} = {value:?}")
        }
        ViewKind::Image {
            asset,
            content_description,
        } => match content_description {
            Some(d) => writeln!(out, "{pad}Image {asset} {d:?}"),
            None => writeln!(out, "{pad}Image {asset}"),
        },
    };
    for child in &v.children {
        write_node(out, child, depth + 1);
    }
}

/// Text of every `Text` view, in tree order.
pub fn texts(root: &View) -> Vec<&str> {
    let mut out = Vec::new();
    root.walk(&mut |v| {
        if let ViewKind::Text { text, .. } = &v.kind {
            out.push(text.as_str());
        }
    });
    out
}

pub fn find_text<'a>(root: &'a View, text: &str) -> Option<&'a View> {
    root.find(|v| matches!(&v.kind, ViewKind::Text { text: t, .. } if t == text))
}

pub fn find_button<'a>(root: &'a View, label: &str) -> Option<&'a View> {
    root.find(|v| matches!(&v.kind, ViewKind::Button { text, .. } if text == label))
}

/// The first text field in tree order.
pub fn find_text_field(root: &View) -> Option<&View> {
    root.find(|v| matches!(v.kind, ViewKind::TextField { .. }))
}

/// Invokes the click handler of the button labelled `label`. Returns whether
/// such a button with a handler exists.
pub fn click(root: &View, label: &str) -> bool {
    match find_button(root, label).map(|v| &v.kind) {
        Some(ViewKind::Button {
            on_click: Some(cb), ..
        }) => {
            cb();
            true
        }
        _ => false,
    }
}

/// Reports `text` as the new value of the text field with id `id`.
pub fn input(root: &View, id: ViewId, text: &str) -> bool {
    match root.find_by_id(id).map(|v| &v.kind) {
        Some(ViewKind::TextField {
            on_change: Some(cb), ..
        }) => {
            cb(text.to_string());
            true
        }
        _ => false,
    }
}
