use aboutme_core::*;

/// Shows `content` only while `visible`. Enter/exit transitions are left to
/// the renderer; the tree simply gains or loses the child.
pub fn AnimatedVisibility(visible: bool, content: impl FnOnce() -> View) -> View {
    let v = View::new(0, ViewKind::Box);
    if visible { v.with_children(vec![content()]) } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_content_is_not_built() {
        let v = AnimatedVisibility(false, || panic!("must not compose"));
        assert!(v.children.is_empty());
    }

    #[test]
    fn visible_content_is_the_only_child() {
        let v = AnimatedVisibility(true, || View::new(0, ViewKind::TopAppBar));
        assert_eq!(v.children.len(), 1);
    }
}
