use aboutme_core::*;

/// Collects the items of a `LazyColumn`.
#[derive(Default)]
pub struct LazyListScope {
    items: Vec<View>,
}

impl LazyListScope {
    pub fn item(&mut self, content: impl FnOnce() -> View) {
        self.items.push(content());
    }

    pub fn items<T>(&mut self, data: impl IntoIterator<Item = T>, content: impl Fn(T) -> View) {
        self.items.extend(data.into_iter().map(content));
    }
}

/// Vertically scrolling list. The headless runner has no viewport, so every
/// item is composed.
pub fn LazyColumn(modifier: Modifier, content: impl FnOnce(&mut LazyListScope)) -> View {
    let mut scope = LazyListScope::default();
    content(&mut scope);
    View::new(
        0,
        ViewKind::LazyColumn {
            arrangement: Arrangement::Top,
            alignment: Alignment::Start,
        },
    )
    .modifier(modifier)
    .with_children(scope.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[test]
    fn items_keep_declaration_order() {
        let list = LazyColumn(Modifier::new(), |s| {
            s.item(|| Text("header"));
            s.items(["a", "b"], |t| Text(t));
        });
        let texts: Vec<_> = list
            .children
            .iter()
            .filter_map(|v| match &v.kind {
                ViewKind::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["header", "a", "b"]);
    }
}
