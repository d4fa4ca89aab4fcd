use aboutme_core::*;

use crate::{Column, ViewExt};

/// Height of a small top app bar, in dp.
pub const TOP_APP_BAR_HEIGHT: f32 = 64.0;

pub fn TopAppBar(title: View, modifier: Modifier) -> View {
    View::new(0, ViewKind::TopAppBar)
        .modifier(modifier.fill_max_width())
        .semantics(Semantics::new(Role::Heading))
        .with_children(vec![title])
}

/// Screen scaffold: the top bar above the content. `content` receives the
/// insets it should respect so nothing is drawn under the bar.
pub fn Scaffold(top_bar: View, content: impl FnOnce(PaddingValues) -> View) -> View {
    let inner_padding = PaddingValues {
        top: TOP_APP_BAR_HEIGHT,
        ..PaddingValues::default()
    };
    Column(Modifier::new().fill_max_size()).child((top_bar, content(inner_padding)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Box, Text};

    #[test]
    fn content_sees_the_bar_inset() {
        let mut seen = None;
        let v = Scaffold(TopAppBar(Text("t"), Modifier::new()), |pv| {
            seen = Some(pv);
            Box(Modifier::new())
        });
        assert_eq!(seen.unwrap().top, TOP_APP_BAR_HEIGHT);
        assert!(matches!(v.children[0].kind, ViewKind::TopAppBar));
        assert_eq!(v.children.len(), 2);
    }
}
