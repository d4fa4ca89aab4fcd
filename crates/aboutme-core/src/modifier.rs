use crate::{Color, PaddingValues, Size};

/// Layout and decoration applied to a single `View`.
///
/// Builders are additive: `padding_top` after `padding` only replaces the top
/// inset, mirroring how chained modifiers compose.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub size: Option<Size>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding_values: Option<PaddingValues>,
    pub background: Option<Color>,
    pub clip_rounded: Option<f32>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size { width, height });
        self
    }

    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }

    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding_values = Some(PaddingValues::all(v));
        self
    }

    pub fn padding_values(mut self, pv: PaddingValues) -> Self {
        self.padding_values = Some(pv);
        self
    }

    pub fn padding_top(mut self, v: f32) -> Self {
        self.padding_values.get_or_insert_with(PaddingValues::default).top = v;
        self
    }

    pub fn padding_bottom(mut self, v: f32) -> Self {
        self.padding_values.get_or_insert_with(PaddingValues::default).bottom = v;
        self
    }

    pub fn padding_horizontal(mut self, v: f32) -> Self {
        let pv = self.padding_values.get_or_insert_with(PaddingValues::default);
        pv.left = v;
        pv.right = v;
        self
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }

    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_top_keeps_other_edges() {
        let m = Modifier::new().padding_horizontal(8.0).padding_top(4.0);
        let pv = m.padding_values.unwrap();
        assert_eq!(pv.left, 8.0);
        assert_eq!(pv.right, 8.0);
        assert_eq!(pv.top, 4.0);
        assert_eq!(pv.bottom, 0.0);
    }

    #[test]
    fn fill_max_size_sets_both_axes() {
        let m = Modifier::new().fill_max_size();
        assert!(m.fill_max_w && m.fill_max_h);
    }
}
