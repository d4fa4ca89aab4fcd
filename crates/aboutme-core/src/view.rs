use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Main-axis placement of a column's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Cross-axis placement of a column's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    CenterHorizontally,
    End,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Column {
        arrangement: Arrangement,
        alignment: Alignment,
    },
    /// Vertically scrolling column; children are the list items.
    LazyColumn {
        arrangement: Arrangement,
        alignment: Alignment,
    },
    TopAppBar,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        align: TextAlign,
    },
    Button {
        text: String,
        /// Label style; the label is drawn like a `Text` inside the button.
        font_size: f32,
        align: TextAlign,
        on_click: Option<Callback>,
    },
    /// Controlled text field: `value` is owned by the caller and every edit is
    /// reported through `on_change` with the full new text.
    TextField {
        value: String,
        label: String,
        text_color: Color,
        on_change: Option<TextCallback>,
    },
    Image {
        asset: String,
        content_description: Option<String>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Column {
                arrangement,
                alignment,
            } => f
                .debug_struct("Column")
                .field("arrangement", arrangement)
                .field("alignment", alignment)
                .finish(),
            ViewKind::LazyColumn {
                arrangement,
                alignment,
            } => f
                .debug_struct("LazyColumn")
                .field("arrangement", arrangement)
                .field("alignment", alignment)
                .finish(),
            ViewKind::TopAppBar => write!(f, "TopAppBar"),
            ViewKind::Text {
                text,
                color,
                font_size,
                align,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("align", align)
                .finish(),
            ViewKind::Button {
                text,
                font_size,
                align,
                ..
            } => f
                .debug_struct("Button")
                .field("text", text)
                .field("font_size", font_size)
                .field("align", align)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::TextField {
                value,
                label,
                text_color,
                ..
            } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("label", label)
                .field("text_color", text_color)
                .finish(),
            ViewKind::Image {
                asset,
                content_description,
            } => f
                .debug_struct("Image")
                .field("asset", asset)
                .field("content_description", content_description)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    /// Zero until the scheduler assigns ids for the frame.
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, pre-order walk over this view and its descendants.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a View)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    pub fn find(&self, pred: impl Fn(&View) -> bool) -> Option<&View> {
        let mut found = None;
        self.walk(&mut |v| {
            if found.is_none() && pred(v) {
                found = Some(v);
            }
        });
        found
    }

    pub fn find_by_id(&self, id: ViewId) -> Option<&View> {
        self.find(|v| v.id == id)
    }
}
