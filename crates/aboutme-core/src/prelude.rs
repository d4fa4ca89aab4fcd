pub use crate::color::Color;
pub use crate::error::{Error, Result};
pub use crate::geometry::{PaddingValues, Size};
pub use crate::locals::{
    Shapes, Theme, Typography, shapes, theme, typography, with_shapes, with_theme,
    with_typography,
};
pub use crate::modifier::Modifier;
pub use crate::runtime::{Frame, Scheduler, remember_saveable, remember_with_key};
pub use crate::saved_state::SavedStateBundle;
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Alignment, Arrangement, TextAlign, View, ViewId, ViewKind};
