//! # State, views and saved state
//!
//! The core crate holds everything the screen needs apart from concrete
//! widgets:
//!
//! - `View` / `ViewKind` / `Modifier` — the declarative tree a composable
//!   function returns.
//! - `Signal<T>` — cloneable observable cell.
//! - `remember_with_key` / `remember_saveable` — state bound to the
//!   composition, the latter also surviving save/restore.
//! - `Scheduler` — runs a composition pass and produces a `Frame`.
//!
//! ## Remembered state
//!
//! ```rust
//! use aboutme_core::*;
//!
//! let mut sched = Scheduler::new();
//! let app = |_: &mut Scheduler| {
//!     let clicks = remember_saveable("clicks", || 0u32);
//!     clicks.update(|c| *c += 1);
//!     View::new(0, ViewKind::Box)
//! };
//!
//! sched.compose(app);
//! sched.compose(app);
//!
//! // Recreate the screen from a saved bundle.
//! let bundle = sched.save_instance_state();
//! sched.teardown();
//! sched.restore_instance_state(bundle);
//! sched.compose(app);
//! assert_eq!(sched.save_instance_state().decode::<u32>("clicks").unwrap().unwrap(), 3);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod saved_state;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use runtime::*;
pub use saved_state::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;
