// Resume data model, seed value, pure operations and the editor reducer.
// All mutations flow through `EditorState::apply`; nothing here touches I/O.

pub mod editor;
pub mod handlers;
pub mod model;
pub mod ops;
pub mod seed;

pub use editor::{EditorAction, EditorState};
pub use model::{EntryId, Resume, SectionKind};
