// Engine module - pure page lifecycle logic (projection, page state
// machines, deletion flow, session controls).
// This layer sits between persisted records (store) and any renderer; it
// performs no I/O and holds no reference to the backing store.

pub mod deletion;
pub mod page;
pub mod projection;
pub mod session;

pub use deletion::{DeletionFlow, PendingDeletion};
pub use page::{EditMode, Effect, Expansion, Menu, PageControls, PageView};
pub use projection::project;
pub use session::SessionControls;
