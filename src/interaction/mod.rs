//! Interaction State Machine
//!
//! Event handling for the two interactive widgets:
//!
//! - **menu**: mobile navigation toggle
//! - **dropdown**: indicator selection with chart and analysis recompute
//! - **session**: per page-load state behind the callback endpoints

pub mod dropdown;
pub mod menu;
pub mod session;

pub use dropdown::{DropdownOutput, DropdownPanel, IndicatorDropdown};
pub use menu::{Click, MenuState, MenuToggle};
pub use session::{Session, SessionConfig, SessionId, SessionStore};
