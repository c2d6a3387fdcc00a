//! Application state management.
//!
//! The architecture separates concerns into:
//!
//! - **AppState**: Root state owning the store and all substates
//! - **NavigationState**: The selection/view state machine
//! - **UiState**: Presentation state (search query, cached panel document)

mod app_state;
mod navigation;
mod ui_state;

pub use app_state::AppState;
pub use navigation::{Direction, NavigationState};
pub use ui_state::{PanelDocument, UiState, category_matches};

// Re-exported so the GUI has one import path for view vocabulary.
pub use prep_content::ContentView;
