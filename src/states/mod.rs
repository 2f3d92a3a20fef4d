//! State Layer
//!
//! Application state owned by the UI thread. Views call state methods, state
//! methods call services, results land back in state.
//!
//! ```text
//! View Action → State Method → Service Call → State Update → View Refresh
//! ```

mod document;
mod gallery;
mod language;
mod load_state;
mod session;
mod settings;
mod stories;

pub use document::*;
pub use gallery::*;
pub use language::*;
pub use load_state::*;
pub use session::*;
pub use settings::*;
pub use stories::*;
