//! Problem-session components: the step history state machine, the session
//! that owns one live problem, and the read-only problem repository seam.

pub mod history;
pub mod repository;
pub mod session;

pub use history::TransformationHistory;
pub use repository::{CatalogueError, ProblemRepository, StaticCatalogue};
pub use session::ProblemSession;
