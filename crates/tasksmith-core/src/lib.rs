pub mod document;
pub mod environment;
pub mod error;
pub mod record;
pub mod stage;

pub use document::{TaskDocument, ValidationTask};
pub use environment::Environment;
pub use error::{StructureError, TasksmithError};
pub use record::{TaskRecord, ToolArguments};
pub use stage::Stage;
