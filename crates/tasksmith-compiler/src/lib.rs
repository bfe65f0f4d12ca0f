pub mod assembler;
pub mod config;
pub mod markdown;
pub mod pipeline;
pub mod progress;
pub mod section_parser;
pub mod step_parser;
pub mod structure;

pub use pipeline::{check_file, compile_file, compile_markdown, render_json, write_records};
pub use progress::{ProgressSink, SilentProgress, TracingProgress};
