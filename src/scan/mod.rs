//! Page scanning
//!
//! One scan invocation renders one URL in an isolated browser session,
//! classifies where the marker occurs, extracts line-level evidence, and
//! assembles a [`ScanReport`].

pub mod chromium;
pub mod js_scripts;
pub mod renderer;
pub mod report;
pub mod scanner;

pub use chromium::{ChromiumRenderer, ChromiumSession};
pub use renderer::{
    DocumentSection, Navigation, PageSession, Renderer, ScriptRef, SectionCapture, SessionError,
};
pub use report::{ScanReport, ScanStatus};
pub use scanner::{PageScanner, join_line_numbers};
