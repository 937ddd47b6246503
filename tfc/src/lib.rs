//! tfc - Template File Copy
//!
//! Lists the files kept in the user's Templates folder and copies one of
//! them into the working directory under a new name.
//!
//! # Layout
//!
//! ```text
//! ~/Templates/
//! └── {category}/
//!     ├── {template}
//!     └── ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tfc::{CommandProbe, TemplateIndex};
//!
//! let index = TemplateIndex::build("/home/me/Templates", &CommandProbe::default())?;
//! let outcome = index.copy("script.sh", "deploy", std::path::Path::new("."))?;
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod index;
pub mod probe;
pub mod render;
pub mod sanitize;
pub mod version;

pub use config::{Config, ProbeConfig};
pub use dispatch::{Request, execute};
pub use env::Environment;
pub use error::TfcError;
pub use index::{Category, CopyOutcome, Entry, TemplateIndex};
pub use probe::{CommandProbe, FileTypeProbe, NoProbe, ProbeError, UNKNOWN_TYPE};
pub use sanitize::clean_name;
