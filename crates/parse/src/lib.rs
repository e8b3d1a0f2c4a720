//! Style document parsing.
//!
//! A style document is a tree of mappings, sequences and scalars. The
//! [`StyleParser`] walks it with a stack of handlers, each reading the keys
//! of one concern, and builds the typed model from `ysld-model`.
//!
//! - [`coerce`]: tuples, embedded expressions and colours.
//! - [`engine`]: the handler stack.
//! - [`handlers`]: one handler per concern.
//! - [`hints`]: document-scoped context and the injected collaborators.

pub mod coerce;
pub mod draft;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod hints;
pub mod locator;
pub mod process;
pub mod uom;

mod driver;

pub use coerce::{ColorNames, CssColorNames, Tuple};
pub use draft::Draft;
pub use driver::{ParseOutcome, StyleParser};
pub use engine::{Context, Handler};
pub use error::{ParseError, Warning, WarningKind};
pub use hints::Hints;
pub use locator::{BaseUrlLocator, FileFallbackLocator, ResourceLocator};
pub use process::{InputRole, ProcessCatalog, ProcessDescription, ProcessInput, StaticProcessCatalog};
pub use uom::{OgcUomMapper, UomMapper};
