//! Turn a resolver's field-selection tree into a nested `select` projection
//! so that only the requested columns and relations are fetched.
//!
//! ```ignore
//! let select = PrismaSelect::new(&info, Options::new().schema(schema.clone()));
//! let projection = select.value();
//! ```

mod info;
pub use info::{named_type, ResolveInfo, ResolvedField};

pub mod merge;
pub use merge::merge_deep;

mod options;
pub use options::{DefaultFields, ExcludeFields, FieldSpec, Options};

mod select;
pub use select::{PrismaSelect, Selection};

pub use prisma_select_core::{schema, Error, Result, Schema};
