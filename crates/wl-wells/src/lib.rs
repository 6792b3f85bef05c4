//! wl-wells: well data layer for welllog.
//!
//! Provides:
//! - LAS 1.2/2.0 text parsing (`las`)
//! - File and folder loading into immutable well records (`loader`)
//! - The in-memory well registry (`registry`)
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use wl_wells::{LasFile, MissingValuePolicy, WellRegistry, record_from_las};
//!
//! let text = "~V\nVERS. 2.0 :\nWRAP. NO :\n~W\nWELL. A-1 :\nNULL. -999.25 :\n\
//!             ~C\nDEPT.M :\nGR.API :\n~A\n100.0 45.0\n100.5 47.5\n";
//! let las = LasFile::parse(text).unwrap();
//! let record = record_from_las(las, Path::new("a1.las"), MissingValuePolicy::DropRow).unwrap();
//!
//! let mut registry = WellRegistry::new();
//! registry.register(record);
//! assert_eq!(registry.all_names(), vec!["A-1"]);
//! ```

pub mod las;
pub mod loader;
pub mod record;
pub mod registry;

pub use las::{HeaderItem, LasError, LasFile};
pub use loader::{
    DEPTH_ALIASES, LoadError, LoadResult, MissingValuePolicy, find_las_files, load,
    load_with, record_from_las,
};
pub use record::{Curve, CurveInfo, RecordError, WellHeader, WellRecord};
pub use registry::{RegisterOutcome, RegistryError, WellRegistry};
