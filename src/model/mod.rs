//! Input data model for document assembly.
//!
//! This module contains:
//! - Descriptive metadata with ordered fields
//! - Table of contents tree
//! - Physical page sequence and thumbnail sizes
//! - Paginated listings

mod metadata;
mod page;
mod pagination;
mod record;
mod toc;

pub use metadata::{MetaValue, Metadata};
pub use page::{PhysicalMap, PhysicalPage, ThumbnailMap};
pub use pagination::Page;
pub use record::Record;
pub use toc::TocEntry;
