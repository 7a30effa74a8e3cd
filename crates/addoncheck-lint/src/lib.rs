//! Addon package rule checks.
//!
//! Validates the artwork bundled with an addon before it is accepted into a
//! repository: declared icon, fanart and screenshots must exist and decode,
//! icon and fanart must match the accepted dimensions, and every other
//! bundled image must at least decode.
//!
//! # Example
//!
//! ```no_run
//! use addoncheck_lint::{check_artwork, FileIndex, Report, Severity};
//! use std::path::Path;
//!
//! let addon = Path::new("plugin.video.example");
//! let xml = std::fs::read_to_string(addon.join("addon.xml")).unwrap();
//! let descriptor = roxmltree::Document::parse(&xml).unwrap();
//! let index = FileIndex::scan(addon).unwrap();
//!
//! let mut report = Report::new();
//! check_artwork(&mut report, addon, &descriptor, &index);
//!
//! for record in report.with_severity(Severity::Problem) {
//!     eprintln!("PROBLEM: {}", record.message);
//! }
//! ```

pub mod artwork;
pub mod decode;
pub mod descriptor;
pub mod file_index;
pub mod policy;
pub mod report;

pub use artwork::{check_artwork, resolve_assets, ArtworkChecker, Assets, ImageKind};
pub use decode::{DecodeError, DecodedImage, ImageDecoder, RasterDecoder};
pub use descriptor::{DescriptorQuery, ImageDescriptor};
pub use file_index::{FileIndex, FileIndexEntry, FileIndexError};
pub use policy::{ArtworkPolicy, ImageSize, PolicyError};
pub use report::{Record, Report, ReportSummary, Severity};
