//! `app-listing-lib` turns a JSON list of mobile applications into Markdown
//! bullets for README files and listing pages.
//!
//! # Example
//!
//! ```rust
//! use app_listing_lib::loader::parse_records;
//! use app_listing_lib::{render_listing, Formatter};
//!
//! # fn demo() -> Result<(), app_listing_lib::error::ListingError> {
//! let records = parse_records(
//!     r#"[{"id": 7, "name": "Notes", "description": "Quick notes.", "app_store_link": "https://apps.apple.com/app/id7"}]"#,
//! )?;
//!
//! let listing = render_listing(&records, &Formatter::default());
//! assert!(listing.starts_with("- [Notes](https://apps.vyrtsev.com/7) - Quick notes."));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod error;
pub mod format;
pub mod loader;
pub mod record;

pub use crate::format::{describe, Formatter};
pub use crate::record::{AppId, AppRecord};

/// Formats every record in order and joins the blocks with `\n`.
pub fn render_listing(records: &[AppRecord], formatter: &Formatter) -> String {
    records
        .iter()
        .map(|record| formatter.describe(record))
        .collect::<Vec<_>>()
        .join("\n")
}
