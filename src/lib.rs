//! # Location Card
//!
//! Format a single GPS/location fix into a labeled card: two parallel
//! ordered columns of label/value rows, ready to hand to whatever surface
//! draws them.
//!
//! ## Key Features
//!
//! - **Fix model**: an immutable [`fix::LocationFix`] snapshot with
//!   optional accuracy fields, constructed through a builder.
//! - **Card formatting**: [`card::format_fix`] derives the exact display
//!   strings, gating the speed/bearing accuracy rows on an injected
//!   capability flag.
//! - **Text rendering**: [`render::write_card`] lays the card out as four
//!   aligned columns on any writer, with optional ANSI-bold labels.
//!
//! ## Usage
//!
//! ```rust
//! use location_card::card::format_fix;
//! use location_card::fix::LocationFix;
//!
//! let fix = LocationFix::builder()
//!     .latitude(52.379189)
//!     .longitude(4.899431)
//!     .altitude(10.5)
//!     .speed(3.2)
//!     .bearing(118.0)
//!     .time(1_633_375_741_711)
//!     .accuracy(4.0)
//!     .build();
//!
//! // The capability flag gates the speed/bearing accuracy rows.
//! let card = format_fix(&fix, true);
//!
//! assert_eq!(card.column_a[0].label, "Lat:");
//! assert_eq!(card.column_a[0].value, "52.379189");
//! assert_eq!(card.column_b[1].value, "3 sec");
//! ```

pub mod card;
pub mod error;
pub mod fix;
pub mod render;
