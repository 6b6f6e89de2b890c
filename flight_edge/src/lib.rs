//! A directed graph edge with an optional label and weight, annotated with
//! the departure and arrival times of the flights scheduled along it.
//!
//! ```
//! use flight_edge::Edge;
//!
//! let mut e = Edge::weighted("A", "B", 7, "nonstop");
//! e.insert_data("AA100", 1430, 1100);
//! assert_eq!(e.flight("AA100").map(|f| f.as_pair()), Some((1100, 1430)));
//! ```

pub mod edge;
pub mod error;
pub mod flight;

pub use edge::*;
pub use error::Error;
pub use flight::*;
