use is_sorted::IsSorted;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;
use crate::flight::FlightDetail;

/// A named endpoint of an edge.
pub type Vertex = String;

/// The weight reported by [Edge::weight] for an edge with no weight assigned.
/// It is also the key used when ordering unweighted edges.
pub const UNWEIGHTED: i32 = -1;

fn normalize_weight(weight: i32) -> Option<i32> {
  if weight == UNWEIGHTED {
    None
  } else {
    Some(weight)
  }
}

/// Represents a directed edge in a graph, optionally labeled, weighted, and
/// annotated with the flights scheduled along it.
///
/// Two edges are equal iff they connect the same `source` to the same `dest`;
/// label, weight and flights are ignored. Weight ordering is a separate
/// notion, see [Edge::cmp_weight] and [ByWeight].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawEdge")]
pub struct Edge {
  pub source: Vertex,
  pub dest: Vertex,
  label: String,
  /// `None` for unweighted edges.
  weight: Option<i32>,
  /// Departure and arrival times of every flight from source to destination,
  /// keyed by flight identifier. Only [Edge::insert_data] adds to it.
  flight_details: HashMap<String, FlightDetail>,
}

/// Wire form of [Edge]. Decoded edges go through [Edge::try_from] so that a
/// `-1` weight reads back as unweighted and every flight sits under its own
/// identifier.
#[derive(Deserialize)]
struct RawEdge {
  source: Vertex,
  dest: Vertex,
  label: String,
  weight: Option<i32>,
  flight_details: HashMap<String, FlightDetail>,
}

impl TryFrom<RawEdge> for Edge {
  type Error = Error;

  fn try_from(raw: RawEdge) -> Result<Self, Self::Error> {
    for (key, detail) in raw.flight_details.iter() {
      if key != detail.flight() {
        return Err(Error::FlightKeyMismatch {
          key: key.clone(),
          flight: detail.flight().to_string(),
        });
      }
    }
    Ok(Edge {
      source: raw.source,
      dest: raw.dest,
      label: raw.label,
      weight: raw.weight.and_then(normalize_weight),
      flight_details: raw.flight_details,
    })
  }
}

impl Edge {
  /// Unweighted, unlabeled edge from `source` to `dest`.
  pub fn new(source: impl Into<Vertex>, dest: impl Into<Vertex>) -> Edge {
    Edge {
      source: source.into(),
      dest: dest.into(),
      ..Edge::default()
    }
  }

  /// Unweighted edge with a label.
  pub fn with_label(
    source: impl Into<Vertex>,
    dest: impl Into<Vertex>,
    label: impl Into<String>,
  ) -> Edge {
    Edge {
      label: label.into(),
      ..Edge::new(source, dest)
    }
  }

  /// Weighted edge with a label. Any weight is accepted; passing
  /// [UNWEIGHTED] gives an unweighted edge.
  pub fn weighted(
    source: impl Into<Vertex>,
    dest: impl Into<Vertex>,
    weight: i32,
    label: impl Into<String>,
  ) -> Edge {
    Edge {
      weight: normalize_weight(weight),
      ..Edge::with_label(source, dest, label)
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  /// The edge weight, or [UNWEIGHTED] if none was assigned.
  pub fn weight(&self) -> i32 {
    self.weight.unwrap_or(UNWEIGHTED)
  }

  /// The edge weight, or `None` if unweighted. Never `Some(UNWEIGHTED)`.
  pub fn weight_value(&self) -> Option<i32> {
    self.weight
  }

  /// False for edges built without a weight or with [UNWEIGHTED].
  pub fn is_weighted(&self) -> bool {
    self.weight.is_some()
  }

  pub fn endpoints(&self) -> (&str, &str) {
    (&self.source, &self.dest)
  }

  pub fn is_self_loop(&self) -> bool {
    self.source == self.dest
  }

  /// Records a flight along this edge if `flight` is not already known.
  /// Note the argument order: arrival comes before departure. The stored
  /// [FlightDetail::as_pair] is `(departure, arrival)`.
  ///
  /// Returns true if the flight was inserted. A repeated flight id is left
  /// untouched, so the first insertion always wins.
  pub fn insert_data(
    &mut self,
    flight: impl Into<String>,
    arrival: i32,
    departure: i32,
  ) -> bool {
    match self.flight_details.entry(flight.into()) {
      Entry::Occupied(e) => {
        log::debug!(
          "ignoring duplicate flight {} on edge {} -> {}",
          e.key(),
          self.source,
          self.dest
        );
        false
      }
      Entry::Vacant(e) => {
        log::trace!(
          "flight {} on edge {} -> {}: departs {}, arrives {}",
          e.key(),
          self.source,
          self.dest,
          departure,
          arrival
        );
        let detail = FlightDetail::new(e.key().clone(), departure, arrival);
        e.insert(detail);
        true
      }
    }
  }

  /// Read-only view of the flight map. It can only grow through
  /// [Edge::insert_data].
  pub fn flight_details(&self) -> &HashMap<String, FlightDetail> {
    &self.flight_details
  }

  pub fn flight(&self, flight: &str) -> Option<&FlightDetail> {
    self.flight_details.get(flight)
  }

  /// Flights along this edge, in no particular order.
  pub fn flights(&self) -> impl Iterator<Item = &FlightDetail> {
    self.flight_details.values()
  }

  pub fn num_flights(&self) -> usize {
    self.flight_details.len()
  }

  pub fn has_flights(&self) -> bool {
    !self.flight_details.is_empty()
  }

  /// Compares two edges by weight only. Unweighted edges compare as weight
  /// [UNWEIGHTED].
  pub fn cmp_weight(&self, other: &Edge) -> Ordering {
    self.weight().cmp(&other.weight())
  }

  /// True iff this edge's weight is strictly less than `other`'s.
  pub fn lighter_than(&self, other: &Edge) -> bool {
    self.weight() < other.weight()
  }

  /// Encodes the edge with bincode.
  pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
    Ok(bincode::serialize(self)?)
  }

  /// Decodes an edge written by [Edge::to_bytes].
  pub fn from_bytes(bytes: &[u8]) -> Result<Edge, Error> {
    bincode::deserialize(bytes).map_err(|e| {
      log::warn!("failed to decode edge from {} bytes: {}", bytes.len(), e);
      Error::from(e)
    })
  }
}

impl PartialEq for Edge {
  fn eq(&self, other: &Self) -> bool {
    self.source == other.source && self.dest == other.dest
  }
}

impl Eq for Edge {}

impl Hash for Edge {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.source.hash(state);
    self.dest.hash(state);
  }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.source, self.dest)?;
    if !self.label.is_empty() {
      write!(f, " [{}]", self.label)?;
    }
    if let Some(w) = self.weight {
      write!(f, " (w={})", w)?;
    }
    Ok(())
  }
}

/// Orders a borrowed edge by weight alone, e.g. for use in a
/// [std::collections::BinaryHeap] or with `Iterator::min`.
#[derive(Debug, Clone, Copy)]
pub struct ByWeight<'a>(pub &'a Edge);

impl PartialEq for ByWeight<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.0.weight() == other.0.weight()
  }
}

impl Eq for ByWeight<'_> {}

impl PartialOrd for ByWeight<'_> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ByWeight<'_> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.cmp_weight(other.0)
  }
}

/// Stable sort by weight, cheapest first.
pub fn sort_by_weight(edges: &mut [Edge]) {
  edges.sort_by(|a, b| a.cmp_weight(b));
}

pub fn is_sorted_by_weight(edges: &[Edge]) -> bool {
  IsSorted::is_sorted_by_key(&mut edges.iter(), |e| e.weight())
}

/// Builder for [Edge].
pub struct EdgeBuilder {
  edge: Edge,
}

impl EdgeBuilder {
  /// Start from an unweighted, unlabeled edge from `source` to `dest`.
  pub fn new(
    source: impl Into<Vertex>,
    dest: impl Into<Vertex>,
  ) -> EdgeBuilder {
    EdgeBuilder {
      edge: Edge::new(source, dest),
    }
  }

  /// Initialize the builder from an existing [Edge].
  pub fn from(edge: Edge) -> EdgeBuilder {
    EdgeBuilder { edge }
  }

  pub fn label(mut self, label: impl Into<String>) -> EdgeBuilder {
    self.edge.label = label.into();
    self
  }

  /// Set the weight. [UNWEIGHTED] clears it.
  pub fn weight(mut self, weight: i32) -> EdgeBuilder {
    self.edge.weight = normalize_weight(weight);
    self
  }

  pub fn unweighted(mut self) -> EdgeBuilder {
    self.edge.weight = None;
    self
  }

  /// Add a flight, with the same argument order and first-wins behavior as
  /// [Edge::insert_data].
  pub fn flight(
    mut self,
    flight: impl Into<String>,
    arrival: i32,
    departure: i32,
  ) -> EdgeBuilder {
    self.edge.insert_data(flight, arrival, departure);
    self
  }

  /// Build the edge.
  pub fn build(self) -> Edge {
    self.edge
  }
}
