//! Synchronous diagnostics hooks
//!
//! Estimators never render, print or log to a UI themselves. Hosts that
//! want to visualise samples and candidate centers, or show progress text,
//! pass an observer that is called synchronously during estimation.

use serde::{Deserialize, Serialize};

use super::SphereCandidate;
use crate::Vec3;

/// Receiver of estimation events
///
/// All methods default to no-ops so implementors only override what they
/// need.
pub trait EstimationObserver {
    /// A hand sample was kept in the session trajectory
    fn sample_recorded(&mut self, _point: &Vec3) {}

    /// A candidate center was produced and classified
    fn candidate(&mut self, _candidate: &SphereCandidate, _is_outlier: bool) {}

    /// Human-readable progress or result text
    fn message(&mut self, _text: &str) {}

    /// Final batch result, emitted once per estimation run
    fn center(&mut self, _center: Option<&Vec3>) {}
}

/// Observer that ignores everything
impl EstimationObserver for () {}

impl<O: EstimationObserver + ?Sized> EstimationObserver for &mut O {
    fn sample_recorded(&mut self, point: &Vec3) {
        (**self).sample_recorded(point)
    }

    fn candidate(&mut self, candidate: &SphereCandidate, is_outlier: bool) {
        (**self).candidate(candidate, is_outlier)
    }

    fn message(&mut self, text: &str) {
        (**self).message(text)
    }

    fn center(&mut self, center: Option<&Vec3>) {
        (**self).center(center)
    }
}

/// A recorded observer notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimationEvent {
    SampleRecorded { point: Vec3 },
    Candidate { candidate: SphereCandidate, is_outlier: bool },
    Message { text: String },
    Center { center: Option<Vec3> },
}

/// Observer that keeps every notification in arrival order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<EstimationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message texts in arrival order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            EstimationEvent::Message { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Classified candidates in arrival order
    pub fn candidates(&self) -> impl Iterator<Item = (&SphereCandidate, bool)> {
        self.events.iter().filter_map(|e| match e {
            EstimationEvent::Candidate { candidate, is_outlier } => Some((candidate, *is_outlier)),
            _ => None,
        })
    }

    /// Final centers reported, one per estimation run
    pub fn centers(&self) -> impl Iterator<Item = Option<&Vec3>> {
        self.events.iter().filter_map(|e| match e {
            EstimationEvent::Center { center } => Some(center.as_ref()),
            _ => None,
        })
    }
}

impl EstimationObserver for EventLog {
    fn sample_recorded(&mut self, point: &Vec3) {
        self.events.push(EstimationEvent::SampleRecorded { point: *point });
    }

    fn candidate(&mut self, candidate: &SphereCandidate, is_outlier: bool) {
        self.events.push(EstimationEvent::Candidate {
            candidate: *candidate,
            is_outlier,
        });
    }

    fn message(&mut self, text: &str) {
        self.events.push(EstimationEvent::Message { text: text.to_string() });
    }

    fn center(&mut self, center: Option<&Vec3>) {
        self.events.push(EstimationEvent::Center { center: center.copied() });
    }
}
