use super::DemandTracker;
use crate::core::{Demand, StreamError};

#[test]
fn starts_without_demand() {
  let tracker = DemandTracker::new();
  assert_eq!(tracker.current(), Demand::Finite(0));
  assert!(!tracker.current().has_demand());
}

#[test]
fn request_rejects_zero() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(0), Err(StreamError::InvalidDemand));
}

#[test]
fn consume_one_decrements_finite_demand() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(2), Ok(Demand::Finite(2)));
  assert!(tracker.consume_one());
  assert!(tracker.consume_one());
  assert!(!tracker.consume_one());
}

#[test]
fn overflowing_request_becomes_unbounded() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(u64::MAX), Ok(Demand::Finite(u64::MAX)));
  assert_eq!(tracker.request(1), Ok(Demand::Unbounded));
  assert!(tracker.consume_one());
  assert!(tracker.current().is_unbounded());
}

#[test]
fn cancel_clears_remaining_demand() {
  let mut tracker = DemandTracker::new();
  tracker.request(3).expect("request");
  tracker.clear();
  assert!(!tracker.consume_one());
}

#[test]
fn remaining_reports_finite_demand_only() {
  let mut tracker = DemandTracker::new();
  tracker.request(2).expect("request");
  assert!(tracker.consume_one());
  assert_eq!(tracker.current().remaining(), Some(1));
  tracker.request(u64::MAX).expect("request");
  assert_eq!(tracker.current().remaining(), None);
}
