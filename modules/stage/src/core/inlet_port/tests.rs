use super::InletPort;
use crate::core::{Inlet, InletState, ProtocolViolation};

fn port() -> InletPort<u32> {
  InletPort::new(Inlet::named("test.in"))
}

#[test]
fn request_deliver_grab_cycle() {
  let mut port = port();
  assert_eq!(port.state(), InletState::Idle);
  port.request().expect("request");
  assert!(port.has_been_pulled());
  port.deliver(7).expect("deliver");
  assert_eq!(port.state(), InletState::HasData);
  assert!(port.is_available());
  assert_eq!(port.grab(), Ok(7));
  assert_eq!(port.state(), InletState::Idle);
}

#[test]
fn grab_then_request_returns_to_awaiting() {
  let mut port = port();
  port.request().expect("request");
  port.deliver(1).expect("deliver");
  port.grab().expect("grab");
  port.request().expect("re-request");
  assert_eq!(port.state(), InletState::AwaitingData);
}

#[test]
fn request_while_pending_is_rejected() {
  let mut port = port();
  port.request().expect("request");
  assert_eq!(port.request(), Err(ProtocolViolation::RequestWhilePending));
  port.deliver(1).expect("deliver");
  assert_eq!(port.request(), Err(ProtocolViolation::RequestWhilePending));
}

#[test]
fn delivery_requires_request() {
  let mut port = port();
  assert_eq!(port.deliver(1), Err(ProtocolViolation::DeliveryWithoutRequest));
  port.close();
  assert_eq!(port.deliver(1), Err(ProtocolViolation::DeliveryOnClosed));
}

#[test]
fn grab_without_data_is_rejected() {
  let mut port = port();
  assert_eq!(port.grab(), Err(ProtocolViolation::GrabWithoutData));
}

#[test]
fn close_keeps_buffered_element_until_grabbed() {
  let mut port = port();
  port.request().expect("request");
  port.deliver(3).expect("deliver");
  port.close();
  assert!(port.is_closed());
  assert_eq!(port.grab(), Ok(3));
  assert_eq!(port.state(), InletState::Closed);
  assert_eq!(port.request(), Err(ProtocolViolation::RequestOnClosed));
}

#[test]
fn close_discarding_drops_buffered_element() {
  let mut port = port();
  port.request().expect("request");
  port.deliver(3).expect("deliver");
  port.close_discarding();
  assert!(!port.is_available());
}
