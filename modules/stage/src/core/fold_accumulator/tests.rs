use alloc::string::String;

use super::FoldAccumulator;
use crate::core::{Accumulator, StreamError};

fn summing() -> FoldAccumulator<u64, impl FnMut(&mut u64, u32) -> Result<(), StreamError> + Clone + Send> {
  FoldAccumulator::new(0_u64, |sum: &mut u64, value: u32| {
    *sum += u64::from(value);
    Ok(())
  })
}

#[test]
fn folds_elements_in_order() {
  let mut acc = FoldAccumulator::new(String::new(), |text: &mut String, part: &'static str| {
    text.push_str(part);
    Ok(())
  });
  acc.update("ab").expect("update");
  acc.update("c").expect("update");
  assert_eq!(acc.into_state(), "abc");
}

#[test]
fn finish_yields_the_state() {
  let mut acc = summing();
  acc.update(2).expect("update");
  acc.update(3).expect("update");
  assert_eq!(Accumulator::<u32>::finish(acc), 5);
}

#[test]
fn clones_start_from_the_same_state() {
  let mut first = summing();
  let second = first.clone();
  first.update(5).expect("update");
  assert_eq!(*first.state(), 5);
  assert_eq!(second.into_state(), 0);
}

#[test]
fn fold_error_is_returned() {
  let mut acc = FoldAccumulator::new(0_u32, |_: &mut u32, value: u32| {
    if value == 0 { Err(StreamError::failed("zero")) } else { Ok(()) }
  });
  assert_eq!(acc.update(0), Err(StreamError::failed("zero")));
}
