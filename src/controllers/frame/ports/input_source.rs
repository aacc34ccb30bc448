use crate::core::viewport::InputSnapshot;

/// Non-blocking view of the latest input, taken once per frame.
///
/// Taking a snapshot consumes one-shot state such as scroll delta and
/// button edges.
pub trait InputSource {
    fn snapshot(&mut self) -> InputSnapshot;
}
