//! HC-SR501 PIR motion sensor.
//!
//! The PIR holds its output HIGH for its own re-trigger time, so the
//! level is used as-is.  Edges are reported so the loop can log when
//! motion starts and ends.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEdge {
    Started,
    Ended,
}

pub fn edge(previous: bool, current: bool) -> Option<MotionEdge> {
    match (previous, current) {
        (false, true) => Some(MotionEdge::Started),
        (true, false) => Some(MotionEdge::Ended),
        _ => None,
    }
}
