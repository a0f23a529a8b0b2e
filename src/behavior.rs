//! Boundary policies for `Fifo`.

/// Tagging trait for providing behaviors to `Fifo`.
///
/// A behavior decides what happens when an enqueue and a dequeue are
/// requested in the same step while the queue is **empty**. Every other
/// boundary case (enqueue while full, dequeue while empty) is a capacity
/// violation and is rejected regardless of behavior.
pub trait Behavior {
    /// Whether a simultaneous enqueue and dequeue on an empty queue is
    /// carried out with an undefined read instead of being rejected.
    const TOLERATES_INDETERMINATE_READ: bool;
}

/// Behavior for `Fifo` that rejects indeterminate reads.
///
/// ### Enqueue and dequeue while empty:
///
/// The step is refused with `FifoError::IndeterminateRead`, **without
/// performing any mutation**. The item that was offered is handed back
/// inside the error.
pub struct Strict;
impl Behavior for Strict {
    const TOLERATES_INDETERMINATE_READ: bool = false;
}

/// Behavior for `Fifo` that tolerates indeterminate reads.
///
/// ### Enqueue and dequeue while empty:
///
/// Both cursors **advance** and the flags stay as they were, so the queue
/// remains empty and usable. The dequeued value is whatever the read slot
/// held and is reported as `ItemOut::Undefined`; the enqueued item is lost.
pub struct Lenient;
impl Behavior for Lenient {
    const TOLERATES_INDETERMINATE_READ: bool = true;
}
