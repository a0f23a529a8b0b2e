//! Per-step requests and responses.

/// The requests presented to a `Fifo` in one update step.
///
/// Any combination may be asserted. `reset` is applied first; enqueue and
/// dequeue are then evaluated together against the same snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Request<T> {
    /// Return the queue to the empty state before anything else happens.
    pub reset: bool,
    /// Item to write at the write cursor, if any.
    pub enqueue: Option<T>,
    /// Read the item at the read cursor.
    pub dequeue: bool,
}

impl<T> Request<T> {
    /// A step with nothing requested.
    pub fn idle() -> Self {
        Request {
            reset: false,
            enqueue: None,
            dequeue: false,
        }
    }

    /// A step that only enqueues `item`.
    pub fn enqueue(item: T) -> Self {
        Request {
            enqueue: Some(item),
            ..Request::idle()
        }
    }

    /// A step that only dequeues.
    pub fn dequeue() -> Self {
        Request {
            dequeue: true,
            ..Request::idle()
        }
    }

    /// A step that enqueues `item` and dequeues at the same time.
    pub fn exchange(item: T) -> Self {
        Request {
            enqueue: Some(item),
            dequeue: true,
            reset: false,
        }
    }

    /// A step that only resets.
    pub fn reset() -> Self {
        Request {
            reset: true,
            ..Request::idle()
        }
    }

    /// Also assert reset in this step.
    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }
}

/// What came out of the read port in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemOut<T> {
    /// No dequeue took place.
    Idle,
    /// A pending item was dequeued.
    Valid(T),
    /// A dequeue was carried out on an empty queue. The value is whatever
    /// the read slot happened to hold and carries no meaning.
    Undefined(T),
}

impl<T> ItemOut<T> {
    /// The dequeued item, if it is meaningful.
    pub fn valid(self) -> Option<T> {
        match self {
            ItemOut::Valid(item) => Some(item),
            ItemOut::Idle | ItemOut::Undefined(_) => None,
        }
    }

    /// Returns true if a pending item was dequeued.
    pub fn is_valid(&self) -> bool {
        matches!(*self, ItemOut::Valid(_))
    }

    /// Returns true if the read produced an undefined value.
    pub fn is_undefined(&self) -> bool {
        matches!(*self, ItemOut::Undefined(_))
    }
}

/// The full/empty flags after a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Status {
    /// No free slot is left.
    pub full: bool,
    /// No item is pending.
    pub empty: bool,
}

/// The result of a successful step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response<T> {
    /// The read port.
    pub item: ItemOut<T>,
    /// Flags after the step was committed.
    pub status: Status,
}
