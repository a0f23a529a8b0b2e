//! Signal-level port for clock drivers.
//!
//! `Fifo::tick` takes the raw port signals of one clock edge and always
//! produces outputs. A request that breaks the queue's contract is refused
//! and reported through `Outputs::fault`; the flags then describe the
//! unchanged queue.

use crate::array::Array;
use crate::behavior::Behavior;
use crate::error::FifoError;
use crate::step::{ItemOut, Request};
use crate::Fifo;

/// Input ports sampled on one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Signals<T> {
    /// Reset line.
    pub reset: bool,
    /// Write enable.
    pub enqueue: bool,
    /// Data presented on the write port. Ignored unless `enqueue` is set.
    pub item_in: T,
    /// Read enable.
    pub dequeue: bool,
}

impl<T> From<Signals<T>> for Request<T> {
    fn from(signals: Signals<T>) -> Self {
        Request {
            reset: signals.reset,
            enqueue: if signals.enqueue {
                Some(signals.item_in)
            } else {
                None
            },
            dequeue: signals.dequeue,
        }
    }
}

/// Output ports after one clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outputs<T> {
    /// Read port. Only `ItemOut::Valid` carries a dequeued item.
    pub item_out: ItemOut<T>,
    /// Full flag.
    pub is_full: bool,
    /// Empty flag.
    pub is_empty: bool,
    /// Set when the edge's requests were refused.
    pub fault: Option<FifoError<T>>,
}

impl<A: Array, B: Behavior> Fifo<A, B> {
    /// Advances the queue by one clock edge.
    ///
    /// Unlike `step`, this never fails: refused requests show up in
    /// `Outputs::fault` and leave the queue as it was (apart from a reset
    /// asserted on the same edge).
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::{Fifo, ItemOut, Signals};
    ///
    /// let mut fifo: Fifo<[u8; 2]> = Fifo::new();
    ///
    /// let out = fifo.tick(Signals { enqueue: true, item_in: 7, ..Signals::default() });
    /// assert!(!out.is_empty);
    ///
    /// let out = fifo.tick(Signals { dequeue: true, ..Signals::default() });
    /// assert_eq!(out.item_out, ItemOut::Valid(7));
    /// assert!(out.is_empty);
    ///
    /// let out = fifo.tick(Signals { dequeue: true, ..Signals::default() });
    /// assert!(out.fault.is_some());
    /// assert_eq!(out.item_out, ItemOut::Idle);
    /// ```
    pub fn tick(&mut self, signals: Signals<A::Item>) -> Outputs<A::Item> {
        match self.step(signals.into()) {
            Ok(response) => Outputs {
                item_out: response.item,
                is_full: response.status.full,
                is_empty: response.status.empty,
                fault: None,
            },
            Err(fault) => {
                let status = self.status();
                Outputs {
                    item_out: ItemOut::Idle,
                    is_full: status.full,
                    is_empty: status.empty,
                    fault: Some(fault),
                }
            }
        }
    }
}
