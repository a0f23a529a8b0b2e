//! A clocked FIFO with fixed capacity.
//!
//! It can be stored directly on the stack if needed.
//!
//! The queue is modelled on a hardware FIFO: a power-of-two sized backing
//! array, a write cursor and a read cursor that wrap silently, and explicit
//! `full`/`empty` flags. Equal cursors mean either "empty" or "full", so the
//! flags are state in their own right and are never recomputed from the
//! cursors.
//!
//! The queue advances in discrete **steps**. In one step an enqueue and a
//! dequeue may both be requested; both are evaluated against the state the
//! queue had before the step and their effects are committed together.
//!
//! This crate is inspired by [**goandylok/arraydeque**]
//! [**goandylok/arraydeque**]: https://github.com/goandylok/arraydeque
//!
//! # Feature Flags
//! The **arrayfifo** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for Fifo storage.
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! arrayfifo = "0.1"
//! ```
//!
//! Currently arrayfifo by default links to the standard library, but if you would
//! instead like to use arrayfifo in a `#![no_std]` situation or crate you can
//! request this via:
//!
//! ```toml
//! [dependencies]
//! arrayfifo = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! The capacity is the length of the backing array, which must be a power of
//! two. All slots are usable: a `Fifo<[u8; 4]>` holds four items.
//!
//! # Boundary behavior
//!
//! Enqueueing into a full queue and dequeueing from an empty one are always
//! refused. Requesting both in the same step on an empty queue has nothing
//! valid to read; what happens then is chosen by the `Behavior` parameter:
//! `Strict` (the default) refuses the step, `Lenient` carries it out and
//! reports the read as `ItemOut::Undefined`.
//!
//! # Examples
//! ```
//! use arrayfifo::Fifo;
//!
//! let mut fifo: Fifo<[u8; 4]> = Fifo::new();
//! assert_eq!(fifo.capacity(), 4);
//! assert!(fifo.is_empty());
//!
//! fifo.enqueue(1).unwrap();
//! fifo.enqueue(2).unwrap();
//! assert_eq!(fifo.len(), 2);
//!
//! assert_eq!(fifo.dequeue(), Ok(1));
//! assert_eq!(fifo.dequeue(), Ok(2));
//! assert!(fifo.dequeue().is_err());
//! ```
//!
//! # Simultaneous access
//! ```
//! use arrayfifo::{Fifo, ItemOut};
//!
//! let mut fifo: Fifo<[u8; 2]> = Fifo::new();
//! fifo.extend(vec![10, 20]);
//! assert!(fifo.is_full());
//!
//! // One in, one out: still full.
//! assert_eq!(fifo.exchange(30), Ok(ItemOut::Valid(10)));
//! assert!(fifo.is_full());
//! assert_eq!(format!("{:?}", fifo), "[20, 30]");
//! ```
//!
//! # Lenient behavior
//! ```
//! use arrayfifo::{Fifo, Lenient};
//!
//! let mut fifo: Fifo<[u8; 4], Lenient> = Fifo::new();
//! let out = fifo.exchange(5).unwrap();
//! assert!(out.is_undefined());
//! assert!(fifo.is_empty());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::marker::PhantomData;
use core::ops::Index;

pub use odds::IndexRange as RangeArgument;

mod array;
mod behavior;
pub mod error;
mod port;
mod step;
mod utils;

pub use array::Array;
pub use behavior::{Behavior, Lenient, Strict};
pub use error::FifoError;
pub use port::{Outputs, Signals};
pub use step::{ItemOut, Request, Response, Status};

const LOG_TARGET: &str = "arrayfifo";

/// A fixed capacity FIFO that advances in atomic steps.
///
/// It can be stored directly on the stack if needed.
///
/// Items are written at the write cursor and read at the read cursor; both
/// wrap around the backing array. The `full` and `empty` flags are only
/// changed by a step that enqueues without dequeueing or dequeues without
/// enqueueing.
///
/// # Capacity
///
/// The backing array's length, a power of two. Every slot is usable.
pub struct Fifo<A: Array, B: Behavior = Strict> {
    xs: A,
    write: usize,
    read: usize,
    full: bool,
    empty: bool,
    cycle: u64,
    phantom: PhantomData<B>,
}

impl<A: Array + Clone, B: Behavior> Clone for Fifo<A, B> {
    fn clone(&self) -> Self {
        Fifo {
            xs: self.xs.clone(),
            write: self.write,
            read: self.read,
            full: self.full,
            empty: self.empty,
            cycle: self.cycle,
            phantom: PhantomData,
        }
    }
}

impl<A: Array, B: Behavior> Default for Fifo<A, B>
where
    A::Item: Default,
{
    #[inline]
    fn default() -> Self {
        Fifo::new()
    }
}

impl<A: Array, B: Behavior> Fifo<A, B> {
    #[inline]
    fn wrap_add(index: usize, addend: usize) -> usize {
        utils::wrap_add(index, addend, A::capacity())
    }

    #[inline]
    fn write_cursor(&self) -> usize {
        self.write
    }

    #[inline]
    fn read_cursor(&self) -> usize {
        self.read
    }

    #[inline]
    fn set_write(&mut self, write: usize) {
        debug_assert!(write < A::capacity());
        self.write = write;
    }

    #[inline]
    fn set_read(&mut self, read: usize) {
        debug_assert!(read < A::capacity());
        self.read = read;
    }

    fn clear_state(&mut self) {
        self.set_write(0);
        self.set_read(0);
        self.full = false;
        self.empty = true;
    }

    /// Refuses a request, leaving the cursors and flags untouched.
    fn refuse<T>(&self, err: FifoError<A::Item>) -> Result<T, FifoError<A::Item>> {
        tracing::warn!(
            target: LOG_TARGET,
            cycle = self.cycle,
            write = self.write_cursor(),
            read = self.read_cursor(),
            full = self.full,
            empty = self.empty,
            "{}",
            err
        );
        Err(err)
    }
}

impl<A: Array, B: Behavior> Fifo<A, B> {
    /// Creates an empty `Fifo` with every slot set to the item's default.
    ///
    /// # Panics
    ///
    /// Panics if the backing array's length is not a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let fifo: Fifo<[u16; 8]> = Fifo::new();
    /// assert_eq!(fifo.index_width(), 3);
    /// ```
    #[inline]
    pub fn new() -> Self
    where
        A::Item: Default,
    {
        Fifo::filled(A::Item::default())
    }

    /// Creates an empty `Fifo` with every slot set to `fill`.
    ///
    /// The fill value is what an undefined read of a never-written slot
    /// returns under `Lenient`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array's length is not a power of two.
    pub fn filled(fill: A::Item) -> Self {
        let capacity = A::capacity();
        assert!(
            capacity.is_power_of_two(),
            "fifo capacity must be a power of two, but it is {}",
            capacity
        );
        Fifo {
            xs: A::filled(fill),
            write: 0,
            read: 0,
            full: false,
            empty: true,
            cycle: 0,
            phantom: PhantomData,
        }
    }

    /// Applies one atomic update step.
    ///
    /// `reset` takes effect first. Enqueue and dequeue are then both
    /// evaluated against the resulting state and committed together:
    ///
    /// | state  | enqueue     | dequeue      | both                         |
    /// |--------|-------------|--------------|------------------------------|
    /// | empty  | ok          | `Underflow`  | behavior-dependent           |
    /// | full   | `Overflow`  | ok           | ok, flags unchanged          |
    /// | normal | ok          | ok           | ok, flags unchanged          |
    ///
    /// When both are requested the read sees the slot as it was before the
    /// step, even where the cursors address the same slot.
    ///
    /// A refused step changes nothing apart from a reset asserted alongside
    /// it; the refused item comes back inside the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::{Fifo, FifoError, ItemOut, Request};
    ///
    /// let mut fifo: Fifo<[u8; 1]> = Fifo::new();
    ///
    /// let response = fifo.step(Request::enqueue(4)).unwrap();
    /// assert!(response.status.full);
    ///
    /// let response = fifo.step(Request::exchange(5)).unwrap();
    /// assert_eq!(response.item, ItemOut::Valid(4));
    ///
    /// assert_eq!(fifo.step(Request::enqueue(6)), Err(FifoError::Overflow { element: 6 }));
    /// ```
    pub fn step(
        &mut self,
        request: Request<A::Item>,
    ) -> Result<Response<A::Item>, FifoError<A::Item>> {
        let Request {
            reset,
            enqueue,
            dequeue,
        } = request;

        self.cycle = self.cycle.wrapping_add(1);

        if reset {
            self.clear_state();
            tracing::debug!(target: LOG_TARGET, cycle = self.cycle, "reset");
        }

        let write = self.write_cursor();
        let read = self.read_cursor();

        let item = match (enqueue, dequeue) {
            (None, false) => ItemOut::Idle,
            (Some(element), false) => {
                if self.full {
                    return self.refuse(FifoError::Overflow { element });
                }
                self.xs.write(write, element);
                let write = Self::wrap_add(write, 1);
                self.set_write(write);
                self.empty = false;
                self.full = write == read;
                ItemOut::Idle
            }
            (None, true) => {
                if self.empty {
                    return self.refuse(FifoError::Underflow);
                }
                let item = self.xs.read(read);
                let read = Self::wrap_add(read, 1);
                self.set_read(read);
                self.full = false;
                self.empty = read == write;
                ItemOut::Valid(item)
            }
            (Some(element), true) => {
                if self.empty && !B::TOLERATES_INDETERMINATE_READ {
                    return self.refuse(FifoError::IndeterminateRead { element });
                }
                // read before write: with one slot, or when full, both
                // cursors address the same slot
                let item = self.xs.read(read);
                self.xs.write(write, element);
                self.set_write(Self::wrap_add(write, 1));
                self.set_read(Self::wrap_add(read, 1));
                if self.empty {
                    tracing::debug!(
                        target: LOG_TARGET,
                        cycle = self.cycle,
                        "simultaneous enqueue and dequeue while empty, read is undefined"
                    );
                    ItemOut::Undefined(item)
                } else {
                    ItemOut::Valid(item)
                }
            }
        };

        tracing::trace!(
            target: LOG_TARGET,
            cycle = self.cycle,
            write = self.write_cursor(),
            read = self.read_cursor(),
            full = self.full,
            empty = self.empty,
            "step committed"
        );

        Ok(Response {
            item,
            status: self.status(),
        })
    }

    /// Enqueues `element` in a step of its own.
    ///
    /// Returns `FifoError::Overflow` holding the element if the queue is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _] <-(+)- 1 => [1, _] -> Ok
    /// [1, _] <-(+)- 2 => [1, 2] -> Ok
    /// [1, 2] <-(+)- 3 => [1, 2] -> Err(Overflow { element: 3 })
    /// ```
    ///
    /// ```
    /// use arrayfifo::{Fifo, FifoError};
    ///
    /// let mut fifo: Fifo<[u8; 2]> = Fifo::new();
    /// fifo.enqueue(1).unwrap();
    /// fifo.enqueue(2).unwrap();
    ///
    /// assert_eq!(fifo.enqueue(3), Err(FifoError::Overflow { element: 3 }));
    /// assert_eq!(fifo.back(), Some(&2));
    /// ```
    pub fn enqueue(&mut self, element: A::Item) -> Result<(), FifoError<A::Item>> {
        self.step(Request::enqueue(element)).map(|_| ())
    }

    /// Dequeues the oldest item in a step of its own.
    ///
    /// Returns `FifoError::Underflow` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::{Fifo, FifoError};
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// fifo.enqueue(1).unwrap();
    /// fifo.enqueue(2).unwrap();
    ///
    /// assert_eq!(fifo.dequeue(), Ok(1));
    /// assert_eq!(fifo.dequeue(), Ok(2));
    /// assert_eq!(fifo.dequeue(), Err(FifoError::Underflow));
    /// ```
    pub fn dequeue(&mut self) -> Result<A::Item, FifoError<A::Item>> {
        match self.step(Request::dequeue())?.item {
            ItemOut::Valid(item) => Ok(item),
            ItemOut::Idle | ItemOut::Undefined(_) => Err(FifoError::Underflow),
        }
    }

    /// Enqueues `element` and dequeues in the same step.
    ///
    /// The number of pending items and both flags stay as they were. On an
    /// empty queue the outcome depends on the behavior: `Strict` refuses with
    /// `FifoError::IndeterminateRead`, `Lenient` returns
    /// `ItemOut::Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::{Fifo, FifoError, ItemOut};
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// assert_eq!(fifo.exchange(1), Err(FifoError::IndeterminateRead { element: 1 }));
    ///
    /// fifo.enqueue(1).unwrap();
    /// assert_eq!(fifo.exchange(2), Ok(ItemOut::Valid(1)));
    /// assert_eq!(fifo.front(), Some(&2));
    /// ```
    pub fn exchange(&mut self, element: A::Item) -> Result<ItemOut<A::Item>, FifoError<A::Item>> {
        self.step(Request::exchange(element))
            .map(|response| response.item)
    }

    /// Returns the queue to the empty state.
    ///
    /// Storage is left as it is; stale slots are unreachable until they
    /// are overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 2]> = Fifo::new();
    /// fifo.extend(vec![1, 2]);
    /// fifo.reset();
    /// assert!(fifo.is_empty());
    /// assert!(!fifo.is_full());
    /// ```
    pub fn reset(&mut self) {
        if let Err(err) = self.step(Request::reset()) {
            debug_assert!(false, "a bare reset was refused: {}", err);
        }
    }

    /// Lets one step pass with nothing requested.
    pub fn idle(&mut self) -> Status {
        if let Err(err) = self.step(Request::idle()) {
            debug_assert!(false, "an idle step was refused: {}", err);
        }
        self.status()
    }

    /// Returns the number of items the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns the number of address bits, `log2(capacity)`.
    #[inline]
    pub fn index_width(&self) -> u32 {
        A::capacity().trailing_zeros()
    }

    /// Returns the number of pending items.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// assert_eq!(fifo.len(), 0);
    /// fifo.extend(0..4);
    /// assert_eq!(fifo.len(), 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        if self.full {
            A::capacity()
        } else {
            utils::count(self.read_cursor(), self.write_cursor(), A::capacity())
        }
    }

    /// Returns true if no item is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns true if no free slot is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 1]> = Fifo::new();
    /// assert!(!fifo.is_full());
    /// fifo.enqueue(1).unwrap();
    /// assert!(fifo.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns both flags.
    #[inline]
    pub fn status(&self) -> Status {
        Status {
            full: self.full,
            empty: self.empty,
        }
    }

    /// Returns the number of steps applied since construction.
    ///
    /// Reset does not clear the counter.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Retrieves a pending item by position; 0 is the oldest.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// fifo.extend(vec![3, 4, 5]);
    /// assert_eq!(fifo.get(1), Some(&4));
    /// assert_eq!(fifo.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A::Item> {
        if index < self.len() {
            let idx = Self::wrap_add(self.read_cursor(), index);
            Some(&self.xs.as_slice()[idx])
        } else {
            None
        }
    }

    /// The item the next dequeue would return.
    pub fn front(&self) -> Option<&A::Item> {
        self.get(0)
    }

    /// The most recently enqueued pending item.
    pub fn back(&self) -> Option<&A::Item> {
        match self.len() {
            0 => None,
            len => self.get(len - 1),
        }
    }

    /// Returns a front-to-back iterator over the pending items.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// fifo.extend(vec![5, 3, 4]);
    /// let b: &[_] = &[&5, &3, &4];
    /// assert_eq!(fifo.iter().collect::<Vec<&u8>>().as_slice(), b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A::Item> {
        Iter {
            ring: self.xs.as_slice(),
            read: self.read_cursor(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over a window of the pending items, without
    /// dequeueing them. Positions count from the oldest item.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the number of pending items.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// fifo.extend(vec![1, 2, 3]);
    /// fifo.dequeue().unwrap();
    /// fifo.extend(vec![4, 5]);
    ///
    /// let window: Vec<_> = fifo.range(1..3).copied().collect();
    /// assert_eq!(window, vec![3, 4]);
    /// assert_eq!(fifo.range(..).len(), 4);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, A::Item>
    where
        R: RangeArgument<usize>,
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "range lower bound was too large");
        assert!(end <= len, "range upper bound was too large");

        Iter {
            ring: self.xs.as_slice(),
            read: Self::wrap_add(self.read_cursor(), start),
            remaining: end - start,
        }
    }

    /// Returns `true` if an item equal to `x` is pending.
    pub fn contains(&self, x: &A::Item) -> bool
    where
        A::Item: PartialEq<A::Item>,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns the pending items as two slices in storage order; the second
    /// is non-empty only when the pending run wraps around.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayfifo::Fifo;
    ///
    /// let mut fifo: Fifo<[u8; 4]> = Fifo::new();
    /// fifo.extend(vec![0, 1, 2]);
    /// fifo.dequeue().unwrap();
    /// fifo.dequeue().unwrap();
    /// fifo.extend(vec![3, 4]);
    ///
    /// assert_eq!(fifo.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    pub fn as_slices(&self) -> (&[A::Item], &[A::Item]) {
        let buf = self.xs.as_slice();
        let read = self.read_cursor();
        let len = self.len();
        if read + len <= buf.len() {
            (&buf[read..read + len], &buf[..0])
        } else {
            (&buf[read..], &buf[..read + len - buf.len()])
        }
    }

    /// Converts into a `Fifo` with `Strict` behavior, keeping its state.
    pub fn strict(self) -> Fifo<A, Strict> {
        Fifo {
            xs: self.xs,
            write: self.write,
            read: self.read,
            full: self.full,
            empty: self.empty,
            cycle: self.cycle,
            phantom: PhantomData,
        }
    }

    /// Converts into a `Fifo` with `Lenient` behavior, keeping its state.
    pub fn lenient(self) -> Fifo<A, Lenient> {
        Fifo {
            xs: self.xs,
            write: self.write,
            read: self.read,
            full: self.full,
            empty: self.empty,
            cycle: self.cycle,
            phantom: PhantomData,
        }
    }
}

impl<A: Array, B: Behavior, C: Behavior> PartialEq<Fifo<A, C>> for Fifo<A, B>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Fifo<A, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<'a, A: Array, B: Behavior> PartialEq<&'a [A::Item]> for Fifo<A, B>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &&'a [A::Item]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<A: Array, B: Behavior> PartialEq<Vec<A::Item>> for Fifo<A, B>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Vec<A::Item>) -> bool {
        *self == &other[..]
    }
}

impl<A: Array, B: Behavior> Eq for Fifo<A, B> where A::Item: Eq {}

impl<A: Array, B: Behavior> Hash for Fifo<A, B>
where
    A::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<A: Array, B: Behavior> Index<usize> for Fifo<A, B> {
    type Output = A::Item;

    #[inline]
    fn index(&self, index: usize) -> &A::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<A: Array, B: Behavior> iter::FromIterator<A::Item> for Fifo<A, B>
where
    A::Item: Default,
{
    fn from_iter<T: IntoIterator<Item = A::Item>>(iter: T) -> Self {
        let mut fifo = Fifo::new();
        fifo.extend(iter);
        fifo
    }
}

impl<'a, A: Array, B: Behavior> IntoIterator for &'a Fifo<A, B> {
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extend the `Fifo` with an iterator, one enqueue step per item.
///
/// Does not extract more items than there is space for. No error
/// occurs if there are more iterator elements.
impl<A: Array, B: Behavior> Extend<A::Item> for Fifo<A, B> {
    fn extend<T: IntoIterator<Item = A::Item>>(&mut self, iter: T) {
        let take = self.capacity() - self.len();
        for elt in iter.into_iter().take(take) {
            if self.enqueue(elt).is_err() {
                break;
            }
        }
    }
}

impl<A: Array, B: Behavior> fmt::Debug for Fifo<A, B>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// `Fifo` iterator over pending items
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    read: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let read = self.read;
        self.read = utils::wrap_add(self.read, 1, self.ring.len());
        self.remaining -= 1;
        self.ring.get(read)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.ring
            .get(utils::wrap_add(self.read, self.remaining, self.ring.len()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> iter::FusedIterator for Iter<'a, T> {}


#[cfg(test)]
#[cfg(feature = "use_generic_array")]
mod test_generic_array {
    use generic_array::typenum::U4;
    use generic_array::GenericArray;

    use super::*;

    #[test]
    fn any_fill_exchange_drain() {
        macro_rules! test {
            ($behavior:ident) => {{
                let mut fifo: Fifo<GenericArray<u8, U4>, $behavior> = Fifo::new();
                assert_eq!(fifo.capacity(), 4);
                assert_eq!(fifo.index_width(), 2);

                fifo.extend(0..4);
                assert!(fifo.is_full());
                assert_eq!(fifo.enqueue(8), Err(FifoError::Overflow { element: 8 }));

                assert_eq!(fifo.exchange(9), Ok(ItemOut::Valid(0)));
                assert!(fifo.is_full());
                assert_eq!(fifo.len(), 4);

                let drained: Vec<_> = (0..4).map(|_| fifo.dequeue().unwrap()).collect();
                assert_eq!(drained, vec![1, 2, 3, 9]);
                assert!(fifo.is_empty());
            }};
        }

        test!(Strict);
        test!(Lenient);
    }

    #[test]
    fn filled_slots_show_through_lenient_read() {
        let mut fifo: Fifo<GenericArray<u8, U4>, Lenient> = Fifo::filled(0x5A);
        assert_eq!(fifo.exchange(1), Ok(ItemOut::Undefined(0x5A)));
        assert!(fifo.is_empty());
    }
}
