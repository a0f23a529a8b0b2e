//! Fixed-size backing stores.

/// Trait for fixed size arrays used as the FIFO's backing store.
///
/// The store is addressed by slot index in `[0, capacity)` and supports one
/// read and one write per step.
pub trait Array {
    /// The array’s element type
    type Item: Copy;

    /// Returns number of element the array can hold
    fn capacity() -> usize;

    /// Creates an array with every slot set to `item`.
    fn filled(item: Self::Item) -> Self;

    /// Converts the array to immutable slice
    fn as_slice(&self) -> &[Self::Item];

    /// Converts the array to mutable slice
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Reads the slot at `addr`.
    #[inline(always)]
    fn read(&self, addr: usize) -> Self::Item {
        self.as_slice()[addr]
    }

    /// Overwrites the slot at `addr`.
    #[inline(always)]
    fn write(&mut self, addr: usize, item: Self::Item) {
        self.as_mut_slice()[addr] = item;
    }
}

impl<T: Copy, const N: usize> Array for [T; N] {
    type Item = T;

    #[inline(always)]
    fn capacity() -> usize {
        N
    }

    #[inline(always)]
    fn filled(item: T) -> Self {
        [item; N]
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::sequence::GenericSequence;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    impl<T, N> Array for GenericArray<T, N>
    where
        T: Copy,
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }

        #[inline(always)]
        fn filled(item: T) -> Self {
            GenericArray::generate(|_| item)
        }

        #[inline(always)]
        fn as_slice(&self) -> &[T] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [T] {
            GenericArray::as_mut_slice(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Array;

    #[test]
    fn fixed_array_read_write() {
        let mut xs = <[u8; 4] as Array>::filled(7);
        assert_eq!(<[u8; 4] as Array>::capacity(), 4);
        assert_eq!(xs.read(3), 7);
        xs.write(3, 9);
        assert_eq!(xs.read(3), 9);
        assert_eq!(xs.as_slice(), &[7, 7, 7, 9]);
    }
}
