//! `BitSet`: a growable, word-packed bit set.
//!
//! Bits live in one contiguous `Box<[u64]>` buffer; word `i` covers indices
//! `[64·i, 64·i + 63]`. Growth is explicit: [`BitSet::ensure_capacity`] allocates a
//! larger buffer and copies every existing word across unchanged, zero-filling the rest.
//! Read-only operations never grow the buffer, so probing an index far beyond the
//! current capacity simply reports `false`.

/// Number of bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Index of the word holding `bit`.
#[inline(always)]
pub(crate) const fn word_index(bit: usize) -> usize {
    bit / WORD_BITS
}

/// Single-bit mask selecting `bit` inside its word.
#[inline(always)]
pub(crate) const fn bit_mask(bit: usize) -> u64 {
    1u64 << (bit % WORD_BITS)
}

/// Number of words needed to address `bits` bits.
#[inline(always)]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// A growable bit set over `usize` indices.
#[derive(Clone, Default)]
pub struct BitSet {
    words: Box<[u64]>,
}

impl BitSet {
    /// Creates a new empty bit set with no backing storage.
    pub fn new() -> Self {
        Self {
            words: Box::default(),
        }
    }

    /// Creates a zeroed bit set able to address `[0, bits)` without growing.
    pub fn with_bits(bits: usize) -> Self {
        Self {
            words: vec![0; words_for(bits)].into_boxed_slice(),
        }
    }

    /// Creates a bit set with exactly the bits `[0, bits)` set.
    pub fn filled(bits: usize) -> Self {
        let mut words = vec![u64::MAX; words_for(bits)].into_boxed_slice();
        let tail = bits % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = !(u64::MAX << tail);
            }
        }
        Self { words }
    }

    /// Number of addressable bits (always a multiple of 64).
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns `true` if `bit` is set. Out-of-range indices are never set.
    #[inline]
    pub fn contains(&self, bit: usize) -> bool {
        match self.words.get(word_index(bit)) {
            Some(word) => word & bit_mask(bit) != 0,
            None => false,
        }
    }

    /// Sets `bit`.
    ///
    /// # Panics
    /// Panics if `bit` is beyond the current capacity; call
    /// [`ensure_capacity`](Self::ensure_capacity) first.
    #[inline]
    pub fn set(&mut self, bit: usize) {
        let idx = word_index(bit);
        assert!(
            idx < self.words.len(),
            "bit {bit} out of bounds for capacity {}",
            self.capacity_bits()
        );
        self.words[idx] |= bit_mask(bit);
    }

    /// Clears `bit`. Clearing an out-of-range bit is a no-op.
    #[inline]
    pub fn clear(&mut self, bit: usize) {
        if let Some(word) = self.words.get_mut(word_index(bit)) {
            *word &= !bit_mask(bit);
        }
    }

    /// Grows storage so that `bit` is addressable.
    ///
    /// Existing words are copied into the new buffer unchanged and every new bit starts
    /// cleared. The word count at least doubles on each reallocation.
    pub fn ensure_capacity(&mut self, bit: usize) {
        let needed = word_index(bit) + 1;
        let current = self.words.len();
        if needed <= current {
            return;
        }
        let new_len = needed.max(current * 2);
        let mut grown = vec![0u64; new_len].into_boxed_slice();
        grown[..current].copy_from_slice(&self.words);
        self.words = grown;

        #[cfg(feature = "tracing")]
        tracing::trace!(from_words = current, to_words = new_len, "bit set grown");
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Raw storage words.
    #[inline(always)]
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    /// Iterates set bits in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::over(&self.words)
    }
}

impl core::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for BitSet {
    /// Two sets are equal when they hold the same bits, whatever their capacities.
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };
        short.iter().zip(long.iter()).all(|(a, b)| a == b)
            && long[short.len()..].iter().all(|&w| w == 0)
    }
}

impl Eq for BitSet {}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the set bits of a [`BitSet`].
pub struct Iter<'a> {
    iter: std::iter::Enumerate<std::slice::Iter<'a, u64>>,
    current_word: u64,
    word_idx: usize,
}

impl<'a> Iter<'a> {
    /// Iterates the set bits of a raw word slice.
    pub(crate) fn over(words: &'a [u64]) -> Self {
        Self {
            iter: words.iter().enumerate(),
            current_word: 0,
            word_idx: 0,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros();
                self.current_word &= self.current_word - 1; // clear lowest bit
                return Some(self.word_idx * WORD_BITS + trailing as usize);
            }

            let (idx, &word) = self.iter.next()?;
            self.word_idx = idx;
            self.current_word = word;
        }
    }
}
