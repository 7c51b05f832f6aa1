//! Zero-copy views over a contiguous range of bits.
//!
//! A view pairs a word slice with a `[start, end)` bit range and is where all
//! bulk operations live: the owning [`BitSet`](crate::BitSet) forwards to a
//! view over its full range, and narrower ranges are carved out with
//! [`subview`](BitView::subview) without copying.
//!
//! Every bulk operation is word-granular. A range is walked as a sequence of
//! maximal spans, each contained in one word; full words are processed with a
//! single load/store and the partial words at the boundaries are isolated
//! with a mask covering exactly the in-range bits. When two views start at
//! different offsets within their respective words, the binary operations
//! advance both cursors by `min(remaining, WORD_BITS - max(lhs_offset,
//! rhs_offset))` bits per step, which degrades to whole-word steps whenever
//! both sides happen to be aligned.

use crate::{
    bit_ref::BitRef,
    iter::{Bits, Ones},
    word::{bitpos, extract, splice, Word, WORD_BITS},
};

/// Clamps a `(offset, count)` request against a range of `len` bits,
/// returning the selected sub-range relative to the range start.
///
/// An `offset` past the end yields the empty range at `len`; a `count`
/// reaching past the end is clamped (so `usize::MAX` means "to the end").
fn clamp_range(len: usize, offset: usize, count: usize) -> (usize, usize) {
    if offset > len {
        return (len, len);
    }
    (offset, offset.saturating_add(count).min(len))
}

/// A shared, non-owning window over a contiguous range of bits.
///
/// A `BitView` borrows the storage of the [`BitSet`](crate::BitSet) (or
/// [`BitViewMut`]) it was derived from and must not outlive it; the borrow
/// checker enforces what the underlying representation requires. All
/// read-only bulk operations ([`count_ones`](Self::count_ones),
/// [`all`](Self::all), [`any`](Self::any), equality) work a word at a time.
///
/// # Examples
///
/// ```
/// use bitspan::BitSet;
///
/// let bits: BitSet = "0011100".parse().unwrap();
/// let view = bits.subview(2, 3);
/// assert_eq!(view.len(), 3);
/// assert!(view.all());
/// ```
#[derive(Clone, Copy)]
pub struct BitView<'a> {
    words: &'a [Word],
    start: usize,
    end: usize,
}

impl<'a> BitView<'a> {
    #[inline]
    pub(crate) fn new(words: &'a [Word], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= words.len() * WORD_BITS);
        Self { words, start, end }
    }

    /// Returns the number of bits in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the view covers no bits.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the bit at `index` (relative to the view start), or `None` if
    /// `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitspan::BitSet;
    ///
    /// let bits: BitSet = "0100".parse().unwrap();
    /// let view = bits.subview(1, 2);
    /// assert_eq!(view.get(0), Some(true));
    /// assert_eq!(view.get(1), Some(false));
    /// assert_eq!(view.get(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        Some(self.bit(index))
    }

    #[inline(always)]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len());
        let (wi, offset) = bitpos(self.start + index);
        (self.words[wi] >> offset) & 1 != 0
    }

    /// Returns the number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        let mut total = 0;
        self.for_each_span(|word, offset, count| {
            total += extract(word, offset, count).count_ones() as usize;
            true
        });
        total
    }

    /// Returns the number of bits set to 0.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Returns `true` if every bit in the view is set.
    ///
    /// Vacuously `true` for an empty view. Short-circuits on the first span
    /// containing an unset bit.
    #[must_use]
    pub fn all(&self) -> bool {
        self.for_each_span(|word, offset, count| {
            extract(word, offset, count).count_ones() as usize == count
        })
    }

    /// Returns `true` if any bit in the view is set.
    ///
    /// `false` for an empty view. Short-circuits on the first non-zero span.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.for_each_span(|word, offset, count| extract(word, offset, count) == 0)
    }

    /// Returns `true` if no bit in the view is set.
    #[inline]
    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Returns a narrower view of `count` bits starting at `offset`, without
    /// copying.
    ///
    /// An `offset` past the end yields an empty view at the end; a `count`
    /// reaching past the end is clamped, so passing `usize::MAX` selects
    /// everything from `offset` onward.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitspan::BitSet;
    ///
    /// let bits: BitSet = "10110".parse().unwrap();
    /// let view = bits.as_view();
    /// assert_eq!(view.subview(1, 3).to_string(), "011");
    /// assert_eq!(view.subview(3, usize::MAX).to_string(), "10");
    /// assert!(view.subview(9, 2).is_empty());
    /// ```
    #[must_use]
    pub fn subview(&self, offset: usize, count: usize) -> BitView<'a> {
        let (start, end) = clamp_range(self.len(), offset, count);
        BitView::new(self.words, self.start + start, self.start + end)
    }

    /// Returns an iterator over the bits of the view, in index order.
    #[must_use]
    pub fn iter(&self) -> Bits<'a> {
        Bits::new(self.words, self.start, self.end)
    }

    /// Returns an iterator over the positions of set bits, relative to the
    /// view start.
    #[must_use]
    pub fn ones(&self) -> Ones<'a> {
        Ones::new(self.words, self.start, self.end)
    }

    /// Walks the maximal single-word spans of the view, passing each word
    /// together with the in-word offset and covered bit count. Stops and
    /// returns `false` as soon as `f` does.
    fn for_each_span(&self, mut f: impl FnMut(Word, usize, usize) -> bool) -> bool {
        let mut index = self.start;
        while index < self.end {
            let (wi, offset) = bitpos(index);
            let count = (self.end - index).min(WORD_BITS - offset);
            if !f(self.words[wi], offset, count) {
                return false;
            }
            index += count;
        }
        true
    }

    /// Bit-exact comparison of two equal-length ranges, regardless of how
    /// each is aligned within its own words. Short-circuits on the first
    /// mismatching step.
    pub(crate) fn eq_bits(&self, other: &BitView<'_>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut lhs = self.start;
        let mut rhs = other.start;
        while lhs < self.end {
            let (wi, i) = bitpos(lhs);
            let (wj, j) = bitpos(rhs);
            let step = (self.end - lhs).min(WORD_BITS - i.max(j));
            if extract(self.words[wi], i, step) != extract(other.words[wj], j, step) {
                return false;
            }
            lhs += step;
            rhs += step;
        }
        true
    }
}

/// An exclusive, non-owning window over a contiguous range of bits.
///
/// The mutable counterpart of [`BitView`]: everything a shared view can do,
/// plus in-place mutation. The conversion is one-directional — a
/// `BitViewMut` yields a [`BitView`] via [`as_view`](Self::as_view) (or
/// `From`), never the reverse.
///
/// Binary operations ([`and`](Self::and), [`or`](Self::or),
/// [`xor`](Self::xor), [`copy_from`](Self::copy_from)) accept a source view
/// of the same length at any alignment; the two ranges are walked in steps
/// bounded by whichever side is closer to its own word boundary.
///
/// # Examples
///
/// ```
/// use bitspan::BitSet;
///
/// let mut bits = BitSet::repeat(false, 10);
/// bits.subview_mut(2, 5).fill(true);
/// assert_eq!(bits.to_string(), "0011111000");
/// ```
pub struct BitViewMut<'a> {
    words: &'a mut [Word],
    start: usize,
    end: usize,
}

impl<'a> BitViewMut<'a> {
    #[inline]
    pub(crate) fn new(words: &'a mut [Word], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= words.len() * WORD_BITS);
        Self { words, start, end }
    }

    /// Reborrows the view as a shared [`BitView`].
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> BitView<'_> {
        BitView::new(&*self.words, self.start, self.end)
    }

    /// Returns the number of bits in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the view covers no bits.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the bit at `index`, or `None` if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.as_view().get(index)
    }

    /// Returns a proxy for the bit at `index`, or `None` if `index` is out
    /// of range.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<BitRef<'_>> {
        if index >= self.len() {
            return None;
        }
        let (wi, offset) = bitpos(self.start + index);
        Some(BitRef::new(&mut self.words[wi], offset))
    }

    /// Returns the number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.as_view().count_ones()
    }

    /// Returns the number of bits set to 0.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.as_view().count_zeros()
    }

    /// Returns `true` if every bit in the view is set.
    #[must_use]
    pub fn all(&self) -> bool {
        self.as_view().all()
    }

    /// Returns `true` if any bit in the view is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.as_view().any()
    }

    /// Returns `true` if no bit in the view is set.
    #[must_use]
    pub fn none(&self) -> bool {
        self.as_view().none()
    }

    /// Sets every bit in the view to `value`.
    ///
    /// Fully covered words are assigned in one store; the partial words at
    /// the boundaries are merged through a mask covering exactly the
    /// in-range bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitspan::BitSet;
    ///
    /// let mut bits = BitSet::repeat(false, 8);
    /// bits.subview_mut(1, 6).fill(true);
    /// assert_eq!(bits.to_string(), "01111110");
    /// ```
    pub fn fill(&mut self, value: bool) {
        let src = if value { Word::MAX } else { 0 };
        self.update_spans(|word, offset, count| splice(word, offset, count, src));
    }

    /// Inverts every bit in the view, leaving bits outside the range
    /// untouched.
    pub fn flip(&mut self) {
        self.update_spans(|word, offset, count| {
            let bits = extract(*word, offset, count);
            splice(word, offset, count, !bits);
        });
    }

    /// Bitwise AND with an equal-length view.
    ///
    /// # Panics
    ///
    /// Panics if the two views differ in length.
    pub fn and(&mut self, other: BitView<'_>) {
        self.combine(other, |lhs, rhs| lhs & rhs);
    }

    /// Bitwise OR with an equal-length view.
    ///
    /// # Panics
    ///
    /// Panics if the two views differ in length.
    pub fn or(&mut self, other: BitView<'_>) {
        self.combine(other, |lhs, rhs| lhs | rhs);
    }

    /// Bitwise XOR with an equal-length view.
    ///
    /// # Panics
    ///
    /// Panics if the two views differ in length.
    pub fn xor(&mut self, other: BitView<'_>) {
        self.combine(other, |lhs, rhs| lhs ^ rhs);
    }

    /// Copies the bits of an equal-length view into this one, realigning
    /// them to this view's offset.
    ///
    /// # Panics
    ///
    /// Panics if the two views differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitspan::BitSet;
    ///
    /// let src: BitSet = "000111".parse().unwrap();
    /// let mut dst = BitSet::repeat(false, 8);
    /// dst.subview_mut(2, 6).copy_from(src.as_view());
    /// assert_eq!(dst.to_string(), "00000111");
    /// ```
    pub fn copy_from(&mut self, other: BitView<'_>) {
        self.combine(other, |_, rhs| rhs);
    }

    /// Returns a narrower shared view of `count` bits starting at `offset`.
    ///
    /// Clamping matches [`BitView::subview`].
    #[must_use]
    pub fn subview(&self, offset: usize, count: usize) -> BitView<'_> {
        self.as_view().subview(offset, count)
    }

    /// Returns a narrower exclusive view of `count` bits starting at
    /// `offset`.
    ///
    /// Clamping matches [`BitView::subview`].
    #[must_use]
    pub fn subview_mut(&mut self, offset: usize, count: usize) -> BitViewMut<'_> {
        let (start, end) = clamp_range(self.len(), offset, count);
        BitViewMut::new(&mut *self.words, self.start + start, self.start + end)
    }

    /// Consumes the view, returning a narrower exclusive view that keeps
    /// the original borrow's lifetime.
    ///
    /// Clamping matches [`BitView::subview`].
    #[must_use]
    pub fn into_subview_mut(self, offset: usize, count: usize) -> BitViewMut<'a> {
        let (start, end) = clamp_range(self.end - self.start, offset, count);
        BitViewMut::new(self.words, self.start + start, self.start + end)
    }

    /// Returns an iterator over the bits of the view, in index order.
    #[must_use]
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(&*self.words, self.start, self.end)
    }

    /// Returns an iterator over the positions of set bits, relative to the
    /// view start.
    #[must_use]
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(&*self.words, self.start, self.end)
    }

    /// Mutable counterpart of [`BitView::for_each_span`]: walks the maximal
    /// single-word spans of the view and hands each to `f`.
    fn update_spans(&mut self, mut f: impl FnMut(&mut Word, usize, usize)) {
        let mut index = self.start;
        while index < self.end {
            let (wi, offset) = bitpos(index);
            let count = (self.end - index).min(WORD_BITS - offset);
            f(&mut self.words[wi], offset, count);
            index += count;
        }
    }

    /// The misaligned binary walk. Both cursors advance together in steps
    /// bounded by `min(remaining, WORD_BITS - max(lhs_offset, rhs_offset))`:
    /// the source step is extracted at its own offset, combined with the
    /// destination step, and spliced back into exactly those bits of the
    /// destination word.
    fn combine(&mut self, other: BitView<'_>, op: impl Fn(Word, Word) -> Word) {
        assert_eq!(self.len(), other.len(), "bit range lengths don't match");
        let mut dst = self.start;
        let mut src = other.start;
        while dst < self.end {
            let (wi, i) = bitpos(dst);
            let (wj, j) = bitpos(src);
            let step = (self.end - dst).min(WORD_BITS - i.max(j));
            let rhs = extract(other.words[wj], j, step);
            let lhs = extract(self.words[wi], i, step);
            splice(&mut self.words[wi], i, step, op(lhs, rhs));
            dst += step;
            src += step;
        }
    }
}

impl<'a> From<BitViewMut<'a>> for BitView<'a> {
    fn from(view: BitViewMut<'a>) -> Self {
        BitView::new(view.words, view.start, view.end)
    }
}
