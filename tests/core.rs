use bitspan::{BitSet, ParseBitSetError};

#[test]
fn test_new() {
    let bits = BitSet::new();
    assert_eq!(bits.len(), 0);
    assert!(bits.is_empty());
    assert!(bits.all()); // vacuously true
    assert!(!bits.any());
    assert_eq!(bits.count_ones(), 0);
    assert!(bits.as_words().is_empty());

    let default: BitSet = Default::default();
    assert_eq!(default, bits);
}

#[test]
fn test_repeat() {
    let ones = BitSet::repeat(true, 131);
    assert_eq!(ones.len(), 131);
    assert_eq!(ones.count_ones(), 131);
    assert!(ones.all());
    assert!(ones.any());
    for i in 0..131 {
        assert_eq!(ones.get(i), Some(true));
    }
    assert_eq!(ones.get(131), None);

    // Exactly ceil(131 / 64) words, with the tail of the last word zero.
    assert_eq!(ones.as_words().len(), 3);
    assert_eq!(ones.as_words()[2], (1u64 << 3) - 1);

    let zeros = BitSet::repeat(false, 131);
    assert_eq!(zeros.count_ones(), 0);
    assert!(zeros.none());
    assert!(!zeros.all());
}

#[test]
fn test_parse_and_display() {
    let s = "1011001110";
    let bits: BitSet = s.parse().unwrap();
    assert_eq!(bits.len(), 10);
    assert_eq!(bits.to_string(), s);
    assert_eq!(bits.get(0), Some(true));
    assert_eq!(bits.get(1), Some(false));
    assert_eq!(bits.get(9), Some(false));

    let empty: BitSet = "".parse().unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_parse_rejects_invalid() {
    let err = "0102".parse::<BitSet>().unwrap_err();
    assert_eq!(err, ParseBitSetError { ch: '2', pos: 3 });
    assert!(err.to_string().contains("position 3"));
    assert!("10 1".parse::<BitSet>().is_err());
    assert!("0b10".parse::<BitSet>().is_err());
}

#[test]
fn test_set_get_and_proxy() {
    let mut bits = BitSet::repeat(false, 100);
    bits.set(0, true);
    bits.set(63, true); // last bit of the first word
    bits.set(64, true); // first bit of the second word
    bits.set(99, true);
    assert_eq!(bits.get(0), Some(true));
    assert_eq!(bits.get(63), Some(true));
    assert_eq!(bits.get(64), Some(true));
    assert_eq!(bits.get(99), Some(true));
    assert_eq!(bits.get(50), Some(false));
    assert_eq!(bits.count_ones(), 4);

    bits.set(63, false);
    assert_eq!(bits.get(63), Some(false));

    let mut bit = bits.get_mut(10).unwrap();
    assert!(!bit.get());
    bit.set(true);
    assert!(bit.get());
    assert!(bit.replace(false)); // was true
    assert!(bit.flip()); // false -> true, returns the new value
    drop(bit);
    assert_eq!(bits.get(10), Some(true));
    assert!(bits.get_mut(100).is_none());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_out_of_range_panics() {
    let mut bits = BitSet::repeat(false, 10);
    bits.set(10, true);
}

#[test]
fn test_index() {
    let bits: BitSet = "0100".parse().unwrap();
    assert!(!bits[0]);
    assert!(bits[1]);
    assert!(!bits[3]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let bits = BitSet::repeat(false, 4);
    let _ = bits[4];
}

#[test]
fn test_push_pop() {
    let mut bits = BitSet::new();
    for i in 0..130 {
        bits.push(i % 3 == 0);
    }
    assert_eq!(bits.len(), 130);
    assert_eq!(bits.as_words().len(), 3);
    for i in 0..130 {
        assert_eq!(bits.get(i), Some(i % 3 == 0), "bit {i}");
    }

    assert_eq!(bits.pop(), Some(true)); // bit 129
    assert_eq!(bits.pop(), Some(false)); // bit 128
    assert_eq!(bits.len(), 128);
    assert_eq!(bits.as_words().len(), 2);

    let mut empty = BitSet::new();
    assert_eq!(empty.pop(), None);
}

#[test]
fn test_fill_and_flip() {
    let mut bits = BitSet::repeat(false, 70);
    bits.fill(true);
    assert!(bits.all());
    assert_eq!(bits.as_words()[1], (1u64 << 6) - 1);
    bits.fill(false);
    assert!(bits.none());

    bits.set(1, true);
    bits.set(3, true);
    bits.flip();
    assert_eq!(bits.count_ones(), 68);
    assert_eq!(bits.get(0), Some(true));
    assert_eq!(bits.get(1), Some(false));
    bits.flip();
    assert_eq!(bits.count_ones(), 2);
    assert_eq!(bits.ones().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_counts() {
    let bits: BitSet = "110100101".parse().unwrap();
    assert_eq!(bits.count_ones(), 5);
    assert_eq!(bits.count_zeros(), 4);
    assert!(!bits.all());
    assert!(bits.any());
    assert!(!bits.none());
}

#[test]
fn test_equality_and_hash() {
    use std::collections::HashSet;

    let a: BitSet = "10101".parse().unwrap();
    let b: BitSet = "10101".parse().unwrap();
    let c: BitSet = "10100".parse().unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    // Length matters even when the set bits agree.
    let d: BitSet = "101010".parse().unwrap();
    assert_ne!(a, d);

    let mut seen = HashSet::new();
    seen.insert(a.clone());
    assert!(seen.contains(&b));
    assert!(!seen.contains(&c));
}

#[test]
fn test_clone_is_deep() {
    let mut a = BitSet::repeat(false, 10);
    let b = a.clone();
    a.set(3, true);
    assert_eq!(b.get(3), Some(false));
    assert_ne!(a, b);
}

#[test]
fn test_from_bools_and_iterators() {
    let bits = BitSet::from(&[true, false, true][..]);
    assert_eq!(bits.to_string(), "101");

    let array = BitSet::from(&[false, true]);
    assert_eq!(array.to_string(), "01");

    let collected: BitSet = vec![false, true, true, false].into_iter().collect();
    assert_eq!(collected.to_string(), "0110");

    let mut extended = BitSet::new();
    extended.extend([true, true, false]);
    assert_eq!(extended.to_string(), "110");

    let values: Vec<bool> = collected.iter().collect();
    assert_eq!(values, [false, true, true, false]);

    let looped: Vec<bool> = (&collected).into_iter().collect();
    assert_eq!(looped, values);
}

#[test]
fn test_iter_double_ended_and_nth() {
    let bits: BitSet = "10110".parse().unwrap();
    let mut iter = bits.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(true));
    assert_eq!(iter.next_back(), Some(false));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.nth(1), Some(true)); // skips bit 1, yields bit 2
    assert_eq!(iter.next(), Some(true)); // bit 3
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None); // fused

    let mut back = bits.iter();
    assert_eq!(back.nth_back(1), Some(true)); // skips bit 4, yields bit 3
    assert_eq!(back.len(), 3);
}

#[test]
fn test_ones_iterator() {
    let bits: BitSet = "0110010".parse().unwrap();
    assert_eq!(bits.ones().collect::<Vec<_>>(), vec![1, 2, 5]);
    assert_eq!(bits.ones().rev().collect::<Vec<_>>(), vec![5, 2, 1]);
    assert_eq!(bits.ones().len(), 3);

    // Zero-word skipping across a large gap, in both directions.
    let mut sparse = BitSet::repeat(false, 300);
    sparse.set(2, true);
    sparse.set(257, true);
    assert_eq!(sparse.ones().collect::<Vec<_>>(), vec![2, 257]);
    assert_eq!(sparse.ones().rev().collect::<Vec<_>>(), vec![257, 2]);

    let none = BitSet::repeat(false, 100);
    assert_eq!(none.ones().next(), None);
    assert_eq!(none.ones().next_back(), None);
}

#[test]
fn test_debug_preview() {
    let bits: BitSet = "0101".parse().unwrap();
    assert_eq!(format!("{bits:?}"), "BitSet[0101]");

    let long = BitSet::repeat(true, 80);
    let debug = format!("{long:?}");
    assert!(debug.starts_with("BitSet["));
    assert!(debug.contains("..."));
}

#[test]
fn test_scenarios() {
    let a: BitSet = "1011".parse().unwrap();
    let b: BitSet = "1101".parse().unwrap();
    assert_eq!(&a & &b, "1001".parse::<BitSet>().unwrap());

    let c: BitSet = "0100".parse().unwrap();
    assert_eq!(&a | &c, "1111".parse::<BitSet>().unwrap());

    let d: BitSet = "1010".parse().unwrap();
    assert_eq!(!&d, "0101".parse::<BitSet>().unwrap());

    let e: BitSet = "1100".parse().unwrap();
    let grown = &e << 2;
    assert_eq!(grown.len(), 6);
    assert_eq!(grown, "110000".parse::<BitSet>().unwrap());
}

#[test]
fn test_bitwise_assign_operators() {
    let rhs_and: BitSet = "1101".parse().unwrap();
    let mut a: BitSet = "1011".parse().unwrap();
    a &= &rhs_and;
    assert_eq!(a.to_string(), "1001");

    let rhs_or: BitSet = "0100".parse().unwrap();
    let mut b: BitSet = "1011".parse().unwrap();
    b |= &rhs_or;
    assert_eq!(b.to_string(), "1111");

    let rhs_xor: BitSet = "1101".parse().unwrap();
    let mut c: BitSet = "1011".parse().unwrap();
    c ^= &rhs_xor;
    assert_eq!(c.to_string(), "0110");

    // View operands work too.
    let mut d: BitSet = "1011".parse().unwrap();
    d &= rhs_and.as_view();
    assert_eq!(d.to_string(), "1001");
}

#[test]
#[should_panic(expected = "lengths don't match")]
fn test_mismatched_and_panics() {
    let mut a = BitSet::repeat(true, 5);
    let b = BitSet::repeat(true, 6);
    a.and(&b);
}

#[test]
fn test_multi_word_ops() {
    let mut a = BitSet::repeat(false, 200);
    let mut b = BitSet::repeat(false, 200);
    a.set(0, true);
    a.set(64, true);
    a.set(199, true);
    b.set(64, true);
    b.set(100, true);
    b.set(199, true);

    assert_eq!((&a & &b).ones().collect::<Vec<_>>(), vec![64, 199]);
    assert_eq!((&a | &b).ones().collect::<Vec<_>>(), vec![0, 64, 100, 199]);
    assert_eq!((&a ^ &b).ones().collect::<Vec<_>>(), vec![0, 100]);
}

#[test]
fn test_clear() {
    let mut bits = BitSet::repeat(true, 100);
    bits.clear();
    assert!(bits.is_empty());
    assert!(bits.as_words().is_empty());
}
