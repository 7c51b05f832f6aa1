//! Zero-copy views: sub-ranges, bulk mutation, and misaligned operands.

use bitspan::BitSet;

fn main() -> Result<(), bitspan::ParseBitSetError> {
    let mut bits = BitSet::repeat(false, 32);

    // Carve out a window and mutate through it; no bits are copied.
    bits.subview_mut(8, 16).fill(true);
    println!("filled middle:   {bits}");

    bits.subview_mut(12, 8).flip();
    println!("flipped inner:   {bits}");

    // Read-only views compute word-at-a-time.
    let window = bits.subview(8, 16);
    println!(
        "window ones={} all={} any={}",
        window.count_ones(),
        window.all(),
        window.any()
    );

    // Binary operations accept operands at different offsets of their own
    // buffers; the word walk handles the misalignment.
    let pattern: BitSet = "110110110110".parse()?;
    let mut target = BitSet::repeat(true, 40);
    target
        .subview_mut(5, pattern.len())
        .xor(pattern.as_view());
    println!("xor at offset 5: {target}");

    // Equality is alignment-independent.
    let mut other = BitSet::repeat(false, 64);
    other
        .subview_mut(21, pattern.len())
        .copy_from(pattern.as_view());
    assert_eq!(other.subview(21, pattern.len()), pattern.as_view());
    println!("realigned copy compares equal");

    // Copying a view out realigns it to bit zero.
    let extracted = BitSet::from_view(other.subview(21, pattern.len()));
    println!("extracted:       {extracted}");

    Ok(())
}
