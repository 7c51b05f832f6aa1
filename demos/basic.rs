//! Basic usage of `BitSet`.

use bitspan::BitSet;

fn main() -> Result<(), bitspan::ParseBitSetError> {
    // Parse a bit string: one character per bit, position = bit index.
    let mut bits: BitSet = "1011001".parse()?;
    println!("parsed:     {bits}");
    println!("length:     {}", bits.len());
    println!("ones:       {}", bits.count_ones());

    // Single-bit access.
    println!("bit 2:      {}", bits.get(2).unwrap());
    bits.set(1, true);
    bits.get_mut(0).unwrap().flip();
    println!("mutated:    {bits}");

    // Whole-set operations.
    bits.flip();
    println!("flipped:    {bits}");
    bits.fill(false);
    println!("cleared:    {bits}");

    // Growth appends zero bits at the end; shrink removes from the end.
    let mut grown: BitSet = "1100".parse()?;
    grown <<= 3;
    println!("grown:      {grown}");
    grown >>= 5;
    println!("shrunk:     {grown}");

    // Set-bit positions.
    let sparse: BitSet = "0100100010".parse()?;
    let positions: Vec<usize> = sparse.ones().collect();
    println!("set bits of {sparse}: {positions:?}");

    Ok(())
}
