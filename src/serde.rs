//! Serde implementations for `BitSet`.
//!
//! Human-readable formats (JSON, TOML, ...) carry the `'0'/'1'` bit string,
//! which keeps the encoded form inspectable and round-trips through the
//! [`FromStr`](core::str::FromStr)/[`Display`](core::fmt::Display) pair.
//! Binary formats carry the bit length followed by the packed words;
//! deserialization validates that the word count matches the length and that
//! no bit past the end is set.

use alloc::{string::String, vec::Vec};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{word::Word, BitSet};

impl Serialize for BitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            (self.len() as u64, self.as_words()).serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for BitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        } else {
            let (len, words) = <(u64, Vec<Word>)>::deserialize(deserializer)?;
            let len = usize::try_from(len)
                .map_err(|_| de::Error::custom("bit length overflows usize"))?;
            BitSet::from_raw_parts(len, words).map_err(de::Error::custom)
        }
    }
}
