//! `serde` support for [`UnitString`].
//!
//! - **Serialize**: the logical content (`len()` units, terminator
//!   excluded) as a sequence.
//! - **Deserialize**: from any sequence of units; the terminator is
//!   re-established by the container, never transported.

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess},
    ser::SerializeSeq,
};

use crate::{string::UnitString, unit::Unit};

impl<T: Unit + Serialize> Serialize for UnitString<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let units = self.as_units();
        let mut seq = serializer.serialize_seq(Some(units.len()))?;
        for unit in units {
            seq.serialize_element(unit)?;
        }
        seq.end()
    }
}

struct UnitSeqVisitor<T>(PhantomData<T>);

impl<'de, T: Unit + Deserialize<'de>> de::Visitor<'de> for UnitSeqVisitor<T> {
    type Value = UnitString<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of code units")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = UnitString::new();
        while let Some(unit) = seq.next_element::<T>()? {
            out.push(unit);
        }
        Ok(out)
    }
}

impl<'de, T: Unit + Deserialize<'de>> Deserialize<'de> for UnitString<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(UnitSeqVisitor(PhantomData))
    }
}
