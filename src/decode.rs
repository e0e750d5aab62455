use crate::error::{ExpDistError, Result};
use crate::layout::FloatLayout;
use num_traits::{AsPrimitive, PrimInt, Unsigned};
use std::mem::size_of;

/// Unsigned integer with the same width as one of the supported float formats.
pub trait RawWord: PrimInt + Unsigned + AsPrimitive<u64> {
    fn from_ne_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_raw_word {
    ($($t:ty),*) => {
        $(
            impl RawWord for $t {
                fn from_ne_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0_u8; size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_raw_word!(u16, u32, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Normal,
    /// Zero, subnormal, infinity or NaN
    Special,
}

/// Reads `bytes` as consecutive native-endian words of width `T`, keeping each
/// bit pattern as is.
fn words_of<T: RawWord>(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks_exact(size_of::<T>())
        .map(|chunk| T::from_ne_slice(chunk).as_())
        .collect()
}

/// Reinterprets a raw byte buffer as the bit patterns of `layout`-sized floats.
/// Patterns are widened to `u64` without changing any bit.
pub fn decode_words(bytes: &[u8], layout: FloatLayout) -> Result<Vec<u64>> {
    let width = layout.byte_width();
    if bytes.len() % width != 0 {
        return Err(ExpDistError::MisalignedInput {
            len: bytes.len(),
            width,
        });
    }
    let words = match layout.total_bits() {
        16 => words_of::<u16>(bytes),
        32 => words_of::<u32>(bytes),
        64 => words_of::<u64>(bytes),
        bits => unreachable!("no float layout is {} bits wide", bits),
    };
    if words.is_empty() {
        return Err(ExpDistError::EmptyInput);
    }
    Ok(words)
}

pub fn exponent_field(bits: u64, layout: FloatLayout) -> u32 {
    ((bits & layout.exponent_mask()) >> layout.mantissa_bits()) as u32
}

pub fn classify(field: u32, layout: FloatLayout) -> Class {
    if field == 0 || field == layout.max_exponent_field() {
        Class::Special
    } else {
        Class::Normal
    }
}
