use crate::error::ExpDistError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bit layout of an IEEE-754 binary format: 1 sign bit, `exponent_bits`
/// exponent bits and the remaining bits as mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout {
    total_bits: u32,
    exponent_bits: u32,
    bias: i32,
}

const HALF: FloatLayout = FloatLayout {
    total_bits: 16,
    exponent_bits: 5,
    bias: 15,
};

const SINGLE: FloatLayout = FloatLayout {
    total_bits: 32,
    exponent_bits: 8,
    bias: 127,
};

const DOUBLE: FloatLayout = FloatLayout {
    total_bits: 64,
    exponent_bits: 11,
    bias: 1023,
};

impl FloatLayout {
    pub const fn total_bits(&self) -> u32 {
        self.total_bits
    }

    pub const fn exponent_bits(&self) -> u32 {
        self.exponent_bits
    }

    pub const fn bias(&self) -> i32 {
        self.bias
    }

    pub const fn mantissa_bits(&self) -> u32 {
        self.total_bits - self.exponent_bits - 1
    }

    pub const fn byte_width(&self) -> usize {
        (self.total_bits / 8) as usize
    }

    /// All-ones exponent field, used for infinities and NaNs.
    pub const fn max_exponent_field(&self) -> u32 {
        (1 << self.exponent_bits) - 1
    }

    pub const fn exponent_mask(&self) -> u64 {
        (self.max_exponent_field() as u64) << self.mantissa_bits()
    }

    /// Smallest unbiased exponent a normal value can carry
    pub const fn min_normal_exponent(&self) -> i32 {
        1 - self.bias
    }

    /// Largest unbiased exponent a normal value can carry
    pub const fn max_normal_exponent(&self) -> i32 {
        self.max_exponent_field() as i32 - 1 - self.bias
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum FloatFormat {
    Float16,
    Float32,
    Float64,
}

impl FloatFormat {
    pub const ALL: [FloatFormat; 3] = [FloatFormat::Float16, FloatFormat::Float32, FloatFormat::Float64];

    pub const fn layout(&self) -> FloatLayout {
        match self {
            FloatFormat::Float16 => HALF,
            FloatFormat::Float32 => SINGLE,
            FloatFormat::Float64 => DOUBLE,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            FloatFormat::Float16 => "float16",
            FloatFormat::Float32 => "float32",
            FloatFormat::Float64 => "float64",
        }
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FloatFormat {
    type Err = ExpDistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FloatFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| ExpDistError::UnsupportedFormat(s.to_string()))
    }
}
