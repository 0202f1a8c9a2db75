//! IEEE-754 binary32 conversion.
//!
//! Decoding rebuilds the value from its sign, exponent and significand fields with plain
//! arithmetic, so zeros, subnormals, infinities and NaN behave identically no matter how
//! the host formats or parses floats.

/// Width of the significand field.
const SIGNIFICAND_BITS: u32 = 23;
/// Significand field mask, bits 22..0.
const SIGNIFICAND_MASK: u32 = (1 << SIGNIFICAND_BITS) - 1;
/// Exponent field mask after shifting, bits 30..23.
const EXPONENT_MASK: u32 = 0xff;
/// Exponent bias.
const BIAS: i32 = 127;
/// Exponent of every subnormal value.
const SUBNORMAL_EXP: i32 = 1 - BIAS;

/// The three fields of a binary32 bit pattern.
#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug)]
pub struct Single {
    /// Bit 31, set for negative values.
    pub negative: bool,
    /// Bits 30..23, biased.
    pub exponent: u8,
    /// Bits 22..0, without the implicit leading bit.
    pub significand: u32,
}

impl Single {
    /// Splits a bit pattern into its fields.
    pub fn from_bits(bits: u32) -> Single {
        Single {
            negative: bits >> 31 == 1,
            exponent: ((bits >> SIGNIFICAND_BITS) & EXPONENT_MASK) as u8,
            significand: bits & SIGNIFICAND_MASK,
        }
    }

    /// Joins the fields back into a bit pattern.
    pub fn to_bits(self) -> u32 {
        ((self.negative as u32) << 31)
            | ((self.exponent as u32) << SIGNIFICAND_BITS)
            | (self.significand & SIGNIFICAND_MASK)
    }

    /// All exponent bits set and a non-zero significand.
    pub fn is_nan(self) -> bool { self.exponent == 0xff && self.significand != 0 }

    /// All exponent bits set and a zero significand.
    pub fn is_infinite(self) -> bool { self.exponent == 0xff && self.significand == 0 }

    /// Computes the value the fields denote.
    ///
    /// A NaN keeps its sign and payload bits.
    pub fn value(self) -> f32 {
        if self.is_nan() {
            return f32::from_bits(self.to_bits());
        }

        let sign = if self.negative { -1f32 } else { 1f32 };

        if self.is_infinite() {
            return sign * f32::INFINITY;
        }

        let magnitude = if self.exponent == 0 {
            // no implicit bit; zero significand gives a signed zero below
            self.significand as f64 * pow2(SUBNORMAL_EXP - SIGNIFICAND_BITS as i32)
        } else {
            let unbiased = self.exponent as i32 - BIAS;
            (self.significand | (1 << SIGNIFICAND_BITS)) as f64
                * pow2(unbiased - SIGNIFICAND_BITS as i32)
        };

        // every binary32 magnitude is exact in f64, so the narrowing never rounds
        sign * magnitude as f32
    }
}

#[inline]
fn pow2(exp: i32) -> f64 { 2f64.powi(exp) }

/// Produces the binary32 bit pattern of `f`.
///
/// # Example
///
/// ```
/// use nibpack::float::to_bits;
///
/// assert_eq!(to_bits(1.0), 0x3f80_0000);
/// ```
pub fn to_bits(f: f32) -> u32 { f.to_bits() }

/// Rebuilds a float from a binary32 bit pattern using explicit field arithmetic.
///
/// # Example
///
/// ```
/// use nibpack::float::from_bits;
///
/// assert_eq!(from_bits(0xc020_0000), -2.5);
/// ```
pub fn from_bits(bits: u32) -> f32 { Single::from_bits(bits).value() }
