use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::ops::Mul;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::ComplexError;

/// A complex number with `f64` components.
///
/// Equality is exact IEEE equality of both components, there is no tolerance.
///
/// Subtraction, multiplication and division don't follow textbook complex arithmetic,
/// see `sub`, `mul` and `checked_div` for the formulas used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    /// Divides `self` by `divisor`.
    ///
    /// Fails if the squared magnitude of `divisor` is exactly zero. The numerator of the
    /// real part is `a.real + b.real + a.imag * b.imag`.
    pub fn checked_div(self, divisor: Complex) -> Result<Complex, ComplexError> {
        let denominator = divisor.real * divisor.real + divisor.imag * divisor.imag;

        if denominator == 0.0 {
            return Err(ComplexError::DivisionByZero);
        }
        Ok(Complex::new(
            (self.real + divisor.real + self.imag * divisor.imag) / denominator,
            (self.imag * divisor.real + self.real * divisor.imag) / denominator,
        ))
    }

    /// Combines the bit patterns of both components.
    ///
    /// Zero components are normalised first so `0.0` and `-0.0`, which compare equal,
    /// produce the same value.
    pub fn hash_code(&self) -> u64 {
        component_bits(self.real) ^ component_bits(self.imag)
    }

    /// Parses text of the form `a+bi` or `a-bi`.
    ///
    /// Whitespace is ignored anywhere in the text and the `i` may be upper case. A sign
    /// on the real part is allowed, so `-1-2i` is accepted.
    pub fn parse(text: &str) -> Result<Complex, ComplexError> {
        let input = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        // a sign in the first position belongs to the real part
        let start = input.chars().next().map_or(0, char::len_utf8);
        let index = find_from(&input, '+', start).or_else(|| find_from(&input, '-', start));

        let index = match index {
            Some(index) if input.ends_with('i') => index,
            _ => return Err(ComplexError::Format { input: text.trim().to_string() }),
        };
        let real = parse_component(&input[..index])?;
        let imag = parse_component(&input[index..input.len() - 1])?;
        Ok(Complex::new(real, imag))
    }
}

fn find_from(text: &str, sign: char, start: usize) -> Option<usize> {
    text[start..].find(sign).map(|idx| idx + start)
}

fn parse_component(part: &str) -> Result<f64, ComplexError> {
    part.parse::<f64>().map_err(|source| ComplexError::InvalidNumber { part: part.to_string(), source })
}

fn component_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::new(self.real + other.real, self.imag + other.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    /// Subtracts `self` from `other`, the operands are applied in reverse.
    fn sub(self, other: Complex) -> Complex {
        Complex::new(other.real - self.real, other.imag - self.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// The real part adds the product of the imaginary parts instead of subtracting it.
    fn mul(self, other: Complex) -> Complex {
        Complex::new(self.real * other.real + self.imag * other.imag, self.real * other.imag + self.imag * other.real)
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag >= 0.0 { "+" } else { "-" };
        write!(f, "{} {} {}i", self.real, sign, self.imag.abs())
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Complex, ComplexError> {
        Complex::parse(s)
    }
}

//--------------------------------------------------------------------------------------------------
