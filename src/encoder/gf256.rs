/// GF(256) arithmetic for QR Reed-Solomon coding
/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D), generator alpha = 2
use crate::error::{QrError, Result};

const PRIMITIVE: u16 = 0x11D;

struct Tables {
    exp: [u8; 255],
    log: [u8; 256],
}

impl Tables {
    const fn build() -> Self {
        let mut exp = [0u8; 255];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        let mut i = 0;
        while i < 255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE;
            }
            i += 1;
        }
        Self { exp, log }
    }
}

// Built at compile time; read-only for the life of the process.
static TABLES: Tables = Tables::build();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n, with `n` reduced modulo 255
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }

    /// Discrete log of `a`; zero has none
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(TABLES.log[a as usize])
        }
    }

    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[(log_a + log_b) % 255]
    }

    /// `a / b`. `0 / 0` is defined as 0; any other division by zero is an error.
    pub fn div(a: u8, b: u8) -> Result<u8> {
        if a == 0 {
            return Ok(0);
        }
        if b == 0 {
            debug_assert!(false, "GF(256) division of {a} by zero");
            return Err(QrError::DivideByZero);
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        Ok(TABLES.exp[(log_a + 255 - log_b) % 255])
    }

    pub fn pow(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = TABLES.log[a as usize] as usize;
        TABLES.exp[(log_a * (n % 255)) % 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mul_slow(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            let carry = a & 0x80 != 0;
            a <<= 1;
            if carry {
                a ^= 0x1D;
            }
            b >>= 1;
        }
        product
    }

    #[test]
    fn test_gf256_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::div(0, 5).unwrap(), 0);
        assert_eq!(Gf256::div(7, 7).unwrap(), 1);
        assert_eq!(Gf256::div(123, 123).unwrap(), 1);
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::log(29), Some(8));
        assert_eq!(Gf256::log(0), None);
    }

    #[test]
    fn test_mul_matches_carryless_product() {
        for a in 0..=255u8 {
            for b in (0..=255u8).step_by(7) {
                assert_eq!(Gf256::mul(a, b), mul_slow(a, b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_div_inverts_mul() {
        for a in 1..=255u8 {
            for b in 1..=255u8 {
                let p = Gf256::mul(a, b);
                assert_eq!(Gf256::div(p, b).unwrap(), a);
            }
        }
    }

    #[test]
    fn test_zero_over_zero_is_zero() {
        assert_eq!(Gf256::div(0, 0).unwrap(), 0);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_divide_by_zero_is_error() {
        assert!(matches!(Gf256::div(9, 0), Err(QrError::DivideByZero)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "division of 9 by zero")]
    fn test_divide_by_zero_asserts_in_debug() {
        let _ = Gf256::div(9, 0);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Gf256::pow(2, 255), 1);
        assert_eq!(Gf256::pow(2, 256), 2);
        assert_eq!(Gf256::pow(2, 260), Gf256::exp(5));
        assert_eq!(Gf256::pow(0, 10), 0);
        assert_eq!(Gf256::pow(0, 0), 1);
        assert_eq!(Gf256::exp(255), 1);
    }
}
