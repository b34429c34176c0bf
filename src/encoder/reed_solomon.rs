/// Reed-Solomon error correction codeword generation for QR codes
use std::borrow::Cow;
use std::sync::OnceLock;

use super::gf256::Gf256;

/// Largest EC codewords-per-block value used by any QR version/level
pub const MAX_CACHED_DEGREE: usize = 30;

static GENERATORS: OnceLock<Vec<Vec<u8>>> = OnceLock::new();

/// Generator polynomial prod_{i<degree} (x - alpha^i), highest power first,
/// leading 1 omitted (`degree` coefficients).
fn build_generator(degree: usize) -> Vec<u8> {
    let mut poly = vec![0u8; degree];
    if degree == 0 {
        return poly;
    }
    poly[degree - 1] = 1;

    let mut root = 1u8;
    for _ in 0..degree {
        for j in 0..degree {
            poly[j] = Gf256::mul(poly[j], root);
            if j + 1 < degree {
                poly[j] ^= poly[j + 1];
            }
        }
        root = Gf256::mul(root, 2);
    }
    poly
}

fn generator(degree: usize) -> Cow<'static, [u8]> {
    if degree <= MAX_CACHED_DEGREE {
        let cache = GENERATORS
            .get_or_init(|| (0..=MAX_CACHED_DEGREE).map(build_generator).collect());
        Cow::Borrowed(&cache[degree])
    } else {
        Cow::Owned(build_generator(degree))
    }
}

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    divisor: Cow<'static, [u8]>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            divisor: generator(num_ecc_codewords),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    /// Remainder of data(x) * x^n divided by the generator polynomial
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.num_ecc_codewords;
        let mut remainder = vec![0u8; n];
        if n == 0 {
            return remainder;
        }
        for &byte in data {
            let factor = byte ^ remainder[0];
            remainder.rotate_left(1);
            remainder[n - 1] = 0;
            for (r, &coeff) in remainder.iter_mut().zip(self.divisor.iter()) {
                *r ^= Gf256::mul(coeff, factor);
            }
        }
        remainder
    }
}
