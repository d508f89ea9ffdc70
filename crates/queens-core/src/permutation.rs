//! Factorial-number-system decoding of permutation indices.
//!
//! Index `i` in `[0, n!)` maps to the `i`-th permutation of `0..n` in
//! lexicographic order. Decoding first splits `i` into one digit per position
//! (a Lehmer code, each digit indexing into the values still unused), then
//! lifts every digit past the smaller-or-equal values placed before it.

/// Reusable scratch space for decoding many indices of one board size.
///
/// Holds `fact[k] = k!` for `k in 0..n` and the permutation buffer that
/// [`PermutationDecoder::decode`] overwrites on every call.
#[derive(Debug, Clone)]
pub struct PermutationDecoder {
    fact: Vec<u64>,
    perm: Vec<usize>,
}

impl PermutationDecoder {
    pub fn new(board_size: usize) -> Self {
        let mut fact = Vec::with_capacity(board_size);
        if board_size > 0 {
            fact.push(1u64);
            for k in 1..board_size {
                let previous = fact[k - 1];
                fact.push(previous.wrapping_mul(k as u64));
            }
        }

        Self {
            fact,
            perm: vec![0; board_size],
        }
    }

    pub fn board_size(&self) -> usize {
        self.perm.len()
    }

    /// Decodes `index` into the buffer and returns it.
    ///
    /// `index` must be below `n!`; larger values produce an unspecified
    /// sequence rather than an error.
    pub fn decode(&mut self, mut index: u64) -> &[usize] {
        let n = self.perm.len();

        for b in 0..n {
            let place = self.fact[n - 1 - b];
            // place is zero only once k! has wrapped past 2^64 (k >= 66).
            self.perm[b] = index.checked_div(place).unwrap_or(0) as usize;
            index = index.checked_rem(place).unwrap_or(index);
        }

        for b in (1..n).rev() {
            for a in (0..b).rev() {
                if self.perm[a] <= self.perm[b] {
                    self.perm[b] += 1;
                }
            }
        }

        &self.perm
    }
}

/// Decodes a single index without keeping scratch buffers around.
pub fn decode(board_size: usize, index: u64) -> Vec<usize> {
    PermutationDecoder::new(board_size).decode(index).to_vec()
}

/// Returns the index that [`decode`] maps to `perm`.
///
/// `perm` must be a permutation of `0..perm.len()`.
pub fn rank(perm: &[usize]) -> u64 {
    let n = perm.len();
    let mut index = 0u64;
    for (position, &value) in perm.iter().enumerate() {
        let digit = perm[position + 1..]
            .iter()
            .filter(|&&later| later < value)
            .count() as u64;
        index = index
            .wrapping_mul((n - position) as u64)
            .wrapping_add(digit);
    }
    index
}
