//! Small combinatorial primitives shared by the coordinate codecs in [`crate::cubie`].
//!
//! Binomial coefficients up to `C(12, 12)` (the largest needed: the E-slice
//! and UD-layer edge coordinates range over all 12 edge slots) and the two
//! array rotations the Lehmer-style encode/decode loops use.

/// `CNK[n][k]` is `C(n, k)` for `0 <= n, k <= 12`. `C(n, k) = 0` when `k > n`.
pub static CNK: [[u32; 13]; 13] = build_cnk();

const fn build_cnk() -> [[u32; 13]; 13] {
    let mut table = [[0u32; 13]; 13];
    let mut n = 0;
    while n <= 12 {
        table[n][0] = 1;
        let mut k = 1;
        while k <= n {
            table[n][k] = table[n - 1][k - 1] + if k <= n - 1 { table[n - 1][k] } else { 0 };
            k += 1;
        }
        n += 1;
    }
    table
}

/// Shift `arr[l..=r]` left by one, wrapping `arr[l]` around to `arr[r]`.
pub fn rotate_left(arr: &mut [u8], l: usize, r: usize) {
    let tmp = arr[l];
    for i in l..r {
        arr[i] = arr[i + 1];
    }
    arr[r] = tmp;
}

/// Shift `arr[l..=r]` right by one, wrapping `arr[r]` around to `arr[l]`.
/// The exact inverse of [`rotate_left`].
pub fn rotate_right(arr: &mut [u8], l: usize, r: usize) {
    let tmp = arr[r];
    for i in (l + 1..=r).rev() {
        arr[i] = arr[i - 1];
    }
    arr[l] = tmp;
}

/// Encode the relative order of `vals` (a permutation of the `k` ids found
/// in `targets`, `targets` sorted ascending) as a mixed-radix integer in
/// `0..k!`. Used by the four "named subset" coordinates
/// (`URFtoDLF`, `URtoUL`, `UBtoDF`, `URtoDF`) after their combination part
/// has already been peeled off.
///
/// Must traverse `j = k-1 ..= 1` (all non-fixed positions); stopping one
/// short silently drops the most significant digit and the codec is no
/// longer a bijection.
pub fn encode_perm(vals: &mut [u8], targets: &[u8]) -> u32 {
    let k = vals.len();
    let mut x: u32 = 0;
    for j in (1..k).rev() {
        let mut rotations: u32 = 0;
        while vals[j] != targets[j] {
            rotate_left(vals, 0, j);
            rotations += 1;
        }
        x = (j as u32 + 1) * x + rotations;
    }
    x
}

/// Inverse of [`encode_perm`]: reconstructs the permutation of `targets` at index `idx`.
pub fn decode_perm(targets: &[u8], mut idx: u32) -> Vec<u8> {
    let k = targets.len();
    let mut vals = targets.to_vec();
    for j in 1..k {
        let radix = j as u32 + 1;
        let rotations = idx % radix;
        idx /= radix;
        for _ in 0..rotations {
            rotate_right(&mut vals, 0, j);
        }
    }
    vals
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cnk_matches_pascals_triangle() {
        assert_eq!(CNK[12][4], 495);
        assert_eq!(CNK[12][3], 220);
        assert_eq!(CNK[8][6], 28);
        assert_eq!(CNK[0][0], 1);
        assert_eq!(CNK[5][7], 0);
    }

    #[test]
    fn perm_roundtrips() {
        let targets = [0u8, 1, 2, 3];
        for idx in 0..24u32 {
            let mut vals = decode_perm(&targets, idx);
            let back = encode_perm(&mut vals, &targets);
            assert_eq!(back, idx);
        }
    }

    #[test]
    fn rotate_left_right_are_inverses() {
        let mut arr = [0u8, 1, 2, 3, 4];
        let original = arr;
        rotate_left(&mut arr, 1, 3);
        assert_ne!(arr, original);
        rotate_right(&mut arr, 1, 3);
        assert_eq!(arr, original);
    }
}
