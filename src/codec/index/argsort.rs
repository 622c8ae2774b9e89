/// Stable argsort: returns the permutation π with keys[π(i)] non-decreasing,
/// equal keys keeping their original row order. Extrema then sit at π(0) and
/// π(N-1). NaN never reaches this point; it is rejected during encoding.
pub fn build_argsort(keys: &[f64]) -> Vec<u32> {
    let mut perm: Vec<u32> = (0..keys.len() as u32).collect();
    perm.sort_by(|&a, &b| keys[a as usize].total_cmp(&keys[b as usize]));
    perm
}
