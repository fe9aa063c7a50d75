use rustc_hash::FxHashMap;

/// Exhaustive nested scan, O(n²) time, O(1) space.
///
/// Returns the lexicographically first pair `(i, j)` with `i < j` and
/// `nums[i] + nums[j] == target`, scanning in increasing `i` then `j`.
/// `None` when no pair exists; an empty or single-element slice trivially
/// has none.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for (i, &ni) in nums.iter().enumerate() {
        for (j, &nj) in nums.iter().enumerate().skip(i + 1) {
            if ni + nj == target {
                return Some((i, j));
            }
        }
    }

    None
}

/// Single pass with a value → first-seen-index map, O(n) time and space.
///
/// Stops at the first index `j` whose complement `target - nums[j]` has
/// already been seen, so among all valid pairs this returns the one with
/// the smallest `j` (where [`two_sum`] returns the one with the smallest
/// `i`; the two agree whenever those coincide). Duplicate values keep
/// their earliest index.
pub fn two_sum_seen(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();

    for (j, &n) in nums.iter().enumerate() {
        if let Some(&i) = seen.get(&(target - n)) {
            return Some((i, j));
        }

        seen.entry(n).or_insert(j);
    }

    None
}
