/// Calls `callback` with every `k`-combination of the indices `0..n`, in
/// lexicographic order.
pub fn for_each_combination<F>(n: usize, k: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }
    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(n, k, 0, &mut current, &mut callback);
}

fn generate_combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Leave room for the positions still to fill.
    let last_start = n - (k - current.len());
    for i in start..=last_start {
        current.push(i);
        generate_combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}

/// Splits `itemset` by the sorted `positions` into the picked items and the
/// rest, both in their original order.
pub fn split_at_positions<I: Clone>(itemset: &[I], positions: &[usize]) -> (Vec<I>, Vec<I>) {
    let mut picked = Vec::with_capacity(positions.len());
    let mut rest = Vec::with_capacity(itemset.len() - positions.len());
    let mut next = positions.iter().peekable();

    for (pos, item) in itemset.iter().enumerate() {
        if next.peek() == Some(&&pos) {
            next.next();
            picked.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }

    (picked, rest)
}
