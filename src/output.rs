/// Space-joined indices: `"0 1"` for a found pair, empty for none.
pub fn spaced(result: Option<(usize, usize)>) -> String {
    match result {
        Some((i, j)) => format!("{i} {j}"),
        None => String::new(),
    }
}

/// JSON array string: `"[0,1]"` for a found pair, `"[]"` for none.
pub fn json(result: Option<(usize, usize)>) -> serde_json::Result<String> {
    let indices: Vec<usize> = match result {
        Some((i, j)) => vec![i, j],
        None => Vec::new(),
    };

    serde_json::to_string(&indices)
}
