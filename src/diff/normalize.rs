/// Normalize a marked-up document body into comparison lines.
///
/// Adjacent tags are split onto their own lines (a break is inserted between
/// every `>`/`<` pair), each line is trimmed, and empty lines are dropped, so
/// line comparison reflects markup structure rather than accidental
/// whitespace or tag placement.
pub fn normalize_lines(body: &str) -> Vec<String> {
    body.replace("><", ">\n<")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
