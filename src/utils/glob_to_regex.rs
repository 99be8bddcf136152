/// Converts a single glob word into regular expression source.
///
/// `*` matches zero or more characters and `?` matches exactly one character, where neither
/// whitespace nor the `concatenator` counts as a character, so wildcards never reach into an
/// already compounded token. A word made only of `*` must match at least one character.
/// Everything else, including `+`, is escaped so it is matched literally.
///
/// # Example
/// ```
/// use phrase_compounder::glob_to_regex;
///
/// assert_eq!(glob_to_regex("tax*", '_'), r"tax[^\s_]*");
/// assert_eq!(glob_to_regex("c++", '_'), r"c\+\+");
/// ```
pub fn glob_to_regex(glob: &str, concatenator: char) -> String {
    let wildcard_class = format!(r"[^\s{}]", regex::escape(&concatenator.to_string()));

    if !glob.is_empty() && glob.chars().all(|c| c == '*') {
        return format!("{}+", wildcard_class);
    }

    let mut pattern = String::with_capacity(glob.len() * 2);
    let mut literal = String::new();

    for c in glob.chars() {
        let quantifier = match c {
            '*' => "*",
            '?' => "",
            _ => {
                literal.push(c);
                continue;
            }
        };

        pattern.push_str(&regex::escape(&literal));
        literal.clear();
        pattern.push_str(&wildcard_class);
        pattern.push_str(quantifier);
    }

    pattern.push_str(&regex::escape(&literal));
    pattern
}
