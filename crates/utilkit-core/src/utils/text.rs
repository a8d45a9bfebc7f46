/// Split text into words at separators (whitespace, `-`, `_`, `.`) and at
/// lowercase-to-uppercase boundaries
fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in text.chars() {
        if ch.is_whitespace() || matches!(ch, '-' | '_' | '.') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert text to camelCase
///
/// # Examples
/// ```
/// use utilkit_core::utils::text::camel_case;
/// assert_eq!(camel_case("background-color"), "backgroundColor");
/// assert_eq!(camel_case("FOO_BAR"), "fooBar");
/// ```
pub fn camel_case(text: &str) -> String {
    words(text)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Convert text to kebab-case
pub fn kebab_case(text: &str) -> String {
    words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
