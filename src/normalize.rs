/// Derives the short employee key used to join records across exports.
///
/// `"Barber, Candice"` and `"Candice Barber"` both become `"CandiceB"`: the
/// first name followed by the first character of the last name, with the
/// original casing and no separator.
///
/// When the name contains a comma it is read as `Last, First`, splitting on
/// the first comma only. Otherwise the first whitespace token is the first
/// name and the last token is the last name; middle names are dropped.
///
/// A single token without a comma is both first and last name, so `"Cher"`
/// becomes `"CherC"`. Blank input yields an empty key.
pub fn normalize_name(full: &str) -> String {
    let (first, last) = match full.split_once(',') {
        Some((last, first)) => (first.trim(), last.trim()),
        None => {
            let mut parts = full.split_whitespace();
            let Some(first) = parts.next() else {
                return String::new();
            };
            (first, parts.next_back().unwrap_or(first))
        }
    };

    let mut key = String::with_capacity(first.len() + 4);
    key.push_str(first);
    if let Some(initial) = last.chars().next() {
        key.push(initial);
    }
    key
}
