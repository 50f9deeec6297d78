// Small formatting helpers shared by the slot templates.

pub const RATING_SCALE: i64 = 5;
const FILLED: char = '★';
const EMPTY: char = '☆';

/// Fixed-width star strip: filled stars first, then empty ones.
/// Fractions are truncated and the count is clamped to the scale.
pub fn rating_glyphs(rating: f64) -> String {
    let filled = (rating.trunc() as i64).clamp(0, RATING_SCALE);
    let mut out = String::with_capacity(RATING_SCALE as usize * FILLED.len_utf8());
    for i in 0..RATING_SCALE {
        out.push(if i < filled { FILLED } else { EMPTY });
    }
    out
}

/// Avatar glyph: the first character of a name, or nothing for an empty name.
pub fn initial(name: &str) -> &str {
    match name.char_indices().nth(1) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
