use std::cmp::Ordering;

/// Strips the diacritic from a Latin letter, keeping case.
///
/// Covers the Latin-1 supplement and the handful of Latin Extended-A letters
/// that show up in Portuguese and Spanish text.
pub fn strip_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'ē' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'ī' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'ō' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' | 'Ō' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        other => other,
    }
}

/// Primary collation key: no accents, no case.
pub fn fold(s: &str) -> String {
    s.chars()
        .map(strip_diacritic)
        .flat_map(char::to_lowercase)
        .collect()
}

/// pt-BR ordering in three levels: base letters, then accents, then case
/// (lowercase first). Falls back to code point order so the result is total.
pub fn compare_pt_br(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Case-insensitive substring test. An empty (or blank) needle matches.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || haystack.to_lowercase().contains(&needle)
}

/// Escapes text for interpolation into an HTML fragment.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_sort_with_their_base_letter() {
        let mut tags = vec!["Óleo", "Vidro", "Educação", "oficina", "Eletrônicos"];
        tags.sort_by(|a, b| compare_pt_br(a, b));
        assert_eq!(tags, vec!["Educação", "Eletrônicos", "oficina", "Óleo", "Vidro"]);
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(compare_pt_br("vidro", "Vidro"), Ordering::Less);
        assert_eq!(compare_pt_br("Vidro", "Vidro"), Ordering::Equal);
    }

    #[test]
    fn unaccented_before_accented_on_tie() {
        assert_eq!(compare_pt_br("e", "é"), Ordering::Less);
    }

    #[test]
    fn contains_ignores_case_and_blank_needle() {
        assert!(contains_ignore_case("Coleta Seletiva", "seletiva"));
        assert!(contains_ignore_case("Coleta Seletiva", "  "));
        assert!(contains_ignore_case("ÓLEO usado", "óleo"));
        assert!(!contains_ignore_case("Coleta", "vidro"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Óleo" & 'vidro'</b>"#),
            "&lt;b&gt;&quot;Óleo&quot; &amp; &#39;vidro&#39;&lt;/b&gt;"
        );
    }
}
