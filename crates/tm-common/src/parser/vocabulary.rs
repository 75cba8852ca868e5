/// キーワード → カテゴリ名。宣言順に評価し、最初に一致したものを採用する。
pub const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("photographer", "Photography"),
    ("director", "Direction"),
    ("editor", "Video Editing"),
    ("stylist", "Styling"),
    ("animator", "Animation"),
    ("writer", "Content Writing"),
];

pub const KNOWN_CITIES: &[&str] = &[
    "goa",
    "mumbai",
    "delhi",
    "bangalore",
    "chennai",
    "hyderabad",
    "pune",
    "kolkata",
];

pub const KNOWN_STYLES: &[&str] = &[
    "portrait",
    "pastel",
    "candid",
    "editorial",
    "bold",
    "street",
    "documentary",
    "vibrant",
    "cinematic",
    "minimal",
    "classic",
    "sustainable",
];

/// パーサが参照する語彙テーブル一式（不変）
#[derive(Debug, Clone, Copy)]
pub struct QueryVocabulary {
    pub categories: &'static [(&'static str, &'static str)],
    pub cities: &'static [&'static str],
    pub styles: &'static [&'static str],
}

impl Default for QueryVocabulary {
    fn default() -> Self {
        Self {
            categories: KNOWN_CATEGORIES,
            cities: KNOWN_CITIES,
            styles: KNOWN_STYLES,
        }
    }
}

impl QueryVocabulary {
    /// 最初に部分一致したカテゴリ
    pub fn match_category(&self, lower_query: &str) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|(keyword, _)| lower_query.contains(keyword))
            .map(|(_, label)| *label)
    }

    /// 最初に部分一致した都市（先頭のみ大文字化）
    pub fn match_city(&self, lower_query: &str) -> Option<String> {
        self.cities
            .iter()
            .find(|city| lower_query.contains(*city))
            .map(|city| capitalize(city))
    }

    /// 部分一致したスタイルをすべて宣言順で返す
    pub fn match_styles(&self, lower_query: &str) -> Vec<String> {
        self.styles
            .iter()
            .filter(|style| lower_query.contains(*style))
            .map(|style| style.to_string())
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_declaration_order() {
        let vocab = QueryVocabulary::default();
        // "editor" と "photographer" の両方を含む場合は宣言順で photographer が勝つ
        assert_eq!(
            vocab.match_category("video editor and photographer"),
            Some("Photography")
        );
        assert_eq!(vocab.match_category("need a stylist"), Some("Styling"));
        assert_eq!(vocab.match_category("need a painter"), None);
    }

    #[test]
    fn city_is_capitalized_and_first_match_wins() {
        let vocab = QueryVocabulary::default();
        assert_eq!(vocab.match_city("shoot in pune or goa"), Some("Goa".into()));
        assert_eq!(vocab.match_city("kolkata"), Some("Kolkata".into()));
        assert_eq!(vocab.match_city("anywhere"), None);
    }

    #[test]
    fn styles_collect_every_match_in_list_order() {
        let vocab = QueryVocabulary::default();
        assert_eq!(
            vocab.match_styles("candid, pastel and cinematic"),
            vec!["pastel", "candid", "cinematic"]
        );
        assert!(vocab.match_styles("nothing here").is_empty());
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("delhi"), "Delhi");
    }
}
