pub mod budget;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use vocabulary::{KNOWN_CATEGORIES, KNOWN_CITIES, KNOWN_STYLES, QueryVocabulary};

/// フリーテキストのクエリから読み取った案件条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedGig {
    pub category: Option<String>,
    pub city: Option<String>,
    pub style_tags: Vec<String>,
    pub budget: Option<u64>,
}

impl ParsedGig {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.city.is_none()
            && self.style_tags.is_empty()
            && self.budget.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser {
    vocabulary: QueryVocabulary,
}

impl QueryParser {
    pub fn new(vocabulary: QueryVocabulary) -> Self {
        Self { vocabulary }
    }

    /// クエリを解析する。失敗しない（読み取れない項目は None / 空のまま）。
    ///
    /// - カテゴリ・都市: 宣言順で最初の部分一致のみ
    /// - スタイル: 部分一致したものをすべて
    /// - 予算: 最初の金額表記のみ
    pub fn parse(&self, query: &str) -> ParsedGig {
        let lower_query = query.to_lowercase();

        ParsedGig {
            category: self
                .vocabulary
                .match_category(&lower_query)
                .map(str::to_string),
            city: self.vocabulary.match_city(&lower_query),
            style_tags: self.vocabulary.match_styles(&lower_query),
            budget: budget::extract_budget(&lower_query),
        }
    }
}

/// 既定の語彙でクエリを解析する
pub fn parse_query_to_gig(query: &str) -> ParsedGig {
    QueryParser::default().parse(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_signals_is_empty() {
        let parsed = parse_query_to_gig("someone nice for a small event");
        assert!(parsed.is_empty());
        assert_eq!(parsed, ParsedGig::default());
    }

    #[test]
    fn city_is_normalized_regardless_of_case() {
        assert_eq!(parse_query_to_gig("shoot in GOA").city.as_deref(), Some("Goa"));
        assert_eq!(parse_query_to_gig("... in Goa ...").city.as_deref(), Some("Goa"));
    }

    #[test]
    fn parses_full_query() {
        let parsed =
            parse_query_to_gig("Pastel candid photographer in Goa for a wedding, ₹75k budget");

        assert_eq!(parsed.category.as_deref(), Some("Photography"));
        assert_eq!(parsed.city.as_deref(), Some("Goa"));
        assert_eq!(parsed.style_tags, vec!["pastel", "candid"]);
        assert_eq!(parsed.budget, Some(75_000));
    }

    #[test]
    fn lakh_suffix_scales_budget() {
        assert_eq!(parse_query_to_gig("Rs 1 Lakh").budget, Some(100_000));
        assert_eq!(parse_query_to_gig("₹1lakh").budget, Some(100_000));
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        // "goan" に "goa" が含まれるため都市として拾われる
        let parsed = parse_query_to_gig("goan cuisine shoot");
        assert_eq!(parsed.city.as_deref(), Some("Goa"));
    }

    #[test]
    fn custom_vocabulary_is_respected() {
        static CITIES: &[&str] = &["jaipur"];
        let parser = QueryParser::new(QueryVocabulary {
            cities: CITIES,
            ..QueryVocabulary::default()
        });

        assert_eq!(parser.parse("Jaipur or Goa").city.as_deref(), Some("Jaipur"));
    }
}
