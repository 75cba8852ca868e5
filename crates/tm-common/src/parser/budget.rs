use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::budget::amount_from_captures;

/// "₹75k", "Rs. 1,20,000", "rs 1 lakh"
static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:₹|rs\.?)\s*([0-9][0-9,]*)(?:(k|lakhs?)|\s+(k|lakhs?)\b)?").unwrap()
});

/// 通貨記号なし: 4桁以上の数字（"75000 max"）。桁接尾辞は見ない。
static BARE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9,]{4,})\s*(?:max|budget)?").unwrap());

/// クエリ中の最初の予算表記を読む。通貨付き表記を優先し、無ければ素の数字にフォールバック。
pub fn extract_budget(lower_query: &str) -> Option<u64> {
    if let Some(caps) = CURRENCY_RE.captures(lower_query) {
        return amount_from_captures(&caps);
    }

    BARE_NUMBER_RE
        .captures(lower_query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_marker_with_suffix() {
        assert_eq!(extract_budget("₹75k"), Some(75_000));
        assert_eq!(extract_budget("budget rs 1 lakh"), Some(100_000));
        assert_eq!(extract_budget("₹1lakh"), Some(100_000));
        assert_eq!(extract_budget("rs. 1,20,000 total"), Some(120_000));
    }

    #[test]
    fn falls_back_to_bare_number() {
        assert_eq!(extract_budget("75000 max"), Some(75_000));
        assert_eq!(extract_budget("around 50,000 budget"), Some(50_000));
        // 桁接尾辞は素の数字には適用しない
        assert_eq!(extract_budget("2000k"), Some(2_000));
    }

    #[test]
    fn short_bare_numbers_are_ignored() {
        assert_eq!(extract_budget("need 3 editors"), None);
        assert_eq!(extract_budget("no numbers"), None);
    }

    #[test]
    fn first_match_only() {
        assert_eq!(extract_budget("₹40k to ₹60k"), Some(40_000));
        assert_eq!(extract_budget("5000 or 9000"), Some(5_000));
    }

    #[test]
    fn attached_suffix_survives_trailing_letters() {
        assert_eq!(extract_budget("₹75kish photographer"), Some(75_000));
        assert_eq!(extract_budget("rs 2lakhbudget"), Some(200_000));
        assert_eq!(extract_budget("₹500 kids party"), Some(500));
    }

    #[test]
    fn currency_marker_inside_word_still_matches() {
        // "photographers 5k" の "rs" が通貨記号として拾われる（部分一致）
        assert_eq!(extract_budget("photographers 5k"), Some(5_000));
    }
}
