use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 数値 + 任意の桁接尾辞（k / lakh）。
/// 数字に直結した接尾辞は後続の文字に関係なく有効（"75kish"）。
/// 空白を挟んだ接尾辞は単語境界で終わる場合のみ有効（"1 lakh" は可、"2 kids" は不可）。
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9][0-9,]*)(?:(k|lakhs?)|\s+(k|lakhs?)\b)?").unwrap()
});

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;

/// 人材の希望予算レンジ（両端含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetFit {
    /// min <= budget <= max
    Fits,
    /// budget > max
    Generous,
    /// budget < min
    Short,
}

impl BudgetRange {
    pub fn assess(&self, budget: u64) -> BudgetFit {
        if budget >= self.min && budget <= self.max {
            BudgetFit::Fits
        } else if budget > self.max {
            BudgetFit::Generous
        } else {
            BudgetFit::Short
        }
    }
}

/// "₹30k–₹60k" → [30000, 60000]
///
/// - `-` / `–` で分割し、各側の最初の数値を読む
/// - 2つ目が無ければ 1つ目を上限にも使う
/// - 数値が1つも無ければ [0, 0]
pub fn parse_budget_range(text: &str) -> BudgetRange {
    let mut sides = text.split(['-', '–']).map(parse_amount);
    let first = sides.next().flatten();
    let second = sides.next().flatten();

    BudgetRange {
        min: first.unwrap_or(0),
        max: second.or(first).unwrap_or(0),
    }
}

/// テキスト中の最初の金額を読む（"₹50k" → 50000, "1,20,000" → 120000）
pub fn parse_amount(text: &str) -> Option<u64> {
    AMOUNT_RE.captures(text).and_then(|caps| amount_from_captures(&caps))
}

/// group 1 = 数字（カンマ可）, group 2 = 直結の接尾辞, group 3 = 空白を挟んだ接尾辞
pub(crate) fn amount_from_captures(caps: &Captures<'_>) -> Option<u64> {
    let digits = caps.get(1)?.as_str().replace(',', "");
    let base = digits.parse::<u64>().ok()?;
    let suffix = caps.get(2).or_else(|| caps.get(3));

    let multiplier = match suffix.map(|m| m.as_str().to_ascii_lowercase()) {
        Some(suffix) if suffix == "k" => THOUSAND,
        Some(suffix) if suffix.starts_with("lakh") => LAKH,
        _ => 1,
    };

    base.checked_mul(multiplier)
}
