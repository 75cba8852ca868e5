pub mod api;
pub mod dataset;
pub mod logging;
pub mod matching;
pub mod parser;

use serde::{Deserialize, Serialize};

use matching::budget::parse_amount;

// Shared records loaded once from the static roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub budget_range: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub client_type: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub sub_industry: String,
    #[serde(default)]
    pub brand_style: Vec<String>,
    #[serde(default)]
    pub notes_and_history: String,
    #[serde(default)]
    pub talent_preferences: TalentPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentPreferences {
    #[serde(default)]
    pub location_of_talent: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brief_text: String,
    pub category: String,
    pub city: String,
    pub budget: GigBudget,
    pub client_id: String,
    #[serde(default)]
    pub style_tags: Vec<String>,
    pub expectation_level: ExpectationLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<StartDate>,
}

/// 案件予算。金額が読み取れない文字列（"To be discussed" など）は `Undetermined`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGigBudget", into = "RawGigBudget")]
pub enum GigBudget {
    Amount(u64),
    Undetermined,
}

const UNDETERMINED_BUDGET_TEXT: &str = "To be discussed";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawGigBudget {
    Amount(u64),
    Text(String),
}

impl From<RawGigBudget> for GigBudget {
    fn from(value: RawGigBudget) -> Self {
        match value {
            RawGigBudget::Amount(amount) => GigBudget::Amount(amount),
            RawGigBudget::Text(text) => GigBudget::from_text(&text),
        }
    }
}

impl From<GigBudget> for RawGigBudget {
    fn from(value: GigBudget) -> Self {
        match value {
            GigBudget::Amount(amount) => RawGigBudget::Amount(amount),
            GigBudget::Undetermined => RawGigBudget::Text(UNDETERMINED_BUDGET_TEXT.into()),
        }
    }
}

impl GigBudget {
    pub fn from_text(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case(UNDETERMINED_BUDGET_TEXT) {
            return GigBudget::Undetermined;
        }

        parse_amount(text)
            .map(GigBudget::Amount)
            .unwrap_or(GigBudget::Undetermined)
    }

    pub fn amount(&self) -> Option<u64> {
        match self {
            GigBudget::Amount(amount) => Some(*amount),
            GigBudget::Undetermined => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectationLevel {
    Basic,
    Intermediate,
    Pro,
    TopTier,
}

impl ExpectationLevel {
    /// 経験年数がレベルの想定レンジに入るか。レンジ同士は重なる（intermediate と pro など）。
    pub fn accepts(self, experience_years: u32) -> bool {
        match self {
            ExpectationLevel::Basic => (1..=3).contains(&experience_years),
            ExpectationLevel::Intermediate => (3..=6).contains(&experience_years),
            ExpectationLevel::Pro => experience_years >= 5,
            ExpectationLevel::TopTier => experience_years >= 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StartDate {
    Timestamp(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gig_budget_accepts_numbers_and_text() {
        let amount: GigBudget = serde_json::from_str("75000").unwrap();
        assert_eq!(amount, GigBudget::Amount(75000));

        let tbd: GigBudget = serde_json::from_str("\"To be discussed\"").unwrap();
        assert_eq!(tbd, GigBudget::Undetermined);

        let text: GigBudget = serde_json::from_str("\"₹50k\"").unwrap();
        assert_eq!(text, GigBudget::Amount(50_000));

        let garbage: GigBudget = serde_json::from_str("\"flexible\"").unwrap();
        assert_eq!(garbage, GigBudget::Undetermined);
    }

    #[test]
    fn undetermined_budget_serializes_as_text() {
        let json = serde_json::to_string(&GigBudget::Undetermined).unwrap();
        assert_eq!(json, "\"To be discussed\"");
    }

    #[test]
    fn expectation_levels_overlap() {
        assert!(ExpectationLevel::Basic.accepts(3));
        assert!(ExpectationLevel::Intermediate.accepts(3));
        assert!(ExpectationLevel::Intermediate.accepts(5));
        assert!(ExpectationLevel::Pro.accepts(5));
        assert!(!ExpectationLevel::Basic.accepts(0));
        assert!(!ExpectationLevel::TopTier.accepts(6));
        assert!(ExpectationLevel::TopTier.accepts(12));
    }

    #[test]
    fn expectation_level_uses_kebab_case() {
        let level: ExpectationLevel = serde_json::from_str("\"top-tier\"").unwrap();
        assert_eq!(level, ExpectationLevel::TopTier);
    }

    #[test]
    fn client_keeps_extra_preferences() {
        let client: Client = serde_json::from_str(
            r#"{
                "id": "c1",
                "name": "The Loom Art",
                "type": "brand",
                "brand_style": ["Minimal"],
                "notes_and_history": "",
                "talent_preferences": { "location_of_talent": "Goa", "languages": ["en"] }
            }"#,
        )
        .unwrap();

        assert_eq!(client.client_type, "brand");
        assert_eq!(
            client.talent_preferences.location_of_talent.as_deref(),
            Some("Goa")
        );
        assert!(client.talent_preferences.extra.contains_key("languages"));
    }
}
