use std::collections::HashSet;

use tracing::debug;

use super::{
    MatchError,
    budget::{BudgetFit, parse_budget_range},
    ranking::{RankPolicy, RankedTalent, rank},
    weights::ScoreWeights,
};
use crate::{Client, Gig, Talent, parser::ParsedGig};

/// クライアントの備考に含まれる照明の好み → ポートフォリオのキーワード
#[derive(Debug, Clone, Copy)]
pub struct LightingPreference {
    pub note_phrase: &'static str,
    pub portfolio_keyword: &'static str,
    pub label: &'static str,
}

pub const LIGHTING_PREFERENCES: &[LightingPreference] = &[LightingPreference {
    note_phrase: "natural lighting",
    portfolio_keyword: "natural light",
    label: "☀️ Natural light preference match",
}];

/// 共通ルールの入力。クエリ由来の条件と登録案件の条件を同じ形に揃える。
#[derive(Debug, Clone, Default)]
pub struct MatchCriteria<'a> {
    pub city: Option<&'a str>,
    pub budget: Option<u64>,
    pub category: Option<&'a str>,
    /// 小文字化済み
    pub style_tags: HashSet<String>,
}

impl<'a> MatchCriteria<'a> {
    pub fn from_intent(intent: &'a ParsedGig) -> Self {
        Self {
            city: intent.city.as_deref(),
            // 予算 0 は未指定と同じ扱い
            budget: intent.budget.filter(|budget| *budget > 0),
            category: intent.category.as_deref(),
            style_tags: lowercase_set(&intent.style_tags),
        }
    }

    pub fn from_gig(gig: &'a Gig) -> Self {
        Self {
            city: Some(gig.city.as_str()),
            budget: gig.budget.amount(),
            category: Some(gig.category.as_str()),
            style_tags: lowercase_set(&gig.style_tags),
        }
    }
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

#[derive(Debug, Default)]
struct ScoreCard {
    score: u32,
    rationale: Vec<String>,
}

impl ScoreCard {
    fn add(&mut self, points: u32, reason: impl Into<String>) {
        self.score = self.score.saturating_add(points);
        self.rationale.push(reason.into());
    }

    fn into_ranked(self, talent: &Talent) -> RankedTalent<'_> {
        RankedTalent {
            talent,
            score: self.score,
            rationale: self.rationale,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    weights: ScoreWeights,
}

impl MatchingEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// クエリ条件で全人材を採点する（未ソート・未フィルタ）
    pub fn score_intent<'t>(&self, intent: &ParsedGig, talents: &'t [Talent]) -> Vec<RankedTalent<'t>> {
        let criteria = MatchCriteria::from_intent(intent);

        talents
            .iter()
            .map(|talent| {
                let mut card = ScoreCard::default();
                self.apply_common_rules(&criteria, talent, &mut card);
                card.into_ranked(talent)
            })
            .collect()
    }

    /// クエリ条件でランキングする（スコア 0 を除外してスコア降順）
    pub fn match_intent<'t>(&self, intent: &ParsedGig, talents: &'t [Talent]) -> Vec<RankedTalent<'t>> {
        let ranked = rank(self.score_intent(intent, talents), RankPolicy::PositiveOnly);
        debug!(
            candidates = talents.len(),
            matched = ranked.len(),
            "ranked talents for query"
        );
        ranked
    }

    /// 登録案件（＋クライアント）で全人材を採点する（未ソート）
    pub fn score_gig<'t>(
        &self,
        gig: &Gig,
        client: Option<&Client>,
        talents: &'t [Talent],
    ) -> Vec<RankedTalent<'t>> {
        let criteria = MatchCriteria::from_gig(gig);

        talents
            .iter()
            .map(|talent| {
                let mut card = ScoreCard::default();
                self.apply_common_rules(&criteria, talent, &mut card);
                self.apply_experience_rule(gig, talent, &mut card);
                if let Some(client) = client {
                    self.apply_client_rules(client, talent, &mut card);
                }
                card.into_ranked(talent)
            })
            .collect()
    }

    /// 案件IDから案件・クライアントを引いてランキングする（スコア 0 も含む）
    pub fn match_gig<'t>(
        &self,
        gig_id: &str,
        talents: &'t [Talent],
        gigs: &[Gig],
        clients: &[Client],
    ) -> Result<Vec<RankedTalent<'t>>, MatchError> {
        let gig = gigs
            .iter()
            .find(|gig| gig.id == gig_id)
            .ok_or_else(|| MatchError::GigNotFound(gig_id.to_string()))?;
        let client = clients.iter().find(|client| client.id == gig.client_id);

        Ok(self.rank_for_gig(gig, client, talents))
    }

    /// 解決済みの案件・クライアントでランキングする（スコア 0 も含む）
    pub fn rank_for_gig<'t>(
        &self,
        gig: &Gig,
        client: Option<&Client>,
        talents: &'t [Talent],
    ) -> Vec<RankedTalent<'t>> {
        let ranked = rank(self.score_gig(gig, client, talents), RankPolicy::KeepAll);
        debug!(
            gig_id = %gig.id,
            client_found = client.is_some(),
            candidates = ranked.len(),
            "ranked talents for gig"
        );
        ranked
    }

    fn apply_common_rules(&self, criteria: &MatchCriteria<'_>, talent: &Talent, card: &mut ScoreCard) {
        let weights = &self.weights;

        if let Some(city) = criteria.city {
            if talent.city.to_lowercase() == city.to_lowercase() {
                card.add(weights.location, format!("📍 Location Match ({city})"));
            }
        }

        if let Some(budget) = criteria.budget {
            match parse_budget_range(&talent.budget_range).assess(budget) {
                BudgetFit::Fits => card.add(weights.budget_fit, "💰 Budget fits"),
                BudgetFit::Generous => {
                    card.add(weights.budget_generous, "💸 Budget is more than required")
                }
                BudgetFit::Short => {}
            }
        }

        if let Some(category) = criteria.category {
            let category = category.to_lowercase();
            if talent
                .categories
                .iter()
                .any(|candidate| candidate.to_lowercase() == category)
            {
                card.add(weights.category, "✅ Category match");
            }
        }

        let wanted = &criteria.style_tags;

        // スキルは先頭の単語だけを照合する（"Candid photography" → "candid"）
        for skill in &talent.skills {
            let lowered = skill.to_lowercase();
            let keyword = lowered.split(' ').next().unwrap_or_default();
            if wanted.contains(keyword) {
                card.add(weights.skill, format!("🛠️ Skill: {skill}"));
            }
        }

        for style in &talent.style_tags {
            if wanted.contains(&style.to_lowercase()) {
                card.add(weights.style, format!("🎨 Style: {style}"));
            }
        }

        let mut portfolio_matches: Vec<&str> = Vec::new();
        for item in &talent.portfolio {
            for token in item.tags.iter().chain(&item.keywords) {
                if wanted.contains(&token.to_lowercase()) && !portfolio_matches.contains(&token.as_str())
                {
                    portfolio_matches.push(token);
                }
            }
        }
        if !portfolio_matches.is_empty() {
            card.add(
                weights
                    .portfolio_token
                    .saturating_mul(portfolio_matches.len() as u32),
                format!("🖼️ Portfolio: {}", portfolio_matches.join(", ")),
            );
        }
    }

    fn apply_experience_rule(&self, gig: &Gig, talent: &Talent, card: &mut ScoreCard) {
        if gig.expectation_level.accepts(talent.experience_years) {
            card.add(self.weights.experience, "⭐ Experience match");
        }
    }

    fn apply_client_rules(&self, client: &Client, talent: &Talent, card: &mut ScoreCard) {
        for style in &client.brand_style {
            if talent.style_tags.contains(&style.to_lowercase()) {
                card.add(self.weights.brand_style, format!("🤝 Brand style: {style}"));
            }
        }

        let notes = client.notes_and_history.to_lowercase();
        for preference in LIGHTING_PREFERENCES {
            let portfolio_has_keyword = talent.portfolio.iter().any(|item| {
                item.keywords
                    .iter()
                    .any(|keyword| keyword == preference.portfolio_keyword)
            });

            if notes.contains(preference.note_phrase) && portfolio_has_keyword {
                card.add(self.weights.lighting, preference.label);
            }
        }
    }
}

/// 既定の重みでクエリ条件のランキングを返す
pub fn rank_talents_for_query<'t>(intent: &ParsedGig, talents: &'t [Talent]) -> Vec<RankedTalent<'t>> {
    MatchingEngine::default().match_intent(intent, talents)
}

/// 既定の重みで登録案件のランキングを返す
pub fn rank_talents_for_gig<'t>(
    gig_id: &str,
    talents: &'t [Talent],
    gigs: &[Gig],
    clients: &[Client],
) -> Result<Vec<RankedTalent<'t>>, MatchError> {
    MatchingEngine::default().match_gig(gig_id, talents, gigs, clients)
}
