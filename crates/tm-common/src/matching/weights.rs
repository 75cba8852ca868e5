/// 既定の加点テーブル
///
/// クエリ経路・登録案件経路の共通ルール（location〜portfolio）に加え、
/// 登録案件経路のみ experience / brand_style / lighting を使う。
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    location: 25,
    budget_fit: 20,
    budget_generous: 5,
    category: 15,
    skill: 5,
    style: 10,
    portfolio_token: 3,
    experience: 10,
    brand_style: 5,
    lighting: 5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub location: u32,
    pub budget_fit: u32,
    pub budget_generous: u32,
    pub category: u32,
    /// スキル1件あたり
    pub skill: u32,
    /// スタイル1件あたり
    pub style: u32,
    /// ポートフォリオの一致トークン1件あたり
    pub portfolio_token: u32,
    pub experience: u32,
    /// ブランドスタイル1件あたり
    pub brand_style: u32,
    pub lighting: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_fit_outranks_generous_budget() {
        let weights = ScoreWeights::default();
        assert!(weights.budget_fit > weights.budget_generous);
        assert_eq!(weights, DEFAULT_WEIGHTS);
    }
}
