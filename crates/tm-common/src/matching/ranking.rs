use serde::Serialize;

use crate::Talent;

/// 人材1件分のスコアと加点理由（評価順）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTalent<'a> {
    pub talent: &'a Talent,
    pub score: u32,
    pub rationale: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankPolicy {
    /// スコア 0 の人材を除外する（クエリ経路）
    PositiveOnly,
    /// 全件返す（登録案件経路）
    KeepAll,
}

/// スコア降順に並べる。安定ソートのため同点は入力順（名簿順）を保つ。
pub fn rank<'a>(mut scored: Vec<RankedTalent<'a>>, policy: RankPolicy) -> Vec<RankedTalent<'a>> {
    if policy == RankPolicy::PositiveOnly {
        scored.retain(|candidate| candidate.score > 0);
    }

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talent(id: &str) -> Talent {
        Talent {
            id: id.into(),
            ..Talent::default()
        }
    }

    fn scored<'a>(talent: &'a Talent, score: u32) -> RankedTalent<'a> {
        RankedTalent {
            talent,
            score,
            rationale: vec![],
        }
    }

    #[test]
    fn sorts_descending_and_keeps_ties_in_input_order() {
        let (a, b, c, d) = (talent("a"), talent("b"), talent("c"), talent("d"));
        let ranked = rank(
            vec![scored(&a, 10), scored(&b, 30), scored(&c, 10), scored(&d, 30)],
            RankPolicy::KeepAll,
        );

        let ids: Vec<_> = ranked.iter().map(|r| r.talent.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn positive_only_drops_zero_scores() {
        let (a, b) = (talent("a"), talent("b"));
        let ranked = rank(vec![scored(&a, 0), scored(&b, 5)], RankPolicy::PositiveOnly);
        assert_eq!(ranked.len(), 1);
        assert!(ranked.iter().all(|r| r.score > 0));

        let kept = rank(vec![scored(&a, 0), scored(&b, 5)], RankPolicy::KeepAll);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].score, 0);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank(vec![], RankPolicy::PositiveOnly).is_empty());
    }
}
