use serde::Serialize;

use crate::matching::RankedTalent;
use crate::parser::ParsedGig;
use crate::{Client, Gig};

/// `POST /api/match` のレスポンス
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse<'a> {
    pub ranked_talents: Vec<RankedTalent<'a>>,
    pub parsed_gig: ParsedGig,
    pub pagination: Pagination,
}

impl<'a> MatchResponse<'a> {
    /// ランキング全件からページを切り出してレスポンスを組み立てる
    pub fn paginated(
        ranked: Vec<RankedTalent<'a>>,
        parsed_gig: ParsedGig,
        page: u32,
        page_size: u32,
    ) -> Self {
        let pagination = Pagination::new(ranked.len(), page, page_size);
        let ranked_talents = ranked
            .into_iter()
            .skip(pagination.offset())
            .take(page_size as usize)
            .collect();

        Self {
            ranked_talents,
            parsed_gig,
            pagination,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub total_pages: usize,
    pub current_page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(total: usize, current_page: u32, page_size: u32) -> Self {
        Self {
            total,
            total_pages: total.div_ceil(page_size.max(1) as usize),
            current_page,
            page_size,
        }
    }

    pub fn offset(&self) -> usize {
        (self.current_page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

/// `GET /api/gigs/:id` のレスポンス
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GigDetailResponse<'a> {
    pub gig: &'a Gig,
    pub client: Option<&'a Client>,
}

/// `GET /api/gigs/:id/matches` のレスポンス（全件・ページングなし）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GigMatchResponse<'a> {
    pub gig: &'a Gig,
    pub client: Option<&'a Client>,
    pub ranked_talents: Vec<RankedTalent<'a>>,
}
