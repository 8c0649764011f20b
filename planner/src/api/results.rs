use serde::Serialize;

use super::error::ApiError;
use super::models::{MapParams, Mode, RouteCandidate, SearchParams};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum BadgeStyle {
    First,
    Second,
    Third,
    Default,
}

impl BadgeStyle {
    pub(super) fn for_rank(rank: usize) -> Self {
        match rank {
            0 => BadgeStyle::First,
            1 => BadgeStyle::Second,
            2 => BadgeStyle::Third,
            _ => BadgeStyle::Default,
        }
    }

    pub(super) fn color(self) -> &'static str {
        match self {
            BadgeStyle::First => "#4CAF50",
            BadgeStyle::Second => "#FF9800",
            BadgeStyle::Third => "#9E9E9E",
            BadgeStyle::Default => "#2196F3",
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct Badge {
    pub(super) style: BadgeStyle,
    pub(super) color: &'static str,
    pub(super) label: String,
}

#[derive(Debug, Serialize)]
pub(super) struct RouteCard {
    pub(super) rank: usize,
    pub(super) mode: Mode,
    pub(super) icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) medal: Option<&'static str>,
    pub(super) badge: Badge,
    pub(super) score: f64,
    pub(super) distance_km: f64,
    pub(super) time_min: f64,
    pub(super) co2_g: f64,
    pub(super) target: MapParams,
    pub(super) link: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ResultsView {
    pub(super) title: &'static str,
    pub(super) subtitle: String,
    pub(super) from: String,
    pub(super) to: String,
    pub(super) cards: Vec<RouteCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) empty_message: Option<&'static str>,
}

fn card(rank: usize, candidate: &RouteCandidate, params: &SearchParams) -> Result<RouteCard, ApiError> {
    let style = BadgeStyle::for_rank(rank);
    let target = MapParams {
        mode: Some(candidate.mode.to_string()),
        from: params.from.clone(),
        to: params.to.clone(),
    };
    let link = target.map_link()?;

    Ok(RouteCard {
        rank,
        mode: candidate.mode,
        icon: candidate.mode.icon(),
        medal: MEDALS.get(rank).copied(),
        badge: Badge {
            style,
            color: style.color(),
            label: format!("Score: {}", candidate.score),
        },
        score: candidate.score,
        distance_km: candidate.distance_km,
        time_min: candidate.time_min,
        co2_g: candidate.co2_g,
        target,
        link,
    })
}

/// Turns a ranked selection into the cards of the results screen.
pub(super) fn present_results(
    params: &SearchParams,
    ranked: &[RouteCandidate],
) -> Result<ResultsView, ApiError> {
    let cards = ranked
        .iter()
        .enumerate()
        .map(|(rank, candidate)| card(rank, candidate, params))
        .collect::<Result<Vec<_>, _>>()?;

    let empty_message = cards.is_empty().then_some("No routes found.");

    Ok(ResultsView {
        title: "Top 3 Routes",
        subtitle: format!("From {} to {}", params.from, params.to),
        from: params.from.clone(),
        to: params.to.clone(),
        cards,
        empty_message,
    })
}
