// Leaderboard chart contract.
// Chart selectors fall back to their defaults on unrecognized values
// instead of erroring, matching what the UI expects from the query
// string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which leaderboard to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    TopDonated,
    Trending,
    Genres,
    Independent,
    #[default]
    All,
}

impl ChartType {
    /// Lenient parse; anything unrecognized means "all charts".
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("topDonated") => ChartType::TopDonated,
            Some("trending") => ChartType::Trending,
            Some("genres") => ChartType::Genres,
            Some("independent") => ChartType::Independent,
            _ => ChartType::All,
        }
    }
}

/// Aggregation window for donation leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl TimeRange {
    /// Lenient parse; anything unrecognized means weekly.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("monthly") => TimeRange::Monthly,
            Some("yearly") => TimeRange::Yearly,
            _ => TimeRange::Weekly,
        }
    }
}

/// Raw query string of the charts endpoint.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    pub range: Option<String>,
}

/// Leaderboard entry ranked by donation volume.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonatedArtistEntry {
    pub id: String,
    pub name: String,
    pub total_donations: u64,
    pub donations: u32,
    pub image: String,
}

/// Artist gaining donation velocity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingEntry {
    pub id: String,
    pub name: String,
    pub velocity: u32,
    pub change: String,
    pub image: String,
}

/// Genre-level donation aggregate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreEntry {
    pub name: String,
    pub total_donations: u64,
    pub artists: u32,
    pub change: String,
}

/// Per-range top-donated leaderboards, used by the "all" chart view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDonatedCharts {
    pub weekly: Vec<DonatedArtistEntry>,
    pub monthly: Vec<DonatedArtistEntry>,
    pub yearly: Vec<DonatedArtistEntry>,
}

/// Every chart at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllCharts {
    pub top_donated: TopDonatedCharts,
    pub trending: Vec<TrendingEntry>,
    pub genres: Vec<GenreEntry>,
    pub independent: Vec<DonatedArtistEntry>,
}

/// Data section of a single-chart response.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Donated(Vec<DonatedArtistEntry>),
    Trending(Vec<TrendingEntry>),
    Genres(Vec<GenreEntry>),
}

/// Aggregate metadata attached to every chart response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_artists: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_donations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_genres: Option<usize>,
    pub last_updated: DateTime<Utc>,
}

/// Charts endpoint response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ChartData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<AllCharts>,
    pub metadata: ChartMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_parse_falls_back_to_all() {
        assert_eq!(ChartType::parse(Some("topDonated")), ChartType::TopDonated);
        assert_eq!(ChartType::parse(Some("bogus")), ChartType::All);
        assert_eq!(ChartType::parse(None), ChartType::All);
    }

    #[test]
    fn test_time_range_parse_falls_back_to_weekly() {
        assert_eq!(TimeRange::parse(Some("yearly")), TimeRange::Yearly);
        assert_eq!(TimeRange::parse(Some("hourly")), TimeRange::Weekly);
        assert_eq!(TimeRange::parse(None), TimeRange::Weekly);
    }

    #[test]
    fn test_chart_type_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&ChartType::TopDonated).unwrap(),
            "\"topDonated\""
        );
    }
}
