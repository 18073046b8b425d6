// Static leaderboard catalog.
// The charts endpoint serves curated placeholder data until donation
// aggregation lands; the catalog is built once at startup and handed to
// handlers through the application state rather than living in a
// module-level singleton.

use crate::models::{
    AllCharts, ChartData, ChartMetadata, ChartResponse, ChartType, DonatedArtistEntry, GenreEntry,
    TimeRange, TopDonatedCharts, TrendingEntry,
};
use chrono::Utc;

pub struct ChartCatalog {
    top_donated: TopDonatedCharts,
    trending: Vec<TrendingEntry>,
    genres: Vec<GenreEntry>,
    independent: Vec<DonatedArtistEntry>,
}

fn donated(id: &str, name: &str, total: u64, count: u32, image: &str) -> DonatedArtistEntry {
    DonatedArtistEntry {
        id: id.to_string(),
        name: name.to_string(),
        total_donations: total,
        donations: count,
        image: format!("https://i.scdn.co/image/{}", image),
    }
}

fn trending(id: &str, name: &str, velocity: u32, change: &str, image: &str) -> TrendingEntry {
    TrendingEntry {
        id: id.to_string(),
        name: name.to_string(),
        velocity,
        change: change.to_string(),
        image: format!("https://i.scdn.co/image/{}", image),
    }
}

fn genre(name: &str, total: u64, artists: u32, change: &str) -> GenreEntry {
    GenreEntry {
        name: name.to_string(),
        total_donations: total,
        artists,
        change: change.to_string(),
    }
}

impl ChartCatalog {
    /// The built-in dataset.
    pub fn builtin() -> Self {
        Self {
            top_donated: TopDonatedCharts {
                weekly: vec![
                    donated("1", "Taylor Swift", 15420, 89, "ab6761610000e5eb5a00969a4698c3133a15fbb0"),
                    donated("2", "Drake", 12850, 67, "ab6761610000e5eb4293385d324db8558179afd9f"),
                    donated("3", "The Weeknd", 11200, 54, "ab6761610000e5eb214f3cf1cbe7139c4e504b4bb"),
                    donated("4", "Post Malone", 9870, 43, "ab6761610000e5eb6be070445e02f8dbf9c466a88"),
                    donated("5", "Ed Sheeran", 8760, 38, "ab6761610000e5eb7da39dea0a72f380d4fd8b7c9"),
                ],
                monthly: vec![
                    donated("1", "Taylor Swift", 45600, 234, "ab6761610000e5eb5a00969a4698c3133a15fbb0"),
                    donated("2", "Drake", 38900, 189, "ab6761610000e5eb4293385d324db8558179afd9f"),
                    donated("3", "The Weeknd", 32400, 156, "ab6761610000e5eb214f3cf1cbe7139c4e504b4bb"),
                    donated("4", "Post Malone", 28700, 134, "ab6761610000e5eb6be070445e02f8dbf9c466a88"),
                    donated("5", "Ed Sheeran", 25600, 112, "ab6761610000e5eb7da39dea0a72f380d4fd8b7c9"),
                ],
                yearly: vec![
                    donated("1", "Taylor Swift", 234000, 1234, "ab6761610000e5eb5a00969a4698c3133a15fbb0"),
                    donated("2", "Drake", 198000, 987, "ab6761610000e5eb4293385d324db8558179afd9f"),
                    donated("3", "The Weeknd", 167000, 756, "ab6761610000e5eb214f3cf1cbe7139c4e504b4bb"),
                    donated("4", "Post Malone", 145000, 634, "ab6761610000e5eb6be070445e02f8dbf9c466a88"),
                    donated("5", "Ed Sheeran", 128000, 567, "ab6761610000e5eb7da39dea0a72f380d4fd8b7c9"),
                ],
            },
            trending: vec![
                trending("6", "Olivia Rodrigo", 45, "+12", "ab6761610000e5eb7a6f6c86738266f3e50c41f8"),
                trending("7", "Doja Cat", 38, "+8", "ab6761610000e5ebc63aded6f3b28c9cbc7a3b3b"),
                trending("8", "Lil Nas X", 32, "+15", "ab6761610000e5ebc8a11e48c91d3f048c1a0c8b"),
                trending("9", "Billie Eilish", 29, "+5", "ab6761610000e5eb7a6f6c86738266f3e50c41f8"),
                trending("10", "Dua Lipa", 26, "+9", "ab6761610000e5ebc8a11e48c91d3f048c1a0c8b"),
            ],
            genres: vec![
                genre("Pop", 456000, 89, "+15%"),
                genre("Hip-Hop", 389000, 67, "+8%"),
                genre("R&B", 234000, 45, "+12%"),
                genre("Rock", 198000, 56, "+3%"),
                genre("Electronic", 145000, 34, "+18%"),
            ],
            independent: vec![
                donated("11", "Clairo", 8900, 23, "ab6761610000e5eb7a6f6c86738266f3e50c41f8"),
                donated("12", "Phoebe Bridgers", 7600, 19, "ab6761610000e5ebc8a11e48c91d3f048c1a0c8b"),
                donated("13", "Mac DeMarco", 6500, 16, "ab6761610000e5eb7a6f6c86738266f3e50c41f8"),
                donated("14", "Tame Impala", 5400, 14, "ab6761610000e5ebc8a11e48c91d3f048c1a0c8b"),
                donated("15", "King Gizzard", 4800, 12, "ab6761610000e5eb7a6f6c86738266f3e50c41f8"),
            ],
        }
    }

    fn donated_for(&self, range: TimeRange) -> &[DonatedArtistEntry] {
        match range {
            TimeRange::Weekly => &self.top_donated.weekly,
            TimeRange::Monthly => &self.top_donated.monthly,
            TimeRange::Yearly => &self.top_donated.yearly,
        }
    }

    /// Assemble the response for a chart selection.
    pub fn chart(&self, chart_type: ChartType, range: TimeRange) -> ChartResponse {
        let last_updated = Utc::now();
        match chart_type {
            ChartType::TopDonated => {
                let entries = self.donated_for(range);
                ChartResponse {
                    chart_type,
                    time_range: Some(range),
                    data: Some(ChartData::Donated(entries.to_vec())),
                    charts: None,
                    metadata: ChartMetadata {
                        total_artists: Some(entries.len()),
                        total_donations: Some(entries.iter().map(|a| a.total_donations).sum()),
                        total_genres: None,
                        last_updated,
                    },
                }
            }
            ChartType::Trending => ChartResponse {
                chart_type,
                time_range: None,
                data: Some(ChartData::Trending(self.trending.clone())),
                charts: None,
                metadata: ChartMetadata {
                    total_artists: Some(self.trending.len()),
                    total_donations: None,
                    total_genres: None,
                    last_updated,
                },
            },
            ChartType::Genres => ChartResponse {
                chart_type,
                time_range: None,
                data: Some(ChartData::Genres(self.genres.clone())),
                charts: None,
                metadata: ChartMetadata {
                    total_artists: None,
                    total_donations: None,
                    total_genres: Some(self.genres.len()),
                    last_updated,
                },
            },
            ChartType::Independent => ChartResponse {
                chart_type,
                time_range: None,
                data: Some(ChartData::Donated(self.independent.clone())),
                charts: None,
                metadata: ChartMetadata {
                    total_artists: Some(self.independent.len()),
                    total_donations: Some(
                        self.independent.iter().map(|a| a.total_donations).sum(),
                    ),
                    total_genres: None,
                    last_updated,
                },
            },
            ChartType::All => ChartResponse {
                chart_type,
                time_range: None,
                data: None,
                charts: Some(AllCharts {
                    top_donated: self.top_donated.clone(),
                    trending: self.trending.clone(),
                    genres: self.genres.clone(),
                    independent: self.independent.clone(),
                }),
                metadata: ChartMetadata {
                    total_artists: None,
                    total_donations: None,
                    total_genres: None,
                    last_updated,
                },
            },
        }
    }
}
