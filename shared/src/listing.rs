//! Client-side filtering, sorting and pagination of the tournament snapshot.
//!
//! The whole collection is fetched once; every filter or page change re-runs
//! [`derive`] over that snapshot. Nothing here mutates the tournaments.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::SharedError;
use crate::models::tournament::{Tournament, TournamentStatus, TournamentType};

/// Tournaments shown per page
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TournamentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TournamentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Value used by the `<select>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Heading prefix for the result list
    pub fn heading(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(TournamentStatus::Upcoming) => "Upcoming",
            StatusFilter::Only(TournamentStatus::Ongoing) => "Live",
            StatusFilter::Only(TournamentStatus::Completed) => "Completed",
        }
    }
}

impl FromStr for StatusFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TournamentType),
}

impl TypeFilter {
    pub fn matches(&self, tournament_type: TournamentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == tournament_type,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            s.parse().map(TypeFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest start date first
    #[default]
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "date-oldest")]
    DateOldest,
    /// Highest prize pool first
    #[serde(rename = "prize")]
    Prize,
    #[serde(rename = "name")]
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Date, SortKey::DateOldest, SortKey::Prize, SortKey::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::DateOldest => "date-oldest",
            SortKey::Prize => "prize",
            SortKey::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date (Newest First)",
            SortKey::DateOldest => "Date (Oldest First)",
            SortKey::Prize => "Prize Pool (Highest First)",
            SortKey::Name => "Name (A-Z)",
        }
    }

    fn compare(&self, a: &Tournament, b: &Tournament) -> Ordering {
        match self {
            SortKey::Date => b.start_date.cmp(&a.start_date),
            SortKey::DateOldest => a.start_date.cmp(&b.start_date),
            SortKey::Prize => b.prize_or_zero().cmp(&a.prize_or_zero()),
            SortKey::Name => compare_names(&a.name, &b.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(SortKey::Date),
            "date-oldest" => Ok(SortKey::DateOldest),
            "prize" => Ok(SortKey::Prize),
            "name" => Ok(SortKey::Name),
            other => Err(SharedError::Conversion(format!("Unknown sort key: {}", other))),
        }
    }
}

/// Case-insensitive comparison with a byte-order tiebreak so the order is total
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Filter, sort and page selection owned by the tournaments view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub status: StatusFilter,
    pub tournament_type: TypeFilter,
    pub sort: SortKey,
    /// 1-based
    pub page: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            tournament_type: TypeFilter::All,
            sort: SortKey::Date,
            page: 1,
        }
    }
}

impl FilterConfig {
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_type(&mut self, tournament_type: TypeFilter) {
        self.tournament_type = tournament_type;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Pulls `page` back into `[1, total_pages]`; returns true if it moved
    pub fn clamp_page(&mut self, total_pages: u32) -> bool {
        let clamped = clamp(self.page, total_pages);
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    fn matches(&self, tournament: &Tournament) -> bool {
        self.status.matches(tournament.status) && self.tournament_type.matches(tournament.tournament_type)
    }
}

fn clamp(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Never zero: an empty result still renders one (empty) page
pub fn total_pages(filtered_count: usize) -> u32 {
    let pages = filtered_count.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One rendered page of the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub items: Vec<&'a Tournament>,
    /// The page actually shown, after clamping
    pub page: u32,
    pub total_pages: u32,
    pub filtered_count: usize,
}

impl PageView<'_> {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }
}

/// Applies the status/type filters and the stable sort
pub fn filter_and_sort<'a>(all: &'a [Tournament], config: &FilterConfig) -> Vec<&'a Tournament> {
    let mut filtered: Vec<&Tournament> = all.iter().filter(|t| config.matches(t)).collect();
    filtered.sort_by(|a, b| config.sort.compare(a, b));
    filtered
}

/// Produces the page selected by `config`.
///
/// If `config.page` lies past the end of the filtered list, the last page is
/// returned and `PageView::page` reports the clamped value; callers owning the
/// config should follow up with [`FilterConfig::clamp_page`].
pub fn derive<'a>(all: &'a [Tournament], config: &FilterConfig) -> PageView<'a> {
    let filtered = filter_and_sort(all, config);
    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count);
    let page = clamp(config.page, total_pages);

    let start = (page as usize - 1) * PAGE_SIZE;
    let items = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

    PageView {
        items,
        page,
        total_pages,
        filtered_count,
    }
}

/// Header counters shown above the tournament grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TournamentStats {
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub total_prize_pool: u64,
}

impl TournamentStats {
    pub fn from_tournaments(all: &[Tournament]) -> Self {
        all.iter().fold(Self::default(), |mut stats, t| {
            match t.status {
                TournamentStatus::Upcoming => stats.upcoming += 1,
                TournamentStatus::Ongoing => stats.ongoing += 1,
                TournamentStatus::Completed => stats.completed += 1,
            }
            stats.total_prize_pool = stats.total_prize_pool.saturating_add(t.prize_or_zero());
            stats
        })
    }
}

/// Compact rupee amount: `₹950`, `₹1.5K`, `₹2.0L`, `₹1.2Cr`
pub fn format_prize_pool(amount: u64) -> String {
    const CRORE: u64 = 10_000_000;
    const LAKH: u64 = 100_000;
    const THOUSAND: u64 = 1_000;

    if amount >= CRORE {
        format!("₹{:.1}Cr", amount as f64 / CRORE as f64)
    } else if amount >= LAKH {
        format!("₹{:.1}L", amount as f64 / LAKH as f64)
    } else if amount >= THOUSAND {
        format!("₹{:.1}K", amount as f64 / THOUSAND as f64)
    } else {
        format!("₹{}", amount)
    }
}
