//! Feedback scoring, filtering, and summary helpers.

use agribot_api_models::Feedback;

use crate::core::search::matches_term;

/// Feedback entries per page.
pub const PAGE_SIZE: usize = 5;

/// Feedback plus its derived star rating.
#[derive(Clone, Debug, PartialEq)]
pub struct RatedFeedback {
    /// Entry as served.
    pub feedback: Feedback,
    /// `round(mean(ratings))`, capped at five; zero without ratings.
    pub stars: u8,
    /// Label for `stars`.
    pub label: &'static str,
}

/// Star rating derived from the per-category ratings.
#[must_use]
pub fn star_rating(feedback: &Feedback) -> u8 {
    if feedback.ratings.is_empty() {
        return 0;
    }
    let total: f64 = feedback.ratings.values().sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / feedback.ratings.len() as f64;
    let rounded = mean.round().clamp(0.0, 5.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = rounded as u8;
    stars
}

/// Human label for a star rating.
#[must_use]
pub const fn rating_label(stars: u8) -> &'static str {
    match stars {
        5.. => "Excellent",
        4 => "Very Good",
        3 => "Good",
        2 => "Poor",
        _ => "Very Poor",
    }
}

/// Attach star ratings and labels.
#[must_use]
pub fn enrich(feedbacks: Vec<Feedback>) -> Vec<RatedFeedback> {
    feedbacks
        .into_iter()
        .map(|feedback| {
            let stars = star_rating(&feedback);
            RatedFeedback {
                feedback,
                stars,
                label: rating_label(stars),
            }
        })
        .collect()
}

/// Star filter offered by the list header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarFilter {
    /// No filtering.
    All,
    /// Only entries with exactly this many stars.
    Exactly(u8),
}

impl StarFilter {
    /// Parse a `<select>` value (`all` or `1`..`5`).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value
            .parse::<u8>()
            .ok()
            .filter(|stars| (1..=5).contains(stars))
            .map_or(Self::All, Self::Exactly)
    }

    fn accepts(self, stars: u8) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(wanted) => wanted == stars,
        }
    }
}

/// Filter by author name and stars, newest `updatedAt` first.
#[must_use]
pub fn filter_feedback(items: &[RatedFeedback], term: &str, stars: StarFilter) -> Vec<RatedFeedback> {
    let mut filtered: Vec<_> = items
        .iter()
        .filter(|item| {
            let author = item.feedback.user.full_name.as_deref().unwrap_or_default();
            matches_term(author, term) && stars.accepts(item.stars)
        })
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.feedback.updated_at.cmp(&a.feedback.updated_at));
    filtered
}

/// Mean rating of one category across all entries.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAverage {
    /// Rating category.
    pub category: String,
    /// Mean, with missing ratings counted as zero.
    pub average: f64,
}

/// Per-category means. Categories come from the first entry.
#[must_use]
pub fn category_averages(items: &[RatedFeedback]) -> Vec<CategoryAverage> {
    let Some(first) = items.first() else {
        return Vec::new();
    };
    #[allow(clippy::cast_precision_loss)]
    let count = items.len() as f64;
    first
        .feedback
        .ratings
        .keys()
        .map(|category| {
            let total: f64 = items
                .iter()
                .map(|item| item.feedback.ratings.get(category).copied().unwrap_or(0.0))
                .sum();
            CategoryAverage {
                category: category.clone(),
                average: total / count,
            }
        })
        .collect()
}

/// Number of entries per star rating; index `0` holds one-star entries.
#[must_use]
pub fn star_distribution(items: &[RatedFeedback]) -> [usize; 5] {
    let mut buckets = [0; 5];
    for item in items {
        if let Some(slot) = usize::from(item.stars)
            .checked_sub(1)
            .and_then(|index| buckets.get_mut(index))
        {
            *slot += 1;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use agribot_api_models::FeedbackAuthor;
    use chrono::{TimeZone, Utc};

    fn entry(id: i64, author: &str, ratings: &[(&str, f64)], day: u32) -> Feedback {
        Feedback {
            id,
            title: format!("entry {id}"),
            ratings: ratings
                .iter()
                .map(|(key, value)| ((*key).to_string(), *value))
                .collect(),
            user: FeedbackAuthor {
                id,
                full_name: Some(author.to_string()),
                email: format!("{id}@example.com"),
            },
            updated_at: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).single(),
            ..Feedback::default()
        }
    }

    #[test]
    fn stars_round_the_mean_and_label_it() {
        let rated = enrich(vec![
            entry(1, "Ana", &[("ease", 5.0), ("speed", 4.0)], 1),
            entry(2, "Ben", &[("ease", 2.0), ("speed", 2.4)], 2),
            entry(3, "Cy", &[], 3),
        ]);
        assert_eq!((rated[0].stars, rated[0].label), (5, "Excellent"));
        assert_eq!((rated[1].stars, rated[1].label), (2, "Poor"));
        assert_eq!((rated[2].stars, rated[2].label), (0, "Very Poor"));
        assert_eq!(rating_label(4), "Very Good");
        assert_eq!(rating_label(3), "Good");
    }

    #[test]
    fn filter_matches_author_and_stars_newest_first() {
        let rated = enrich(vec![
            entry(1, "Ana Cruz", &[("ease", 3.0)], 1),
            entry(2, "Ben Ana", &[("ease", 3.0)], 9),
            entry(3, "Cy", &[("ease", 1.0)], 5),
        ]);
        let ids: Vec<_> = filter_feedback(&rated, "ana", StarFilter::All)
            .iter()
            .map(|item| item.feedback.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
        let ids: Vec<_> = filter_feedback(&rated, "", StarFilter::parse("1"))
            .iter()
            .map(|item| item.feedback.id)
            .collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(StarFilter::parse("all"), StarFilter::All);
        assert_eq!(StarFilter::parse("9"), StarFilter::All);
    }

    #[test]
    fn summaries_average_categories_and_bucket_stars() {
        let rated = enrich(vec![
            entry(1, "Ana", &[("ease", 4.0), ("speed", 2.0)], 1),
            entry(2, "Ben", &[("ease", 2.0)], 2),
        ]);
        let averages = category_averages(&rated);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].category, "ease");
        assert!((averages[0].average - 3.0).abs() < f64::EPSILON);
        assert!((averages[1].average - 1.0).abs() < f64::EPSILON);
        assert_eq!(star_distribution(&rated), [0, 1, 1, 0, 0]);
        assert!(category_averages(&[]).is_empty());
    }
}
