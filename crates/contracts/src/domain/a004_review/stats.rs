use super::aggregate::{Rating, Review};
use crate::shared::list_query::Coded;

/// One bar of the rating distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBucket {
    pub rating: Rating,
    pub count: usize,
    pub percentage: f64,
}

/// Header and footer figures of the reviews page, always over the full set
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub total: usize,
    pub average: f64,
    /// 5 stars first
    pub distribution: Vec<RatingBucket>,
    pub positive: usize,
    pub helpful_average: u32,
    pub verified: usize,
}

impl ReviewStats {
    pub fn from_reviews(rows: &[Review]) -> Self {
        let total = rows.len();
        let ratio = |n: f64| if total == 0 { 0.0 } else { n / total as f64 };

        let rating_sum: u32 = rows.iter().map(|r| u32::from(r.rating.value())).sum();
        let helpful_sum: u32 = rows.iter().map(|r| r.helpful).sum();

        let distribution = Rating::all()
            .iter()
            .map(|rating| {
                let count = rows.iter().filter(|r| r.rating == *rating).count();
                RatingBucket {
                    rating: *rating,
                    count,
                    percentage: ratio(count as f64) * 100.0,
                }
            })
            .collect();

        Self {
            total,
            average: ratio(rating_sum as f64),
            distribution,
            positive: rows.iter().filter(|r| r.rating.is_positive()).count(),
            helpful_average: ratio(helpful_sum as f64).round() as u32,
            verified: rows.iter().filter(|r| r.verified).count(),
        }
    }

    /// One decimal, e.g. `4.1`
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Whole stars to fill under the average
    pub fn average_stars(&self) -> u8 {
        self.average.round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_review::sample_reviews;

    #[test]
    fn test_stats_over_sample() {
        let stats = ReviewStats::from_reviews(&sample_reviews());
        assert_eq!(stats.total, 8);
        assert!((stats.average - 4.125).abs() < f64::EPSILON);
        assert_eq!(stats.average_display(), "4.1");
        assert_eq!(stats.average_stars(), 4);
        assert_eq!(stats.positive, 6);
        assert_eq!(stats.helpful_average, 12);
        assert_eq!(stats.verified, 8);

        let counts: Vec<usize> = stats.distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![4, 2, 1, 1, 0]);
        assert!((stats.distribution[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(stats.distribution[4].percentage, 0.0);
    }

    #[test]
    fn test_stats_empty() {
        let stats = ReviewStats::from_reviews(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.helpful_average, 0);
        assert_eq!(stats.distribution.len(), 5);
        assert!(stats.distribution.iter().all(|b| b.percentage == 0.0));
    }
}
