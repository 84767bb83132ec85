use crate::config::EraCaps;

/// First-publish-year era used to diversify candidate pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraBucket {
    /// Published within the last ten years.
    Recent,
    /// 1990 up to ten years ago.
    Modern,
    /// 1950 up to 1990.
    Classic,
    /// Before 1950.
    Vintage,
    /// No publish year on the record.
    Unknown,
}

impl EraBucket {
    /// Classify a first-publish year relative to `current_year`.
    pub fn classify(year: Option<i32>, current_year: i32) -> Self {
        match year {
            None => EraBucket::Unknown,
            Some(y) if y >= current_year - 10 => EraBucket::Recent,
            Some(y) if y >= 1990 => EraBucket::Modern,
            Some(y) if y >= 1950 => EraBucket::Classic,
            Some(_) => EraBucket::Vintage,
        }
    }

    fn cap(self, caps: &EraCaps) -> usize {
        match self {
            EraBucket::Recent => caps.recent,
            EraBucket::Modern => caps.modern,
            EraBucket::Classic => caps.classic,
            EraBucket::Vintage => caps.vintage,
            EraBucket::Unknown => caps.unknown,
        }
    }
}

/// Apply per-era caps to a candidate pool, preserving relative order.
///
/// Each item is classified by `year_of`; the first `cap` items of each era
/// survive and the rest are dropped. Used on keyword-search hits before
/// scoring so the pool spans publish eras instead of being dominated by
/// whichever era the catalog ranks highest.
pub fn diversify_by_era<T>(
    items: Vec<T>,
    year_of: impl Fn(&T) -> Option<i32>,
    current_year: i32,
    caps: &EraCaps,
) -> Vec<T> {
    let mut taken = [0usize; 5];

    items
        .into_iter()
        .filter(|item| {
            let bucket = EraBucket::classify(year_of(item), current_year);
            let idx = match bucket {
                EraBucket::Recent => 0,
                EraBucket::Modern => 1,
                EraBucket::Classic => 2,
                EraBucket::Vintage => 3,
                EraBucket::Unknown => 4,
            };
            if taken[idx] < bucket.cap(caps) {
                taken[idx] += 1;
                true
            } else {
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    #[test]
    fn classify_boundaries() {
        assert_eq!(EraBucket::classify(Some(NOW), NOW), EraBucket::Recent);
        assert_eq!(EraBucket::classify(Some(NOW - 10), NOW), EraBucket::Recent);
        assert_eq!(EraBucket::classify(Some(NOW - 11), NOW), EraBucket::Modern);
        assert_eq!(EraBucket::classify(Some(1990), NOW), EraBucket::Modern);
        assert_eq!(EraBucket::classify(Some(1989), NOW), EraBucket::Classic);
        assert_eq!(EraBucket::classify(Some(1950), NOW), EraBucket::Classic);
        assert_eq!(EraBucket::classify(Some(1949), NOW), EraBucket::Vintage);
        assert_eq!(EraBucket::classify(None, NOW), EraBucket::Unknown);
    }

    #[test]
    fn caps_limit_each_bucket() {
        let caps = EraCaps {
            recent: 2,
            modern: 1,
            classic: 1,
            vintage: 1,
            unknown: 1,
        };
        // Twelve recent items plus one from each other era.
        let mut items: Vec<Option<i32>> = vec![Some(NOW); 12];
        items.extend([Some(1995), Some(1960), Some(1920), None]);

        let sampled = diversify_by_era(items, |y| *y, NOW, &caps);
        assert_eq!(sampled.len(), 6);
        assert_eq!(sampled.iter().filter(|y| **y == Some(NOW)).count(), 2);
    }

    #[test]
    fn relative_order_preserved() {
        let caps = EraCaps::default();
        let items = vec![Some(2024), Some(1991), Some(2025), Some(1955), None];
        let sampled = diversify_by_era(items.clone(), |y| *y, NOW, &caps);
        // Caps are large enough that nothing is dropped, so order must match.
        assert_eq!(sampled, items);
    }

    #[test]
    fn default_caps_bound_pool_at_thirty() {
        let caps = EraCaps::default();
        let items: Vec<Option<i32>> = (0..200)
            .map(|i| match i % 5 {
                0 => Some(NOW - 1),
                1 => Some(1995),
                2 => Some(1970),
                3 => Some(1940),
                _ => None,
            })
            .collect();
        let sampled = diversify_by_era(items, |y| *y, NOW, &caps);
        assert_eq!(sampled.len(), 30);
    }
}
