use crate::config::GeneratorConfig;
use anyhow::{ensure, Context, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// A weighted pool of candidate values. An entry with weight `k` in a pool
/// of total weight `w` is sampled with probability `k / w`, which is
/// equivalent to holding `k` literal copies of the entry in a flat list
/// without paying for the duplication in memory.
#[derive(Debug)]
pub struct Pool {
    values: Vec<String>,
    dist: WeightedIndex<u32>,
}

impl Pool {
    pub fn from_weighted(entries: Vec<(String, u32)>) -> Result<Self> {
        ensure!(
            !entries.is_empty(),
            "A sampling pool must contain at least one entry"
        );
        let dist = WeightedIndex::new(entries.iter().map(|(_, weight)| *weight))
            .context("Failed to build the weighted sampling distribution")?;
        let values = entries.into_iter().map(|(value, _)| value).collect();
        Ok(Self { values, dist })
    }

    /// Draws one value, with replacement. Selections are independent
    /// across calls.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &str {
        &self.values[self.dist.sample(rng)]
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Builds the user pool: `user_1 .. user_<n>` at weight 1, with each power
/// user's weight raised by `power_user_weight`. A power user outside the
/// base range still enters the pool, carrying only the extra weight,
/// mirroring how appending copies to a base list behaves.
pub fn user_pool(config: &GeneratorConfig) -> Result<Pool> {
    let mut entries: Vec<(String, u32)> = (1..=config.unique_users)
        .map(|i| (format!("user_{i}"), 1))
        .collect();

    for power_user in &config.power_users {
        match entries.iter_mut().find(|(id, _)| id == power_user) {
            Some((_, weight)) => *weight += config.power_user_weight,
            None => entries.push((power_user.clone(), config.power_user_weight)),
        }
    }

    Pool::from_weighted(entries)
}

/// Builds the message pool: common and complex messages at weight 1, spam
/// messages at `spam_weight`.
pub fn message_pool(config: &GeneratorConfig) -> Result<Pool> {
    let entries = config
        .common_messages
        .iter()
        .chain(&config.complex_messages)
        .map(|m| (m.clone(), 1))
        .chain(
            config
                .spam_messages
                .iter()
                .map(|m| (m.clone(), config.spam_weight)),
        )
        .collect();

    Pool::from_weighted(entries)
}

#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::pool::{message_pool, user_pool, Pool};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_empty_pool_is_rejected() {
        let result = Pool::from_weighted(vec![]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "A sampling pool must contain at least one entry"
        );
    }

    #[test]
    fn test_zero_total_weight_is_rejected() {
        assert!(Pool::from_weighted(vec![("a".to_string(), 0)]).is_err());
    }

    #[test]
    fn test_sample_only_returns_pool_values() {
        let pool = Pool::from_weighted(vec![
            ("a".to_string(), 1),
            ("b".to_string(), 3),
            ("c".to_string(), 1),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let value = pool.sample(&mut rng);
            assert!(value == "a" || value == "b" || value == "c");
        }
    }

    #[test]
    fn test_zero_weight_entry_is_never_sampled() {
        let pool =
            Pool::from_weighted(vec![("live".to_string(), 1), ("dead".to_string(), 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(pool.sample(&mut rng), "live");
        }
    }

    #[test]
    fn test_user_pool_contains_base_and_power_users() {
        let config = GeneratorConfig::default();
        let pool = user_pool(&config).unwrap();
        // Power users already sit inside the base range, so no extra
        // entries are added for them.
        assert_eq!(pool.len(), 10_000);
        assert!(pool.contains("user_1"));
        assert!(pool.contains("user_10000"));
        assert!(pool.contains("user_202"));
        assert!(!pool.contains("user_10001"));
    }

    #[test]
    fn test_out_of_range_power_user_is_appended() {
        let config = GeneratorConfig {
            unique_users: 5,
            power_users: vec!["user_99".to_string()],
            ..GeneratorConfig::default()
        };
        let pool = user_pool(&config).unwrap();
        assert_eq!(pool.len(), 6);
        assert!(pool.contains("user_99"));
    }

    #[test]
    fn test_message_pool_covers_all_categories() {
        let config = GeneratorConfig::default();
        let pool = message_pool(&config).unwrap();
        assert_eq!(pool.len(), 7 + 4 + 5);
        assert!(pool.contains("Just checking in."));
        assert!(pool.contains(""));
        assert!(pool.contains("Lorem Impsum"));
    }

    #[test]
    fn test_power_user_frequency_ratio() {
        // 10 base users, one carrying 10 extra weight: the power user holds
        // 11 of the pool's 20 weight, a plain user 1.
        let config = GeneratorConfig {
            unique_users: 10,
            power_users: vec!["user_3".to_string()],
            ..GeneratorConfig::default()
        };
        let pool = user_pool(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts: HashMap<String, u64> = HashMap::new();
        let draws = 100_000u64;
        for _ in 0..draws {
            *counts.entry(pool.sample(&mut rng).to_string()).or_default() += 1;
        }

        let power = counts["user_3"] as f64;
        let plain = counts["user_1"] as f64;
        let ratio = power / plain;
        assert!(
            (8.0..=14.0).contains(&ratio),
            "power/plain frequency ratio was {ratio}, expected roughly 11"
        );
        // The power user should land near 11/20 of all draws.
        let share = power / draws as f64;
        assert!(
            (0.50..=0.60).contains(&share),
            "power user share was {share}, expected roughly 0.55"
        );
    }

    #[test]
    fn test_spam_frequency_ratio() {
        let config = GeneratorConfig::default();
        let pool = message_pool(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts: HashMap<String, u64> = HashMap::new();
        for _ in 0..100_000u64 {
            *counts.entry(pool.sample(&mut rng).to_string()).or_default() += 1;
        }

        let spam = counts["Lorem Impsum"] as f64;
        let common = counts["Just checking in."] as f64;
        let ratio = spam / common;
        assert!(
            (12.0..=18.0).contains(&ratio),
            "spam/common frequency ratio was {ratio}, expected roughly 15"
        );
    }
}
