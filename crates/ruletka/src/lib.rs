use std::collections::HashMap;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use rand::Rng;
use seripicker_model::{RankedSeries, Series, SeriesName};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// Nothing selectable: empty list, degenerate total, or no entry with a
    /// positive weight.
    #[error("no series selected")]
    NoSelection,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("selection failed during ranking: {0}")]
    SelectionFailed(#[from] SelectError),
}

pub fn total_weight(series: &[Series]) -> f64 {
    series.iter().map(|s| s.weight).sum()
}

/// Roulette-wheel draw: an entry wins with probability `weight / total_weight`.
///
/// `total_weight` must be the sum of all weights in `series`; it is a
/// parameter so callers can hoist the sum out of a draw loop.
pub fn select<'a, R: Rng + ?Sized>(
    series: &'a [Series],
    total_weight: f64,
    rng: &mut R,
) -> Result<&'a Series, SelectError> {
    if series.is_empty() || !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(SelectError::NoSelection);
    }
    let mut r = rng.gen::<f64>() * total_weight;
    let mut last_selectable = None;
    for s in series {
        if s.weight <= 0.0 {
            continue;
        }
        last_selectable = Some(s);
        r -= s.weight;
        if r <= 0.0 {
            return Ok(s);
        }
    }
    // A positive residual after the walk means total_weight exceeded the
    // true sum by rounding drift. The last selectable entry takes the draw.
    last_selectable.ok_or(SelectError::NoSelection)
}

/// Runs `draws` independent selections and tallies hits per name.
///
/// Any failed draw aborts the whole run; partial tallies are discarded.
pub fn rank<R: Rng + ?Sized>(
    series: &[Series],
    total_weight: f64,
    draws: u32,
    rng: &mut R,
) -> Result<Vec<RankedSeries>, RankError> {
    info!("Ranking {} series over {} draws", series.len(), draws);
    let start = Instant::now();

    let mut tally: HashMap<&SeriesName, u32> = HashMap::new();
    for _ in 0..draws {
        let selected = select(series, total_weight, rng)?;
        *tally.entry(&selected.name).or_default() += 1;
    }

    let ranked = sorted_results(tally);
    debug!("Ranking took {:?}", start.elapsed());
    Ok(ranked)
}

/// Descending by hits; equal hit counts order by name so repeated runs over
/// the same tally come out identical.
fn sorted_results(tally: HashMap<&SeriesName, u32>) -> Vec<RankedSeries> {
    tally
        .into_iter()
        .map(|(name, hits)| RankedSeries {
            name: name.clone(),
            hits,
        })
        .sorted_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.name.cmp(&b.name)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: u32 = 10_000;

    fn series(name: &str, weight: f64) -> Series {
        Series {
            name: SeriesName::from(name),
            weight,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(6502)
    }

    #[test]
    fn single_entry_always_selected() {
        let list = vec![series("Monster", 4.2)];
        let total = total_weight(&list);
        let mut rng = rng();
        for _ in 0..100 {
            let selected = select(&list, total, &mut rng).unwrap();
            assert_eq!(selected.name.as_str(), "Monster");
        }
    }

    #[test]
    fn empty_list_is_no_selection() {
        assert_eq!(select(&[], 0.0, &mut rng()), Err(SelectError::NoSelection));
    }

    #[test]
    fn all_zero_weights_is_no_selection() {
        let list = vec![series("A", 0.0), series("B", 0.0)];
        let result = select(&list, total_weight(&list), &mut rng());
        assert_eq!(result, Err(SelectError::NoSelection));
    }

    #[test]
    fn negative_total_is_no_selection() {
        let list = vec![series("A", 1.0)];
        assert_eq!(select(&list, -1.0, &mut rng()), Err(SelectError::NoSelection));
    }

    #[test]
    fn zero_weight_entry_is_never_selected() {
        let list = vec![series("A", 0.0), series("B", 1.0), series("C", 0.0)];
        let total = total_weight(&list);
        let mut rng = rng();
        for _ in 0..1000 {
            let selected = select(&list, total, &mut rng).unwrap();
            assert_eq!(selected.name.as_str(), "B");
        }
    }

    #[test]
    fn residual_drift_falls_back_to_last_selectable() {
        // Total far above the true sum leaves a residual for most draws;
        // the walk must still land on the only selectable entry.
        let list = vec![series("A", 1.0), series("B", 0.0)];
        let selected = select(&list, 100.0, &mut rng()).unwrap();
        assert_eq!(selected.name.as_str(), "A");
    }

    #[test]
    fn hits_converge_to_weight_proportions() {
        let list = vec![series("A", 1.0), series("B", 1.0), series("C", 2.0)];
        let total = total_weight(&list);
        let mut rng = rng();
        let mut hits: HashMap<&str, i64> = HashMap::new();
        for _ in 0..DRAWS {
            let selected = select(&list, total, &mut rng).unwrap();
            *hits.entry(selected.name.as_str()).or_default() += 1;
        }
        // Expected 2500/2500/5000. Bounds are ~7 sigma, far beyond what a
        // healthy sampler can miss.
        assert!((hits["A"] - 2500).abs() < 250, "A: {}", hits["A"]);
        assert!((hits["B"] - 2500).abs() < 250, "B: {}", hits["B"]);
        assert!((hits["C"] - 5000).abs() < 350, "C: {}", hits["C"]);
    }

    #[test]
    fn rank_hits_sum_to_draw_count() {
        let list = vec![series("A", 3.0), series("B", 1.0), series("A", 1.0)];
        let ranked = rank(&list, total_weight(&list), DRAWS, &mut rng()).unwrap();
        // Duplicate names collapse into one bucket.
        assert!(ranked.len() <= 2);
        assert_eq!(ranked.iter().map(|r| r.hits).sum::<u32>(), DRAWS);
    }

    #[test]
    fn rank_is_sorted_by_hits() {
        let list = vec![series("Rare", 1.0), series("Common", 100.0), series("Mid", 10.0)];
        let ranked = rank(&list, total_weight(&list), DRAWS, &mut rng()).unwrap();
        assert_eq!(ranked[0].name.as_str(), "Common");
        for pair in ranked.windows(2) {
            assert!(pair[0].hits >= pair[1].hits);
        }
    }

    #[test]
    fn rank_aborts_on_unselectable_input() {
        let list = vec![series("A", 0.0)];
        let result = rank(&list, total_weight(&list), 10, &mut rng());
        assert_eq!(result, Err(RankError::SelectionFailed(SelectError::NoSelection)));
    }

    #[test]
    fn equal_hits_order_by_name() {
        let akira = SeriesName::from("Akira");
        let berserk = SeriesName::from("Berserk");
        let monster = SeriesName::from("Monster");
        let tally = HashMap::from([(&berserk, 7), (&akira, 7), (&monster, 30)]);
        let names: Vec<_> = sorted_results(tally)
            .into_iter()
            .map(|r| String::from(r.name))
            .collect();
        assert_eq!(names, vec!["Monster", "Akira", "Berserk"]);
    }
}
