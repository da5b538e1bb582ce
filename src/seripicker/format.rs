use seripicker_model::{RankedSeries, Series};

/// One numbered line per entry, in the order given. Callers sort by
/// descending weight beforehand.
pub fn format_list(series: &[Series]) -> String {
    series
        .iter()
        .enumerate()
        .map(|(n, s)| format!("{}. {}, Weight: {:.2}\n", n + 1, s.name, s.weight))
        .collect()
}

/// "Top 5" header plus the first five ranked entries. A shorter ranking
/// renders only the entries that exist.
pub fn format_top_five(results: &[RankedSeries]) -> String {
    let mut out = String::from("Top 5\n");
    for (n, r) in results.iter().take(5).enumerate() {
        out.push_str(&format!("{}. {}, Hits: {}\n", n + 1, r.name, r.hits));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use seripicker_model::SeriesName;

    fn series(name: &str, weight: f64) -> Series {
        Series {
            name: SeriesName::from(name),
            weight,
        }
    }

    fn ranked(name: &str, hits: u32) -> RankedSeries {
        RankedSeries {
            name: SeriesName::from(name),
            hits,
        }
    }

    #[test]
    fn list_lines_are_numbered_with_two_decimal_weights() {
        let list = vec![series("A", 3.0), series("B", 1.0)];
        assert_eq!(format_list(&list), "1. A, Weight: 3.00\n2. B, Weight: 1.00\n");
    }

    #[test]
    fn empty_list_formats_to_nothing() {
        assert_eq!(format_list(&[]), "");
    }

    #[test]
    fn top_five_takes_exactly_five_entries() {
        let results = vec![
            ranked("A", 50),
            ranked("B", 30),
            ranked("C", 20),
            ranked("D", 10),
            ranked("E", 5),
            ranked("F", 1),
        ];
        assert_eq!(
            format_top_five(&results),
            "Top 5\n1. A, Hits: 50\n2. B, Hits: 30\n3. C, Hits: 20\n4. D, Hits: 10\n5. E, Hits: 5\n"
        );
    }

    #[test]
    fn short_ranking_renders_what_exists() {
        let results = vec![ranked("A", 9), ranked("B", 1)];
        assert_eq!(format_top_five(&results), "Top 5\n1. A, Hits: 9\n2. B, Hits: 1\n");
    }
}
