use std::fmt::{Display, Formatter, Write};

use crate::entities::Bin;
use crate::heuristics::HeuristicMetrics;

/// Bins of a finished packing run, together with the heuristic that packed them.
#[derive(Clone, Debug, PartialEq)]
pub struct PackingResult {
    pub bins: Vec<Bin>,
    pub metrics: HeuristicMetrics,
}

impl PackingResult {
    pub fn new(bins: Vec<Bin>, metrics: HeuristicMetrics) -> Self {
        PackingResult { bins, metrics }
    }

    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn n_items(&self) -> usize {
        self.bins.iter().map(Bin::n_items).sum()
    }

    /// Ratio of the total placed item area to the total bin area, 0.0 without bins.
    pub fn density(&self) -> f32 {
        let bin_area = self.bins.iter().map(Bin::area).sum::<f32>();
        match bin_area > 0.0 {
            true => self.bins.iter().map(Bin::placed_item_area).sum::<f32>() / bin_area,
            false => 0.0,
        }
    }

    /// Human readable summary: one line per bin, one line per item if `verbose`, and the metrics.
    pub fn report(&self, verbose: bool) -> String {
        let mut report = String::new();
        // writing into a String cannot fail
        let _ = self.write_report(&mut report, verbose);
        report
    }

    fn write_report(&self, w: &mut impl Write, verbose: bool) -> std::fmt::Result {
        writeln!(
            w,
            "{} items in {} bins, density {:.2}%",
            self.n_items(),
            self.n_bins(),
            self.density() * 100.0
        )?;
        for bin in &self.bins {
            writeln!(
                w,
                "  {} ({}x{}): {} items, density {:.2}%",
                bin.id,
                bin.width,
                bin.height,
                bin.n_items(),
                bin.density() * 100.0
            )?;
            if verbose {
                for pi in &bin.placed_items {
                    writeln!(w, "    {} at {}", pi.item_id(), pi.rect())?;
                }
            }
        }
        writeln!(w, "algorithm: {}", self.metrics.algorithm)?;
        if let Some(heuristic) = &self.metrics.heuristic {
            writeln!(w, "heuristic: {heuristic}")?;
        }
        write!(w, "description: {}", self.metrics.description)
    }
}

impl Display for PackingResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_report(f, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Item, Position};

    fn result() -> PackingResult {
        let mut bin = Bin::new("bin_1", 10.0, 10.0).unwrap();
        bin.place_item(Item::new("a", 5.0, 10.0).unwrap(), Position::ORIGIN);
        let empty = Bin::new("bin_2", 10.0, 10.0).unwrap();
        let metrics = HeuristicMetrics {
            algorithm: "max_rects".into(),
            heuristic: Some("best_area_fit".into()),
            description: "test".into(),
        };
        PackingResult::new(vec![bin, empty], metrics)
    }

    #[test]
    fn counts_and_density() {
        let result = result();
        assert_eq!(result.n_bins(), 2);
        assert_eq!(result.n_items(), 1);
        assert_eq!(result.density(), 0.25);
    }

    #[test]
    fn report_lists_items_only_when_verbose() {
        let result = result();
        let short = result.report(false);
        let long = result.report(true);

        assert!(short.starts_with("1 items in 2 bins, density 25.00%"));
        assert!(short.contains("bin_1 (10x10): 1 items"));
        assert!(short.contains("heuristic: best_area_fit"));
        assert!(!short.contains("a at"));
        assert!(long.contains("a at (0, 0, 5x10)"));
        assert_eq!(result.to_string(), short);
    }
}
