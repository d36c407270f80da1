use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::PackConfig;
use crate::entities::{Bin, Item};
use crate::error::{PackError, Result};
use crate::heuristics::{PlacementHeuristic, Strategy};
use crate::result::PackingResult;
use crate::util::assertions;

/// Creates the overflow bins of a packing run.
pub trait BinFactory: Send + Sync {
    /// A new, empty bin based on `template`, with `n_existing` bins already in the run.
    fn spawn(&self, template: &Bin, n_existing: usize) -> Bin;
}

/// Copies the dimensions of the template and names the bin after its rank in the run: `bin_{n}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CloneTemplate;

impl BinFactory for CloneTemplate {
    fn spawn(&self, template: &Bin, n_existing: usize) -> Bin {
        template.empty_like(format!("bin_{}", n_existing + 1))
    }
}

/// Places items one by one into bins using a [`Strategy`],
/// opening overflow bins whenever an item fits in none of the existing ones.
#[derive(Clone, Debug)]
pub struct Packer<F: BinFactory = CloneTemplate> {
    pub strategy: Strategy,
    pub config: PackConfig,
    pub bin_factory: F,
}

impl Packer {
    pub fn new(strategy: Strategy, config: PackConfig) -> Self {
        Packer {
            strategy,
            config,
            bin_factory: CloneTemplate,
        }
    }

    /// Resolves the strategy named by `config`. Fails on unknown or unsupported names.
    pub fn from_config(config: PackConfig) -> Result<Self> {
        let strategy = Strategy::from_config(&config)?;
        Ok(Packer::new(strategy, config))
    }
}

impl<F: BinFactory> Packer<F> {
    pub fn with_bin_factory<G: BinFactory>(self, bin_factory: G) -> Packer<G> {
        Packer {
            strategy: self.strategy,
            config: self.config,
            bin_factory,
        }
    }

    /// Packs `items`, in order, into `bins` and as many overflow bins as needed.
    ///
    /// Each item goes into the first bin (in order) where the strategy finds a position for it.
    /// If there is none, an overflow bin is spawned from the first bin and the item is placed at its origin.
    pub fn pack(&self, items: &[Item], mut bins: Vec<Bin>) -> Result<PackingResult> {
        let start = Instant::now();
        if items.is_empty() {
            warn!("[PACK] no items to pack");
        }
        for bin in bins.iter_mut() {
            if !bin.is_empty() {
                warn!("[PACK] bin {} already contains {} items", bin.id, bin.n_items());
            }
            self.strategy.prepare_bin(bin);
        }

        for item in items {
            let placed = bins
                .iter_mut()
                .any(|bin| self.strategy.place(item, bin).is_some());

            if !placed {
                let bin = self.overflow(item, &bins)?;
                bins.push(bin);
            }
        }

        debug_assert!(!self.config.strict || assertions::bins_feasible(&bins));
        debug_assert!(bins.iter().all(assertions::free_space_covers_bin));

        let result = PackingResult::new(bins, self.strategy.metrics());
        info!(
            "[PACK] {} items packed in {} bins with a density of {:.3}% ({:.3}ms)",
            result.n_items(),
            result.n_bins(),
            result.density() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(result)
    }

    /// Packs independent jobs in parallel. The results are in the same order as the jobs.
    pub fn pack_batch(&self, jobs: Vec<(Vec<Item>, Vec<Bin>)>) -> Vec<Result<PackingResult>> {
        jobs.into_par_iter()
            .map(|(items, bins)| self.pack(&items, bins))
            .collect()
    }

    /// An overflow bin, spawned from the first bin, with `item` placed at its origin.
    fn overflow(&self, item: &Item, bins: &[Bin]) -> Result<Bin> {
        let template = bins.first().ok_or(PackError::NoBaseBin)?;

        if !template.can_fit(item) {
            match self.config.strict {
                true => {
                    return Err(PackError::ItemTooLarge {
                        item_id: item.id.clone(),
                        item_width: item.width,
                        item_height: item.height,
                        bin_id: template.id.clone(),
                        bin_width: template.width,
                        bin_height: template.height,
                    });
                }
                false => warn!(
                    "[PACK] item {} ({}x{}) exceeds bin {} ({}x{}), placing it regardless",
                    item.id, item.width, item.height, template.id, template.width, template.height
                ),
            }
        }

        let mut bin = self.bin_factory.spawn(template, bins.len());
        self.strategy.prepare_bin(&mut bin);
        self.strategy.place_at_origin(item, &mut bin);
        debug!("[PACK] opened {} for {}", bin.id, item.id);
        Ok(bin)
    }
}
