use crossbeam::channel::unbounded;
use log::{debug, warn};
use sxtag::prelude::{Language, Node};

use crate::{
    config::NormalizerConfig,
    error::NormalizeResult,
    normalizer::{CanonicalTree, Normalizer},
};

/// Normalize independent trees of one language concurrently.
///
/// Workers pull trees from a shared queue, so one large file does not hold
/// back the others. The result of the `i`-th tree is at index `i`, and a
/// failing tree has no effect on its siblings.
pub fn normalize_batch(
    language: Language,
    config: &NormalizerConfig,
    trees: Vec<Node>,
) -> Vec<NormalizeResult<CanonicalTree>> {
    let normalizer = Normalizer::with_config(language, config.clone());
    let total = trees.len();
    let workers = config.worker_count(total);
    debug!("normalizing {} {} trees on {} workers", total, language, workers);

    if workers <= 1 {
        return trees
            .into_iter()
            .enumerate()
            .map(|(index, tree)| report(index, normalizer.normalize(tree)))
            .collect();
    }

    let (job_tx, job_rx) = unbounded::<(usize, Node)>();
    let (done_tx, done_rx) = unbounded::<(usize, NormalizeResult<CanonicalTree>)>();
    for job in trees.into_iter().enumerate() {
        // The receiver outlives this loop.
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let scoped = crossbeam::thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let done = done_tx.clone();
            let normalizer = &normalizer;
            scope.spawn(move |_| {
                for (index, tree) in jobs.iter() {
                    let result = report(index, normalizer.normalize(tree));
                    if done.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    if let Err(panic) = scoped {
        std::panic::resume_unwind(panic);
    }
    drop(done_tx);

    let mut slots: Vec<Option<NormalizeResult<CanonicalTree>>> = (0..total).map(|_| None).collect();
    for (index, result) in done_rx.try_iter() {
        slots[index] = Some(result);
    }
    slots.into_iter().flatten().collect()
}

fn report(index: usize, result: NormalizeResult<CanonicalTree>) -> NormalizeResult<CanonicalTree> {
    if let Err(error) = &result {
        warn!("tree #{} failed to normalize: {}", index, error);
    }
    result
}
