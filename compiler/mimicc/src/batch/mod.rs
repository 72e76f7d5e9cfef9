//! Batch generation.
//!
//! Requests are independent unless one targets the generated type of
//! another. Those dependencies order the batch into levels: level 0 needs
//! nothing, level `n` targets a type produced at level `n - 1`. Each level
//! is built in parallel; the blueprints it produces are exported and layered
//! over the catalog before the next level starts.
//!
//! A failure stays local to its request. Requests on a dependency cycle are
//! reported as circular references; requests whose dependency did not
//! produce a blueprint are reported as dependency failures.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use mimic_blueprint::{generate, Blueprint, GenerationRequest, Problem};
use mimic_ir::{Layered, TypeKey, TypeMetadataProvider, TypeTable};

/// Outcome of one request.
pub type Outcome = Result<Blueprint, Problem>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Worker threads; `None` lets rayon decide.
    pub jobs: Option<usize>,
}

/// Where a request sits in the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Slot {
    Level(usize),
    /// On a dependency cycle; carries the target keys around the cycle.
    Cycle(Vec<TypeKey>),
    /// Depends, directly or not, on a cycle.
    Blocked,
}

/// Run every request against `provider`. Outcomes are in request order.
#[tracing::instrument(level = "debug", skip_all, fields(requests = requests.len()))]
pub fn run_batch<P>(
    provider: &P,
    requests: &[GenerationRequest],
    options: &BatchOptions,
) -> Vec<Outcome>
where
    P: TypeMetadataProvider + Sync + ?Sized,
{
    let deps = dependencies(requests);
    let slots = schedule(requests, &deps);

    let mut outcomes: Vec<Option<Outcome>> = Vec::with_capacity(requests.len());
    outcomes.resize_with(requests.len(), || None);
    for (i, slot) in slots.iter().enumerate() {
        if let Slot::Cycle(cycle) = slot {
            outcomes[i] = Some(Err(Problem::CircularReference {
                target: requests[i].target.key.clone(),
                cycle: cycle.clone(),
            }));
        }
    }

    let depth = slots
        .iter()
        .filter_map(|slot| match slot {
            Slot::Level(level) => Some(*level + 1),
            Slot::Cycle(_) | Slot::Blocked => None,
        })
        .max()
        .unwrap_or(0);

    let mut overlay = TypeTable::with_root(provider.root_type().clone());
    for level in 0..depth {
        let ready: Vec<usize> = (0..requests.len())
            .filter(|&i| slots[i] == Slot::Level(level))
            .filter(|&i| deps[i].is_none_or(|d| matches!(outcomes[d], Some(Ok(_)))))
            .collect();
        tracing::debug!(level, ready = ready.len(), "building level");

        let layered = Layered::new(provider, &overlay);
        let built = build_level(&layered, requests, &ready, options);
        for (i, outcome) in built {
            if let Ok(blueprint) = &outcome {
                overlay.insert(blueprint.export());
            }
            outcomes[i] = Some(outcome);
        }
    }

    // Anything never built was waiting on a dependency that produced nothing.
    outcomes
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| {
            outcome.unwrap_or_else(|| {
                Err(Problem::DependencyFailed {
                    target: requests[i].target.key.clone(),
                    generated: requests[i].generated.display_name(),
                })
            })
        })
        .collect()
}

fn build_level<P>(
    provider: &P,
    requests: &[GenerationRequest],
    ready: &[usize],
    options: &BatchOptions,
) -> Vec<(usize, Outcome)>
where
    P: TypeMetadataProvider + Sync,
{
    let build = |&i: &usize| (i, generate(provider, &requests[i]));
    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = options.jobs {
        pool = pool.num_threads(jobs);
    }
    pool.build_scoped(rayon::ThreadBuilder::run, |pool| {
        pool.install(|| ready.par_iter().map(build).collect::<Vec<_>>())
    })
    .unwrap_or_else(|e| {
        tracing::warn!("failed to create thread pool ({e}), running sequentially");
        ready.iter().map(build).collect()
    })
}

/// For each request, the index of the request producing its target.
fn dependencies(requests: &[GenerationRequest]) -> Vec<Option<usize>> {
    let mut producers: FxHashMap<TypeKey, usize> = FxHashMap::default();
    for (i, request) in requests.iter().enumerate() {
        producers.entry(request.generated.key()).or_insert(i);
    }
    requests
        .iter()
        .map(|request| producers.get(&request.target.key).copied())
        .collect()
}

/// Assign every request a level, or find the cycle it sits on.
///
/// Each request has at most one dependency, so walking the chain from any
/// request either ends at a scheduled request or closes a loop.
fn schedule(requests: &[GenerationRequest], deps: &[Option<usize>]) -> Vec<Slot> {
    let mut slots: Vec<Option<Slot>> = vec![None; requests.len()];
    for start in 0..requests.len() {
        let mut path: Vec<usize> = Vec::new();
        let mut current = start;
        loop {
            if slots[current].is_some() {
                break;
            }
            if let Some(pos) = path.iter().position(|&p| p == current) {
                let members = path.split_off(pos);
                let keys: Vec<TypeKey> = members
                    .iter()
                    .map(|&m| requests[m].target.key.clone())
                    .collect();
                for (offset, &m) in members.iter().enumerate() {
                    let mut cycle = keys.clone();
                    cycle.rotate_left(offset);
                    slots[m] = Some(Slot::Cycle(cycle));
                }
                break;
            }
            path.push(current);
            match deps[current] {
                Some(next) => current = next,
                None => {
                    slots[current] = Some(Slot::Level(0));
                    path.pop();
                    break;
                }
            }
        }
        while let Some(node) = path.pop() {
            let slot = match deps[node].and_then(|d| slots[d].as_ref()) {
                Some(Slot::Level(level)) => Slot::Level(level + 1),
                _ => Slot::Blocked,
            };
            slots[node] = Some(slot);
        }
    }
    slots
        .into_iter()
        .map(|slot| slot.unwrap_or(Slot::Blocked))
        .collect()
}
