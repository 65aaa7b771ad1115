// src/ranking.rs
//
// Sum-of-ranks query over a loaded `Dataset`.
//
// Pure: the same selection over the same dataset always yields the same
// `Ranking`. Front ends re-run `aggregate` whenever the selection changes.

use crate::config::consts::TOP_N;
use crate::config::options::EventSelector;
use crate::dataset::{Dataset, Person, Stat};

/// Ordered set of event indices. Caller order is kept for the rank columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Keeps first occurrences of in-range indices, in the given order.
    pub fn new<I: IntoIterator<Item = usize>>(indices: I, n_events: usize) -> Self {
        let mut seen = vec![false; n_events];
        let mut out = Vec::new();
        for i in indices {
            if i < n_events && !seen[i] {
                seen[i] = true;
                out.push(i);
            }
        }
        Self { indices: out }
    }

    /// One flag per event (GUI checkboxes).
    pub fn from_mask(mask: &[bool]) -> Self {
        Self {
            indices: mask
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    pub fn from_selector(ds: &Dataset, sel: &EventSelector) -> Result<Self, String> {
        let n = ds.events().len();
        Ok(match sel {
            EventSelector::Singles => Self::new(ds.indices_of(Stat::Single), n),
            EventSelector::Averages => Self::new(ds.indices_of(Stat::Average), n),
            EventSelector::All => Self::new(0..n, n),
            EventSelector::Ids(ids) => {
                let mut v = Vec::with_capacity(ids.len());
                for id in ids {
                    let ix = ds
                        .event_index(id)
                        .ok_or_else(|| format!("Unknown event id: {id}"))?;
                    v.push(ix);
                }
                Self::new(v, n)
            }
        })
    }

    pub fn indices(&self) -> &[usize] { &self.indices }
    pub fn len(&self) -> usize { self.indices.len() }
    pub fn is_empty(&self) -> bool { self.indices.is_empty() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// `None` = tied with the row above
    pub position: Option<u32>,
    pub person_id: String,
    pub name: String,
    pub score: u64,
    /// Ranks for the selected events, in selection order
    pub ranks: Vec<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranking {
    pub selection: Selection,
    /// Score of somebody unranked in every selected event
    pub default_score: u64,
    pub rows: Vec<Row>,
}

impl Ranking {
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// `Pos, Cuber, Sum, <selected event ids>`
    pub fn headers(&self, ds: &Dataset) -> Vec<String> {
        let mut h = vec![s!("Pos"), s!("Cuber"), s!("Sum")];
        h.extend(self.selection.indices().iter().map(|&i| ds.events()[i].id.clone()));
        h
    }

    /// Selected event ids, comma separated (export titles).
    pub fn title(&self, ds: &Dataset) -> String {
        self.selection
            .indices()
            .iter()
            .map(|&i| ds.events()[i].id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rows as display strings; tied positions are empty cells.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                let mut out = Vec::with_capacity(3 + r.ranks.len());
                out.push(r.position.map(|p| p.to_string()).unwrap_or_default());
                out.push(r.name.clone());
                out.push(r.score.to_string());
                out.extend(r.ranks.iter().map(|x| x.to_string()));
                out
            })
            .collect()
    }
}

pub fn score(person: &Person, sel: &Selection) -> u64 {
    sel.indices().iter().map(|&i| u64::from(person.ranks[i])).sum()
}

pub fn default_score(ds: &Dataset, sel: &Selection) -> u64 {
    sel.indices().iter().map(|&i| u64::from(ds.default_ranks()[i])).sum()
}

/// Sum of ranks over `sel`, ascending, tie-aware positions, cut at the
/// first all-default score or the first new position past `TOP_N`.
pub fn aggregate(ds: &Dataset, sel: &Selection) -> Ranking {
    let default = default_score(ds, sel);

    let mut sums: Vec<(u64, &str, usize)> = ds
        .people()
        .iter()
        .enumerate()
        .map(|(i, p)| (score(p, sel), p.id.as_str(), i))
        .collect();
    sums.sort_unstable();

    let mut rows = Vec::new();
    let mut counter = 0u32;
    let mut prev: Option<u64> = None;

    for (sum, _, ix) in sums {
        counter += 1;
        let position = if prev == Some(sum) { None } else { Some(counter) };
        if sum == default || position.is_some_and(|p| p > TOP_N) {
            break;
        }

        let person = &ds.people()[ix];
        rows.push(Row {
            position,
            person_id: person.id.clone(),
            name: person.name.clone(),
            score: sum,
            ranks: sel.indices().iter().map(|&i| person.ranks[i]).collect(),
        });
        prev = Some(sum);
    }

    logd!(
        "Ranking: events={}, default_score={}, rows={}",
        sel.len(),
        default,
        rows.len()
    );

    Ranking { selection: sel.clone(), default_score: default, rows }
}
