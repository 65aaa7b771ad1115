// src/dataset.rs
//
// The loaded, immutable view of one export: known events in display order,
// the default ("red number") rank per event, and every ranked person's full
// rank vector. Built once per export from a table `Bundle`; the front ends
// hold it behind an `Arc` and swap the whole thing after a refresh.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::config::consts::{
    AVERAGE_SUFFIX, TABLE_EVENTS, TABLE_PERSONS, TABLE_RANKS_AVERAGE, TABLE_RANKS_SINGLE,
};
use crate::error::LoadError;
use crate::tables::Bundle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Single,
    Average,
}

impl Stat {
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Single => "Single",
            Stat::Average => "Average",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventKey {
    /// Events table id, e.g. `333`
    pub base: String,
    pub stat: Stat,
}

impl EventKey {
    /// Column id: `333` for singles, `333A` for averages.
    pub fn id(&self) -> String {
        match self.stat {
            Stat::Single => self.base.clone(),
            Stat::Average => join!(&self.base, AVERAGE_SUFFIX),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub key: EventKey,
    pub id: String,
    /// `cellName` of the base event
    pub name: String,
    /// Canonical order of the base event
    pub rank: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub name: String,
    /// One entry per known event; recorded world rank or the event default
    pub ranks: Vec<u32>,
}

/// One line of the event picker: a base event with its single/average columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLine {
    pub base: String,
    pub name: String,
    pub single: Option<usize>,
    pub average: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    source: Option<PathBuf>,
    events: Vec<Event>,
    default_ranks: Vec<u32>,
    people: Vec<Person>,
    by_id: HashMap<String, usize>,
}

struct RankRecord<'a> {
    person: &'a str,
    base: &'a str,
    stat: Stat,
    rank: u32,
}

impl Dataset {
    pub fn empty() -> Self { Self::default() }

    pub fn from_bundle(bundle: &Bundle) -> Result<Self, LoadError> {
        // Events: id → name, id → canonical rank
        let events_tbl = bundle.load(TABLE_EVENTS, "id cellName rank")?;
        let mut event_name: HashMap<&str, &str> = HashMap::with_capacity(events_tbl.len());
        let mut event_rank: HashMap<&str, i64> = HashMap::with_capacity(events_tbl.len());
        for r in events_tbl.records() {
            event_name.insert(r.text(0), r.text(1));
            event_rank.insert(r.text(0), r.int(2)?);
        }

        // Persons: primary record only
        let persons_tbl = bundle.load(TABLE_PERSONS, "id subid name")?;
        let mut person_name: HashMap<&str, &str> = HashMap::with_capacity(persons_tbl.len());
        for r in persons_tbl.records() {
            if r.int(1)? == 1 {
                person_name.insert(r.text(0), r.text(2));
            }
        }

        // Singles + averages as one record list, averages tagged by Stat
        let mut records: Vec<RankRecord<'_>> = Vec::new();
        for (table, stat) in [(TABLE_RANKS_SINGLE, Stat::Single), (TABLE_RANKS_AVERAGE, Stat::Average)] {
            let sel = bundle.load(table, "personId eventId worldRank")?;
            records.reserve(sel.len());
            for r in sel.records() {
                records.push(RankRecord {
                    person: r.text(0),
                    base: r.text(1),
                    stat,
                    rank: r.uint(2)?,
                });
            }
        }

        // List sizes per (event, stat); keys double as the set of known events
        let mut list_sizes: HashMap<(&str, Stat), u32> = HashMap::new();
        for rec in &records {
            *list_sizes.entry((rec.base, rec.stat)).or_insert(0) += 1;
        }

        let mut keys: Vec<(Stat, i64, &str)> = Vec::with_capacity(list_sizes.len());
        for &(base, stat) in list_sizes.keys() {
            let rank = *event_rank
                .get(base)
                .ok_or_else(|| LoadError::UnknownEvent(s!(base)))?;
            keys.push((stat, rank, base));
        }
        // Singles first, then averages; each by canonical event rank
        keys.sort_unstable();

        let mut events = Vec::with_capacity(keys.len());
        let mut default_ranks = Vec::with_capacity(keys.len());
        let mut index: HashMap<(&str, Stat), usize> = HashMap::with_capacity(keys.len());
        for (i, &(stat, rank, base)) in keys.iter().enumerate() {
            let key = EventKey { base: s!(base), stat };
            let id = key.id();
            events.push(Event {
                name: s!(event_name.get(base).copied().unwrap_or(base)),
                id,
                key,
                rank,
            });
            default_ranks.push(list_sizes[&(base, stat)] + 1);
            index.insert((base, stat), i);
        }

        // Everybody starts at the defaults, then gets their real ranks
        let mut vectors: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
        for rec in &records {
            let ranks = vectors
                .entry(rec.person)
                .or_insert_with(|| default_ranks.clone());
            ranks[index[&(rec.base, rec.stat)]] = rec.rank;
        }

        let mut unnamed = 0usize;
        let people: Vec<Person> = vectors
            .into_iter()
            .map(|(id, ranks)| {
                let name = match person_name.get(id) {
                    Some(n) => s!(*n),
                    None => {
                        unnamed += 1;
                        s!(id)
                    }
                };
                Person { id: s!(id), name, ranks }
            })
            .collect();
        if unnamed > 0 {
            logd!("Dataset: {unnamed} ranked person(s) without a primary Persons row; showing ids");
        }

        let by_id = events.iter().enumerate().map(|(i, e)| (e.id.clone(), i)).collect();

        logf!(
            "Dataset: events={}, people={}, rank records={}",
            events.len(),
            people.len(),
            records.len()
        );

        Ok(Self { source: None, events, default_ranks, people, by_id })
    }

    pub fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// Archive this dataset was read from, if any.
    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }

    pub fn events(&self) -> &[Event] { &self.events }
    pub fn default_ranks(&self) -> &[u32] { &self.default_ranks }
    pub fn people(&self) -> &[Person] { &self.people }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    /// Index of an event by column id (`333`, `333A`).
    pub fn event_index(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn indices_of(&self, stat: Stat) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.key.stat == stat)
            .map(|(i, _)| i)
            .collect()
    }

    /// Base events for the picker: singles order first, then average-only events.
    pub fn event_lines(&self) -> Vec<EventLine> {
        let mut lines: Vec<EventLine> = Vec::new();
        let mut pos: HashMap<&str, usize> = HashMap::new();

        for (i, e) in self.events.iter().enumerate() {
            let at = *pos.entry(e.key.base.as_str()).or_insert_with(|| {
                lines.push(EventLine {
                    base: e.key.base.clone(),
                    name: e.name.clone(),
                    single: None,
                    average: None,
                });
                lines.len() - 1
            });
            match e.key.stat {
                Stat::Single => lines[at].single = Some(i),
                Stat::Average => lines[at].average = Some(i),
            }
        }
        lines
    }
}
