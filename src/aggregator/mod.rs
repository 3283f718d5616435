//! Class aggregator — groups a flat entry stream into per-class models.
//!
//! Entries arrive in source order: a `class` entry opens a scope and the
//! member entries that follow belong to it, unless they carry an explicit
//! `owner` naming another known class. Once the whole stream is in,
//! `finish()` runs the per-class pipeline: nest dotted cfg/property names,
//! nest method/event parameters, then synthesize accessors.

pub mod accessors;
pub mod nest;

use crate::model::{ClassDoc, Entry, MemberKey, Tagname};
use accessors::synthesize_accessors;
use nest::nest_properties;
use std::collections::HashMap;

struct ClassBuilder {
    doc: ClassDoc,
    /// `(tagname, name)` → position in `doc.members`, for O(1) dedup.
    index: HashMap<MemberKey, usize>,
}

/// Accumulates entries and produces finalized [`ClassDoc`]s.
pub struct Aggregator {
    classes: Vec<ClassBuilder>,
    class_index: HashMap<String, usize>,
    current: Option<usize>,
    orphans: Vec<Entry>,
    accessors: bool,
}

impl Default for Aggregator {
    fn default() -> Aggregator {
        Aggregator::new()
    }
}

impl Aggregator {
    pub fn new() -> Aggregator {
        Aggregator {
            classes: Vec::new(),
            class_index: HashMap::new(),
            current: None,
            orphans: Vec::new(),
            accessors: true,
        }
    }

    /// Disable accessor/event synthesis (upstream debugging aid).
    pub fn accessors(mut self, on: bool) -> Aggregator {
        self.accessors = on;
        self
    }

    /// Feed one batch of entries. May be called once per source file.
    pub fn aggregate(&mut self, entries: Vec<Entry>) {
        for entry in entries {
            if entry.tagname == Tagname::Class {
                self.add_class(entry);
            } else {
                self.add_member(entry);
            }
        }
    }

    /// Member entries that could not be attributed to any class.
    pub fn orphans(&self) -> &[Entry] {
        &self.orphans
    }

    /// Finalize every class: nest property trees, nest parameters,
    /// synthesize accessors. Classes come out in first-seen order.
    pub fn finish(self) -> Vec<ClassDoc> {
        let accessors = self.accessors;
        self.classes
            .into_iter()
            .map(|builder| finalize(builder.doc, accessors))
            .collect()
    }

    fn add_class(&mut self, entry: Entry) {
        match self.class_index.get(&entry.name) {
            Some(&i) => {
                // Re-opened scope: later doc wins, members accumulate.
                let doc = &mut self.classes[i].doc;
                if !entry.doc.is_empty() {
                    doc.doc = entry.doc;
                }
                self.current = Some(i);
            }
            None => {
                let i = self.classes.len();
                self.class_index.insert(entry.name.clone(), i);
                self.classes.push(ClassBuilder {
                    doc: ClassDoc {
                        name: entry.name,
                        doc: entry.doc,
                        modifiers: entry.modifiers,
                        members: Vec::new(),
                    },
                    index: HashMap::new(),
                });
                self.current = Some(i);
            }
        }
    }

    fn add_member(&mut self, mut entry: Entry) {
        let slot = entry
            .owner
            .as_ref()
            .and_then(|owner| self.class_index.get(owner).copied())
            .or(self.current);

        let Some(i) = slot else {
            self.orphans.push(entry);
            return;
        };

        let builder = &mut self.classes[i];
        if entry.owner.is_none() {
            entry.owner = Some(builder.doc.name.clone());
        }

        match builder.index.get(&entry.key()) {
            // Later declaration wins, position of the first stays.
            Some(&pos) => builder.doc.members[pos] = entry,
            None => {
                builder.index.insert(entry.key(), builder.doc.members.len());
                builder.doc.members.push(entry);
            }
        }
    }
}

fn finalize(mut doc: ClassDoc, accessors: bool) -> ClassDoc {
    let mut members = nest_properties(std::mem::take(&mut doc.members));

    for member in &mut members {
        if matches!(member.tagname, Tagname::Method | Tagname::Event) {
            member.params = nest_properties(std::mem::take(&mut member.params));
        }
    }

    if accessors {
        synthesize_accessors(&doc.name, &mut members);
    }

    doc.members = members;
    doc
}
