//! Accessor and change-event synthesis.
//!
//! Every cfg flagged `accessor` gets a `getFoo`/`setFoo` method pair; with
//! `evented` on top, a `foochange` event. A manually documented member with
//! the same `(tagname, name)` always wins and is left untouched, no matter
//! where it appears in the member list.

use crate::model::{Entry, MemberKey, Tagname};
use std::collections::HashSet;

/// Synthesize accessor methods and change events for a class.
///
/// Scans the finalized member list of `class_name`, collects new members
/// into a side buffer, then appends them after all manually declared
/// members — accessor-flagged cfgs in declaration order, getter before
/// setter before event. The `accessor`/`evented` directives are stripped
/// from the cfgs afterwards; they are build instructions, not part of the
/// cfg's public contract.
pub fn synthesize_accessors(class_name: &str, members: &mut Vec<Entry>) {
    let mut present: HashSet<MemberKey> = members.iter().map(Entry::key).collect();
    let mut synthesized: Vec<Entry> = Vec::new();

    for cfg in members
        .iter()
        .filter(|m| m.tagname == Tagname::Cfg && m.modifiers.accessor)
    {
        let owner = cfg
            .owner
            .clone()
            .unwrap_or_else(|| class_name.to_string());

        let getter = format!("get{}", capitalize(&cfg.name));
        if present.insert((Tagname::Method, getter.clone())) {
            synthesized.push(make_getter(cfg, getter, &owner));
        }

        let setter = format!("set{}", capitalize(&cfg.name));
        if present.insert((Tagname::Method, setter.clone())) {
            synthesized.push(make_setter(cfg, setter, &owner));
        }

        if cfg.modifiers.evented {
            let event = format!("{}change", cfg.name.to_lowercase());
            if present.insert((Tagname::Event, event.clone())) {
                synthesized.push(make_event(cfg, event, &owner));
            }
        }
    }

    for m in members
        .iter_mut()
        .filter(|m| m.tagname == Tagname::Cfg && m.modifiers.accessor)
    {
        m.modifiers.accessor = false;
        m.modifiers.evented = false;
    }

    members.append(&mut synthesized);
}

fn make_getter(cfg: &Entry, name: String, owner: &str) -> Entry {
    Entry {
        tagname: Tagname::Method,
        name,
        doc: format!("Returns the value of {{@link #cfg-{}}}.", cfg.name),
        owner: Some(owner.to_string()),
        modifiers: cfg.modifiers.inherited(),
        ret: Some(Box::new(Entry {
            ty: cfg.ty.clone(),
            ..Entry::default()
        })),
        ..Entry::default()
    }
}

fn make_setter(cfg: &Entry, name: String, owner: &str) -> Entry {
    Entry {
        tagname: Tagname::Method,
        name,
        doc: format!("Sets the value of {{@link #cfg-{}}}.", cfg.name),
        owner: Some(owner.to_string()),
        modifiers: cfg.modifiers.inherited(),
        params: vec![Entry {
            name: cfg.name.clone(),
            ty: cfg.ty.clone(),
            doc: "The new value.".to_string(),
            ..Entry::default()
        }],
        ..Entry::default()
    }
}

fn make_event(cfg: &Entry, name: String, owner: &str) -> Entry {
    Entry {
        tagname: Tagname::Event,
        name,
        doc: format!(
            "Fires when the {{@link #cfg-{}}} configuration is changed by {{@link #method-set{}}}.",
            cfg.name,
            capitalize(&cfg.name)
        ),
        owner: Some(owner.to_string()),
        modifiers: cfg.modifiers.inherited(),
        params: vec![
            Entry {
                name: "this".to_string(),
                ty: Some(owner.to_string()),
                doc: format!("The {} instance.", owner),
                ..Entry::default()
            },
            Entry {
                name: "value".to_string(),
                ty: cfg.ty.clone(),
                doc: "The new value being set.".to_string(),
                ..Entry::default()
            },
            Entry {
                name: "oldValue".to_string(),
                ty: cfg.ty.clone(),
                doc: "The existing value.".to_string(),
                ..Entry::default()
            },
        ],
        ..Entry::default()
    }
}

/// Uppercase the first character: `foo` → `Foo`, `fooBar` → `FooBar`.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
