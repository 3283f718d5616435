//! Property tree builder — re-nests dotted member names.
//!
//! A flat, ordered list like `coord`, `coord.lat`, `coord.lat.numerator`,
//! `coord.lng` becomes a single root `coord` whose `properties` hold the
//! children, each child keeping only its last name segment. The upstream
//! extractor always emits a parent before its children, so one
//! left-to-right pass is enough.

use crate::model::{Entry, Tagname};

/// Nest a flat namespace of entries by their dotted names.
///
/// Returns only the top-level entries; dotted entries move into the
/// `properties` of the node their parent path names. A parent is matched by
/// accumulated path and by tagname, so a dotted `cfg` never attaches under
/// a `property` of the same name. An entry whose parent path resolves to
/// nothing is kept as a top-level root under its full dotted name rather
/// than dropped.
pub fn nest_properties(entries: Vec<Entry>) -> Vec<Entry> {
    let mut roots: Vec<Entry> = Vec::new();

    for mut entry in entries {
        let Some(dot) = entry.name.rfind('.') else {
            roots.push(entry);
            continue;
        };

        let path: Vec<String> = entry.name[..dot].split('.').map(str::to_string).collect();
        let leaf = entry.name[dot + 1..].to_string();

        match find_node_mut(&mut roots, entry.tagname, &path) {
            Some(parent) => {
                entry.name = leaf;
                parent.properties.push(entry);
            }
            // Orphaned path: retain under the literal dotted name.
            None => roots.push(entry),
        }
    }

    roots
}

fn find_node_mut<'a>(
    nodes: &'a mut [Entry],
    tagname: Tagname,
    path: &[String],
) -> Option<&'a mut Entry> {
    let (first, rest) = path.split_first()?;
    let node = nodes
        .iter_mut()
        .find(|n| n.tagname == tagname && n.name == *first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find_node_mut(&mut node.properties, tagname, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str, ty: &str) -> Entry {
        Entry {
            ty: Some(ty.to_string()),
            ..Entry::new(Tagname::Property, name)
        }
    }

    fn coord_entries() -> Vec<Entry> {
        vec![
            prop("coord", "Object"),
            prop("coord.lat", "Object"),
            prop("coord.lat.numerator", "Number"),
            prop("coord.lat.denominator", "Number"),
            prop("coord.lng", "Number"),
        ]
    }

    #[test]
    fn nests_three_levels() {
        let roots = nest_properties(coord_entries());

        assert_eq!(roots.len(), 1);
        let coord = &roots[0];
        assert_eq!(coord.name, "coord");
        assert_eq!(coord.properties.len(), 2);

        let lat = &coord.properties[0];
        assert_eq!(lat.name, "lat");
        assert_eq!(lat.ty.as_deref(), Some("Object"));
        assert_eq!(lat.properties.len(), 2);
        assert_eq!(lat.properties[0].name, "numerator");
        assert_eq!(lat.properties[1].name, "denominator");

        let lng = &coord.properties[1];
        assert_eq!(lng.name, "lng");
        assert_eq!(lng.ty.as_deref(), Some("Number"));
        assert!(lng.properties.is_empty());
    }

    #[test]
    fn keeps_sibling_order() {
        let roots = nest_properties(vec![
            prop("a", "Object"),
            prop("a.z", "Number"),
            prop("a.m", "Number"),
            prop("a.b", "Number"),
        ]);
        let names: Vec<&str> = roots[0].properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["z", "m", "b"]);
    }

    #[test]
    fn dotless_entries_pass_through() {
        let roots = nest_properties(vec![prop("x", "Number"), prop("y", "Number")]);
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|r| r.properties.is_empty()));
    }

    #[test]
    fn orphan_keeps_full_dotted_name() {
        let roots = nest_properties(vec![prop("a", "Object"), prop("b.c", "Number")]);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].name, "b.c");
        assert_eq!(roots[1].ty.as_deref(), Some("Number"));
    }

    #[test]
    fn parent_tagname_must_match() {
        let mut entries = vec![prop("coord", "Object")];
        entries.push(Entry {
            ty: Some("Number".to_string()),
            ..Entry::new(Tagname::Cfg, "coord.lat")
        });
        let roots = nest_properties(entries);
        // The cfg has no cfg parent, so it stays a root.
        assert_eq!(roots.len(), 2);
        assert!(roots[0].properties.is_empty());
        assert_eq!(roots[1].name, "coord.lat");
    }

    // Flatten a tree back into dotted names, depth-first.
    fn flatten(prefix: Option<&str>, nodes: &[Entry], out: &mut Vec<Entry>) {
        for node in nodes {
            let mut flat = node.clone();
            let children = std::mem::take(&mut flat.properties);
            flat.name = match prefix {
                Some(p) => format!("{}.{}", p, node.name),
                None => node.name.clone(),
            };
            let path = flat.name.clone();
            out.push(flat);
            flatten(Some(&path), &children, out);
        }
    }

    #[test]
    fn tree_round_trips_through_flattening() {
        let tree = nest_properties(coord_entries());
        let mut flat = Vec::new();
        flatten(None, &tree, &mut flat);
        let rebuilt = nest_properties(flat);
        assert_eq!(rebuilt, tree);
    }
}
