//! Data model for the documentation graph — format-agnostic.

use serde::{Deserialize, Serialize};

/// Kind of documented construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tagname {
    Class,
    Cfg,
    Method,
    #[default]
    Property,
    Event,
}

/// Deprecation notice. The payload is opaque to this crate; it is carried
/// through to synthesized members verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deprecation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Boolean modifier flags on an entry.
///
/// A fixed set of named fields rather than a free-form tag bag, so that
/// inheritance onto synthesized members is an exhaustive copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    #[serde(skip_serializing_if = "is_false")]
    pub private: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub protected: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    #[serde(rename = "static", skip_serializing_if = "is_false")]
    pub is_static: bool,
    /// Build directive: synthesize getter/setter methods for this cfg.
    #[serde(skip_serializing_if = "is_false")]
    pub accessor: bool,
    /// Build directive: also synthesize a change event (requires `accessor`).
    #[serde(skip_serializing_if = "is_false")]
    pub evented: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !self.private
            && !self.protected
            && !self.hide
            && self.deprecated.is_none()
            && !self.is_static
            && !self.accessor
            && !self.evented
    }

    /// Flags a synthesized member inherits from its source cfg.
    ///
    /// `accessor`/`evented` are build directives and `static` is a property
    /// of the declaration site; none of them carry over.
    pub fn inherited(&self) -> Modifiers {
        Modifiers {
            private: self.private,
            protected: self.protected,
            hide: self.hide,
            deprecated: self.deprecated.clone(),
            is_static: false,
            accessor: false,
            evented: false,
        }
    }
}

/// Composite key that identifies a member within its owning class.
pub type MemberKey = (Tagname, String);

/// One documented thing: a class, config option, method, property or event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub tagname: Tagname,
    /// Identifier. May contain dots on input; dot-free after tree-building
    /// except for orphaned paths, which keep their full dotted name.
    pub name: String,
    /// Semantic type string, e.g. "String", "Object", "Number".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,
    /// Name of the class that declares or synthesizes this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Modifiers::is_empty")]
    pub modifiers: Modifiers,
    /// Parameters, for `method` and `event` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Entry>,
    /// Return description, for `method` entries that return something.
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub ret: Option<Box<Entry>>,
    /// Nested child entries, populated by tree-building.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Entry>,
}

impl Entry {
    pub fn new(tagname: Tagname, name: impl Into<String>) -> Entry {
        Entry {
            tagname,
            name: name.into(),
            ..Entry::default()
        }
    }

    pub fn key(&self) -> MemberKey {
        (self.tagname, self.name.clone())
    }
}

/// A fully aggregated class: ordered member collection, duplicates resolved,
/// property trees nested, accessors synthesized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDoc {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    #[serde(skip_serializing_if = "Modifiers::is_empty")]
    pub modifiers: Modifiers,
    pub members: Vec<Entry>,
}
