//! Static field metadata: tags, field descriptors and record types.
//!
//! Everything in here is `'static` and const-constructible so the derive macro
//! can emit a record's shape as a `static` item. Projection builds owned
//! [`RecordType`]s from the same descriptors.

use std::{borrow::Cow, fmt};

// =============================================================================
// Tag - one `key:"value"` annotation on a field
// =============================================================================

/// A single tag attached to a field, e.g. `filter = "public, user"`.
///
/// The value is kept verbatim; splitting into labels happens at evaluation
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    key: &'static str,
    value: &'static str,
}

impl Tag {
    pub const fn new(key: &'static str, value: &'static str) -> Self {
        Self { key, value }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    pub const fn value(&self) -> &'static str {
        self.value
    }
}

// =============================================================================
// FieldDescriptor - name, declared type and tags of one field
// =============================================================================

/// Metadata for one field of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    type_name: &'static str,
    tags: &'static [Tag],
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, type_name: &'static str, tags: &'static [Tag]) -> Self {
        Self {
            name,
            type_name,
            tags,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type as written on the field (`Vec<String>`, `Option<i64>`).
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub const fn tags(&self) -> &'static [Tag] {
        self.tags
    }

    /// Returns the value stored under `key`, or `""` when the field has no
    /// such tag.
    pub fn tag(&self, key: &str) -> &'static str {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map_or("", |tag| tag.value)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.key == key)
    }
}

// =============================================================================
// RecordType - ordered field list of a record shape
// =============================================================================

/// The shape of a record: its name and ordered field descriptors.
///
/// Derived records expose a borrowed, `'static` instance. Types synthesized by
/// projection own their (filtered) field list. Equality compares name and
/// fields, regardless of which storage backs them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordType {
    name: &'static str,
    fields: Cow<'static, [FieldDescriptor]>,
}

impl RecordType {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name,
            fields: Cow::Borrowed(fields),
        }
    }

    /// Builds a record type that owns its field list.
    pub fn from_fields(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name,
            fields: Cow::Owned(fields),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        f.write_str(" { ")?;
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.type_name)?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGS: &[Tag] = &[Tag::new("filter", "public, user"), Tag::new("json", "id")];
    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("id", "String", TAGS),
        FieldDescriptor::new("count", "i32", &[]),
    ];
    static SHAPE: RecordType = RecordType::new("Shape", FIELDS);

    #[test]
    fn tag_lookup_returns_value_or_empty() {
        let field = SHAPE.field("id").unwrap();
        assert_eq!(field.tag("filter"), "public, user");
        assert_eq!(field.tag("json"), "id");
        assert_eq!(field.tag("gorm"), "");
        assert!(field.has_tag("json"));
        assert!(!SHAPE.field("count").unwrap().has_tag("filter"));
    }

    #[test]
    fn owned_and_static_types_compare_equal() {
        let owned = RecordType::from_fields("Shape", FIELDS.to_vec());
        assert_eq!(owned, SHAPE);
        assert_eq!(owned.position("count"), Some(1));
        assert!(!owned.contains("missing"));
    }

    #[test]
    fn display_lists_fields_with_types() {
        assert_eq!(SHAPE.to_string(), "Shape { id: String, count: i32 }");
        assert_eq!(RecordType::from_fields("Empty", Vec::new()).to_string(), "Empty");
    }
}
