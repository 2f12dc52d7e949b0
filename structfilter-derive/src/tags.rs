//! Parsing of `#[tags(...)]` field attributes.
//!
//! ```ignore
//! #[tags(filter = "public, user", audit = "pii")]
//! ```
//!
//! Keys are plain identifiers (raw identifiers lose their `r#`), values are
//! string literals kept verbatim. A field may carry several `#[tags]`
//! attributes; a key may appear only once across all of them.

use syn::{Attribute, LitStr, Meta, Result, ext::IdentExt, spanned::Spanned};

/// One `key = "value"` entry.
#[derive(Clone, Debug)]
pub(crate) struct FieldTag {
    pub(crate) key: String,
    pub(crate) value: LitStr,
}

pub(crate) fn parse_field_tags(attrs: &[Attribute]) -> Result<Vec<FieldTag>> {
    let mut tags: Vec<FieldTag> = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("tags") {
            continue;
        }

        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[tags(key = \"labels\")] syntax (e.g., #[tags(filter = \"public\")])",
            ));
        }

        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .ok_or_else(|| meta.error("tag keys must be plain identifiers"))?
                .unraw()
                .to_string();
            if tags.iter().any(|tag| tag.key == key) {
                return Err(meta.error(format!("duplicate tag key `{key}`")));
            }
            let value: LitStr = meta.value()?.parse()?;
            tags.push(FieldTag { key, value });
            Ok(())
        })?;
    }
    Ok(tags)
}
