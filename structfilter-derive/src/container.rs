//! Parsing of the `#[record(...)]` container attribute.

use syn::{Attribute, Meta, Result, spanned::Spanned};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// `#[record(json)]`: render fields through `serde_json`.
    pub(crate) json: bool,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[record(option)] syntax (e.g., #[record(json)])",
            ));
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("json") {
                if options.json {
                    return Err(meta.error("duplicate record option `json`"));
                }
                options.json = true;
                Ok(())
            } else {
                Err(meta.error("unknown record option; expected `json`"))
            }
        })?;
    }
    Ok(options)
}
