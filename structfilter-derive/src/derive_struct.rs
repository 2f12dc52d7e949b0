//! Struct-specific `Record` derivation.
//!
//! This module turns named fields into static descriptors, by-name accessor
//! arms and the where-predicates their types require.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{Fields, FieldsNamed, Result, ext::IdentExt, parse_quote, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::ContainerOptions,
    generics::collect_generics_from_type,
    tags::parse_field_tags,
    types::{is_phantom_data, type_display},
};

pub(crate) fn derive_struct(
    name: &Ident,
    fields: Fields,
    generics: &syn::Generics,
    options: ContainerOptions,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    match fields {
        Fields::Named(fields) => derive_named_struct(fields, generics, options, root),
        Fields::Unit => Ok(DeriveOutput::default()),
        Fields::Unnamed(fields) => Err(syn::Error::new(
            fields.span(),
            format!("`Record` can only be derived for structs with named fields; `{name}` is a tuple struct"),
        )),
    }
}

fn derive_named_struct(
    fields: FieldsNamed,
    generics: &syn::Generics,
    options: ContainerOptions,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut output = DeriveOutput::default();

    for (index, field) in fields.named.into_iter().enumerate() {
        let Some(ident) = field.ident else {
            continue;
        };
        let ty = field.ty;
        let field_name = ident.unraw().to_string();
        let type_name = type_display(&ty);

        let tags = parse_field_tags(&field.attrs)?;
        let tag_keys = tags.iter().map(|tag| &tag.key);
        let tag_values = tags.iter().map(|tag| &tag.value);
        let tags_const = format_ident!("__FIELD_{}_TAGS", index);
        output.descriptor_items.push(quote! {
            const #tags_const: &[#root::Tag] = &[#( #root::Tag::new(#tag_keys, #tag_values) ),*];
        });
        output.descriptors.push(quote! {
            #root::FieldDescriptor::new(#field_name, #type_name, #tags_const)
        });

        let span = ty.span();
        output.field_arms.push(quote_spanned! {span=>
            #field_name => {
                let value: &dyn #root::FieldValue = &self.#ident;
                ::core::option::Option::Some(value)
            }
        });
        output.field_mut_arms.push(quote_spanned! {span=>
            #field_name => {
                let value: &mut dyn #root::FieldValue = &mut self.#ident;
                ::core::option::Option::Some(value)
            }
        });
        if options.json {
            output.json_arms.push(quote! {
                #field_name => #root::__private::serde_json::to_value(&self.#ident).ok(),
            });
        }

        if !is_phantom_data(&ty) && !collect_generics_from_type(&ty, generics).is_empty() {
            output
                .predicates
                .push(parse_quote!(#ty: #root::FieldValue));
            if options.json {
                output
                    .predicates
                    .push(parse_quote!(#ty: #root::__private::serde::Serialize));
            }
        }
    }

    Ok(output)
}
