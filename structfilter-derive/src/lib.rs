//! Derive macro for `structfilter`.
//!
//! This crate generates the record metadata behind `#[derive(Record)]`. It:
//! - reads `#[tags(...)]` field attributes and the `#[record(...)]` container
//!   attribute
//! - emits a static `RecordType` describing the struct's fields
//! - emits by-name field accessors implementing `DynRecord`
//!
//! It does **not** evaluate policies. Labels are stored verbatim and matched at
//! runtime by the `structfilter` crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

mod container;
mod derive_struct;
mod generics;
mod tags;
mod types;

use container::parse_container_options;
use derive_struct::derive_struct;
use generics::{add_static_bounds, add_where_predicates};
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Result, ext::IdentExt, parse_macro_input, parse_quote, spanned::Spanned,
};

/// Derives `structfilter::Record` and `structfilter::DynRecord` for structs
/// with named fields.
///
/// # Field Attributes
///
/// - `#[tags(key = "labels", ...)]`: attaches tags to the field. The value is a
///   comma-separated label list (`#[tags(filter = "public, user")]`). Keys
///   must be unique per field. Untagged fields have no tags at all, which
///   policies select with the empty label `""`.
///
/// # Container Attributes
///
/// - `#[record(json)]`: also implements `DynRecord::field_json`, rendering
///   each field with `serde_json`. Requires the runtime `json` feature and
///   `Serialize` field types.
///
/// # Requirements
///
/// - every field type is `Clone + Default + Debug + 'static`
/// - the struct itself is `Clone + Debug`
///
/// Type parameters are bounded by `'static`; field types mentioning a type
/// parameter are bounded by `FieldValue` (`PhantomData<T>` fields excepted).
///
/// Enums, unions, tuple structs and types with lifetime parameters are
/// rejected at compile time. Unit structs derive a record with no fields.
#[proc_macro_derive(Record, attributes(tags, record))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

#[derive(Default)]
struct DeriveOutput {
    descriptor_items: Vec<TokenStream>,
    descriptors: Vec<TokenStream>,
    field_arms: Vec<TokenStream>,
    field_mut_arms: Vec<TokenStream>,
    json_arms: Vec<TokenStream>,
    predicates: Vec<syn::WherePredicate>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "`Record` cannot be derived for types with lifetime parameters",
        ));
    }

    let fields = match data {
        Data::Struct(data) => data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Record` can only be derived for structs with named fields",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Record` cannot be derived for unions",
            ));
        }
    };

    let options = parse_container_options(&attrs)?;
    let root = crate_root();
    let DeriveOutput {
        descriptor_items,
        descriptors,
        field_arms,
        field_mut_arms,
        json_arms,
        predicates,
    } = derive_struct(&ident, fields, &generics, options, &root)?;

    let record_name = ident.unraw().to_string();
    let self_predicates: [syn::WherePredicate; 2] = [
        parse_quote!(Self: ::core::clone::Clone),
        parse_quote!(Self: ::core::fmt::Debug),
    ];
    let generics = add_where_predicates(
        add_static_bounds(generics),
        predicates.into_iter().chain(self_predicates),
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_json = options.json.then(|| {
        quote! {
            fn field_json(
                &self,
                name: &str,
            ) -> ::core::option::Option<#root::__private::serde_json::Value> {
                match name {
                    #(#json_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #root::DynRecord for #ident #ty_generics #where_clause {
            fn record_type(&self) -> &#root::RecordType {
                <Self as #root::Record>::descriptor()
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn #root::FieldValue> {
                match name {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn #root::FieldValue> {
                match name {
                    #(#field_mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn clone_record(&self) -> ::std::boxed::Box<dyn #root::DynRecord> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::core::any::Any> {
                self
            }

            #field_json
        }

        #[automatically_derived]
        impl #impl_generics #root::Record for #ident #ty_generics #where_clause {
            fn descriptor() -> &'static #root::RecordType {
                #(#descriptor_items)*
                const FIELDS: &[#root::FieldDescriptor] = &[#(#descriptors),*];
                static RECORD_TYPE: #root::RecordType = #root::RecordType::new(#record_name, FIELDS);
                &RECORD_TYPE
            }
        }
    })
}

/// Returns the token stream to reference the structfilter crate root.
///
/// Handles crate renaming (e.g., `sf = { package = "structfilter", ... }`).
/// Inside `structfilter` itself the absolute path still resolves, because the
/// crate declares `extern crate self as structfilter`. Doctests, which are
/// reported as the crate itself, rely on that.
fn crate_root() -> TokenStream {
    match crate_name("structfilter") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::structfilter },
    }
}
