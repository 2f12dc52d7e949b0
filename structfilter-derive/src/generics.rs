//! Finding the generic parameters a field type depends on.
//!
//! Every type parameter gets a `'static` bound, since record fields are
//! inspected through `Any`. Field types that mention a type or const parameter
//! get a `FieldValue` predicate (and `Serialize` when JSON rendering is
//! enabled). `PhantomData<T>` fields need no predicate:
//!
//! ```ignore
//! #[derive(Clone, Debug, Record)]
//! struct Ballot<Voter> {
//!     #[tags(filter = "public")]
//!     choice: u8,
//!     _voter: PhantomData<Voter>,
//! }
//! ```

use syn::{Ident, parse_quote};

/// Collects the declared type and const parameters a field type mentions.
struct ParamUsage<'a> {
    generics: &'a syn::Generics,
    found: Vec<Ident>,
}

impl ParamUsage<'_> {
    fn note(&mut self, ident: &Ident) {
        let declared = self.generics.type_params().any(|param| param.ident == *ident)
            || self.generics.const_params().any(|param| param.ident == *ident);
        if declared && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    fn ty(&mut self, ty: &syn::Type) {
        match ty {
            syn::Type::Path(type_path) => {
                if let Some(qself) = &type_path.qself {
                    self.ty(&qself.ty);
                }
                self.path(&type_path.path);
            }
            syn::Type::Array(array) => {
                self.ty(&array.elem);
                self.expr(&array.len);
            }
            syn::Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.ty(elem)),
            syn::Type::Reference(reference) => self.ty(&reference.elem),
            syn::Type::Slice(slice) => self.ty(&slice.elem),
            syn::Type::Paren(paren) => self.ty(&paren.elem),
            syn::Type::Group(group) => self.ty(&group.elem),
            // Raw pointers, fn pointers and trait objects: their `Clone` and
            // `Debug` impls hold for any parameter.
            _ => {}
        }
    }

    fn path(&mut self, path: &syn::Path) {
        if path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData")
        {
            return;
        }
        if path.leading_colon.is_none()
            && let Some(first) = path.segments.first()
        {
            self.note(&first.ident);
        }
        for segment in &path.segments {
            let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
                continue;
            };
            for arg in &args.args {
                match arg {
                    syn::GenericArgument::Type(ty) => self.ty(ty),
                    syn::GenericArgument::AssocType(assoc) => self.ty(&assoc.ty),
                    syn::GenericArgument::Const(expr) => self.expr(expr),
                    _ => {}
                }
            }
        }
    }

    fn expr(&mut self, expr: &syn::Expr) {
        if let syn::Expr::Path(expr) = expr
            && let Some(ident) = expr.path.get_ident()
        {
            self.note(ident);
        }
    }
}

/// Returns the type and const parameters of `generics` that `ty` mentions,
/// skipping `PhantomData` arguments.
pub(crate) fn collect_generics_from_type(ty: &syn::Type, generics: &syn::Generics) -> Vec<Ident> {
    let mut usage = ParamUsage {
        generics,
        found: Vec::new(),
    };
    usage.ty(ty);
    usage.found
}

/// Adds a `'static` bound to every type parameter.
pub(crate) fn add_static_bounds(mut generics: syn::Generics) -> syn::Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    generics
}

/// Appends `predicates` to the where clause of `generics`.
pub(crate) fn add_where_predicates(
    mut generics: syn::Generics,
    predicates: impl IntoIterator<Item = syn::WherePredicate>,
) -> syn::Generics {
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn generics(tokens: proc_macro2::TokenStream) -> syn::Generics {
        let input: syn::DeriveInput = syn::parse2(quote! { struct Dummy #tokens; })
            .expect("should parse as DeriveInput");
        input.generics
    }

    fn ty(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as Type")
    }

    #[test]
    fn finds_nested_type_parameters() {
        let generics = generics(quote! { <K, V, U> });
        let found = collect_generics_from_type(&ty(quote! { HashMap<K, Vec<V>> }), &generics);
        assert_eq!(found, ["K", "V"]);
    }

    #[test]
    fn finds_const_parameters_in_array_lengths() {
        let generics = generics(quote! { <T, const N: usize> });
        let found = collect_generics_from_type(&ty(quote! { [u8; N] }), &generics);
        assert_eq!(found, ["N"]);
    }

    #[test]
    fn skips_phantom_data() {
        let generics = generics(quote! { <T> });
        assert!(collect_generics_from_type(&ty(quote! { PhantomData<T> }), &generics).is_empty());
        assert!(
            collect_generics_from_type(&ty(quote! { std::marker::PhantomData<T> }), &generics)
                .is_empty()
        );
    }

    #[test]
    fn finds_parameters_behind_references_tuples_and_projections() {
        let generics = generics(quote! { <T, U, const N: usize> });
        let found = collect_generics_from_type(
            &ty(quote! { (&'static [T], <U as Iterator>::Item, Buffer<N>) }),
            &generics,
        );
        assert_eq!(found, ["T", "U", "N"]);
    }

    #[test]
    fn fn_pointers_need_no_predicate() {
        let generics = generics(quote! { <T> });
        assert!(collect_generics_from_type(&ty(quote! { Option<fn(T) -> T> }), &generics).is_empty());
    }

    #[test]
    fn concrete_types_mention_nothing() {
        let generics = generics(quote! { <T> });
        assert!(collect_generics_from_type(&ty(quote! { Vec<String> }), &generics).is_empty());
    }

    #[test]
    fn static_bounds_on_every_type_parameter() {
        let generics = add_static_bounds(generics(quote! { <T: Clone, U, const N: usize> }));
        let bounded = generics
            .type_params()
            .filter(|param| {
                param
                    .bounds
                    .iter()
                    .any(|bound| matches!(bound, syn::TypeParamBound::Lifetime(lt) if lt.ident == "static"))
            })
            .count();
        assert_eq!(bounded, 2);
    }

    #[test]
    fn where_predicates_are_appended() {
        let predicate: syn::WherePredicate = parse_quote!(Vec<T>: Clone);
        let generics = add_where_predicates(generics(quote! { <T> }), [predicate]);
        assert_eq!(generics.where_clause.unwrap().predicates.len(), 1);
    }
}
