//! Type utilities for the derive macro.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;

/// Checks if a type is `PhantomData<...>` or `std::marker::PhantomData<...>`.
///
/// `PhantomData<T>` never carries a value of `T`, so a field of this type
/// puts no requirements on `T` beyond `'static`.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty
        && let Some(last_segment) = path.path.segments.last()
    {
        return last_segment.ident == "PhantomData"
            && matches!(
                last_segment.arguments,
                syn::PathArguments::AngleBracketed(_)
            );
    }
    false
}

/// Renders a type the way it is usually written in source.
///
/// Words are separated by single spaces, `,` and `;` are followed by one, and
/// `+`, `=` and `->` are surrounded by them. Everything else is packed:
/// `Vec<String>`, `&'static str`, `[u8; 4]`, `HashMap<K, V>`.
pub(crate) fn type_display(ty: &syn::Type) -> String {
    let mut out = String::new();
    write_tokens(ty.to_token_stream(), &mut out);
    out.trim_end().to_owned()
}

fn write_tokens(tokens: TokenStream, out: &mut String) {
    let mut trees = tokens.into_iter().peekable();
    while let Some(tree) = trees.next() {
        match tree {
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                write_tokens(group.stream(), out);
                trim_trailing_space(out);
                out.push_str(close);
            }
            TokenTree::Punct(punct) => match punct.as_char() {
                ',' | ';' => {
                    trim_trailing_space(out);
                    out.push(punct.as_char());
                    out.push(' ');
                }
                '+' | '=' => {
                    trim_trailing_space(out);
                    out.push(' ');
                    out.push(punct.as_char());
                    out.push(' ');
                }
                '-' if punct.spacing() == Spacing::Joint
                    && matches!(trees.peek(), Some(TokenTree::Punct(next)) if next.as_char() == '>') =>
                {
                    trees.next();
                    trim_trailing_space(out);
                    out.push_str(" -> ");
                }
                other => out.push(other),
            },
            TokenTree::Ident(ident) => push_word(out, &ident.to_string()),
            TokenTree::Literal(literal) => push_word(out, &literal.to_string()),
        }
    }
}

fn push_word(out: &mut String, word: &str) {
    if out.chars().last().is_some_and(is_word_char) && word.chars().next().is_some_and(is_word_char)
    {
        out.push(' ');
    }
    out.push_str(word);
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn trim_trailing_space(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
}
