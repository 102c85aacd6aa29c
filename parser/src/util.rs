//! Shared syn helpers: name extraction and type-text rendering.

use quote::ToTokens;

/// Final segment of a path, as text.
/// e.g. `dsl::ServiceBase` → `"ServiceBase"`
pub fn path_tail(path: &syn::Path) -> Option<String> {
    path.segments.last().map(|seg| seg.ident.to_string())
}

/// Render a type as compact source text.
/// e.g. `Vec < User >` tokens → `"Vec<User>"`
pub fn type_text(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(tp) => tp
            .path
            .segments
            .iter()
            .map(segment_text)
            .collect::<Vec<_>>()
            .join("::"),
        syn::Type::Reference(r) => {
            if r.mutability.is_some() {
                format!("&mut {}", type_text(&r.elem))
            } else {
                format!("&{}", type_text(&r.elem))
            }
        }
        syn::Type::Tuple(t) if t.elems.is_empty() => "()".to_string(),
        other => tokens_text(other),
    }
}

fn segment_text(seg: &syn::PathSegment) -> String {
    match &seg.arguments {
        syn::PathArguments::None => seg.ident.to_string(),
        syn::PathArguments::AngleBracketed(args) => {
            let inner: Vec<String> = args
                .args
                .iter()
                .map(|arg| match arg {
                    syn::GenericArgument::Type(ty) => type_text(ty),
                    other => tokens_text(other),
                })
                .collect();
            format!("{}<{}>", seg.ident, inner.join(", "))
        }
        syn::PathArguments::Parenthesized(_) => tokens_text(seg),
    }
}

/// Fallback rendering: token stream text with spacing noise removed.
pub fn tokens_text<T: ToTokens>(node: &T) -> String {
    let tokens: proc_macro2::TokenStream = node.to_token_stream();
    tokens
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace(" <", "<")
        .replace(" > ", ">")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" (", "(")
        .replace("( ", "(")
        .replace(" )", ")")
}

/// First string literal in an expression's argument tree, depth-first.
///
/// Used on a constructor's base initializer, where the address literal may
/// sit behind nesting like `Self(ServiceBase::new("users"))`.
pub fn first_string_literal(expr: &syn::Expr) -> Option<String> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(s),
            ..
        }) => Some(s.value()),
        syn::Expr::Call(call) => call.args.iter().find_map(first_string_literal),
        syn::Expr::MethodCall(call) => first_string_literal(&call.receiver)
            .or_else(|| call.args.iter().find_map(first_string_literal)),
        syn::Expr::Tuple(tuple) => tuple.elems.iter().find_map(first_string_literal),
        syn::Expr::Paren(paren) => first_string_literal(&paren.expr),
        syn::Expr::Reference(r) => first_string_literal(&r.expr),
        syn::Expr::Struct(s) => s.fields.iter().find_map(|f| first_string_literal(&f.expr)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(input: &str) -> syn::Type {
        syn::parse_str(input).expect("failed to parse type")
    }

    #[test]
    fn plain_and_generic_types() {
        assert_eq!(type_text(&ty("User")), "User");
        assert_eq!(type_text(&ty("Vec<User>")), "Vec<User>");
        assert_eq!(type_text(&ty("Vec < User >")), "Vec<User>");
        assert_eq!(type_text(&ty("HashMap<String, Vec<u32>>")), "HashMap<String, Vec<u32>>");
    }

    #[test]
    fn qualified_and_reference_types() {
        assert_eq!(type_text(&ty("model::User")), "model::User");
        assert_eq!(type_text(&ty("&str")), "&str");
        assert_eq!(type_text(&ty("&mut User")), "&mut User");
        assert_eq!(type_text(&ty("()")), "()");
    }

    #[test]
    fn string_literal_in_nested_initializer() {
        let expr: syn::Expr = syn::parse_str(r#"Self(ServiceBase::new("users/v1"))"#).unwrap();
        assert_eq!(first_string_literal(&expr), Some("users/v1".to_string()));

        let expr: syn::Expr = syn::parse_str("Self(ServiceBase::default())").unwrap();
        assert_eq!(first_string_literal(&expr), None);
    }

    #[test]
    fn path_tail_extraction() {
        let path: syn::Path = syn::parse_str("dsl::ServiceBase").unwrap();
        assert_eq!(path_tail(&path), Some("ServiceBase".to_string()));
    }
}
