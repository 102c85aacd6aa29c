//! Model builder: turns one confirmed candidate into a `Service` record.
//!
//! Two passes over the candidate's members:
//! 1. constructor-driven operation discovery — each call statement in the
//!    `new` body is a registration; the trailing expression is the base
//!    initializer,
//! 2. signature enrichment — every other method must match exactly one
//!    registered operation, and supplies its parameters and return shape.
//!
//! A failure in either pass drops only this candidate.

use caller_ir::{HttpVerb, Operation, ParamDef, Service};
use syn::punctuated::Punctuated;
use syn::token::Comma;

use crate::error::BuildError;
use crate::scanner::MarkerSet;
use crate::universe::{TypeId, TypeUniverse};
use crate::util;

/// Build the service model for one confirmed candidate.
pub fn build_service(
    universe: &TypeUniverse,
    markers: &MarkerSet,
    id: TypeId,
) -> Result<Service, BuildError> {
    let decl = universe.decl(id);

    // Pass 1: constructor-driven operation discovery.
    let mut base_address = None;
    let mut operations: Vec<Operation> = Vec::new();
    if let Some(ctor) = &decl.ctor {
        for stmt in &ctor.block.stmts {
            match stmt {
                syn::Stmt::Expr(expr, Some(_)) => {
                    if let Some(op) = parse_registration(expr)? {
                        operations.push(op);
                    }
                }
                // The trailing expression is the base initializer; a string
                // literal anywhere in its argument tree overrides the
                // service's base address.
                syn::Stmt::Expr(expr, None) => {
                    base_address = util::first_string_literal(expr);
                }
                _ => {}
            }
        }
    }

    // Pass 2: signature enrichment. Registered names and declared methods
    // must form a bijection.
    let mut enriched = vec![false; operations.len()];
    for method in &decl.methods {
        let name = method.sig.ident.to_string();
        let idx = operations
            .iter()
            .position(|op| op.name == name)
            .ok_or_else(|| BuildError::UnregisteredMethod(name.clone()))?;
        if enriched[idx] {
            return Err(BuildError::DuplicateMember(name));
        }
        enriched[idx] = true;
        operations[idx].params = parse_params(&method.sig);
        operations[idx].return_type = resolve_return(universe, markers, &method.sig.output);
    }
    if let Some(idx) = enriched.iter().position(|done| !done) {
        return Err(BuildError::UnknownHandler(operations[idx].name.clone()));
    }

    Ok(Service {
        name: decl.name.clone(),
        base_address,
        operations,
    })
}

/// Interpret one statement expression as a registration, if it is an
/// invocation at all. Non-invocation statements take no part in discovery.
fn parse_registration(expr: &syn::Expr) -> Result<Option<Operation>, BuildError> {
    let (invoked, args) = match expr {
        syn::Expr::Call(call) => {
            let invoked = match call.func.as_ref() {
                syn::Expr::Path(path) => util::path_tail(&path.path).unwrap_or_default(),
                other => util::tokens_text(other),
            };
            (invoked, &call.args)
        }
        syn::Expr::MethodCall(call) => (call.method.to_string(), &call.args),
        _ => return Ok(None),
    };

    let verb = HttpVerb::from_registration(&invoked)
        .ok_or(BuildError::UnknownRegistration(invoked))?;

    parse_arguments(verb, args).map(Some)
}

/// Classify registration arguments: argument 0 names the handler, a string
/// literal is the custom route, a bool literal is the trim flag. A second
/// occurrence of either kind fails the candidate instead of silently
/// overwriting the first.
fn parse_arguments(
    verb: HttpVerb,
    args: &Punctuated<syn::Expr, Comma>,
) -> Result<Operation, BuildError> {
    let mut args = args.iter();
    let handler = match args.next() {
        None => return Err(BuildError::MissingHandler),
        Some(syn::Expr::Path(path)) => {
            util::path_tail(&path.path).ok_or(BuildError::MalformedHandler)?
        }
        Some(_) => return Err(BuildError::MalformedHandler),
    };

    let mut custom_route: Option<String> = None;
    let mut trim_flag: Option<bool> = None;
    for arg in args {
        match arg {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit),
                ..
            }) => {
                if custom_route.replace(lit.value()).is_some() {
                    return Err(BuildError::DuplicateRoute(handler));
                }
            }
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(lit),
                ..
            }) => {
                if trim_flag.replace(lit.value).is_some() {
                    return Err(BuildError::DuplicateTrimFlag(handler));
                }
            }
            _ => return Err(BuildError::UnsupportedArgument(handler)),
        }
    }

    let route = derive_route(&handler, custom_route, trim_flag);
    Ok(Operation {
        name: handler,
        verb,
        route,
        params: Vec::new(),
        return_type: None,
    })
}

/// Route derivation. A custom route always wins; otherwise the handler name
/// is used, with a trailing `async` (any casing) stripped unless the trim
/// flag is explicitly false.
fn derive_route(handler: &str, custom: Option<String>, trim: Option<bool>) -> String {
    if let Some(route) = custom {
        return route;
    }
    if trim.unwrap_or(true) {
        if let Some(stem) = strip_async_suffix(handler) {
            return stem.to_string();
        }
    }
    handler.to_string()
}

/// Strip exactly the five trailing characters when the name ends with
/// `async`, case-insensitively.
fn strip_async_suffix(handler: &str) -> Option<&str> {
    let cut = handler.len().checked_sub(5)?;
    let suffix = handler.get(cut..)?;
    suffix.eq_ignore_ascii_case("async").then(|| &handler[..cut])
}

/// Declared parameters in order, skipping the receiver.
fn parse_params(sig: &syn::Signature) -> Vec<ParamDef> {
    sig.inputs
        .iter()
        .filter_map(|input| match input {
            syn::FnArg::Receiver(_) => None,
            syn::FnArg::Typed(param) => Some(ParamDef {
                name: pattern_name(&param.pat),
                ty: util::type_text(&param.ty),
            }),
        })
        .collect()
}

fn pattern_name(pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(ident) => ident.ident.to_string(),
        other => util::tokens_text(other),
    }
}

/// Resolve the operation's payload type from the declared return type.
///
/// A generic wrapper whose declaration's base resolves to the async-result
/// marker is unwrapped exactly one level: its first generic argument is the
/// payload. Any other annotated type is taken as-is; a void-like return
/// carries no payload.
fn resolve_return(
    universe: &TypeUniverse,
    markers: &MarkerSet,
    output: &syn::ReturnType,
) -> Option<String> {
    let ty = match output {
        syn::ReturnType::Default => return None,
        syn::ReturnType::Type(_, ty) => ty.as_ref(),
    };
    if let syn::Type::Tuple(tuple) = ty {
        if tuple.elems.is_empty() {
            return None;
        }
    }
    if let syn::Type::Path(tp) = ty {
        if let Some(seg) = tp.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                if wrapper_is_async(universe, markers, &seg.ident.to_string()) {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return Some(util::type_text(inner));
                    }
                }
            }
        }
    }
    Some(util::type_text(ty))
}

/// Whether a return wrapper's declaration has the async-result marker as its
/// immediate base.
fn wrapper_is_async(universe: &TypeUniverse, markers: &MarkerSet, name: &str) -> bool {
    let Some(async_marker) = markers.async_result else {
        return false;
    };
    universe
        .resolve(name)
        .and_then(|id| universe.base_of(id))
        == Some(async_marker)
}
