//! The type-resolution oracle: an in-memory index of type declarations.
//!
//! The universe is built once per generation pass from parsed source files
//! and queried read-only by the scanner and builder. It carries no inference
//! logic itself — only "what declarations exist", "what is this type's base
//! type" and "what are this type's members".
//!
//! Structural conventions recognized in the analyzed source:
//! - a tuple struct's first field names its base type: `struct A(B);`
//! - unit structs and named-field structs declare no base
//! - inherent `impl` blocks supply members: `fn new` is the constructor,
//!   every other function is a handler method

use std::collections::HashMap;

use crate::util;

/// Opaque handle to one declaration in the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

/// One indexed type declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Simple identifier (e.g. `UserService`).
    pub name: String,

    /// Syntactic base-type reference, if the declaration embeds one.
    pub base: Option<syn::Path>,

    /// The inherent `new` member, if declared.
    pub ctor: Option<syn::ImplItemFn>,

    /// Every other inherent function member, in declaration order.
    pub methods: Vec<syn::ImplItemFn>,
}

/// Queryable universe of program declarations.
#[derive(Debug, Default)]
pub struct TypeUniverse {
    decls: Vec<TypeDecl>,
    by_name: HashMap<String, TypeId>,
}

impl TypeUniverse {
    /// Parse source strings and index them. Fails on the first source that
    /// is not valid Rust.
    pub fn from_sources<'a, I>(sources: I) -> syn::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let files = sources
            .into_iter()
            .map(syn::parse_file)
            .collect::<syn::Result<Vec<_>>>()?;
        Ok(Self::from_files(&files))
    }

    /// Index already-parsed files. Struct declarations are registered first
    /// so that an `impl` block may precede its type in source order.
    pub fn from_files(files: &[syn::File]) -> Self {
        let mut universe = TypeUniverse::default();
        for file in files {
            universe.index_structs(file);
        }
        for file in files {
            universe.attach_impls(file);
        }
        universe
    }

    fn index_structs(&mut self, file: &syn::File) {
        for item in &file.items {
            let syn::Item::Struct(item) = item else {
                continue;
            };
            let name = item.ident.to_string();
            // First declaration of a name wins; duplicates are ignored.
            if self.by_name.contains_key(&name) {
                continue;
            }
            let base = match &item.fields {
                syn::Fields::Unnamed(fields) => {
                    fields.unnamed.first().and_then(|field| match &field.ty {
                        syn::Type::Path(tp) => Some(tp.path.clone()),
                        _ => None,
                    })
                }
                _ => None,
            };
            let id = TypeId(self.decls.len());
            self.decls.push(TypeDecl {
                name: name.clone(),
                base,
                ctor: None,
                methods: Vec::new(),
            });
            self.by_name.insert(name, id);
        }
    }

    fn attach_impls(&mut self, file: &syn::File) {
        for item in &file.items {
            let syn::Item::Impl(item) = item else {
                continue;
            };
            // Trait impls carry no registration or handler members.
            if item.trait_.is_some() {
                continue;
            }
            let syn::Type::Path(self_ty) = item.self_ty.as_ref() else {
                continue;
            };
            let Some(id) = util::path_tail(&self_ty.path).and_then(|name| self.resolve(&name))
            else {
                continue;
            };
            for impl_item in &item.items {
                let syn::ImplItem::Fn(func) = impl_item else {
                    continue;
                };
                if func.sig.ident == "new" {
                    self.decls[id.0].ctor = Some(func.clone());
                } else {
                    self.decls[id.0].methods.push(func.clone());
                }
            }
        }
    }

    /// Resolve a simple type name to its declaration.
    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// The declaration behind a handle.
    pub fn decl(&self, id: TypeId) -> &TypeDecl {
        &self.decls[id.0]
    }

    /// One "get base type" lookup: resolve the declaration's syntactic base
    /// reference to another declaration. `None` when there is no base or the
    /// referenced name is not declared anywhere in the universe.
    pub fn base_of(&self, id: TypeId) -> Option<TypeId> {
        let base = self.decl(id).base.as_ref()?;
        self.resolve(&util::path_tail(base)?)
    }

    /// All declarations, in discovery order.
    pub fn types(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.decls.len()).map(TypeId)
    }

    /// Number of indexed declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
