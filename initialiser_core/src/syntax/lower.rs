use crate::model::{Declaration, DeclarationKind, Member, Modifiers, PUBLIC, Parameter};
use quote::ToTokens;
use syn::{
    Fields, FnArg, ImplItem, Item, ItemImpl, ItemStruct, ReturnType, Signature, TraitItem, Type,
    Visibility,
};
use tracing::trace;

/// Lowers a declaration group into the engine model.
///
/// Returns `None` for items that are not declaration groups at all
/// (functions, modules, `use` items, ...).
pub fn lower_item(item: &Item) -> Option<Declaration> {
    let declaration = match item {
        Item::Struct(item) => lower_struct(item),
        Item::Enum(item) => Declaration {
            name: item.ident.to_string(),
            kind: DeclarationKind::Enum,
            modifiers: visibility_modifiers(&item.vis),
            members: item
                .variants
                .iter()
                .map(|variant| Member::Property {
                    name: variant.ident.to_string(),
                })
                .collect(),
        },
        Item::Union(item) => Declaration {
            name: item.ident.to_string(),
            kind: DeclarationKind::Union,
            modifiers: visibility_modifiers(&item.vis),
            members: item
                .fields
                .named
                .iter()
                .map(|field| Member::Property {
                    name: field
                        .ident
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                })
                .collect(),
        },
        Item::Trait(item) => {
            let mut modifiers = visibility_modifiers(&item.vis);
            if item.unsafety.is_some() {
                modifiers.insert("unsafe");
            }
            Declaration {
                name: item.ident.to_string(),
                kind: DeclarationKind::Protocol,
                modifiers,
                members: item.items.iter().map(lower_trait_item).collect(),
            }
        }
        Item::Impl(item) => {
            let name = type_name(&item.self_ty).unwrap_or_else(|| "_".to_string());
            let mut modifiers = Modifiers::new();
            if item.unsafety.is_some() {
                modifiers.insert("unsafe");
            }
            Declaration {
                members: lower_impl_members(item, &name),
                name,
                kind: DeclarationKind::Extension,
                modifiers,
            }
        }
        _ => return None,
    };

    trace!(
        "Lowered {} `{}` with modifiers {:?}",
        declaration.kind, declaration.name, declaration.modifiers
    );
    Some(declaration)
}

/// Lowers a struct. Its fields become [`Member::Property`] entries; a struct
/// body cannot hold constructors, those live in `impl` blocks (see
/// [`collect_inherent_members`]).
pub fn lower_struct(item: &ItemStruct) -> Declaration {
    let members = match &item.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|field| field.ident.as_ref())
            .map(|ident| Member::Property {
                name: ident.to_string(),
            })
            .collect(),
        Fields::Unnamed(fields) => (0..fields.unnamed.len())
            .map(|index| Member::Property {
                name: index.to_string(),
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    Declaration {
        name: item.ident.to_string(),
        kind: DeclarationKind::Struct,
        modifiers: visibility_modifiers(&item.vis),
        members,
    }
}

/// Maps Rust visibility onto qualifier tokens. Only a bare `pub` is public.
pub fn visibility_modifiers(vis: &Visibility) -> Modifiers {
    let mut modifiers = Modifiers::new();
    match vis {
        Visibility::Public(_) => modifiers.insert(PUBLIC),
        Visibility::Restricted(restricted)
            if restricted.in_token.is_none() && restricted.path.is_ident("crate") =>
        {
            modifiers.insert("crate")
        }
        Visibility::Restricted(_) => modifiers.insert("restricted"),
        Visibility::Inherited => {}
    }
    modifiers
}

/// Members declared by every inherent `impl` of `name` among `items`.
/// Trait impls are skipped: `Default::default` is not a public constructor
/// of the type itself.
pub fn collect_inherent_members(items: &[Item], name: &str) -> Vec<Member> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(item_impl)
                if item_impl.trait_.is_none()
                    && type_name(&item_impl.self_ty).as_deref() == Some(name) =>
            {
                Some(lower_impl_members(item_impl, name))
            }
            _ => None,
        })
        .flatten()
        .collect()
}

fn lower_impl_members(item: &ItemImpl, self_name: &str) -> Vec<Member> {
    item.items
        .iter()
        .map(|impl_item| match impl_item {
            ImplItem::Fn(function) => lower_signature(&function.vis, &function.sig, self_name),
            _ => Member::Other,
        })
        .collect()
}

fn lower_trait_item(item: &TraitItem) -> Member {
    match item {
        TraitItem::Fn(function) => Member::Method {
            name: function.sig.ident.to_string(),
            modifiers: Modifiers::new(),
        },
        _ => Member::Other,
    }
}

/// An associated function without a receiver that returns `Self` (or the
/// type by name) is constructor-shaped.
fn lower_signature(vis: &Visibility, sig: &Signature, self_name: &str) -> Member {
    let modifiers = visibility_modifiers(vis);
    let name = sig.ident.to_string();

    if sig.receiver().is_none() && returns_self(&sig.output, self_name) {
        Member::Initializer {
            name: Some(name),
            modifiers,
            parameters: sig.inputs.iter().filter_map(lower_parameter).collect(),
        }
    } else {
        Member::Method { name, modifiers }
    }
}

fn lower_parameter(arg: &FnArg) -> Option<Parameter> {
    match arg {
        FnArg::Typed(typed) => Some(Parameter::new(
            typed.pat.to_token_stream().to_string(),
            typed.ty.to_token_stream().to_string(),
        )),
        FnArg::Receiver(_) => None,
    }
}

fn returns_self(output: &ReturnType, self_name: &str) -> bool {
    match output {
        ReturnType::Type(_, ty) => {
            type_name(ty).is_some_and(|name| name == "Self" || name == self_name)
        }
        ReturnType::Default => false,
    }
}

/// Last path segment of a type, e.g. `Foo` for `crate::model::Foo<T>`.
pub fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => None,
    }
}
