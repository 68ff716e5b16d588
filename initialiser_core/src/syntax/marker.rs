use syn::{Attribute, Item};

/// True if `attr` is one of the marker `names`. Only the last path segment is
/// compared, so `#[initialiser::public_initialiser]` matches too.
pub fn is_marker(attr: &Attribute, names: &[String]) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| names.iter().any(|name| segment.ident == name))
}

/// Outer attributes of an item, or an empty slice for items that carry none
/// we care about.
pub fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Struct(item) => &item.attrs,
        Item::Enum(item) => &item.attrs,
        Item::Union(item) => &item.attrs,
        Item::Trait(item) => &item.attrs,
        Item::Impl(item) => &item.attrs,
        Item::Fn(item) => &item.attrs,
        Item::Mod(item) => &item.attrs,
        Item::Const(item) => &item.attrs,
        Item::Static(item) => &item.attrs,
        Item::Type(item) => &item.attrs,
        Item::TraitAlias(item) => &item.attrs,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn names() -> Vec<String> {
        vec!["public_initialiser".to_string(), "ctor".to_string()]
    }

    #[test]
    fn matches_plain_and_qualified_paths() {
        let plain: Attribute = parse_quote!(#[public_initialiser]);
        let qualified: Attribute = parse_quote!(#[initialiser::public_initialiser]);
        let alias: Attribute = parse_quote!(#[ctor]);
        assert!(is_marker(&plain, &names()));
        assert!(is_marker(&qualified, &names()));
        assert!(is_marker(&alias, &names()));
    }

    #[test]
    fn ignores_other_attributes() {
        let derive: Attribute = parse_quote!(#[derive(Debug)]);
        assert!(!is_marker(&derive, &names()));
    }

    #[test]
    fn finds_marker_among_item_attributes() {
        let item: Item = parse_quote! {
            #[derive(Debug)]
            #[public_initialiser]
            pub struct Foo;
        };
        let markers: Vec<&Attribute> = item_attrs(&item)
            .iter()
            .filter(|attr| is_marker(attr, &names()))
            .collect();
        assert_eq!(markers.len(), 1);
        assert!(markers[0].path().is_ident("public_initialiser"));
    }
}
