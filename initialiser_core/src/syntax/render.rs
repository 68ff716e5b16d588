use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    engine::{DEFAULT_MARKER, Outcome, evaluate},
    model::{Declaration, GeneratedFragment, Member, Modifiers},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};
use tracing::{debug, trace};

/// Name of the synthesized constructor.
pub const CONSTRUCTOR_NAME: &str = "new";

/// True if an associated function of the type is already called
/// [`CONSTRUCTOR_NAME`]. Fields live in another namespace and never clash.
pub fn constructor_name_taken(members: &[Member]) -> bool {
    members
        .iter()
        .filter(|member| matches!(member, Member::Initializer { .. } | Member::Method { .. }))
        .any(|member| member.name() == Some(CONSTRUCTOR_NAME))
}

/// Evaluates a lowered Rust declaration. A synthesis that would define a
/// second `new` is turned into a [`DiagnosticKind::ConstructorNameTaken`]
/// rejection.
pub fn evaluate_rust<A: Clone>(declaration: &Declaration, anchor: A) -> Outcome<A> {
    match evaluate(declaration, anchor.clone()) {
        Outcome::Synthesized(_) if constructor_name_taken(&declaration.members) => {
            debug!(
                "`{}` already defines `{}`, not generating another",
                declaration.name, CONSTRUCTOR_NAME
            );
            Outcome::Rejected(Diagnostic::new(
                DiagnosticKind::ConstructorNameTaken,
                DEFAULT_MARKER,
                anchor,
            ))
        }
        outcome => outcome,
    }
}

/// Renders a generated fragment as an inherent `impl` block for `item`.
///
/// The body is the trivial construction path: every field is set to its
/// `Default` value, so the generated code compiles exactly when all fields
/// have one.
pub fn render_fragment(fragment: &GeneratedFragment, item: &ItemStruct) -> TokenStream {
    debug_assert!(
        fragment.parameters.is_empty(),
        "generated initializers take no parameters"
    );
    trace!("Rendering `{}` for {}", fragment, item.ident);

    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let vis = render_visibility(&fragment.modifiers);
    let constructor = format_ident!("{}", CONSTRUCTOR_NAME);
    let body = default_construction(&item.fields);

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #vis fn #constructor() -> Self {
                #body
            }
        }
    }
}

fn render_visibility(modifiers: &Modifiers) -> TokenStream {
    if modifiers.is_public() {
        quote! { pub }
    } else {
        TokenStream::new()
    }
}

fn default_construction(fields: &Fields) -> TokenStream {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().filter_map(|field| field.ident.as_ref());
            quote! {
                Self {
                    #(#names: ::core::default::Default::default()),*
                }
            }
        }
        Fields::Unnamed(fields) => {
            let defaults = fields
                .unnamed
                .iter()
                .map(|_| quote! { ::core::default::Default::default() });
            quote! { Self(#(#defaults),*) }
        }
        Fields::Unit => quote! { Self },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::model::{DeclarationKind, Parameter};
    use syn::parse_quote;

    fn render(item: ItemStruct) -> String {
        render_fragment(&GeneratedFragment::public_initializer(), &item).to_string()
    }

    #[test]
    fn named_fields_default_each_field() {
        let expected = quote! {
            impl Foo {
                pub fn new() -> Self {
                    Self {
                        name: ::core::default::Default::default(),
                        count: ::core::default::Default::default()
                    }
                }
            }
        };
        assert_eq!(
            render(parse_quote!(pub struct Foo { name: String, count: u32 })),
            expected.to_string()
        );
    }

    #[test]
    fn tuple_struct_defaults_each_position() {
        let expected = quote! {
            impl Pair {
                pub fn new() -> Self {
                    Self(::core::default::Default::default(), ::core::default::Default::default())
                }
            }
        };
        assert_eq!(
            render(parse_quote!(pub struct Pair(u8, u8);)),
            expected.to_string()
        );
    }

    #[test]
    fn unit_struct_returns_self() {
        let expected = quote! {
            impl Marker {
                pub fn new() -> Self {
                    Self
                }
            }
        };
        assert_eq!(render(parse_quote!(pub struct Marker;)), expected.to_string());
    }

    #[test]
    fn generics_and_where_clause_are_carried_over() {
        let expected = quote! {
            impl<T: Clone, const N: usize> Buffer<T, N> where T: Default {
                pub fn new() -> Self {
                    Self {
                        items: ::core::default::Default::default()
                    }
                }
            }
        };
        assert_eq!(
            render(parse_quote! {
                pub struct Buffer<T: Clone, const N: usize = 4> where T: Default {
                    items: Vec<T>,
                }
            }),
            expected.to_string()
        );
    }

    fn function(name: &str, parameters: Vec<Parameter>) -> Member {
        Member::Initializer {
            name: Some(name.to_string()),
            modifiers: ["public"].into_iter().collect(),
            parameters,
        }
    }

    #[test]
    fn parameterised_new_blocks_synthesis() {
        let declaration = Declaration::new("Counter", DeclarationKind::Struct)
            .with_modifier("public")
            .with_member(function("new", vec![Parameter::new("value", "i64")]));

        let outcome = evaluate_rust(&declaration, ());

        assert_eq!(
            outcome.diagnostic().map(|d| d.kind),
            Some(DiagnosticKind::ConstructorNameTaken)
        );
        assert_eq!(
            outcome.diagnostic().map(|d| d.message.as_str()),
            Some("#[public_initialiser] cannot generate `new()`: the type already defines `new`")
        );
        assert!(outcome.fragments().is_empty());
    }

    #[test]
    fn private_or_method_new_blocks_synthesis_but_a_field_does_not() {
        let method = Declaration::new("Counter", DeclarationKind::Struct)
            .with_modifier("public")
            .with_member(Member::Method {
                name: "new".to_string(),
                modifiers: Modifiers::new(),
            });
        let field = Declaration::new("Counter", DeclarationKind::Struct)
            .with_modifier("public")
            .with_member(Member::Property {
                name: "new".to_string(),
            });

        assert!(evaluate_rust(&method, ()).is_fatal());
        assert_eq!(evaluate_rust(&field, ()).fragments().len(), 1);
    }

    #[test]
    fn existing_public_new_stays_a_warning() {
        let declaration = Declaration::new("Counter", DeclarationKind::Struct)
            .with_modifier("public")
            .with_member(function("new", Vec::new()));

        assert!(matches!(
            evaluate_rust(&declaration, ()),
            Outcome::Redundant(_)
        ));
    }
}
