use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    engine::{DEFAULT_MARKER, Outcome},
    model::Member,
    syntax::{
        lower::lower_item,
        render::{evaluate_rust, render_fragment},
    },
};
use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Item;
use tracing::{debug, info};

/// Expands `#[public_initialiser]` applied to `item`.
///
/// `siblings` are the members of the type's inherent `impl` blocks that the
/// host could find next to it; a struct body alone never declares functions.
///
/// The item is always emitted again. On success the generated `impl` follows
/// it; on rejection a `compile_error!` anchored at the attribute follows it;
/// when a public, parameterless constructor already exists a deprecation
/// warning carrying the message follows it.
pub fn expand_attribute(args: TokenStream, item: Item, siblings: &[Member]) -> TokenStream {
    let anchor = Span::call_site();

    if !args.is_empty() {
        let error = syn::Error::new_spanned(
            &args,
            format!("{DEFAULT_MARKER} does not take arguments"),
        )
        .to_compile_error();
        return quote! { #item #error };
    }

    let outcome = match lower_item(&item) {
        Some(mut declaration) => {
            declaration.members.extend_from_slice(siblings);
            info!("Expanding {} for `{}`", DEFAULT_MARKER, declaration.name);
            evaluate_rust(&declaration, anchor)
        }
        None => {
            debug!("Marker applied to an item that is not a declaration group");
            Outcome::Rejected(Diagnostic::new(
                DiagnosticKind::IneligibleKind,
                DEFAULT_MARKER,
                anchor,
            ))
        }
    };

    match outcome {
        Outcome::Synthesized(fragments) => {
            // Only structs lower to an eligible kind.
            let Item::Struct(ref item_struct) = item else {
                return quote! { #item };
            };
            let impls = fragments
                .iter()
                .map(|fragment| render_fragment(fragment, item_struct));
            quote! {
                #item
                #(#impls)*
            }
        }
        Outcome::Redundant(diagnostic) => {
            let warning = render_warning(&diagnostic);
            quote! {
                #item
                #warning
            }
        }
        Outcome::Rejected(diagnostic) => {
            let error = syn::Error::new(diagnostic.anchor, &diagnostic.message).to_compile_error();
            quote! {
                #item
                #error
            }
        }
    }
}

/// Stable proc macros cannot emit warnings directly; referencing a deprecated
/// constant makes rustc print the message as a deprecation warning at the anchor.
fn render_warning(diagnostic: &Diagnostic<Span>) -> TokenStream {
    let note = &diagnostic.message;
    quote_spanned! {diagnostic.anchor=>
        const _: () = {
            #[deprecated(note = #note)]
            #[allow(non_upper_case_globals)]
            const public_initialiser: () = ();
            public_initialiser
        };
    }
}
