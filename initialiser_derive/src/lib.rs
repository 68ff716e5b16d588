use initialiser_core::syntax::{expand_attribute, sibling_members_in_file};
use proc_macro::{Span, TokenStream};
use syn::{Item, parse_macro_input};

/// Adds a `pub fn new() -> Self` constructor to a public struct.
///
/// Every field is initialised with its `Default` value. Applying the
/// attribute to anything other than a `pub` struct is a compile error.
///
/// Inherent `impl` blocks in the same module of the same file are taken into
/// account: an existing `pub fn new() -> Self` (or any other public,
/// parameterless constructor) turns the expansion into a warning, and an
/// existing `new` with parameters is reported instead of being duplicated.
///
/// ```ignore
/// use initialiser_derive::public_initialiser;
///
/// #[public_initialiser]
/// pub struct Settings {
///     retries: u32,
///     name: String,
/// }
///
/// let settings = Settings::new();
/// ```
#[proc_macro_attribute]
pub fn public_initialiser(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);

    let siblings = match &item {
        Item::Struct(item_struct) => Span::call_site()
            .local_file()
            .and_then(|path| sibling_members_in_file(&path, &item_struct.ident.to_string()))
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    expand_attribute(args.into(), item, &siblings).into()
}
