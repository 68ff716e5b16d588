//! Inherent members declared next to a marked struct.
//!
//! An attribute macro only receives its own item. To see the `impl` blocks
//! around it, the macro host re-reads the file the attribute sits in and
//! looks the struct up by name.

use crate::{model::Member, syntax::lower::collect_inherent_members};
use std::{fs, path::Path};
use syn::Item;
use tracing::debug;

/// Inherent members of `name` declared in the same module body of the file at
/// `path`.
///
/// Returns `None` when the file cannot be read or parsed, or when the lookup
/// is ambiguous. Callers then fall back to the struct body alone.
pub fn sibling_members_in_file(path: &Path, name: &str) -> Option<Vec<Member>> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            debug!("Cannot read {} for `{}`: {}", path.display(), name, e);
            return None;
        }
    };
    let file = match syn::parse_file(&source) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot parse {} for `{}`: {}", path.display(), name, e);
            return None;
        }
    };
    sibling_members(&file.items, name)
}

/// Inherent members of `name` in the one module body, among `items` and
/// their inline modules, that declares a struct called `name`. `None` when no
/// body or more than one body declares it.
pub fn sibling_members(items: &[Item], name: &str) -> Option<Vec<Member>> {
    let mut bodies = Vec::new();
    collect_declaring_bodies(items, name, &mut bodies);

    match bodies.as_slice() {
        [body] => Some(collect_inherent_members(body, name)),
        [] => None,
        _ => {
            debug!(
                "`{}` is declared in {} modules of the file, ignoring siblings",
                name,
                bodies.len()
            );
            None
        }
    }
}

fn collect_declaring_bodies<'a>(items: &'a [Item], name: &str, bodies: &mut Vec<&'a [Item]>) {
    if items
        .iter()
        .any(|item| matches!(item, Item::Struct(item) if item.ident == name))
    {
        bodies.push(items);
    }

    for item in items {
        if let Item::Mod(module) = item
            && let Some((_, content)) = &module.content
        {
            collect_declaring_bodies(content, name, bodies);
        }
    }
}
