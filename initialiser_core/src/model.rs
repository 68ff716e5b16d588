//! Declaration model consumed by the engine.
//!
//! The model is deliberately host-neutral: the syn adapter lowers Rust items
//! into it, and the CLI accepts it as JSON. Nothing here knows about spans or
//! token streams.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualifier token carried by a public declaration or member.
pub const PUBLIC: &str = "public";

/// The closed set of declaration group kinds a marker can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Aggregate with identity
    Class,
    /// Aggregate value
    Struct,
    Enum,
    /// Trait or interface-like construct
    Protocol,
    /// Extension of an existing type (an `impl` block in Rust)
    Extension,
    Actor,
    Union,
}

impl DeclarationKind {
    /// Only class-like and struct-like declarations may receive a synthesized initializer.
    pub fn is_class_or_struct(self) -> bool {
        matches!(self, DeclarationKind::Class | DeclarationKind::Struct)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Extension => "extension",
            DeclarationKind::Actor => "actor",
            DeclarationKind::Union => "union",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single qualifier token such as `public` or `unsafe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifier(String);

impl Modifier {
    pub fn new(token: impl Into<String>) -> Self {
        Modifier(token.into())
    }

    pub fn public() -> Self {
        Modifier(PUBLIC.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_public(&self) -> bool {
        self.0 == PUBLIC
    }
}

impl From<&str> for Modifier {
    fn from(token: &str) -> Self {
        Modifier::new(token)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered set of modifiers. Insertion keeps the first occurrence of a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Modifiers(Vec::new())
    }

    pub fn insert(&mut self, modifier: impl Into<Modifier>) {
        let modifier = modifier.into();
        if !self.0.contains(&modifier) {
            self.0.push(modifier);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|m| m.as_str() == token)
    }

    pub fn is_public(&self) -> bool {
        self.0.iter().any(Modifier::is_public)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<M: Into<Modifier>> FromIterator<M> for Modifiers {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        let mut modifiers = Modifiers::new();
        for modifier in iter {
            modifiers.insert(modifier);
        }
        modifiers
    }
}

/// A formal parameter of an initializer, receiver excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub label: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Parameter {
    pub fn new(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Parameter {
            label: label.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.ty)
    }
}

/// One entry in a declaration's body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    /// Constructor-shaped member. Rust initializers carry a name (`new`, `with_name`),
    /// other hosts may leave it out.
    Initializer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        parameters: Vec<Parameter>,
    },
    Method {
        name: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Property {
        name: String,
    },
    Other,
}

impl Member {
    /// Declared name, if the member has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Initializer { name, .. } => name.as_deref(),
            Member::Method { name, .. } | Member::Property { name } => Some(name),
            Member::Other => None,
        }
    }

    /// True for an initializer that is both public and takes no parameters.
    pub fn is_public_parameterless_initializer(&self) -> bool {
        match self {
            Member::Initializer {
                modifiers,
                parameters,
                ..
            } => modifiers.is_public() && parameters.is_empty(),
            _ => false,
        }
    }
}

/// The annotated type being processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Declaration {
            name: name.into(),
            kind,
            modifiers: Modifiers::new(),
            members: Vec::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn has_public_parameterless_initializer(&self) -> bool {
        self.members
            .iter()
            .any(Member::is_public_parameterless_initializer)
    }
}

/// A member synthesized by the engine: always a public initializer with an
/// empty parameter list and an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFragment {
    pub modifiers: Modifiers,
    pub parameters: Vec<Parameter>,
}

impl GeneratedFragment {
    pub fn public_initializer() -> Self {
        GeneratedFragment {
            modifiers: Modifiers::from_iter([Modifier::public()]),
            parameters: Vec::new(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.modifiers.is_public()
    }
}

impl fmt::Display for GeneratedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers.iter() {
            write!(f, "{} ", modifier)?;
        }
        let parameters = self
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "init({}) {{}}", parameters)
    }
}
