use std::fmt;

use crate::type_mapper::{STD_OPTIONAL, STD_SHARED_PTR};

/// A target type, kept as a tree until it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A built-in or library token such as `int32_t`, `std::string`, `nlohmann::json`.
    Scalar(String),
    /// A templated container such as `std::vector<T>` or `std::map<K, V>`.
    Container { name: String, args: Vec<TypeExpr> },
    /// A generated model class.
    Model {
        namespace: Option<String>,
        name: String,
    },
    /// `std::optional<T>`
    Optional(Box<TypeExpr>),
    /// `std::shared_ptr<T>`
    Shared(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn scalar(token: impl Into<String>) -> Self {
        TypeExpr::Scalar(token.into())
    }

    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Optional(Box::new(inner))
    }

    pub fn shared(inner: TypeExpr) -> Self {
        TypeExpr::Shared(Box::new(inner))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeExpr::Scalar(_))
    }

    /// The same type with every model namespace dropped.
    pub fn unqualified(&self) -> TypeExpr {
        match self {
            TypeExpr::Scalar(_) => self.clone(),
            TypeExpr::Container { name, args } => TypeExpr::Container {
                name: name.clone(),
                args: args.iter().map(TypeExpr::unqualified).collect(),
            },
            TypeExpr::Model { name, .. } => TypeExpr::Model {
                namespace: None,
                name: name.clone(),
            },
            TypeExpr::Optional(inner) => TypeExpr::optional(inner.unqualified()),
            TypeExpr::Shared(inner) => TypeExpr::shared(inner.unqualified()),
        }
    }

    /// Qualify a bare top-level model with `namespace`. Already-qualified models and
    /// every other shape come back unchanged.
    pub fn qualified(&self, namespace: Option<&str>) -> TypeExpr {
        match (self, namespace) {
            (
                TypeExpr::Model {
                    namespace: None,
                    name,
                },
                Some(ns),
            ) => TypeExpr::Model {
                namespace: Some(ns.to_string()),
                name: name.clone(),
            },
            _ => self.clone(),
        }
    }

    /// The base type: element type for containers, class name for models.
    pub fn base_type(&self) -> String {
        match self {
            TypeExpr::Scalar(token) => token.clone(),
            TypeExpr::Model { name, .. } => name.clone(),
            TypeExpr::Container { args, .. } => match args.last() {
                Some(element) => element.base_type(),
                None => self.to_string(),
            },
            TypeExpr::Optional(inner) | TypeExpr::Shared(inner) => inner.base_type(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Scalar(token) => f.write_str(token),
            TypeExpr::Container { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeExpr::Model {
                namespace: Some(ns),
                name,
            } => write!(f, "{ns}::{name}"),
            TypeExpr::Model {
                namespace: None,
                name,
            } => f.write_str(name),
            TypeExpr::Optional(inner) => write!(f, "{STD_OPTIONAL}<{inner}>"),
            TypeExpr::Shared(inner) => write!(f, "{STD_SHARED_PTR}<{inner}>"),
        }
    }
}
