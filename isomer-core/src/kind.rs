use serde_json::Value;

/// Structural kind of a value, used to decide which comparator applies to a
/// pair before any elements are examined.
///
/// Kinds form a small lattice with [`Kind::Mixed`] at the top: an empty or
/// heterogeneous array has `Mixed` element kind, and the registry accepts any
/// pair involving `Mixed`, deferring real dispatch to per-element compare
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    /// Array with the common kind of its elements.
    Array(Box<Kind>),
    Object,
    /// Unknown element kind (empty or heterogeneous array).
    Mixed,
}

impl Kind {
    /// Derives the structural kind of a value.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => {
                if n.is_f64() {
                    Kind::Float
                } else {
                    Kind::Integer
                }
            }
            Value::String(_) => Kind::String,
            Value::Array(items) => Kind::Array(Box::new(Kind::element_kind(items))),
            Value::Object(_) => Kind::Object,
        }
    }

    fn element_kind(items: &[Value]) -> Kind {
        let mut kinds = items.iter().map(Kind::of);
        let Some(first) = kinds.next() else {
            return Kind::Mixed;
        };
        if kinds.all(|kind| kind == first) {
            first
        } else {
            Kind::Mixed
        }
    }

    /// Whether this kind is a scalar (non-composite) kind.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Kind::Null | Kind::Bool | Kind::Integer | Kind::Float | Kind::String
        )
    }

    /// The element kind, if this is an array kind.
    pub fn element(&self) -> Option<&Kind> {
        match self {
            Kind::Array(element) => Some(element),
            _ => None,
        }
    }
}
