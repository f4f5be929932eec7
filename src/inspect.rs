use crate::value::Scalar;
use chrono::{DateTime, Utc};

/// Text ending with this suffix is the convention for a custom-rendered
/// value that is absent.
pub const INVALID_SUFFIX: &str = "Invalid";

/// Renderable shape of an inspected value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// Output of a custom renderer, printed as a single line.
    Text(String),
    Struct(Vec<Member<'a>>),
    Optional(Option<Box<Node<'a>>>),
    Sequence(Vec<Node<'a>>),
    Scalar(Scalar<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member<'a> {
    pub name: &'a str,
    pub node: Node<'a>,
}

impl<'a> Member<'a> {
    pub fn new(name: &'a str, node: Node<'a>) -> Self {
        Member { name, node }
    }
    /// Members are exported when their name starts with an uppercase letter.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

impl<'a> Node<'a> {
    pub fn text(value: impl ToString) -> Self {
        Node::Text(value.to_string())
    }
}

/// Read-only projection of a value into a [`Node`] tree.
pub trait Inspect {
    fn to_node(&self) -> Node<'_>;
}

macro_rules! inspect_scalar {
    ($type:ty, $variant:ident) => {
        impl Inspect for $type {
            fn to_node(&self) -> Node<'_> {
                Node::Scalar(Scalar::$variant(*self))
            }
        }
    };
}

inspect_scalar!(bool, Bool);
inspect_scalar!(i8, SInt8);
inspect_scalar!(i16, SInt16);
inspect_scalar!(i32, SInt32);
inspect_scalar!(i64, SInt64);
inspect_scalar!(u8, UInt8);
inspect_scalar!(u16, UInt16);
inspect_scalar!(u32, UInt32);
inspect_scalar!(u64, UInt64);
inspect_scalar!(f32, Float32);
inspect_scalar!(f64, Float64);

impl Inspect for str {
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::String(self))
    }
}

impl Inspect for String {
    fn to_node(&self) -> Node<'_> {
        Node::Scalar(Scalar::String(self))
    }
}

impl Inspect for DateTime<Utc> {
    fn to_node(&self) -> Node<'_> {
        Node::text(self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_node(&self) -> Node<'_> {
        Node::Optional(self.as_ref().map(|it| Box::new(it.to_node())))
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_node(&self) -> Node<'_> {
        Node::Sequence(self.iter().map(Inspect::to_node).collect())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_node(&self) -> Node<'_> {
        self.as_slice().to_node()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn to_node(&self) -> Node<'_> {
        (**self).to_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_names() {
        assert!(Member::new("Sessions", Node::Sequence(vec![])).is_exported());
        assert!(Member::new("File CRC", Node::Sequence(vec![])).is_exported());
        assert!(!Member::new("messages", Node::Sequence(vec![])).is_exported());
        assert!(!Member::new("", Node::Sequence(vec![])).is_exported());
        assert!(!Member::new("_private", Node::Sequence(vec![])).is_exported());
    }

    #[test]
    fn containers_wrap_elements() {
        assert_eq!(
            Some(3u8).to_node(),
            Node::Optional(Some(Box::new(Node::Scalar(Scalar::UInt8(3)))))
        );
        assert_eq!(None::<u8>.to_node(), Node::Optional(None));
        assert_eq!(
            vec![1i16, 2].to_node(),
            Node::Sequence(vec![
                Node::Scalar(Scalar::SInt16(1)),
                Node::Scalar(Scalar::SInt16(2))
            ])
        );
        assert_eq!(Box::new(7u32).to_node(), Node::Scalar(Scalar::UInt32(7)));
    }
}
