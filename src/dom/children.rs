//! Inputs accepted by `append_child` / `prepend_child`.
//!
//! A call takes either one item or a sequence of items. Strings become new
//! text nodes when they are inserted.

use super::node::NodeId;

/// One item to insert into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// An existing, detached node.
    Node(NodeId),
    /// Text to wrap in a fresh text node.
    Text(String),
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Normalizes a single item or a sequence into an ordered list of children.
pub trait IntoChildren {
    fn into_children(self) -> Vec<Child>;
}

macro_rules! impl_single_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoChildren for $ty {
                fn into_children(self) -> Vec<Child> {
                    vec![self.into()]
                }
            }
        )*
    };
}

impl_single_child!(Child, NodeId, &str, String);

impl<T: Into<Child>> IntoChildren for Vec<T> {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Child>, const N: usize> IntoChildren for [T; N] {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_items() {
        assert_eq!(NodeId::new(0, 3).into_children(), vec![Child::Node(NodeId::new(0, 3))]);
        assert_eq!("a".into_children(), vec![Child::Text("a".into())]);
        assert_eq!(
            String::from("b").into_children(),
            vec![Child::Text("b".into())]
        );
    }

    #[test]
    fn test_sequences_keep_order() {
        assert_eq!(
            ["a", "b"].into_children(),
            vec![Child::Text("a".into()), Child::Text("b".into())]
        );
        assert_eq!(
            vec![Child::from(NodeId::new(0, 1)), Child::from("x")].into_children(),
            vec![Child::Node(NodeId::new(0, 1)), Child::Text("x".into())]
        );
        assert!(Vec::<NodeId>::new().into_children().is_empty());
    }
}
