use thiserror::Error;

use super::document::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("required page element `{selector}` is missing")]
    MissingElement { selector: String },
    #[error("node {0:?} does not exist in this document")]
    UnknownNode(NodeId),
    #[error("invalid selector `{0}`: expected `#id` or `.class`")]
    InvalidSelector(String),
    #[error("cannot append {child:?} under {parent:?}: it would create a cycle")]
    CyclicAppend { parent: NodeId, child: NodeId },
}
