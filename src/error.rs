use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which covers every caller-contract violation this library can
/// report.
///
/// Algorithm preconditions (negative weights, directed input to a spanning-tree algorithm,
/// Eulerian infeasibility, ...) are *not* errors: they are returned as data inside
/// [`crate::AlgorithmResult`] so that a renderer can show them as log lines. This enum is
/// reserved for snapshots and requests that break the engine's input contract, and is only
/// produced by the validation layer and the request dispatcher.
///
/// # Error Categories
///
/// ## Snapshot Errors
/// - [`Error::Malformed`] - Structurally broken snapshot (limits, empty ids)
/// - [`Error::DuplicateNode`] - Two nodes share an id
/// - [`Error::DanglingLink`] - A link references a node that does not exist
/// - [`Error::InvalidWeight`] - Non-finite weight or unusable capacity
///
/// ## Request Errors
/// - [`Error::UnknownNode`] - A start/end id is not part of the snapshot
/// - [`Error::MissingParameter`] - A required start/end id was not supplied
/// - [`Error::UnknownAlgorithm`] - An algorithm name could not be parsed
///
/// # Examples
///
/// ```rust
/// use topograph::{validate, Edge, Error, Graph, Node, NodeKind, ValidationConfig};
///
/// let mut graph = Graph::undirected();
/// graph.add_node(Node::new("r1", NodeKind::Router));
/// graph.add_link(Edge::new("r1", "r2", 1.0));
///
/// match validate(&graph, &ValidationConfig::default()) {
///     Err(Error::DanglingLink { from, to }) => {
///         eprintln!("link {from} -> {to} points nowhere");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
///     Ok(()) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The snapshot is damaged and could not be used.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Two nodes in the snapshot share the same id.
    #[error("Duplicate node id - {0}")]
    DuplicateNode(String),

    /// A link references a node id that is not part of the snapshot.
    #[error("Link {from} -> {to} references a missing node")]
    DanglingLink {
        /// Source id of the offending link
        from: String,
        /// Target id of the offending link
        to: String,
    },

    /// A link carries a weight or capacity the engine cannot compute with.
    #[error("Link {from} -> {to} has an invalid {field}: {value}")]
    InvalidWeight {
        /// Source id of the offending link
        from: String,
        /// Target id of the offending link
        to: String,
        /// Which attribute was rejected (`weight` or `capacity`)
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A requested start/end node does not exist in the snapshot.
    #[error("Unknown node id - {0}")]
    UnknownNode(String),

    /// A parameter required by the selected algorithm was not supplied.
    #[error("{algorithm} requires a `{parameter}` node id")]
    MissingParameter {
        /// The algorithm that was requested
        algorithm: crate::Algorithm,
        /// The missing parameter (`start` or `end`)
        parameter: &'static str,
    },

    /// An algorithm name could not be resolved.
    #[error("Unknown algorithm - {0}")]
    UnknownAlgorithm(String),
}
