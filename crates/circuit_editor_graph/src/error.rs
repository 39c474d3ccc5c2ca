// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors raised by the connectivity graph.

use crate::element::{ElementId, ElementType};
use crate::wire::{Endpoint, WireId};

/// Why an endpoint cannot take part in a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EndpointFault {
    /// The element slot is empty
    #[error("element does not exist")]
    VacantElement,

    /// The port is not part of the element type's arity
    #[error("port is not defined for {0:?}")]
    PortNotOnType(ElementType),

    /// Both endpoints are on the same element
    #[error("self-loop not allowed")]
    SelfLoop,
}

/// Error from a graph operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Endpoint refers to a freed element or a port its type lacks
    #[error("invalid endpoint {endpoint}: {fault}")]
    InvalidEndpoint {
        /// Offending endpoint
        endpoint: Endpoint,
        /// What is wrong with it
        fault: EndpointFault,
    },

    /// Port already holds a wire
    #[error("port {endpoint} already connected by wire {wire}")]
    PortOccupied {
        /// Occupied endpoint
        endpoint: Endpoint,
        /// Wire currently attached there
        wire: WireId,
    },

    /// Element not found
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// Wire not found
    #[error("wire not found: {0}")]
    WireNotFound(WireId),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
