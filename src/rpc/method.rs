//! Known RPC methods
//!
//! The set is fixed at compile time. `METHOD_TABLE` maps wire names to
//! `Method`, and `Method::resolve` turns params into the one outbound
//! call the method makes.

use crate::core::error::Result;
use crate::core::types::BackendRequest;
use crate::rpc::params::{
    self, CodeExamplesParams, DocumentParams, ProjectParams, RagQueryParams, TaskParams,
};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    PerformRagQuery,
    GetAvailableSources,
    SearchCodeExamples,
    ManageProject,
    ManageTask,
    ManageDocument,
}

/// Wire name to method
pub const METHOD_TABLE: [(&str, Method); 6] = [
    ("perform_rag_query", Method::PerformRagQuery),
    ("get_available_sources", Method::GetAvailableSources),
    ("search_code_examples", Method::SearchCodeExamples),
    ("manage_project", Method::ManageProject),
    ("manage_task", Method::ManageTask),
    ("manage_document", Method::ManageDocument),
];

impl Method {
    /// Find a method by wire name
    pub fn lookup(name: &str) -> Option<Self> {
        METHOD_TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, method)| *method)
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::PerformRagQuery => "perform_rag_query",
            Method::GetAvailableSources => "get_available_sources",
            Method::SearchCodeExamples => "search_code_examples",
            Method::ManageProject => "manage_project",
            Method::ManageTask => "manage_task",
            Method::ManageDocument => "manage_document",
        }
    }

    pub fn all() -> impl ExactSizeIterator<Item = Method> {
        METHOD_TABLE.iter().map(|(_, method)| *method)
    }

    /// Map params to the downstream call
    pub fn resolve(self, params: Map<String, Value>) -> Result<BackendRequest> {
        match self {
            Method::PerformRagQuery => params::parse::<RagQueryParams>(params)?.into_request(),
            Method::GetAvailableSources => Ok(BackendRequest::get(["api", "rag", "sources"])),
            Method::SearchCodeExamples => {
                params::parse::<CodeExamplesParams>(params)?.into_request()
            }
            Method::ManageProject => params::parse::<ProjectParams>(params)?.into_request(),
            Method::ManageTask => params::parse::<TaskParams>(params)?.into_request(),
            Method::ManageDocument => params::parse::<DocumentParams>(params)?.into_request(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
