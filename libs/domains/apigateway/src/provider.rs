use std::collections::BTreeMap;

use tracing::debug;

use crate::data_source::{DataSource, ReadRequest, ReadResponse};
use crate::diag::Diagnostic;
use crate::schema::Schema;

/// Registry of data sources, keyed by type name
#[derive(Default)]
pub struct DataSourceRegistry {
    data_sources: BTreeMap<&'static str, Box<dyn DataSource>>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a data source. A later registration replaces an earlier one
    /// with the same type name.
    pub fn register(&mut self, data_source: Box<dyn DataSource>) {
        let type_name = data_source.type_name();
        debug!(type_name, "Registering data source");
        self.data_sources.insert(type_name, data_source);
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.data_sources.get(type_name).map(|ds| ds.as_ref())
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        self.data_sources.keys().copied().collect()
    }

    pub fn schemas(&self) -> BTreeMap<&'static str, &'static Schema> {
        self.data_sources
            .iter()
            .map(|(name, ds)| (*name, ds.schema()))
            .collect()
    }

    /// Dispatch a read to the named data source
    pub async fn read(&self, type_name: &str, request: ReadRequest) -> ReadResponse {
        match self.get(type_name) {
            Some(data_source) => data_source.read(request).await,
            None => {
                let mut response = ReadResponse::default();
                response.diagnostics.push(Diagnostic::error(
                    "Data Source Type Not Found",
                    format!("no data source named \"{}\" is registered", type_name),
                ));
                response
            }
        }
    }
}
