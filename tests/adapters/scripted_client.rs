use elomentary_mock::adapters::{
    ClientError, Depth, ElomentaryApi, Facade, Record, SearchOptions, SearchResults,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Client returning a configured record and subscription list while
/// recording every call
pub struct ScriptedClient {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    active: Facade,
    record: Record,
    elements: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Api(String),
    Subscriptions(String),
    Show { facade: Facade, id: String },
    Search { facade: Facade, query: String },
}

impl ScriptedClient {
    pub fn new(record: Record, elements: Vec<Value>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            active: Facade::default(),
            record,
            elements,
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ElomentaryApi for ScriptedClient {
    fn api(&mut self, kind: &str) -> &mut Self {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Api(kind.to_string()));
        self.active = Facade::from(kind);
        self
    }

    fn subscriptions(&mut self, contact_id: &str) -> &mut Self {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Subscriptions(contact_id.to_string()));
        self.active = Facade::Subscriptions;
        self
    }

    fn active_facade(&self) -> &Facade {
        &self.active
    }

    fn show(
        &self,
        id: &str,
        _depth: Option<Depth>,
        _extensions: Option<&[String]>,
    ) -> Result<Record, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall::Show {
            facade: self.active.clone(),
            id: id.to_string(),
        });
        Ok(self.record.clone())
    }

    fn search(&self, query: &str, _options: &SearchOptions) -> Result<SearchResults, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall::Search {
            facade: self.active.clone(),
            query: query.to_string(),
        });
        Ok(SearchResults {
            elements: self.elements.clone(),
        })
    }
}
