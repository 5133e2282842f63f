use serde::Deserialize;

#[derive(Deserialize)]
pub struct IngestQuery {
    pub var: Option<String>,
}
