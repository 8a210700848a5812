use folio::api::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}
