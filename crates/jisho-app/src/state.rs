use std::sync::Arc;

use jisho_anki::AnkiConnectClient;
use jisho_config::Config;
use jisho_dictionary::JishoClient;

pub struct AppState {
    pub config: Arc<Config>,
    pub dictionary: Arc<JishoClient>,
    pub anki: Arc<AnkiConnectClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = JishoClient::new(config.dictionary.url.clone());
        let anki = AnkiConnectClient::new(config.anki.url.clone());

        Self {
            config: Arc::new(config),
            dictionary: Arc::new(dictionary),
            anki: Arc::new(anki),
        }
    }
}
