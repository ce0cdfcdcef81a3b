use jisho_types::{DictionaryEntry, Sense};
use serde::Deserialize;

// Wire format of the word search endpoint, only the parts we read
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    data: Vec<WordResult>,
}

#[derive(Debug, Deserialize)]
struct WordResult {
    #[serde(default)]
    japanese: Vec<JapaneseVariant>,
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct JapaneseVariant {
    word: Option<String>,
    reading: Option<String>,
}

impl SearchResponse {
    /// First hit and its first Japanese variant
    pub(crate) fn into_first_entry(self) -> Option<DictionaryEntry> {
        let result = self.data.into_iter().next()?;
        let variant = result.japanese.into_iter().next();

        let (word, reading) = match variant {
            Some(v) => (v.word, v.reading),
            None => (None, None),
        };

        Some(DictionaryEntry {
            word,
            reading,
            senses: result.senses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_result_and_variant() {
        let body = r#"{
            "meta": { "status": 200 },
            "data": [
                {
                    "slug": "猫",
                    "is_common": true,
                    "japanese": [
                        { "word": "猫", "reading": "ねこ" },
                        { "word": "ネコ", "reading": "ネコ" }
                    ],
                    "senses": [
                        {
                            "english_definitions": ["cat"],
                            "parts_of_speech": ["Noun"],
                            "tags": [],
                            "links": []
                        }
                    ]
                },
                {
                    "japanese": [{ "word": "猫舌", "reading": "ねこじた" }],
                    "senses": []
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let entry = response.into_first_entry().unwrap();

        assert_eq!(entry.word.as_deref(), Some("猫"));
        assert_eq!(entry.reading.as_deref(), Some("ねこ"));
        assert_eq!(entry.senses.len(), 1);
        assert_eq!(entry.senses[0].english_definitions, vec!["cat"]);
    }

    #[test]
    fn empty_data_has_no_entry() {
        let response: SearchResponse = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(response.into_first_entry().is_none());
    }

    #[test]
    fn kana_only_variant_has_no_word() {
        let body = r#"{ "data": [ { "japanese": [ { "reading": "する" } ], "senses": [] } ] }"#;
        let entry = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_first_entry()
            .unwrap();

        assert!(entry.word.is_none());
        assert_eq!(entry.reading.as_deref(), Some("する"));
    }

    #[test]
    fn missing_data_key_is_rejected() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{ "meta": {} }"#).is_err());
    }
}
