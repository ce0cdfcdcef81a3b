use jisho_config::fields::FieldsConfig;
use jisho_types::{DictionaryEntry, MappedFields, Sense};

use crate::record::Record;

/// Shape a dictionary entry into note field values
pub fn map_fields(entry: &DictionaryEntry) -> MappedFields {
    let reading = non_empty(entry.reading.as_deref());

    let word = if entry.uses_kana_alone() {
        reading.clone()
    } else {
        non_empty(entry.word.as_deref()).or_else(|| reading.clone())
    };

    MappedFields {
        word,
        reading,
        meaning: render_meaning(&entry.senses),
    }
}

/// Definition list with one term/definition pair per sense, `None` without senses
pub fn render_meaning(senses: &[Sense]) -> Option<String> {
    if senses.is_empty() {
        return None;
    }

    let items: String = senses
        .iter()
        .map(|sense| {
            format!(
                "<dt>{}</dt><dd>{}</dd>",
                sense.parts_of_speech.join(", "),
                sense.english_definitions.join("; ")
            )
        })
        .collect();

    Some(format!("<dl>{items}</dl>"))
}

/// Write mapped values into a record, returning the names of written fields.
///
/// A value is written only when both its configured field name and the value
/// are non-empty, so partial data never blanks out a field.
pub fn write_fields(fields: &FieldsConfig, mapped: &MappedFields, record: &mut Record) -> Vec<String> {
    [
        (&fields.reading, mapped.reading.as_deref()),
        (&fields.meaning, mapped.meaning.as_deref()),
        (&fields.word, mapped.word.as_deref()),
    ]
    .into_iter()
    .filter(|(name, value)| try_write(record, name, *value))
    .map(|(name, _)| name.clone())
    .collect()
}

pub(crate) fn try_write(record: &mut Record, name: &str, value: Option<&str>) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return false;
    };
    if name.is_empty() {
        return false;
    }

    if !record.try_set_field(name, value) {
        tracing::warn!(
            "Field {name:?} missing from note type {:?}, skipping",
            record.note_type()
        );
        return false;
    }
    true
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(pos: &[&str], defs: &[&str], tags: &[&str]) -> Sense {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Sense {
            parts_of_speech: owned(pos),
            english_definitions: owned(defs),
            tags: owned(tags),
        }
    }

    fn fields() -> FieldsConfig {
        FieldsConfig {
            lookup: "Word".into(),
            word: "Word".into(),
            reading: "Reading".into(),
            meaning: "Meaning".into(),
        }
    }

    #[test]
    fn kana_alone_prefers_reading() {
        let entry = DictionaryEntry {
            word: Some("流石".into()),
            reading: Some("さすが".into()),
            senses: vec![sense(
                &["Adverb"],
                &["as one would expect"],
                &["Usually written using kana alone"],
            )],
        };

        let mapped = map_fields(&entry);
        assert_eq!(mapped.word.as_deref(), Some("さすが"));
        assert_eq!(mapped.reading.as_deref(), Some("さすが"));
    }

    #[test]
    fn word_falls_back_to_reading() {
        let entry = DictionaryEntry {
            word: None,
            reading: Some("する".into()),
            senses: vec![sense(&["Suru verb"], &["to do"], &[])],
        };

        assert_eq!(map_fields(&entry).word.as_deref(), Some("する"));
    }

    #[test]
    fn uses_dictionary_word_by_default() {
        let entry = DictionaryEntry {
            word: Some("猫".into()),
            reading: Some("ねこ".into()),
            senses: vec![sense(&["Noun"], &["cat"], &["Abbreviation"])],
        };

        assert_eq!(map_fields(&entry).word.as_deref(), Some("猫"));
    }

    #[test]
    fn meaning_lists_senses_in_order() {
        let senses = vec![
            sense(&["Noun", "Suru verb"], &["study", "learning"], &[]),
            sense(&["Noun"], &["diligence"], &[]),
        ];

        assert_eq!(
            render_meaning(&senses).unwrap(),
            "<dl><dt>Noun, Suru verb</dt><dd>study; learning</dd>\
             <dt>Noun</dt><dd>diligence</dd></dl>"
        );
    }

    #[test]
    fn no_senses_leaves_meaning_unset() {
        let entry = DictionaryEntry {
            word: Some("猫".into()),
            reading: Some("ねこ".into()),
            senses: vec![],
        };
        let mapped = map_fields(&entry);
        assert!(mapped.meaning.is_none());

        let mut record = Record::new("Vocab", ["Word", "Reading", "Meaning"]);
        record.try_set_field("Meaning", "keep me");
        let written = write_fields(&fields(), &mapped, &mut record);

        assert_eq!(written, vec!["Reading", "Word"]);
        assert_eq!(record.try_get_field("Meaning"), Some("keep me"));
    }

    #[test]
    fn unconfigured_or_missing_fields_are_skipped() {
        let mapped = MappedFields {
            word: Some("猫".into()),
            reading: Some("ねこ".into()),
            meaning: Some("<dl></dl>".into()),
        };
        let config = FieldsConfig {
            reading: String::new(),
            ..fields()
        };
        let mut record = Record::new("Vocab", ["Word", "Reading"]);

        let written = write_fields(&config, &mapped, &mut record);

        assert_eq!(written, vec!["Word"]);
        assert_eq!(record.try_get_field("Reading"), Some(""));
    }

    #[test]
    fn empty_values_do_not_overwrite() {
        let mapped = MappedFields {
            word: Some(String::new()),
            reading: None,
            meaning: None,
        };
        let mut record = Record::new("Vocab", ["Word"]);
        record.try_set_field("Word", "猫");

        assert!(write_fields(&fields(), &mapped, &mut record).is_empty());
        assert_eq!(record.try_get_field("Word"), Some("猫"));
    }
}
